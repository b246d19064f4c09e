//! NFToken identifier parsing
//!
//! An NFTokenID is 32 bytes: flags (2), transfer fee (2), issuer account id
//! (20), scrambled taxon (4) and mint sequence (4), all big-endian. The
//! taxon is scrambled with a sequence-keyed constant so that sequentially
//! minted tokens do not sort together.

use crate::address::encode_account_id;
use crate::bits;
use crate::error::WasmXrplError;
use serde::Serialize;

/// Hex length of an NFTokenID (32 bytes)
const NFTOKEN_ID_HEX_LENGTH: usize = 64;

/// Decomposed NFTokenID fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NfTokenId {
    #[serde(rename = "NFTokenID")]
    pub nftoken_id: String,
    pub flags: u16,
    pub transfer_fee: u16,
    /// Issuer as a classic address
    pub issuer: String,
    pub taxon: u32,
    pub sequence: u32,
}

/// Parse a 64-hex-character NFTokenID into its fields
pub fn parse_nftoken_id(nftoken_id: &str) -> Result<NfTokenId, WasmXrplError> {
    if nftoken_id.len() != NFTOKEN_ID_HEX_LENGTH {
        return Err(WasmXrplError::LengthMismatch(format!(
            "nftoken id has length {} but expected a token with length {}",
            nftoken_id.len(),
            NFTOKEN_ID_HEX_LENGTH
        )));
    }
    let bytes = hex::decode(nftoken_id)
        .map_err(|e| WasmXrplError::InvalidInput(format!("invalid nftoken id hex: {}", e)))?;

    let flags = bits::read_u16(&bytes, 0)?;
    let transfer_fee = bits::read_u16(&bytes, 2)?;
    let issuer = encode_account_id(&bytes[4..24])?;
    let scrambled_taxon = bits::read_u32(&bytes, 24)?;
    let sequence = bits::read_u32(&bytes, 28)?;

    Ok(NfTokenId {
        nftoken_id: nftoken_id.to_string(),
        flags,
        transfer_fee,
        issuer,
        taxon: unscramble_taxon(scrambled_taxon, sequence),
        sequence,
    })
}

// taxon ^ (384160001 * sequence + 2459) mod 2^32
fn unscramble_taxon(scrambled: u32, sequence: u32) -> u32 {
    let mask = 384_160_001u64
        .wrapping_mul(u64::from(sequence))
        .wrapping_add(2_459);
    (u64::from(scrambled) ^ mask) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "000B013A95F14B0044F78A264E41713C64B5F89242540EE208C3098E00000D65";

    #[test]
    fn test_parse_fields() {
        let parsed = parse_nftoken_id(TOKEN).unwrap();
        assert_eq!(parsed.flags, 11);
        assert_eq!(parsed.transfer_fee, 314);
        assert_eq!(parsed.issuer, "rNCFjuvKkMSvp5mjavdty6ERYDrNkyZkR7");
        assert_eq!(parsed.sequence, 3429);
        assert_eq!(parsed.taxon, 3163260302);
        assert_eq!(parsed.nftoken_id, TOKEN);
    }

    #[test]
    fn test_unscramble_is_involutive() {
        // Applying the scramble twice gives the taxon back
        let taxon = 146_999_694u32;
        let sequence = 3_429u32;
        let scrambled = unscramble_taxon(taxon, sequence);
        assert_eq!(unscramble_taxon(scrambled, sequence), taxon);
    }

    #[test]
    fn test_zero_sequence_mask() {
        // With sequence 0 the mask degenerates to the additive constant
        assert_eq!(unscramble_taxon(2_459, 0), 0);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(matches!(
            parse_nftoken_id("000B013A"),
            Err(WasmXrplError::LengthMismatch(_))
        ));
        let long = format!("{}00", TOKEN);
        assert!(matches!(
            parse_nftoken_id(&long),
            Err(WasmXrplError::LengthMismatch(_))
        ));
    }

    #[test]
    fn test_bad_hex_rejected() {
        let bad = format!("ZZ{}", &TOKEN[2..]);
        assert!(matches!(
            parse_nftoken_id(&bad),
            Err(WasmXrplError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_serializes_with_ledger_field_names() {
        let parsed = parse_nftoken_id(TOKEN).unwrap();
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["NFTokenID"], TOKEN);
        assert_eq!(json["Flags"], 11);
        assert_eq!(json["TransferFee"], 314);
        assert_eq!(json["Issuer"], "rNCFjuvKkMSvp5mjavdty6ERYDrNkyZkR7");
        assert_eq!(json["Taxon"], 3163260302u32);
        assert_eq!(json["Sequence"], 3429);
    }
}
