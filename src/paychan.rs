//! Payment channel claim payloads
//!
//! A claim authorizes drawing `amount` drops from a payment channel. The
//! bytes signed are a fixed hash prefix, the 256-bit channel id, and the
//! amount in big-endian.

use crate::bits;
use crate::error::WasmXrplError;

// "CLM\0" hash prefix
const CHANNEL_CLAIM_PREFIX: [u8; 4] = [0x43, 0x4C, 0x4D, 0x00];

/// Byte length of a channel id
const CHANNEL_ID_LENGTH: usize = 32;

/// Build the signing payload for a payment channel claim
pub fn encode_channel_claim(channel_hex: &str, amount: u64) -> Result<Vec<u8>, WasmXrplError> {
    let channel = hex::decode(channel_hex)
        .map_err(|e| WasmXrplError::InvalidInput(format!("invalid channel hex: {}", e)))?;
    if channel.len() != CHANNEL_ID_LENGTH {
        return Err(WasmXrplError::LengthMismatch(format!(
            "channel id has length {} but expected {}",
            channel.len(),
            CHANNEL_ID_LENGTH
        )));
    }

    let mut payload = Vec::with_capacity(CHANNEL_CLAIM_PREFIX.len() + CHANNEL_ID_LENGTH + 8);
    payload.extend_from_slice(&CHANNEL_CLAIM_PREFIX);
    payload.extend_from_slice(&channel);
    payload.extend_from_slice(&bits::u64_bytes(amount));
    Ok(payload)
}
