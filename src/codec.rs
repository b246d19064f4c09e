//! Base-58-check codec: checksum envelope and version-byte dispatch
//!
//! Encoded form is `base58(version_bytes || payload || checksum)` where the
//! checksum is the first 4 bytes of SHA-256(SHA-256(version_bytes || payload)).
//! Every decode path runs the checksum; there is no bypass.

use crate::base58::Base58;
use crate::error::WasmXrplError;
use sha2::{Digest, Sha256};

/// One encodable payload kind: a version-byte prefix and the payload length
/// it expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub version_bytes: Vec<u8>,
    pub expected_length: usize,
}

impl Version {
    pub fn new(version_bytes: &[u8], expected_length: usize) -> Self {
        Version {
            version_bytes: version_bytes.to_vec(),
            expected_length,
        }
    }
}

/// An ordered set of named version candidates.
///
/// Decoding tries candidates in insertion order and the first match wins, so
/// the order is part of the contract wherever prefixes could be ambiguous.
#[derive(Debug, Clone)]
pub struct Versions {
    entries: Vec<(String, Version)>,
}

impl Versions {
    pub fn with(name: &str, version: Version) -> Self {
        Versions {
            entries: vec![(name.to_string(), version)],
        }
    }

    pub fn and(mut self, name: &str, version: Version) -> Self {
        self.entries.push((name.to_string(), version));
        self
    }

    /// Look up a version by name
    pub fn find(&self, name: &str) -> Result<&Version, WasmXrplError> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
            .ok_or_else(|| WasmXrplError::UnknownVersionName(name.to_string()))
    }

    /// Candidate names in decode order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    fn iter(&self) -> impl Iterator<Item = &(String, Version)> {
        self.entries.iter()
    }
}

/// Result of a successful multi-version decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub version_bytes: Vec<u8>,
    pub payload: Vec<u8>,
    pub version_name: String,
}

/// Base-58-check codec over one alphabet
#[derive(Debug, Clone)]
pub struct Codec {
    b58: Base58,
}

impl Codec {
    pub fn new(alphabet: &str) -> Result<Self, WasmXrplError> {
        Ok(Codec {
            b58: Base58::new(alphabet)?,
        })
    }

    pub fn base58(&self) -> &Base58 {
        &self.b58
    }

    /// Encode a payload under one expected version
    pub fn encode(&self, payload: &[u8], version: &Version) -> Result<String, WasmXrplError> {
        if payload.len() != version.expected_length {
            return Err(WasmXrplError::LengthMismatch(format!(
                "version has expected length of {}, payload has length {}",
                version.expected_length,
                payload.len()
            )));
        }
        Ok(self.encode_checked(payload, &version.version_bytes))
    }

    /// Encode a payload under a named version from a set
    pub fn encode_versioned(
        &self,
        payload: &[u8],
        name: &str,
        versions: &Versions,
    ) -> Result<String, WasmXrplError> {
        self.encode(payload, versions.find(name)?)
    }

    /// Decode under one expected version, returning the payload only
    pub fn decode(&self, input: &str, version: &Version) -> Result<Vec<u8>, WasmXrplError> {
        let body = self.decode_checked(input)?;
        extract_payload(&body, version)
    }

    /// Decode against an ordered set of candidates; the first whose total
    /// length and version prefix both match wins
    pub fn decode_versioned(
        &self,
        input: &str,
        versions: &Versions,
    ) -> Result<Decoded, WasmXrplError> {
        let body = self.decode_checked(input)?;
        for (name, version) in versions.iter() {
            let version_len = version.version_bytes.len();
            if body.len() == version_len + version.expected_length
                && body[..version_len] == version.version_bytes[..]
            {
                return Ok(Decoded {
                    version_bytes: version.version_bytes.clone(),
                    payload: body[version_len..].to_vec(),
                    version_name: name.clone(),
                });
            }
        }
        Err(WasmXrplError::NoVersionMatched(versions.names().join(", ")))
    }

    /// Report whether `input` decodes cleanly under `version`. Never errors.
    pub fn is_valid(&self, input: &str, version: &Version) -> bool {
        self.decode(input, version).is_ok()
    }

    /// Report whether `input` decodes cleanly under any candidate. Never errors.
    pub fn is_valid_versioned(&self, input: &str, versions: &Versions) -> bool {
        self.decode_versioned(input, versions).is_ok()
    }

    /// Append the 4-byte double-SHA-256 checksum and encode in base-58
    pub fn encode_checked(&self, payload: &[u8], version_bytes: &[u8]) -> String {
        let mut buffer = Vec::with_capacity(version_bytes.len() + payload.len() + 4);
        buffer.extend_from_slice(version_bytes);
        buffer.extend_from_slice(payload);
        let check = checksum(&buffer);
        buffer.extend_from_slice(&check);
        self.b58.encode(&buffer)
    }

    /// Base-58 decode and verify the trailing checksum, returning the body
    /// (version bytes plus payload) without the checksum
    pub fn decode_checked(&self, input: &str) -> Result<Vec<u8>, WasmXrplError> {
        let mut buffer = self.b58.decode(input)?;
        if buffer.len() < 4 {
            return Err(WasmXrplError::InputTooShort);
        }
        let body_len = buffer.len() - 4;
        let expected = checksum(&buffer[..body_len]);
        if buffer[body_len..] != expected {
            return Err(WasmXrplError::ChecksumInvalid);
        }
        buffer.truncate(body_len);
        Ok(buffer)
    }

    /// Compute the byte prefix that makes encoded strings of `payload_length`
    /// byte payloads start with `desired_prefix`.
    ///
    /// Best effort only: the padding estimate can undershoot, so treat the
    /// result as a starting seed for a brute-force search rather than a
    /// guaranteed prefix.
    pub fn find_prefix(
        &self,
        payload_length: usize,
        desired_prefix: &str,
    ) -> Result<Vec<u8>, WasmXrplError> {
        let total_length = payload_length + 4;
        let chars = (total_length as f64) * f64::ln(256.0) / f64::ln(58.0);
        let required_chars = (chars + 0.2).ceil() as usize;
        let padding = self.b58.char_at(58 / 2 - 1);
        let mut template = String::with_capacity(desired_prefix.len() + required_chars);
        template.push_str(desired_prefix);
        for _ in 0..required_chars {
            template.push(padding);
        }
        let decoded = self.b58.decode(&template)?;
        if decoded.len() < total_length {
            return Err(WasmXrplError::InvalidInput(format!(
                "template for prefix {:?} decodes to {} bytes, need more than {}",
                desired_prefix,
                decoded.len(),
                total_length
            )));
        }
        Ok(decoded[..decoded.len() - total_length].to_vec())
    }
}

/// First 4 bytes of SHA-256(SHA-256(data))
fn checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 4];
    out.copy_from_slice(&second[..4]);
    out
}

fn extract_payload(body: &[u8], version: &Version) -> Result<Vec<u8>, WasmXrplError> {
    let version_len = version.version_bytes.len();
    let expected_total = version_len + version.expected_length;
    if body.len() != expected_total {
        return Err(WasmXrplError::LengthMismatch(format!(
            "expected version + payload length was {} but actual length was {}",
            expected_total,
            body.len()
        )));
    }
    if body[..version_len] != version.version_bytes[..] {
        return Err(WasmXrplError::VersionMismatch);
    }
    Ok(body[version_len..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::XRPL_ALPHABET;

    fn codec() -> Codec {
        Codec::new(XRPL_ALPHABET).unwrap()
    }

    fn account_id() -> Version {
        Version::new(&[0x00], 20)
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let codec = codec();
        let payload = hex::decode("BA8E78626EE42C41B46D46C3048DF3A1C3C87072").unwrap();
        let encoded = codec.encode(&payload, &account_id()).unwrap();
        assert_eq!(encoded, "rJrRMgiRgrU6hDF4pgu5DXQdWyPbY35ErN");
        assert_eq!(codec.decode(&encoded, &account_id()).unwrap(), payload);
    }

    #[test]
    fn test_encode_rejects_wrong_payload_length() {
        let codec = codec();
        assert!(matches!(
            codec.encode(&[0u8; 19], &account_id()),
            Err(WasmXrplError::LengthMismatch(_))
        ));
    }

    #[test]
    fn test_decode_rejects_corrupted_checksum() {
        let codec = codec();
        let good = codec.encode(&[7u8; 20], &account_id()).unwrap();
        // Replace the final character with a different alphabet character
        let last = good.chars().last().unwrap();
        let replacement = if last == 'r' { 'p' } else { 'r' };
        let mut bad = good[..good.len() - 1].to_string();
        bad.push(replacement);
        assert_eq!(
            codec.decode(&bad, &account_id()),
            Err(WasmXrplError::ChecksumInvalid)
        );
    }

    #[test]
    fn test_decode_rejects_wrong_version_prefix() {
        let codec = codec();
        // Same total length as account public (1 + 33), different prefix
        let node_public = Version::new(&[0x1C], 33);
        let account_public = Version::new(&[0x23], 33);
        let encoded = codec.encode(&[1u8; 33], &node_public).unwrap();
        assert_eq!(
            codec.decode(&encoded, &account_public),
            Err(WasmXrplError::VersionMismatch)
        );
    }

    #[test]
    fn test_decode_rejects_wrong_body_length() {
        let codec = codec();
        let seed = Version::new(&[0x21], 16);
        let encoded = codec.encode(&[2u8; 16], &seed).unwrap();
        match codec.decode(&encoded, &account_id()) {
            Err(WasmXrplError::LengthMismatch(detail)) => {
                assert_eq!(
                    detail,
                    "expected version + payload length was 21 but actual length was 17"
                );
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_checked_too_short() {
        let codec = codec();
        // "rr" decodes to two zero bytes, shorter than the checksum itself
        assert_eq!(
            codec.decode_checked("rr"),
            Err(WasmXrplError::InputTooShort)
        );
    }

    #[test]
    fn test_versioned_decode_picks_matching_candidate() {
        let codec = codec();
        let versions = Versions::with("ed25519", Version::new(&[0x01, 0xE1, 0x4B], 16))
            .and("secp256k1", Version::new(&[0x21], 16));

        let entropy = hex::decode("4C3A1D213FBDFB14C7C28D609469B341").unwrap();
        let encoded = codec.encode_versioned(&entropy, "ed25519", &versions).unwrap();
        let decoded = codec.decode_versioned(&encoded, &versions).unwrap();
        assert_eq!(decoded.version_name, "ed25519");
        assert_eq!(decoded.version_bytes, vec![0x01, 0xE1, 0x4B]);
        assert_eq!(decoded.payload, entropy);
    }

    #[test]
    fn test_versioned_decode_no_match() {
        let codec = codec();
        let versions = Versions::with("ed25519", Version::new(&[0x01, 0xE1, 0x4B], 16))
            .and("secp256k1", Version::new(&[0x21], 16));
        // A valid account id is checksummed correctly but matches no seed version
        match codec.decode_versioned("rJrRMgiRgrU6hDF4pgu5DXQdWyPbY35ErN", &versions) {
            Err(WasmXrplError::NoVersionMatched(names)) => {
                assert_eq!(names, "ed25519, secp256k1");
            }
            other => panic!("expected NoVersionMatched, got {:?}", other),
        }
    }

    #[test]
    fn test_versioned_encode_unknown_name() {
        let codec = codec();
        let versions = Versions::with("secp256k1", Version::new(&[0x21], 16));
        assert_eq!(
            codec.encode_versioned(&[0u8; 16], "ed448", &versions),
            Err(WasmXrplError::UnknownVersionName("ed448".to_string()))
        );
    }

    #[test]
    fn test_is_valid_never_panics() {
        let codec = codec();
        let good = codec.encode(&[9u8; 20], &account_id()).unwrap();
        assert!(codec.is_valid(&good, &account_id()));
        // Truncated, corrupted, illegal and empty inputs all just report false
        assert!(!codec.is_valid(&good[..good.len() - 1], &account_id()));
        assert!(!codec.is_valid("not base58 0OIl", &account_id()));
        assert!(!codec.is_valid("", &account_id()));
    }

    #[test]
    fn test_find_prefix_recovers_seed_versions() {
        let codec = codec();
        // The ed25519 seed version bytes were originally derived this way
        assert_eq!(
            codec.find_prefix(16, "sEd").unwrap(),
            vec![0x01, 0xE1, 0x4B]
        );
        // Single characters give a coarser, best-effort answer
        assert_eq!(codec.find_prefix(16, "s").unwrap(), vec![0x28]);
        assert_eq!(codec.find_prefix(20, "r").unwrap(), vec![0x00, 0x01]);
    }

    #[test]
    fn test_find_prefix_rejects_illegal_template() {
        let codec = codec();
        assert!(matches!(
            codec.find_prefix(16, "0"),
            Err(WasmXrplError::IllegalCharacter { .. })
        ));
    }

    #[test]
    fn test_checksum_known_value() {
        // SHA-256d of an empty buffer starts with 5d f6 e0 e2
        assert_eq!(checksum(&[]), [0x5D, 0xF6, 0xE0, 0xE2]);
    }
}
