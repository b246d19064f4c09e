//! XRP Ledger address, public key and seed encodings
//!
//! All human-facing identifiers on the ledger are base-58-check strings over
//! a network-specific alphabet. The leading version bytes select the payload
//! kind, which also fixes the first character of the encoding: classic
//! addresses start with `r`, secp256k1 seeds with `s`, Ed25519 seeds with
//! `sEd`, node public keys with `n`.

use crate::codec::{Codec, Version, Versions};
use crate::error::WasmXrplError;
use core::fmt;
use std::sync::LazyLock;

/// The XRPL base-58 alphabet. A network-specific permutation, not the
/// Bitcoin alphabet; the order is part of the wire format.
pub const XRPL_ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Account address (20 bytes)
pub static ACCOUNT_ID: LazyLock<Version> = LazyLock::new(|| Version::new(&[0x00], 20));
/// Account public key (33 bytes)
pub static ACCOUNT_PUBLIC: LazyLock<Version> = LazyLock::new(|| Version::new(&[0x23], 33));
/// Node/validation public key (33 bytes)
pub static NODE_PUBLIC: LazyLock<Version> = LazyLock::new(|| Version::new(&[0x1C], 33));
/// secp256k1 seed entropy (16 bytes)
pub static K256_SEED: LazyLock<Version> = LazyLock::new(|| Version::new(&[0x21], 16));
/// Ed25519 seed entropy (16 bytes)
pub static ED25519_SEED: LazyLock<Version> = LazyLock::new(|| Version::new(&[0x01, 0xE1, 0x4B], 16));

/// Seed candidates in decode priority order. Both algorithms share the
/// 16-byte payload length and the textual namespace, so the Ed25519 prefix
/// is tried first and the single-byte secp256k1 prefix last.
pub static ANY_SEED: LazyLock<Versions> = LazyLock::new(|| {
    Versions::with("ed25519", ED25519_SEED.clone()).and("secp256k1", K256_SEED.clone())
});

static CODEC: LazyLock<Codec> =
    LazyLock::new(|| Codec::new(XRPL_ALPHABET).expect("XRPL base58 alphabet is well formed"));

/// The signing algorithm a seed belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedAlgorithm {
    Ed25519,
    Secp256k1,
}

impl SeedAlgorithm {
    /// The string tag used at the external interface boundary
    pub fn as_str(self) -> &'static str {
        match self {
            SeedAlgorithm::Ed25519 => "ed25519",
            SeedAlgorithm::Secp256k1 => "secp256k1",
        }
    }

    /// Parse an external string tag
    pub fn from_name(name: &str) -> Result<Self, WasmXrplError> {
        match name {
            "ed25519" => Ok(SeedAlgorithm::Ed25519),
            "secp256k1" => Ok(SeedAlgorithm::Secp256k1),
            other => Err(WasmXrplError::UnknownVersionName(other.to_string())),
        }
    }

    fn version(self) -> &'static Version {
        match self {
            SeedAlgorithm::Ed25519 => &ED25519_SEED,
            SeedAlgorithm::Secp256k1 => &K256_SEED,
        }
    }
}

impl fmt::Display for SeedAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded seed: its entropy bytes and the algorithm they belong to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSeed {
    pub algorithm: SeedAlgorithm,
    pub bytes: Vec<u8>,
}

/// Encode a 20-byte account id as a classic address
pub fn encode_account_id(bytes: &[u8]) -> Result<String, WasmXrplError> {
    CODEC.encode(bytes, &ACCOUNT_ID)
}

/// Decode a classic address to its 20-byte account id
pub fn decode_account_id(address: &str) -> Result<Vec<u8>, WasmXrplError> {
    CODEC.decode(address, &ACCOUNT_ID)
}

/// Encode a 33-byte account public key
pub fn encode_account_public(bytes: &[u8]) -> Result<String, WasmXrplError> {
    CODEC.encode(bytes, &ACCOUNT_PUBLIC)
}

/// Decode an account public key to its 33 bytes
pub fn decode_account_public(public_key: &str) -> Result<Vec<u8>, WasmXrplError> {
    CODEC.decode(public_key, &ACCOUNT_PUBLIC)
}

/// Encode a 33-byte node/validation public key
pub fn encode_node_public(bytes: &[u8]) -> Result<String, WasmXrplError> {
    CODEC.encode(bytes, &NODE_PUBLIC)
}

/// Decode a node/validation public key to its 33 bytes
pub fn decode_node_public(public_key: &str) -> Result<Vec<u8>, WasmXrplError> {
    CODEC.decode(public_key, &NODE_PUBLIC)
}

/// Encode 16 bytes of seed entropy under the given algorithm
pub fn encode_seed(entropy: &[u8], algorithm: SeedAlgorithm) -> Result<String, WasmXrplError> {
    CODEC.encode(entropy, algorithm.version())
}

/// Decode a seed of either algorithm, reporting which one matched
pub fn decode_seed(seed: &str) -> Result<DecodedSeed, WasmXrplError> {
    let decoded = CODEC.decode_versioned(seed, &ANY_SEED)?;
    Ok(DecodedSeed {
        algorithm: SeedAlgorithm::from_name(&decoded.version_name)?,
        bytes: decoded.payload,
    })
}

/// Report whether `address` is a valid classic address. Never errors.
pub fn is_valid_classic_address(address: &str) -> bool {
    CODEC.is_valid(address, &ACCOUNT_ID)
}

/// Report whether `seed` is a valid seed of either algorithm. Never errors.
pub fn is_valid_seed(seed: &str) -> bool {
    CODEC.is_valid_versioned(seed, &ANY_SEED)
}

/// Best-effort byte prefix for a desired textual prefix; see
/// [`Codec::find_prefix`]
pub fn find_prefix(payload_length: usize, desired_prefix: &str) -> Result<Vec<u8>, WasmXrplError> {
    CODEC.find_prefix(payload_length, desired_prefix)
}
