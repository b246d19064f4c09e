//! wasm-xrpl: WASM module for XRP Ledger address and key codec operations
//!
//! This crate provides:
//! - Base-58-check encoding/decoding over the XRPL alphabet
//! - Classic address, public key and seed codecs with version-byte dispatch
//! - NFToken identifier parsing and payment channel claim payloads
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`

pub mod address;
pub mod base58;
pub mod bits;
pub mod codec;
pub mod error;
pub mod nftoken;
pub mod paychan;
pub mod wasm;

// Re-export main types for convenience
pub use address::{
    decode_account_id, decode_account_public, decode_node_public, decode_seed, encode_account_id,
    encode_account_public, encode_node_public, encode_seed, is_valid_classic_address,
    is_valid_seed, DecodedSeed, SeedAlgorithm, XRPL_ALPHABET,
};
pub use base58::Base58;
pub use codec::{Codec, Decoded, Version, Versions};
pub use error::WasmXrplError;
pub use nftoken::{parse_nftoken_id, NfTokenId};
pub use paychan::encode_channel_claim;
pub use wasm::{AddressCodecNamespace, UtilsNamespace};
