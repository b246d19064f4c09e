//! WASM bindings for address, public key and seed codecs
//!
//! AddressCodecNamespace provides static methods mirroring the core API

use crate::address::{
    decode_account_id, decode_account_public, decode_node_public, decode_seed, encode_account_id,
    encode_account_public, encode_node_public, encode_seed, find_prefix, is_valid_classic_address,
    is_valid_seed, SeedAlgorithm,
};
use wasm_bindgen::prelude::*;

/// Namespace for codec operations
#[wasm_bindgen]
pub struct AddressCodecNamespace;

#[wasm_bindgen]
impl AddressCodecNamespace {
    /// Encode a 20-byte account id as a classic address
    #[wasm_bindgen(js_name = encodeAccountId)]
    pub fn encode_account_id_wasm(bytes: &[u8]) -> Result<String, JsValue> {
        Ok(encode_account_id(bytes)?)
    }

    /// Decode a classic address to its 20-byte account id
    #[wasm_bindgen(js_name = decodeAccountId)]
    pub fn decode_account_id_wasm(address: &str) -> Result<js_sys::Uint8Array, JsValue> {
        let bytes = decode_account_id(address)?;
        Ok(js_sys::Uint8Array::from(&bytes[..]))
    }

    /// Encode a 33-byte account public key
    #[wasm_bindgen(js_name = encodeAccountPublic)]
    pub fn encode_account_public_wasm(bytes: &[u8]) -> Result<String, JsValue> {
        Ok(encode_account_public(bytes)?)
    }

    /// Decode an account public key to its 33 bytes
    #[wasm_bindgen(js_name = decodeAccountPublic)]
    pub fn decode_account_public_wasm(public_key: &str) -> Result<js_sys::Uint8Array, JsValue> {
        let bytes = decode_account_public(public_key)?;
        Ok(js_sys::Uint8Array::from(&bytes[..]))
    }

    /// Encode a 33-byte node/validation public key
    #[wasm_bindgen(js_name = encodeNodePublic)]
    pub fn encode_node_public_wasm(bytes: &[u8]) -> Result<String, JsValue> {
        Ok(encode_node_public(bytes)?)
    }

    /// Decode a node/validation public key to its 33 bytes
    #[wasm_bindgen(js_name = decodeNodePublic)]
    pub fn decode_node_public_wasm(public_key: &str) -> Result<js_sys::Uint8Array, JsValue> {
        let bytes = decode_node_public(public_key)?;
        Ok(js_sys::Uint8Array::from(&bytes[..]))
    }

    /// Encode 16 bytes of seed entropy
    ///
    /// # Arguments
    /// * `entropy` - 16 entropy bytes
    /// * `algorithm` - "ed25519" or "secp256k1"
    #[wasm_bindgen(js_name = encodeSeed)]
    pub fn encode_seed_wasm(entropy: &[u8], algorithm: &str) -> Result<String, JsValue> {
        let algorithm = SeedAlgorithm::from_name(algorithm)?;
        Ok(encode_seed(entropy, algorithm)?)
    }

    /// Decode a seed of either algorithm
    ///
    /// # Returns
    /// An object with `algorithm` (string) and `bytes` (Uint8Array)
    #[wasm_bindgen(js_name = decodeSeed)]
    pub fn decode_seed_wasm(seed: &str) -> Result<JsValue, JsValue> {
        let decoded = decode_seed(seed)?;
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(
            &obj,
            &"algorithm".into(),
            &decoded.algorithm.as_str().into(),
        )?;
        js_sys::Reflect::set(
            &obj,
            &"bytes".into(),
            &js_sys::Uint8Array::from(&decoded.bytes[..]).into(),
        )?;
        Ok(obj.into())
    }

    /// Validate a classic address
    #[wasm_bindgen(js_name = isValidClassicAddress)]
    pub fn is_valid_classic_address_wasm(address: &str) -> bool {
        is_valid_classic_address(address)
    }

    /// Validate a seed of either algorithm
    #[wasm_bindgen(js_name = isValidSeed)]
    pub fn is_valid_seed_wasm(seed: &str) -> bool {
        is_valid_seed(seed)
    }

    /// Best-effort byte prefix that yields a desired textual prefix
    #[wasm_bindgen(js_name = findPrefix)]
    pub fn find_prefix_wasm(
        payload_length: usize,
        desired_prefix: &str,
    ) -> Result<js_sys::Uint8Array, JsValue> {
        let bytes = find_prefix(payload_length, desired_prefix)?;
        Ok(js_sys::Uint8Array::from(&bytes[..]))
    }
}

#[cfg(test)]
mod tests {
    // Tests would run in wasm-pack test environment
}
