//! WASM bindings for ledger utility helpers

use crate::nftoken::{parse_nftoken_id, NfTokenId};
use crate::paychan::encode_channel_claim;
use wasm_bindgen::prelude::*;

/// Namespace for utility operations
#[wasm_bindgen]
pub struct UtilsNamespace;

#[wasm_bindgen]
impl UtilsNamespace {
    /// Parse a 64-hex-character NFTokenID into its fields
    #[wasm_bindgen(js_name = parseNftokenId)]
    pub fn parse_nftoken_id_wasm(nftoken_id: &str) -> Result<JsValue, JsValue> {
        let parsed = parse_nftoken_id(nftoken_id)?;
        to_js_value(&parsed)
    }

    /// Build the signing payload for a payment channel claim
    #[wasm_bindgen(js_name = encodeChannelClaim)]
    pub fn encode_channel_claim_wasm(
        channel_hex: &str,
        amount: u64,
    ) -> Result<js_sys::Uint8Array, JsValue> {
        let payload = encode_channel_claim(channel_hex, amount)?;
        Ok(js_sys::Uint8Array::from(&payload[..]))
    }
}

/// Convert NfTokenId to JsValue using serde_wasm_bindgen
fn to_js_value(parsed: &NfTokenId) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(parsed)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
