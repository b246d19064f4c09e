//! WASM bindings for wasm-xrpl
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod address;
pub mod utils;

// Re-export WASM types
pub use address::AddressCodecNamespace;
pub use utils::UtilsNamespace;
