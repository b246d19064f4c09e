//! Error types for wasm-xrpl

use core::fmt;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-xrpl operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WasmXrplError {
    /// Decode input contains a character outside the base-58 alphabet
    IllegalCharacter { character: char, position: usize },
    /// Decoded buffer is shorter than the 4-byte checksum
    InputTooShort,
    /// Recomputed checksum disagrees with the trailing 4 bytes
    ChecksumInvalid,
    /// Version + payload length does not match the decoded body
    LengthMismatch(String),
    /// Decoded version prefix does not equal the expected version bytes
    VersionMismatch,
    /// No candidate in a version set matched during decode
    NoVersionMatched(String),
    /// Encode/lookup requested for a name absent from the version set
    UnknownVersionName(String),
    /// Fixed-width read past the end of a buffer
    OutOfRange(String),
    /// Malformed caller input (bad hex, bad alphabet, ...)
    InvalidInput(String),
}

impl std::error::Error for WasmXrplError {}

impl fmt::Display for WasmXrplError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WasmXrplError::IllegalCharacter {
                character,
                position,
            } => write!(f, "Illegal character '{}' at position {}", character, position),
            WasmXrplError::InputTooShort => write!(f, "Input too short"),
            WasmXrplError::ChecksumInvalid => write!(f, "Checksum does not validate"),
            WasmXrplError::LengthMismatch(s) => write!(f, "Length mismatch: {}", s),
            WasmXrplError::VersionMismatch => write!(f, "Version invalid"),
            WasmXrplError::NoVersionMatched(names) => {
                write!(f, "No version matched amongst {}", names)
            }
            WasmXrplError::UnknownVersionName(name) => {
                write!(f, "Can't find version with name {}", name)
            }
            WasmXrplError::OutOfRange(s) => write!(f, "Out of range: {}", s),
            WasmXrplError::InvalidInput(s) => write!(f, "Invalid input: {}", s),
        }
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<WasmXrplError> for JsValue {
    fn from(err: WasmXrplError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
