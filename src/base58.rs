//! Raw base-58 big-number encoding over a caller-supplied alphabet
//!
//! A byte sequence is treated as a big-endian unsigned integer and converted
//! digit by digit with in-place long division. Leading zero bytes are
//! preserved as leading copies of the alphabet's first character.

use crate::error::WasmXrplError;

/// A validated 58-character alphabet plus its character-to-digit table.
///
/// The index table is built once at construction and never mutated, so a
/// `Base58` value is safe to share between threads.
#[derive(Debug, Clone)]
pub struct Base58 {
    chars: [u8; 58],
    indexes: [i8; 128],
}

impl Base58 {
    /// Build a codec from a 58-character ASCII alphabet with no duplicates
    pub fn new(alphabet: &str) -> Result<Self, WasmXrplError> {
        let bytes = alphabet.as_bytes();
        if bytes.len() != 58 {
            return Err(WasmXrplError::InvalidInput(format!(
                "alphabet must have 58 characters, got {}",
                bytes.len()
            )));
        }
        let mut chars = [0u8; 58];
        let mut indexes = [-1i8; 128];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii() {
                return Err(WasmXrplError::InvalidInput(
                    "alphabet must be ASCII".to_string(),
                ));
            }
            if indexes[b as usize] >= 0 {
                return Err(WasmXrplError::InvalidInput(format!(
                    "duplicate character '{}' in alphabet",
                    b as char
                )));
            }
            chars[i] = b;
            indexes[b as usize] = i as i8;
        }
        Ok(Base58 { chars, indexes })
    }

    /// The character representing digit value `index`
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index] as char
    }

    /// The zero digit, i.e. the alphabet's first character
    pub fn zero_char(&self) -> char {
        self.chars[0] as char
    }

    /// The digit value of `character`, if it belongs to the alphabet
    pub fn digit(&self, character: char) -> Option<u8> {
        if !character.is_ascii() {
            return None;
        }
        match self.indexes[character as usize] {
            d if d >= 0 => Some(d as u8),
            _ => None,
        }
    }

    /// Encode bytes in base-58. No checksum is appended.
    pub fn encode(&self, input: &[u8]) -> String {
        if input.is_empty() {
            return String::new();
        }
        let mut number = input.to_vec();
        let zero_count = number.iter().take_while(|&&b| b == 0).count();

        // The actual encoding: repeated division by 58, remainders are the
        // digits from least to most significant.
        let mut temp = vec![0u8; input.len() * 2];
        let mut j = temp.len();
        let mut start_at = zero_count;
        while start_at < number.len() {
            let digit = div_mod_58(&mut number, start_at);
            if number[start_at] == 0 {
                start_at += 1;
            }
            j -= 1;
            temp[j] = self.chars[digit as usize];
        }

        // Strip extra zero digits produced by the division
        while j < temp.len() && temp[j] == self.chars[0] {
            j += 1;
        }
        // Add as many leading zero digits as there were leading zero bytes
        for _ in 0..zero_count {
            j -= 1;
            temp[j] = self.chars[0];
        }

        temp[j..].iter().map(|&b| b as char).collect()
    }

    /// Decode a base-58 string to bytes. No checksum is verified.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, WasmXrplError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        // Transform the string to a base-58 digit sequence
        let mut digits = Vec::with_capacity(input.len());
        for (position, character) in input.chars().enumerate() {
            match self.digit(character) {
                Some(d) => digits.push(d),
                None => {
                    return Err(WasmXrplError::IllegalCharacter {
                        character,
                        position,
                    })
                }
            }
        }
        let zero_count = digits.iter().take_while(|&&d| d == 0).count();

        // Repeated division by 256, remainders are the output bytes from
        // least to most significant.
        let mut temp = vec![0u8; digits.len()];
        let mut j = temp.len();
        let mut start_at = zero_count;
        while start_at < digits.len() {
            let byte = div_mod_256(&mut digits, start_at);
            if digits[start_at] == 0 {
                start_at += 1;
            }
            j -= 1;
            temp[j] = byte;
        }

        // Do not add extra leading zeros, move j to the first nonzero byte
        while j < temp.len() && temp[j] == 0 {
            j += 1;
        }

        Ok(temp[j - zero_count..].to_vec())
    }
}

// number -> number / 58, returns number % 58
fn div_mod_58(number: &mut [u8], start_at: usize) -> u8 {
    let mut remainder = 0u32;
    for byte in number[start_at..].iter_mut() {
        let temp = remainder * 256 + u32::from(*byte);
        *byte = (temp / 58) as u8;
        remainder = temp % 58;
    }
    remainder as u8
}

// number -> number / 256, returns number % 256
fn div_mod_256(digits: &mut [u8], start_at: usize) -> u8 {
    let mut remainder = 0u32;
    for digit in digits[start_at..].iter_mut() {
        let temp = remainder * 58 + u32::from(*digit);
        *digit = (temp / 256) as u8;
        remainder = temp % 256;
    }
    remainder as u8
}
