//! Fixed-width big-endian conversions
//!
//! The wire format's canonical byte order is big-endian regardless of the
//! host machine. Writers produce fixed arrays, readers take a buffer and an
//! offset and refuse to read past the end.

use crate::error::WasmXrplError;

/// Copy `N` bytes starting at `offset`, failing instead of reading garbage
fn take<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], WasmXrplError> {
    let end = offset.checked_add(N).ok_or_else(|| {
        WasmXrplError::OutOfRange(format!("offset {} + width {} overflows", offset, N))
    })?;
    let slice = buf.get(offset..end).ok_or_else(|| {
        WasmXrplError::OutOfRange(format!(
            "read of {} bytes at offset {} exceeds buffer length {}",
            N,
            offset,
            buf.len()
        ))
    })?;
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    Ok(out)
}

/// A boolean as a single byte (1 or 0)
pub fn bool_bytes(value: bool) -> [u8; 1] {
    [u8::from(value)]
}

pub fn u16_bytes(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

pub fn u32_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn u64_bytes(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

pub fn i32_bytes(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn i64_bytes(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

pub fn f32_bytes(value: f32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn f64_bytes(value: f64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Read one byte as a boolean; any nonzero value is true
pub fn read_bool(buf: &[u8], offset: usize) -> Result<bool, WasmXrplError> {
    Ok(take::<1>(buf, offset)?[0] != 0)
}

pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, WasmXrplError> {
    Ok(take::<1>(buf, offset)?[0])
}

pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16, WasmXrplError> {
    Ok(u16::from_be_bytes(take(buf, offset)?))
}

pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32, WasmXrplError> {
    Ok(u32::from_be_bytes(take(buf, offset)?))
}

pub fn read_u64(buf: &[u8], offset: usize) -> Result<u64, WasmXrplError> {
    Ok(u64::from_be_bytes(take(buf, offset)?))
}

pub fn read_i32(buf: &[u8], offset: usize) -> Result<i32, WasmXrplError> {
    Ok(i32::from_be_bytes(take(buf, offset)?))
}

pub fn read_i64(buf: &[u8], offset: usize) -> Result<i64, WasmXrplError> {
    Ok(i64::from_be_bytes(take(buf, offset)?))
}

pub fn read_f32(buf: &[u8], offset: usize) -> Result<f32, WasmXrplError> {
    Ok(f32::from_be_bytes(take(buf, offset)?))
}

pub fn read_f64(buf: &[u8], offset: usize) -> Result<f64, WasmXrplError> {
    Ok(f64::from_be_bytes(take(buf, offset)?))
}
