//! Characteristic value encoding.
//!
//! Every Ooler characteristic carries a small big-endian unsigned integer,
//! a single-byte flag, or (for the GAP device name) an ASCII string.

use crate::error::{Error, Result};

/// Largest integer payload accepted, in bytes.
const MAX_UINT_LEN: usize = 4;

/// Decode a big-endian unsigned integer of 1 to 4 bytes.
///
/// # Example
///
/// ```
/// use ooler_ctrl::protocol::decode_uint;
///
/// assert_eq!(decode_uint(&[0x48]).unwrap(), 72);
/// assert_eq!(decode_uint(&[0x01, 0x00]).unwrap(), 256);
/// ```
pub fn decode_uint(data: &[u8]) -> Result<u32> {
    if data.is_empty() || data.len() > MAX_UINT_LEN {
        return Err(Error::InvalidData {
            context: format!(
                "expected 1-{} byte integer, got {} bytes",
                MAX_UINT_LEN,
                data.len()
            ),
        });
    }

    Ok(data
        .iter()
        .fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte)))
}

/// Decode an integer that must fit in one byte.
pub fn decode_u8(data: &[u8]) -> Result<u8> {
    let value = decode_uint(data)?;
    u8::try_from(value).map_err(|_| Error::InvalidData {
        context: format!("value {} does not fit in a byte", value),
    })
}

/// Decode a flag. Only an exact `[0x01]` payload counts as set.
pub fn decode_bool(data: &[u8]) -> bool {
    data == [0x01]
}

/// Encode a flag as a single byte.
pub fn encode_bool(value: bool) -> [u8; 1] {
    [u8::from(value)]
}

/// Encode a one-byte integer.
pub fn encode_u8(value: u8) -> [u8; 1] {
    [value]
}

/// Decode an ASCII string, dropping trailing NUL padding.
pub fn decode_ascii(data: &[u8]) -> Result<String> {
    if !data.is_ascii() {
        return Err(Error::InvalidData {
            context: "device name is not ASCII".to_string(),
        });
    }

    let trimmed: &[u8] = match data.iter().rposition(|&b| b != 0) {
        Some(end) => &data[..=end],
        None => &[],
    };

    Ok(String::from_utf8_lossy(trimmed).into_owned())
}
