//! Text form of machine words: exactly four uppercase hex digits.

use super::errors::ToyError;

/// Parses hex digits (any case) into a word.
///
/// Leading zeros are allowed; the empty string is rejected.
pub fn decode_hex(text: &str) -> Result<u16, ToyError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ToyError::MalformedInput(text.to_string()));
    }
    let digits = text.trim_start_matches('0');
    if digits.len() > 4 {
        return Err(ToyError::OutOfRange { value: text.to_string(), max: u16::MAX });
    }
    if digits.is_empty() {
        return Ok(0);
    }
    u16::from_str_radix(digits, 16).map_err(|_| ToyError::MalformedInput(text.to_string()))
}

pub fn encode_hex(value: u16) -> String {
    format!("{value:04X}")
}

/// Nibble `index` of `instr`, 0 being the least significant.
#[inline]
pub fn field(instr: u16, index: u8) -> u8 {
    instr
        .checked_shr(index as u32 * 4)
        .map_or(0, |v| (v & 0xF) as u8)
}

/// Console form of a word: surrounding whitespace is ignored, but the value
/// itself must be written with exactly four digits.
pub fn parse_word(text: &str) -> Result<u16, ToyError> {
    let text = text.trim();
    let value = decode_hex(text)?;
    if text.len() != 4 {
        return Err(ToyError::MalformedInput(text.to_string()));
    }
    Ok(value)
}
