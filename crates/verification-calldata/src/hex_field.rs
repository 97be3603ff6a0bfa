//! Decoding of the hex-string and integer fields of a verification record.
//!
//! Every decoder takes the name of the field it is decoding, so that the returned
//! [`Error::Decoding`] points at the offending JSON key.

use alloy_primitives::{Address, Bytes, FixedBytes, U256};
use serde_json::Value;

use crate::error::{DecodingErrorReason, Error, Result};

/// Strip the optional `0x` / `0X` prefix.
fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Convert raw bytes to an array of a fixed length.
fn byte_vec_to_array<const LENGTH: usize>(
    field: &'static str,
    bytes: Vec<u8>,
) -> Result<[u8; LENGTH]> {
    let actual = bytes.len();
    bytes.try_into().map_err(|_| {
        Error::decoding(
            field,
            DecodingErrorReason::IncorrectLength {
                expected: LENGTH,
                actual,
            },
        )
    })
}

/// Decode `input` into exactly `N` bytes. Shorter or longer inputs are rejected, never padded
/// or truncated.
pub fn decode_fixed<const N: usize>(field: &'static str, input: &str) -> Result<FixedBytes<N>> {
    let bytes = hex::decode(strip_hex_prefix(input)).map_err(|e| Error::decoding(field, e))?;
    byte_vec_to_array::<N>(field, bytes).map(FixedBytes::new)
}

/// Decode `input` into a byte sequence of any length (including empty).
pub fn decode_dynamic(field: &'static str, input: &str) -> Result<Bytes> {
    hex::decode(strip_hex_prefix(input))
        .map(Bytes::from)
        .map_err(|e| Error::decoding(field, e))
}

/// Parse a 20-byte address, with or without the `0x` prefix.
pub fn parse_address(field: &'static str, input: &str) -> Result<Address> {
    decode_fixed::<20>(field, input).map(Address::from)
}

/// Parse an unsigned 256-bit integer from a JSON value.
///
/// Accepts a JSON number or a string holding either a decimal or a `0x`-prefixed hexadecimal
/// integer. Negative, fractional and out-of-range values are rejected.
pub fn parse_batch_index(field: &'static str, value: &Value) -> Result<U256> {
    match value {
        Value::Number(number) => parse_decimal_integer(field, &number.to_string()),
        Value::String(text) => {
            let text = text.trim();
            match text
                .strip_prefix("0x")
                .or_else(|| text.strip_prefix("0X"))
            {
                Some(digits) => parse_integer_digits(field, digits, 16),
                None => parse_decimal_integer(field, text),
            }
        }
        _ => Err(Error::decoding(field, DecodingErrorReason::NotAnInteger)),
    }
}

fn parse_decimal_integer(field: &'static str, text: &str) -> Result<U256> {
    if text.starts_with('-') {
        return Err(Error::decoding(field, DecodingErrorReason::NegativeInteger));
    }
    parse_integer_digits(field, text.strip_prefix('+').unwrap_or(text), 10)
}

fn parse_integer_digits(field: &'static str, digits: &str, radix: u32) -> Result<U256> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::decoding(field, DecodingErrorReason::NotAnInteger));
    }
    // All digits are valid, so the only possible failure is exceeding 256 bits.
    U256::from_str_radix(digits, radix as u64)
        .map_err(|_| Error::decoding(field, DecodingErrorReason::Overflow))
}
