//! Hex codec for the `0x`-prefixed wire encoding.
//!
//! Every scalar value crosses the JSON-RPC boundary as hexadecimal text:
//! - Bytes: `0x` + two lowercase digits per byte, length-preserving
//! - Integers: `0x` (or `-0x`) + minimal-length lowercase magnitude
//! - Booleans: exactly `0x0` / `0x1`
//!
//! Encoding always emits lowercase; decoding tolerates uppercase digits
//! (except for booleans, which are exact literal matches).

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::FormatError;

/// Prefix carried by every hex-encoded wire value.
pub const HEX_PREFIX: &str = "0x";

/// Returns true if `s` starts with the `0x` prefix.
pub fn has_prefix(s: &str) -> bool {
    s.starts_with(HEX_PREFIX)
}

/// Returns true if `s` starts with `0x` or `-0x`.
///
/// Negative detection is a literal leading minus sign immediately before
/// the prefix; nothing more general is part of the wire grammar.
pub fn has_signed_prefix(s: &str) -> bool {
    match s.strip_prefix('-') {
        Some(rest) => rest.starts_with(HEX_PREFIX),
        None => s.starts_with(HEX_PREFIX),
    }
}

/// Encodes a byte sequence as `0x`-prefixed lowercase hex.
///
/// Length-preserving: leading zero bytes are kept, the empty sequence
/// encodes to `"0x"`.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(HEX_PREFIX.len() + bytes.len() * 2);
    s.push_str(HEX_PREFIX);
    for byte in bytes {
        s.push_str(&format!("{:02x}", byte));
    }
    s
}

/// Decodes a `0x`-prefixed hex string into its bytes.
///
/// Requires the prefix and an even number of hex digits; no sign handling,
/// purely positional byte pairs.
pub fn decode_bytes(s: &str) -> Result<Vec<u8>, FormatError> {
    let digits = s.strip_prefix(HEX_PREFIX).ok_or_else(|| FormatError::NotHex {
        value: s.to_string(),
    })?;
    if digits.len() % 2 != 0 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FormatError::NotBytes {
            value: s.to_string(),
        });
    }

    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for i in (0..digits.len()).step_by(2) {
        // All-hexdigit check above keeps the slice on ASCII boundaries.
        let pair = &digits[i..i + 2];
        let byte = u8::from_str_radix(pair, 16).map_err(|_| FormatError::NotBytes {
            value: s.to_string(),
        })?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Encodes an arbitrary-precision integer as signed hex text.
///
/// The magnitude is minimal-length (no leading zero digits); zero encodes
/// to `0x0` and negative values carry the minus sign before the prefix.
pub fn encode_int(value: &BigInt) -> String {
    match value.sign() {
        Sign::Minus => format!("-{}{}", HEX_PREFIX, value.magnitude().to_str_radix(16)),
        _ => format!("{}{}", HEX_PREFIX, value.to_str_radix(16)),
    }
}

/// Decodes `0x…`/`-0x…` text into an arbitrary-precision integer.
///
/// At most one leading minus sign is stripped, and the prefix must follow
/// it immediately. An empty or non-hex digit run fails.
pub fn decode_int(s: &str) -> Result<BigInt, FormatError> {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, s),
    };
    let digits = unsigned
        .strip_prefix(HEX_PREFIX)
        .ok_or_else(|| FormatError::NotHex {
            value: s.to_string(),
        })?;
    let magnitude =
        BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| FormatError::NotHex {
            value: s.to_string(),
        })?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Encodes a boolean as its wire literal.
pub fn encode_bool(value: bool) -> &'static str {
    if value { "0x1" } else { "0x0" }
}

/// Decodes a boolean from its wire literal.
///
/// Only the exact literals `0x0` and `0x1` are accepted; other hex
/// numbers, mixed case, and non-hex text all fail.
pub fn decode_bool(s: &str) -> Result<bool, FormatError> {
    match s {
        "0x0" => Ok(false),
        "0x1" => Ok(true),
        _ => Err(FormatError::NotBoolean {
            value: s.to_string(),
        }),
    }
}

/// A pass-through hex value: an arbitrary-length `0x`-prefixed hex string
/// kept in its wire form.
///
/// Unlike [`crate::Bytes`], no byte-pair parity is required, so values
/// like `0xabc` are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexValue(String);

impl HexValue {
    /// Returns the wire string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the wire string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for HexValue {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        let digits = s.strip_prefix(HEX_PREFIX).ok_or_else(|| FormatError::NotHex {
            value: s.to_string(),
        })?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FormatError::NotHex {
                value: s.to_string(),
            });
        }
        Ok(HexValue(s.to_string()))
    }
}

impl fmt::Display for HexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
