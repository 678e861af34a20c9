//! Error types for scalar value decoding.

use thiserror::Error;

/// Error raised when a stored string does not match the shape required by
/// the requested typed accessor.
///
/// This is the only error kind this crate raises. Accessors never coerce or
/// substitute defaults; a shape mismatch is reported to the caller with the
/// offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The string lacks the `0x` (or `-0x`) prefix, or its digits are not
    /// valid hexadecimal where an integer was requested.
    #[error("the value is not a hex string: {value:?}")]
    NotHex { value: String },

    /// The hex digits do not form whole bytes (odd digit count or a
    /// non-hex digit).
    #[error("the hex value is not bytes format: {value:?}")]
    NotBytes { value: String },

    /// The string is not exactly `0x0` or `0x1`.
    #[error("the value is not boolean format: {value:?}")]
    NotBoolean { value: String },

    /// The string is not a valid account address.
    #[error("the value is not an address: {value:?}")]
    NotAddress { value: String },
}
