//! Scalar leaf values for RPC parameter trees.
//!
//! An [`RpcValue`] stores one canonical wire string and reinterprets it on
//! demand through typed accessors. Construction never validates shape
//! beyond the formatting it performs itself; the same stored string may be
//! read through different accessors over its lifetime, so each accessor
//! validates at call time and fails with a [`FormatError`] on mismatch.

use num_bigint::BigInt;

use crate::address::Address;
use crate::bytes::Bytes;
use crate::error::FormatError;
use crate::hex::{self, HexValue};

/// Capability surface shared by every node of an RPC parameter tree.
///
/// Composite nodes (objects and arrays) live in the layers above this
/// crate and implement the same trait; the scalar leaf is [`RpcValue`].
pub trait RpcItem {
    /// True when the node carries no value.
    fn is_empty(&self) -> bool;

    /// The scalar leaf behind this node, if it is one.
    fn as_value(&self) -> Option<&RpcValue>;
}

/// A scalar leaf value: string, bytes, integer, boolean, identifier.
///
/// The canonical string is the single source of truth; every typed view is
/// derived from it, never stored. The value is immutable after
/// construction and safe to share across threads for reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RpcValue {
    value: Option<String>,
}

impl RpcValue {
    /// Creates the empty ("no value") state.
    pub fn null() -> Self {
        RpcValue { value: None }
    }

    /// Returns true when the stored string is absent or empty.
    pub fn is_empty(&self) -> bool {
        self.value.as_deref().is_none_or(str::is_empty)
    }

    /// Returns the canonical string, or `None` for the empty state.
    ///
    /// Never fails: the stored text is returned unchanged, whether or not
    /// any typed accessor would accept it.
    pub fn as_string(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Decodes the value as a byte sequence.
    ///
    /// Requires `0x` + an even number of hex digits; purely positional,
    /// no sign handling.
    pub fn as_byte_array(&self) -> Result<Vec<u8>, FormatError> {
        hex::decode_bytes(self.text())
    }

    /// Interprets the value as an account address.
    pub fn as_address(&self) -> Result<Address, FormatError> {
        self.text().parse()
    }

    /// Interprets the value as an opaque byte identifier (hash).
    pub fn as_bytes(&self) -> Result<Bytes, FormatError> {
        self.text().parse()
    }

    /// Interprets the value as a pass-through hex value.
    pub fn as_hex(&self) -> Result<HexValue, FormatError> {
        self.text().parse()
    }

    /// Decodes the value as an arbitrary-precision integer.
    ///
    /// Requires `0x…` or `-0x…`; the minus sign is a literal character
    /// before the prefix, matching the wire grammar exactly.
    pub fn as_integer(&self) -> Result<BigInt, FormatError> {
        hex::decode_int(self.text())
    }

    /// Decodes the value as a boolean.
    ///
    /// Only the exact literals `0x0` and `0x1` are accepted.
    pub fn as_boolean(&self) -> Result<bool, FormatError> {
        hex::decode_bool(self.text())
    }

    /// The stored text, with the empty state read as `""` so the fallible
    /// accessors report a format error instead of panicking.
    fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl RpcItem for RpcValue {
    fn is_empty(&self) -> bool {
        RpcValue::is_empty(self)
    }

    fn as_value(&self) -> Option<&RpcValue> {
        Some(self)
    }
}

// Construction paths. All are infallible: string-sourced text is stored
// verbatim and validated lazily by the accessors, while bytes, integers,
// and booleans are formatted through the hex codec.

impl From<Option<String>> for RpcValue {
    fn from(value: Option<String>) -> Self {
        RpcValue { value }
    }
}

impl From<String> for RpcValue {
    fn from(value: String) -> Self {
        RpcValue { value: Some(value) }
    }
}

impl From<&str> for RpcValue {
    fn from(value: &str) -> Self {
        RpcValue {
            value: Some(value.to_string()),
        }
    }
}

impl From<&[u8]> for RpcValue {
    fn from(value: &[u8]) -> Self {
        RpcValue {
            value: Some(hex::encode_bytes(value)),
        }
    }
}

impl From<Vec<u8>> for RpcValue {
    fn from(value: Vec<u8>) -> Self {
        RpcValue::from(value.as_slice())
    }
}

impl From<&BigInt> for RpcValue {
    fn from(value: &BigInt) -> Self {
        RpcValue {
            value: Some(hex::encode_int(value)),
        }
    }
}

impl From<BigInt> for RpcValue {
    fn from(value: BigInt) -> Self {
        RpcValue::from(&value)
    }
}

impl From<i64> for RpcValue {
    fn from(value: i64) -> Self {
        RpcValue::from(BigInt::from(value))
    }
}

impl From<u64> for RpcValue {
    fn from(value: u64) -> Self {
        RpcValue::from(BigInt::from(value))
    }
}

impl From<bool> for RpcValue {
    fn from(value: bool) -> Self {
        RpcValue {
            value: Some(hex::encode_bool(value).to_string()),
        }
    }
}

impl From<&Address> for RpcValue {
    fn from(value: &Address) -> Self {
        RpcValue {
            value: Some(value.to_string()),
        }
    }
}

impl From<Address> for RpcValue {
    fn from(value: Address) -> Self {
        RpcValue::from(&value)
    }
}

impl From<&Bytes> for RpcValue {
    fn from(value: &Bytes) -> Self {
        RpcValue {
            value: Some(value.to_string()),
        }
    }
}

impl From<Bytes> for RpcValue {
    fn from(value: Bytes) -> Self {
        RpcValue::from(&value)
    }
}

impl From<&HexValue> for RpcValue {
    fn from(value: &HexValue) -> Self {
        RpcValue {
            value: Some(value.as_str().to_string()),
        }
    }
}

impl From<HexValue> for RpcValue {
    fn from(value: HexValue) -> Self {
        RpcValue {
            value: Some(value.into_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_byte_array() {
        let value = RpcValue::from(&[0x00, 0xff][..]);
        assert_eq!(value.as_string(), Some("0x00ff"));
        assert_eq!(value.as_byte_array().unwrap(), vec![0x00, 0xff]);
        assert!(!value.is_empty());
    }

    #[test]
    fn test_from_integer() {
        let value = RpcValue::from(255i64);
        assert_eq!(value.as_string(), Some("0xff"));
        assert_eq!(value.as_integer().unwrap(), BigInt::from(255));

        let value = RpcValue::from(-1i64);
        assert_eq!(value.as_string(), Some("-0x1"));
        assert_eq!(value.as_integer().unwrap(), BigInt::from(-1));
    }

    #[test]
    fn test_from_boolean() {
        let value = RpcValue::from(true);
        assert_eq!(value.as_string(), Some("0x1"));
        assert!(value.as_boolean().unwrap());

        let value = RpcValue::from(false);
        assert_eq!(value.as_string(), Some("0x0"));
        assert!(!value.as_boolean().unwrap());
    }

    #[test]
    fn test_boolean_rejects_other_hex() {
        let value = RpcValue::from("0x3");
        assert!(matches!(value.as_boolean(), Err(FormatError::NotBoolean { .. })));
    }

    #[test]
    fn test_null_is_empty() {
        let value = RpcValue::null();
        assert!(value.is_empty());
        assert_eq!(value.as_string(), None);
        // The empty state fails the typed accessors instead of panicking.
        assert!(value.as_integer().is_err());
        assert!(value.as_byte_array().is_err());
        assert!(value.as_boolean().is_err());
    }

    #[test]
    fn test_empty_string_is_empty() {
        let value = RpcValue::from("");
        assert!(value.is_empty());
        assert_eq!(value.as_string(), Some(""));
    }

    #[test]
    fn test_zero_values_are_not_empty() {
        assert!(!RpcValue::from(0i64).is_empty());
        assert!(!RpcValue::from(false).is_empty());
        assert!(!RpcValue::from(&[][..]).is_empty());
    }

    #[test]
    fn test_stored_text_is_verbatim() {
        let value = RpcValue::from("not hex at all");
        assert_eq!(value.as_string(), Some("not hex at all"));
        assert!(matches!(value.as_byte_array(), Err(FormatError::NotHex { .. })));
        assert!(matches!(value.as_integer(), Err(FormatError::NotHex { .. })));
    }

    #[test]
    fn test_same_string_reinterpreted_per_accessor() {
        // "0x1" is a valid integer and boolean but not whole bytes.
        let value = RpcValue::from("0x1");
        assert_eq!(value.as_integer().unwrap(), BigInt::from(1));
        assert!(value.as_boolean().unwrap());
        assert!(matches!(value.as_byte_array(), Err(FormatError::NotBytes { .. })));
    }

    #[test]
    fn test_integer_rejects_trailing_garbage() {
        let value = RpcValue::from("0xzz");
        assert!(matches!(value.as_integer(), Err(FormatError::NotHex { .. })));
    }

    #[test]
    fn test_from_address() {
        let text = "hx8f21e5c54f016b6a5d5fe65486908592151a7c57";
        let address: Address = text.parse().unwrap();
        let value = RpcValue::from(&address);
        assert_eq!(value.as_string(), Some(text));
        assert_eq!(value.as_address().unwrap(), address);
    }

    #[test]
    fn test_from_bytes_identifier() {
        let hash = Bytes::from(vec![0xab; 32]);
        let value = RpcValue::from(&hash);
        assert_eq!(value.as_bytes().unwrap(), hash);
        assert_eq!(value.as_byte_array().unwrap(), vec![0xab; 32]);
    }

    #[test]
    fn test_from_hex_value_verbatim() {
        let hex_value: HexValue = "0xabc".parse().unwrap();
        let value = RpcValue::from(hex_value.clone());
        assert_eq!(value.as_string(), Some("0xabc"));
        assert_eq!(value.as_hex().unwrap(), hex_value);
    }

    #[test]
    fn test_from_null_option() {
        let value = RpcValue::from(Option::<String>::None);
        assert!(value.is_empty());
        assert_eq!(value, RpcValue::null());
    }

    #[test]
    fn test_clone_copies_string_form() {
        let value = RpcValue::from(42i64);
        let copy = value.clone();
        assert_eq!(copy.as_string(), value.as_string());
        assert_eq!(copy, value);
    }

    #[test]
    fn test_rpc_item_capability() {
        let value = RpcValue::from(true);
        let item: &dyn RpcItem = &value;
        assert!(!item.is_empty());
        assert_eq!(item.as_value(), Some(&value));
    }

    proptest! {
        #[test]
        fn prop_byte_array_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let value = RpcValue::from(bytes.clone());
            prop_assert_eq!(value.as_byte_array().unwrap(), bytes);
        }

        #[test]
        fn prop_integer_roundtrip(n in any::<i128>()) {
            let n = BigInt::from(n);
            let value = RpcValue::from(&n);
            prop_assert_eq!(value.as_integer().unwrap(), n);
        }

        #[test]
        fn prop_boolean_roundtrip(v in any::<bool>()) {
            prop_assert_eq!(RpcValue::from(v).as_boolean().unwrap(), v);
        }

        #[test]
        fn prop_text_stored_verbatim(s in ".*") {
            let value = RpcValue::from(s.as_str());
            prop_assert_eq!(value.as_string(), Some(s.as_str()));
        }
    }
}
