//! Account identifiers.
//!
//! An address is a two-letter prefix followed by 40 hex digits (a 20-byte
//! body): `hx` for externally owned accounts, `cx` for contracts.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Number of bytes in an address body.
pub const ADDRESS_BODY_LEN: usize = 20;

/// Prefix distinguishing externally owned accounts from contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressPrefix {
    /// Externally owned account (`hx`).
    Eoa,
    /// Contract account (`cx`).
    Contract,
}

impl AddressPrefix {
    /// Returns the two-letter wire prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            AddressPrefix::Eoa => "hx",
            AddressPrefix::Contract => "cx",
        }
    }
}

/// A 20-byte account identifier rendered as prefix + 40 lowercase hex
/// digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    prefix: AddressPrefix,
    body: [u8; ADDRESS_BODY_LEN],
}

impl Address {
    /// Creates an address from its parts.
    pub fn new(prefix: AddressPrefix, body: [u8; ADDRESS_BODY_LEN]) -> Self {
        Self { prefix, body }
    }

    /// Returns the account-kind prefix.
    pub fn prefix(&self) -> AddressPrefix {
        self.prefix
    }

    /// Returns the 20-byte body.
    pub fn body(&self) -> &[u8; ADDRESS_BODY_LEN] {
        &self.body
    }

    /// Returns true if this is a contract address.
    pub fn is_contract(&self) -> bool {
        self.prefix == AddressPrefix::Contract
    }
}

impl FromStr for Address {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        let not_address = || FormatError::NotAddress {
            value: s.to_string(),
        };

        let (prefix, digits) = match s.get(..2) {
            Some("hx") => (AddressPrefix::Eoa, &s[2..]),
            Some("cx") => (AddressPrefix::Contract, &s[2..]),
            _ => return Err(not_address()),
        };
        if digits.len() != ADDRESS_BODY_LEN * 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(not_address());
        }

        let mut body = [0u8; ADDRESS_BODY_LEN];
        for (i, slot) in body.iter_mut().enumerate() {
            *slot = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| not_address())?;
        }
        Ok(Address { prefix, body })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix.as_str())?;
        for byte in &self.body {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
