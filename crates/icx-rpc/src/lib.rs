//! Typed scalar values for the ICON JSON-RPC wire format.
//!
//! Every primitive value crossing the RPC boundary — strings, byte
//! buffers, arbitrary-precision integers, booleans, and account
//! identifiers — travels as `0x`-prefixed hexadecimal text. This crate
//! provides the leaf value type and its encode/decode contract.
//!
//! # Overview
//!
//! - **Canonical storage**: an [`RpcValue`] holds one canonical string and
//!   derives every typed view from it on demand
//! - **Lazy validation**: construction never fails; each accessor
//!   validates at call time and rejects malformed input deterministically
//! - **Exact wire grammar**: booleans are exactly `0x0`/`0x1`, byte
//!   buffers are even-length lowercase pairs, negative integers carry a
//!   literal `-` before the prefix
//!
//! # Quick Start
//!
//! ```rust
//! use icx_rpc::{BigInt, RpcValue};
//!
//! let amount = RpcValue::from(BigInt::from(255));
//! assert_eq!(amount.as_string(), Some("0xff"));
//! assert_eq!(amount.as_integer().unwrap(), BigInt::from(255));
//!
//! let flag = RpcValue::from(true);
//! assert_eq!(flag.as_string(), Some("0x1"));
//! assert!(flag.as_boolean().unwrap());
//!
//! // Stored text is validated lazily, at access time.
//! let raw = RpcValue::from("0x3");
//! assert!(raw.as_boolean().is_err());
//! assert_eq!(raw.as_integer().unwrap(), BigInt::from(3));
//! ```
//!
//! # Modules
//!
//! - [`value`]: the scalar leaf value ([`RpcValue`]) and the [`RpcItem`]
//!   capability trait shared with composite nodes
//! - [`hex`]: the hex codec (bytes, integers, booleans) and the
//!   pass-through [`HexValue`] wrapper
//! - [`address`]: account identifiers
//! - [`bytes`]: opaque byte identifiers (hashes)
//! - [`error`]: the format-error taxonomy

pub mod address;
pub mod bytes;
pub mod error;
pub mod hex;
pub mod value;

// Re-export commonly used types at crate root
pub use address::{Address, AddressPrefix};
pub use bytes::Bytes;
pub use error::FormatError;
pub use hex::HexValue;
pub use value::{RpcItem, RpcValue};

// Downstream users need BigInt to construct and read integer values.
pub use num_bigint::BigInt;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
