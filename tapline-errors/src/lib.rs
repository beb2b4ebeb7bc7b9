//! Error domains, codes, and messages for the Tapline mobile POS SDK.
//!
//! Everything an integrating app can see when a Tapline operation fails is
//! defined here: the domain taxonomy, the compiled-in SDK error catalog, the
//! [`Error`] value SDK operations return, and a machine-readable export of
//! the catalog for documentation tooling.
//!
//! # Domains
//!
//! | Domain   | Owner                | Codes defined here |
//! |----------|----------------------|--------------------|
//! | `api`    | Payment gateway      | No                 |
//! | `sdk`    | This crate           | Yes                |
//! | `system` | Host platform        | No                 |
//!
//! Only SDK-domain codes are catalogued locally; the other two domains pass
//! through with their owner's code and message text. SDK codes are negative
//! integers from -10000 to -10041, with -10001..=-10014 permanently
//! reserved.
//!
//! # Example
//!
//! ```rust
//! use tapline_errors::{Error, ErrorCategory, ErrorCode, ErrorDomain, lookup};
//!
//! let err = Error::sdk(ErrorCode::CardReaderTimeout);
//! assert_eq!(err.domain(), ErrorDomain::Sdk);
//! assert_eq!(err.category(), ErrorCategory::CardReader);
//!
//! let record = lookup(ErrorDomain::Sdk, -10018).unwrap();
//! assert_eq!(record.message, "Reader timed out waiting for card");
//! ```

pub mod catalog;
pub mod domain;
pub mod error;
pub mod export;

pub use catalog::{
    ErrorCategory, ErrorCode, ErrorRecord, RESERVED_CODES, all_records, is_reserved_code, lookup,
};
pub use domain::ErrorDomain;
pub use error::{Error, Result};
