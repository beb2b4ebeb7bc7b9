//! Error domains: namespaces partitioning error codes by origin.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Origin namespace for an error code.
///
/// Every error the SDK surfaces belongs to exactly one domain. Only the
/// `Sdk` domain's code space is defined in this crate; the other two are
/// owned elsewhere and pass through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDomain {
    /// Gateway-originated failures. Codes and descriptions are assigned by
    /// the payment gateway and arrive in its error response body.
    Api,
    /// Failures raised by the SDK itself. Codes live in [`crate::catalog`].
    Sdk,
    /// Failures passed through unmodified from the host platform.
    System,
}

impl ErrorDomain {
    /// Stable string identifier used in serialized output and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorDomain::Api => "api",
            ErrorDomain::Sdk => "sdk",
            ErrorDomain::System => "system",
        }
    }

    /// Whether this crate's catalog defines the domain's code space.
    ///
    /// [`crate::catalog::lookup`] resolves codes only for domains where this
    /// is true; the others are opaque pass-throughs.
    #[must_use]
    pub const fn defines_codes(&self) -> bool {
        matches!(self, ErrorDomain::Sdk)
    }

    /// All domains, in a stable order.
    #[must_use]
    pub const fn all() -> &'static [ErrorDomain] {
        &[ErrorDomain::Api, ErrorDomain::Sdk, ErrorDomain::System]
    }
}

impl fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
