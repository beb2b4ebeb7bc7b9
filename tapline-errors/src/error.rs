//! The error value returned by SDK operations.
//!
//! One type spans all three domains. SDK failures carry a catalogued
//! [`ErrorCode`]; gateway failures carry the gateway's own code and text
//! verbatim; platform failures pass through unmodified. Producers construct
//! these, the catalog supplies the code/category/message triple, and client
//! applications dispatch on [`Error::domain`], [`Error::category`], or the
//! specific code.

use crate::catalog::{ErrorCategory, ErrorCode, ErrorRecord};
use crate::domain::ErrorDomain;

/// Convenience alias used across the SDK surface.
pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error surfaced by the SDK, tagged with its origin domain.
///
/// The three variants map one-to-one onto the domain taxonomy, which is
/// closed; the open, growing set is [`ErrorCode`], not this enum.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A failure raised by the SDK itself, with a catalogued code.
    ///
    /// `detail` carries producer context such as the reader's status text or
    /// the EMV kernel's message; it is diagnostic, not catalogue data.
    #[error("{}", sdk_display(.code, .detail))]
    Sdk {
        code: ErrorCode,
        detail: Option<String>,
    },
    /// A failure reported by the payment gateway, carried verbatim.
    ///
    /// The gateway owns this code space; nothing here resolves against the
    /// local catalog.
    #[error("gateway error {code} ({error}): {description}")]
    Api {
        code: i64,
        error: String,
        description: String,
    },
    /// A failure passed through unmodified from the host platform.
    #[error(transparent)]
    System(BoxError),
}

fn sdk_display(code: &ErrorCode, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!("{code} ({detail})"),
        None => code.to_string(),
    }
}

impl Error {
    /// An SDK-domain error with no extra context.
    #[must_use]
    pub const fn sdk(code: ErrorCode) -> Self {
        Error::Sdk { code, detail: None }
    }

    /// An SDK-domain error with producer context attached.
    pub fn sdk_with_detail(code: ErrorCode, detail: impl Into<String>) -> Self {
        Error::Sdk {
            code,
            detail: Some(detail.into()),
        }
    }

    /// A gateway error, built from the fields of its error response body.
    pub fn api(code: i64, error: impl Into<String>, description: impl Into<String>) -> Self {
        Error::Api {
            code,
            error: error.into(),
            description: description.into(),
        }
    }

    /// A platform error, passed through unmodified.
    pub fn system(source: impl Into<BoxError>) -> Self {
        Error::System(source.into())
    }

    /// The domain this error originates from.
    #[must_use]
    pub const fn domain(&self) -> ErrorDomain {
        match self {
            Error::Sdk { .. } => ErrorDomain::Sdk,
            Error::Api { .. } => ErrorDomain::Api,
            Error::System(_) => ErrorDomain::System,
        }
    }

    /// Coarse category for client dispatch. Only SDK-domain errors carry a
    /// meaningful category; the rest report [`ErrorCategory::None`].
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Error::Sdk { code, .. } => code.category(),
            _ => ErrorCategory::None,
        }
    }

    /// The numeric code, if the domain has one: the catalogued code for SDK
    /// errors, the gateway-assigned code for API errors.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        match self {
            Error::Sdk { code, .. } => Some(code.code() as i64),
            Error::Api { code, .. } => Some(*code),
            Error::System(_) => None,
        }
    }

    /// The catalogued code, for SDK-domain errors.
    #[must_use]
    pub const fn sdk_code(&self) -> Option<ErrorCode> {
        match self {
            Error::Sdk { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Producer-attached context, for SDK-domain errors.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Sdk { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The catalog record behind this error. `None` outside the SDK domain,
    /// whose codes are the only ones catalogued locally.
    #[must_use]
    pub fn record(&self) -> Option<ErrorRecord> {
        match self {
            Error::Sdk { code, .. } => Some(code.record()),
            _ => None,
        }
    }

    /// Text fit for showing to the cardholder or merchant.
    ///
    /// SDK errors prefer the catalogued user sentence, then the producer
    /// detail (reader status, EMV kernel text), then the canonical message.
    /// Gateway errors show the gateway's description; platform errors show
    /// the platform's own text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Error::Sdk { code, detail } => match (code.user_message(), detail) {
                (Some(user_message), _) => user_message.to_string(),
                (None, Some(detail)) => detail.clone(),
                (None, None) => code.message().to_string(),
            },
            Error::Api { description, .. } => {
                if description.is_empty() {
                    // The gateway sent no human text; fall back to the
                    // generic unexpected-error sentence.
                    ErrorCode::Unknown
                        .user_message()
                        .unwrap_or(ErrorCode::Unknown.message())
                        .to_string()
                } else {
                    description.clone()
                }
            }
            Error::System(source) => source.to_string(),
        }
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Error::sdk(code)
    }
}

impl From<BoxError> for Error {
    fn from(source: BoxError) -> Self {
        Error::System(source)
    }
}
