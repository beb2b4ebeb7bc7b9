//! The SDK error catalog: every code the SDK itself can return.
//!
//! Codes are negative integers in a single block owned by the SDK domain:
//!
//! | Range             | Meaning                        |
//! |-------------------|--------------------------------|
//! | -10000            | Unexpected failure             |
//! | -10001..=-10014   | Reserved, never assigned       |
//! | -10015..=-10041   | Catalogued SDK failures        |
//!
//! The catalog is compiled in and immutable. Every accessor is a pure
//! function of the code; nothing here allocates global state, locks, or
//! performs I/O. Gateway (`api`) and platform (`system`) codes are owned
//! elsewhere and deliberately absent: [`lookup`] refuses to resolve them.

use std::fmt;
use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::ErrorDomain;

/// Codes set aside between the unexpected-error code and the catalogued
/// block. They must never be assigned; [`ErrorCode::from_code`] rejects them.
pub const RESERVED_CODES: RangeInclusive<i32> = -10014..=-10001;

/// Whether `code` falls in the reserved gap of the SDK code block.
#[must_use]
pub const fn is_reserved_code(code: i32) -> bool {
    -10014 <= code && code <= -10001
}

/// Coarse classification attached to every SDK-domain error.
///
/// Categories let clients group failures without matching every code, e.g.
/// prompting for another swipe on any card-reader fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// No coarse grouping applies; clients dispatch on the specific code.
    None,
    /// Faults involving the physical card reader (swipe, dip, connection,
    /// power).
    CardReader,
    /// Faults in the SDK's own card-processing pipeline. Present in the
    /// taxonomy for client dispatch; no catalogued code carries it today.
    CardSdk,
}

impl ErrorCategory {
    /// Stable string identifier, matching the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::None => "none",
            ErrorCategory::CardReader => "card_reader",
            ErrorCategory::CardSdk => "card_sdk",
        }
    }

    /// Human-readable category name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorCategory::None => "None",
            ErrorCategory::CardReader => "Card Reader",
            ErrorCategory::CardSdk => "Card SDK",
        }
    }

    /// One-line description for documentation output.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            ErrorCategory::None => {
                "Errors with no coarse grouping; clients dispatch on the specific code"
            }
            ErrorCategory::CardReader => {
                "Errors raised while talking to the physical card reader; clients \
                 typically prompt for another swipe or dip"
            }
            ErrorCategory::CardSdk => {
                "Errors raised by the SDK's card-processing pipeline itself"
            }
        }
    }

    /// All categories, in a stable order.
    #[must_use]
    pub const fn all() -> &'static [ErrorCategory] {
        &[
            ErrorCategory::None,
            ErrorCategory::CardReader,
            ErrorCategory::CardSdk,
        ]
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every error code the SDK can raise on its own behalf.
///
/// Code numbers are part of the public contract: clients persist them, match
/// on them, and report them to support. Numbers never change and never get
/// reused; retired codes leave gaps (see [`RESERVED_CODES`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    // =========================================================================
    // General errors (-10000, -10015)
    // =========================================================================
    /// Catch-all for failures with no more specific code.
    Unknown,
    /// A gateway call succeeded but returned no body where one was required.
    NoDataReturned,

    // =========================================================================
    // Card reader: swipe session (-10016..=-10019)
    // =========================================================================
    /// The swipe could not be decoded (speed, direction, or damaged card).
    CardReaderGeneralError,
    /// The reader failed to initialize before the session could start.
    CardReaderInitializationError,
    /// The reader gave up waiting for a card to be swiped or dipped.
    CardReaderTimeout,
    /// The reader reported an internal status error; its own status text
    /// travels in the error detail.
    CardReaderStatusError,

    // =========================================================================
    // Card data, EMV, and authorization (-10020..=-10033)
    // =========================================================================
    /// The signature image supplied for the receipt is unusable.
    InvalidSignatureImage,
    /// No cardholder name could be extracted from the card.
    NameNotFound,
    /// Track or chip data failed validation.
    InvalidCardData,
    /// The card scheme or type is not accepted.
    CardNotSupported,
    /// The EMV kernel rejected the transaction; kernel text travels in the
    /// error detail.
    EmvTransactionError,
    /// The selected EMV application ID is not valid for this card.
    InvalidApplicationId,
    /// The chip declined the transaction offline.
    DeclinedByCard,
    /// The card is blocked and cannot be used.
    CardBlocked,
    /// The issuing bank declined the authorization.
    DeclinedByIssuer,
    /// The issuing bank could not be reached for authorization.
    IssuerUnreachable,
    /// The merchant auth info given to the SDK is invalid.
    InvalidAuthInfo,
    /// No merchant auth info was given before starting a transaction.
    AuthInfoNotProvided,
    /// The payment method in use cannot be turned into a token.
    PaymentMethodCannotBeTokenized,
    /// The reader's battery level could not be read.
    FailedToGetBatteryLevel,

    // =========================================================================
    // Card reader connectivity (-10034, -10035)
    // =========================================================================
    /// No reader is connected.
    CardReaderNotConnected,
    /// A reader is connected but the model is not supported.
    CardReaderModelNotSupported,

    // =========================================================================
    // Transaction validation (-10036..=-10038)
    // =========================================================================
    /// The transaction amount is out of range or malformed.
    InvalidTransactionAmount,
    /// The transaction currency code is not supported.
    InvalidTransactionCurrencyCode,
    /// The merchant account ID on the transaction is invalid.
    InvalidTransactionAccountId,

    // =========================================================================
    // Card reader selection and power (-10039..=-10041)
    // =========================================================================
    /// The reader chosen from the discovery list is not selectable.
    InvalidCardReaderSelection,
    /// The reader's battery is too low to run a transaction.
    CardReaderBatteryTooLow,
    /// The reader was discovered but a connection could not be established.
    CardReaderUnableToConnect,
}

impl ErrorCode {
    /// Numeric code, unique within the SDK domain. Stable forever.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            ErrorCode::Unknown => -10000,
            ErrorCode::NoDataReturned => -10015,
            ErrorCode::CardReaderGeneralError => -10016,
            ErrorCode::CardReaderInitializationError => -10017,
            ErrorCode::CardReaderTimeout => -10018,
            ErrorCode::CardReaderStatusError => -10019,
            ErrorCode::InvalidSignatureImage => -10020,
            ErrorCode::NameNotFound => -10021,
            ErrorCode::InvalidCardData => -10022,
            ErrorCode::CardNotSupported => -10023,
            ErrorCode::EmvTransactionError => -10024,
            ErrorCode::InvalidApplicationId => -10025,
            ErrorCode::DeclinedByCard => -10026,
            ErrorCode::CardBlocked => -10027,
            ErrorCode::DeclinedByIssuer => -10028,
            ErrorCode::IssuerUnreachable => -10029,
            ErrorCode::InvalidAuthInfo => -10030,
            ErrorCode::AuthInfoNotProvided => -10031,
            ErrorCode::PaymentMethodCannotBeTokenized => -10032,
            ErrorCode::FailedToGetBatteryLevel => -10033,
            ErrorCode::CardReaderNotConnected => -10034,
            ErrorCode::CardReaderModelNotSupported => -10035,
            ErrorCode::InvalidTransactionAmount => -10036,
            ErrorCode::InvalidTransactionCurrencyCode => -10037,
            ErrorCode::InvalidTransactionAccountId => -10038,
            ErrorCode::InvalidCardReaderSelection => -10039,
            ErrorCode::CardReaderBatteryTooLow => -10040,
            ErrorCode::CardReaderUnableToConnect => -10041,
        }
    }

    /// Stable identifier, matching the serialized form.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "UNKNOWN",
            ErrorCode::NoDataReturned => "NO_DATA_RETURNED",
            ErrorCode::CardReaderGeneralError => "CARD_READER_GENERAL_ERROR",
            ErrorCode::CardReaderInitializationError => "CARD_READER_INITIALIZATION_ERROR",
            ErrorCode::CardReaderTimeout => "CARD_READER_TIMEOUT",
            ErrorCode::CardReaderStatusError => "CARD_READER_STATUS_ERROR",
            ErrorCode::InvalidSignatureImage => "INVALID_SIGNATURE_IMAGE",
            ErrorCode::NameNotFound => "NAME_NOT_FOUND",
            ErrorCode::InvalidCardData => "INVALID_CARD_DATA",
            ErrorCode::CardNotSupported => "CARD_NOT_SUPPORTED",
            ErrorCode::EmvTransactionError => "EMV_TRANSACTION_ERROR",
            ErrorCode::InvalidApplicationId => "INVALID_APPLICATION_ID",
            ErrorCode::DeclinedByCard => "DECLINED_BY_CARD",
            ErrorCode::CardBlocked => "CARD_BLOCKED",
            ErrorCode::DeclinedByIssuer => "DECLINED_BY_ISSUER",
            ErrorCode::IssuerUnreachable => "ISSUER_UNREACHABLE",
            ErrorCode::InvalidAuthInfo => "INVALID_AUTH_INFO",
            ErrorCode::AuthInfoNotProvided => "AUTH_INFO_NOT_PROVIDED",
            ErrorCode::PaymentMethodCannotBeTokenized => "PAYMENT_METHOD_CANNOT_BE_TOKENIZED",
            ErrorCode::FailedToGetBatteryLevel => "FAILED_TO_GET_BATTERY_LEVEL",
            ErrorCode::CardReaderNotConnected => "CARD_READER_NOT_CONNECTED",
            ErrorCode::CardReaderModelNotSupported => "CARD_READER_MODEL_NOT_SUPPORTED",
            ErrorCode::InvalidTransactionAmount => "INVALID_TRANSACTION_AMOUNT",
            ErrorCode::InvalidTransactionCurrencyCode => "INVALID_TRANSACTION_CURRENCY_CODE",
            ErrorCode::InvalidTransactionAccountId => "INVALID_TRANSACTION_ACCOUNT_ID",
            ErrorCode::InvalidCardReaderSelection => "INVALID_CARD_READER_SELECTION",
            ErrorCode::CardReaderBatteryTooLow => "CARD_READER_BATTERY_TOO_LOW",
            ErrorCode::CardReaderUnableToConnect => "CARD_READER_UNABLE_TO_CONNECT",
        }
    }

    /// Coarse category for client dispatch.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::CardReaderGeneralError
            | ErrorCode::CardReaderInitializationError
            | ErrorCode::CardReaderTimeout
            | ErrorCode::CardReaderStatusError
            | ErrorCode::CardReaderNotConnected
            | ErrorCode::CardReaderModelNotSupported
            | ErrorCode::InvalidCardReaderSelection
            | ErrorCode::CardReaderBatteryTooLow
            | ErrorCode::CardReaderUnableToConnect => ErrorCategory::CardReader,
            _ => ErrorCategory::None,
        }
    }

    /// Canonical short description. Clients localize on the code; this text
    /// is stable and safe to log.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unexpected error",
            ErrorCode::NoDataReturned => "No data returned",
            ErrorCode::CardReaderGeneralError => "General swipe failure",
            ErrorCode::CardReaderInitializationError => "Reader initialization failed",
            ErrorCode::CardReaderTimeout => "Reader timed out waiting for card",
            ErrorCode::CardReaderStatusError => "Reader reported status error",
            ErrorCode::InvalidSignatureImage => "Invalid signature image",
            ErrorCode::NameNotFound => "Name not found",
            ErrorCode::InvalidCardData => "Invalid card data",
            ErrorCode::CardNotSupported => "Card not supported",
            ErrorCode::EmvTransactionError => "EMV transaction error",
            ErrorCode::InvalidApplicationId => "Invalid application ID",
            ErrorCode::DeclinedByCard => "Declined by card",
            ErrorCode::CardBlocked => "Card blocked",
            ErrorCode::DeclinedByIssuer => "Declined by issuer",
            ErrorCode::IssuerUnreachable => "Issuer unreachable",
            ErrorCode::InvalidAuthInfo => "Invalid auth info",
            ErrorCode::AuthInfoNotProvided => "Auth info not provided",
            ErrorCode::PaymentMethodCannotBeTokenized => "Payment method cannot be tokenized",
            ErrorCode::FailedToGetBatteryLevel => "Failed to get battery level",
            ErrorCode::CardReaderNotConnected => "Reader not connected",
            ErrorCode::CardReaderModelNotSupported => "Reader model not supported",
            ErrorCode::InvalidTransactionAmount => "Invalid transaction amount",
            ErrorCode::InvalidTransactionCurrencyCode => "Invalid transaction currency code",
            ErrorCode::InvalidTransactionAccountId => "Invalid transaction account ID",
            ErrorCode::InvalidCardReaderSelection => "Invalid reader selection",
            ErrorCode::CardReaderBatteryTooLow => "Reader battery too low",
            ErrorCode::CardReaderUnableToConnect => "Unable to connect to reader",
        }
    }

    /// Expanded sentence suitable for showing to the cardholder or merchant.
    ///
    /// `None` where the end-user text must come from the failing component
    /// at fault time (reader status, EMV kernel); producers attach that text
    /// as error detail instead.
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            ErrorCode::Unknown => Some("There was an unexpected error."),
            ErrorCode::NoDataReturned => Some("There was no data returned."),
            ErrorCode::CardReaderGeneralError => Some(
                "Swipe failed due to: (a) uneven swipe speed, (b) fast swipe, \
                 (c) slow swipe, or (d) damaged card.",
            ),
            ErrorCode::CardReaderInitializationError => {
                Some("Failed to initialize card reader.")
            }
            ErrorCode::CardReaderTimeout => Some("Card reader timed out."),
            ErrorCode::CardReaderStatusError => None,
            ErrorCode::InvalidSignatureImage => Some("Invalid signature image provided."),
            ErrorCode::NameNotFound => Some("Name not found."),
            ErrorCode::InvalidCardData => Some("Invalid card data."),
            ErrorCode::CardNotSupported => Some("This card is not supported."),
            ErrorCode::EmvTransactionError => None,
            ErrorCode::InvalidApplicationId => Some("Invalid application ID selected."),
            ErrorCode::DeclinedByCard => Some("The transaction was declined by the card."),
            ErrorCode::CardBlocked => Some("This card has been blocked."),
            ErrorCode::DeclinedByIssuer => {
                Some("The transaction was declined by the issuer bank.")
            }
            ErrorCode::IssuerUnreachable => Some("The issuing bank could not be reached."),
            ErrorCode::InvalidAuthInfo => Some("The provided auth info is invalid."),
            ErrorCode::AuthInfoNotProvided => Some("Auth info was not provided."),
            ErrorCode::PaymentMethodCannotBeTokenized => {
                Some("This payment method cannot be tokenized.")
            }
            ErrorCode::FailedToGetBatteryLevel => {
                Some("Battery level could not be determined.")
            }
            ErrorCode::CardReaderNotConnected => Some("Card reader is not connected."),
            ErrorCode::CardReaderModelNotSupported => {
                Some("This card reader model is not supported.")
            }
            ErrorCode::InvalidTransactionAmount => {
                Some("The provided transaction amount is invalid.")
            }
            ErrorCode::InvalidTransactionCurrencyCode => {
                Some("The provided currency code is invalid.")
            }
            ErrorCode::InvalidTransactionAccountId => {
                Some("The provided account ID is invalid.")
            }
            ErrorCode::InvalidCardReaderSelection => {
                Some("Card reader selection is invalid.")
            }
            ErrorCode::CardReaderBatteryTooLow => Some(
                "The card reader battery does not have enough charge. Please \
                 charge before using.",
            ),
            ErrorCode::CardReaderUnableToConnect => Some(
                "Please make sure you're using a supported card reader and that \
                 it is fully charged.",
            ),
        }
    }

    /// Resolve a numeric code back to its catalogued form.
    ///
    /// Returns `None` for anything outside the catalog, including the
    /// reserved range.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<ErrorCode> {
        match code {
            -10000 => Some(ErrorCode::Unknown),
            -10015 => Some(ErrorCode::NoDataReturned),
            -10016 => Some(ErrorCode::CardReaderGeneralError),
            -10017 => Some(ErrorCode::CardReaderInitializationError),
            -10018 => Some(ErrorCode::CardReaderTimeout),
            -10019 => Some(ErrorCode::CardReaderStatusError),
            -10020 => Some(ErrorCode::InvalidSignatureImage),
            -10021 => Some(ErrorCode::NameNotFound),
            -10022 => Some(ErrorCode::InvalidCardData),
            -10023 => Some(ErrorCode::CardNotSupported),
            -10024 => Some(ErrorCode::EmvTransactionError),
            -10025 => Some(ErrorCode::InvalidApplicationId),
            -10026 => Some(ErrorCode::DeclinedByCard),
            -10027 => Some(ErrorCode::CardBlocked),
            -10028 => Some(ErrorCode::DeclinedByIssuer),
            -10029 => Some(ErrorCode::IssuerUnreachable),
            -10030 => Some(ErrorCode::InvalidAuthInfo),
            -10031 => Some(ErrorCode::AuthInfoNotProvided),
            -10032 => Some(ErrorCode::PaymentMethodCannotBeTokenized),
            -10033 => Some(ErrorCode::FailedToGetBatteryLevel),
            -10034 => Some(ErrorCode::CardReaderNotConnected),
            -10035 => Some(ErrorCode::CardReaderModelNotSupported),
            -10036 => Some(ErrorCode::InvalidTransactionAmount),
            -10037 => Some(ErrorCode::InvalidTransactionCurrencyCode),
            -10038 => Some(ErrorCode::InvalidTransactionAccountId),
            -10039 => Some(ErrorCode::InvalidCardReaderSelection),
            -10040 => Some(ErrorCode::CardReaderBatteryTooLow),
            -10041 => Some(ErrorCode::CardReaderUnableToConnect),
            _ => None,
        }
    }

    /// Every catalogued code, in code order. Finite and restartable; the
    /// basis for exhaustive tests and documentation generation.
    #[must_use]
    pub const fn all() -> &'static [ErrorCode] {
        &[
            ErrorCode::Unknown,
            ErrorCode::NoDataReturned,
            ErrorCode::CardReaderGeneralError,
            ErrorCode::CardReaderInitializationError,
            ErrorCode::CardReaderTimeout,
            ErrorCode::CardReaderStatusError,
            ErrorCode::InvalidSignatureImage,
            ErrorCode::NameNotFound,
            ErrorCode::InvalidCardData,
            ErrorCode::CardNotSupported,
            ErrorCode::EmvTransactionError,
            ErrorCode::InvalidApplicationId,
            ErrorCode::DeclinedByCard,
            ErrorCode::CardBlocked,
            ErrorCode::DeclinedByIssuer,
            ErrorCode::IssuerUnreachable,
            ErrorCode::InvalidAuthInfo,
            ErrorCode::AuthInfoNotProvided,
            ErrorCode::PaymentMethodCannotBeTokenized,
            ErrorCode::FailedToGetBatteryLevel,
            ErrorCode::CardReaderNotConnected,
            ErrorCode::CardReaderModelNotSupported,
            ErrorCode::InvalidTransactionAmount,
            ErrorCode::InvalidTransactionCurrencyCode,
            ErrorCode::InvalidTransactionAccountId,
            ErrorCode::InvalidCardReaderSelection,
            ErrorCode::CardReaderBatteryTooLow,
            ErrorCode::CardReaderUnableToConnect,
        ]
    }

    /// Build the full record for this code.
    #[must_use]
    pub fn record(&self) -> ErrorRecord {
        ErrorRecord {
            code: self.code(),
            domain: ErrorDomain::Sdk,
            category: self.category(),
            message: self.message().to_string(),
            user_message: self.user_message().map(str::to_string),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// A fully resolved catalog entry with owned strings, suitable for
/// serialization and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorRecord {
    /// Numeric code, unique within its domain.
    pub code: i32,
    /// Domain that owns the code.
    pub domain: ErrorDomain,
    /// Coarse classification for client dispatch.
    pub category: ErrorCategory,
    /// Canonical short description.
    pub message: String,
    /// End-user sentence, where the catalog defines one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
}

impl ErrorRecord {
    /// One-line summary: `[-10016] General swipe failure (card_reader)`.
    #[must_use]
    pub fn format_brief(&self) -> String {
        format!("[{}] {} ({})", self.code, self.message, self.category)
    }

    /// Multi-line block for terminal output.
    #[must_use]
    pub fn format_full(&self) -> String {
        let mut out = format!(
            "Error {}: {}\nDomain:   {}\nCategory: {}",
            self.code, self.message, self.domain, self.category
        );
        if let Some(user_message) = &self.user_message {
            out.push_str("\nUser message: ");
            out.push_str(user_message);
        }
        out
    }
}

/// Resolve a (domain, code) pair against the catalog.
///
/// Only the SDK domain is catalogued locally. Gateway and platform codes
/// pass through from their owners with their own message text, so the
/// catalog returns `None` for those domains regardless of the code. An
/// unregistered SDK-domain code also returns `None`; hitting that path at
/// runtime means a producer fabricated a code.
#[must_use]
pub fn lookup(domain: ErrorDomain, code: i32) -> Option<ErrorRecord> {
    if !domain.defines_codes() {
        return None;
    }
    ErrorCode::from_code(code).map(|code| code.record())
}

/// Enumerate the full catalog as records, in the same order as
/// [`ErrorCode::all`]. Finite; each call yields a fresh iterator.
pub fn all_records() -> impl Iterator<Item = ErrorRecord> {
    ErrorCode::all().iter().map(ErrorCode::record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_error_codes_are_unique() {
        let mut seen = HashSet::new();
        for code in ErrorCode::all() {
            assert!(
                seen.insert(code.code()),
                "duplicate error code: {}",
                code.code()
            );
        }
    }

    #[test]
    fn test_error_names_are_unique() {
        let mut seen = HashSet::new();
        for code in ErrorCode::all() {
            assert!(seen.insert(code.name()), "duplicate name: {}", code.name());
        }
    }

    #[test]
    fn test_total_error_code_count() {
        // The catalog is a fixed contract; update deliberately.
        assert_eq!(ErrorCode::all().len(), 28);
    }

    #[test]
    fn test_all_is_sorted_descending_by_code() {
        let codes: Vec<i32> = ErrorCode::all().iter().map(|c| c.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_reserved_range_is_undefined() {
        for code in RESERVED_CODES {
            assert!(is_reserved_code(code));
            assert_eq!(ErrorCode::from_code(code), None, "code {code} must stay reserved");
        }
        for code in ErrorCode::all() {
            assert!(!is_reserved_code(code.code()));
        }
    }

    #[test]
    fn test_reserved_predicate_matches_range() {
        assert!(!is_reserved_code(-10000));
        assert!(is_reserved_code(-10001));
        assert!(is_reserved_code(-10014));
        assert!(!is_reserved_code(-10015));
        assert!(is_reserved_code(*RESERVED_CODES.start()));
        assert!(is_reserved_code(*RESERVED_CODES.end()));
        assert!(!is_reserved_code(*RESERVED_CODES.start() - 1));
        assert!(!is_reserved_code(*RESERVED_CODES.end() + 1));
    }

    #[test]
    fn test_card_reader_category_membership() {
        let expected: HashSet<i32> = [
            -10016, -10017, -10018, -10019, -10034, -10035, -10039, -10040, -10041,
        ]
        .into_iter()
        .collect();
        for code in ErrorCode::all() {
            if expected.contains(&code.code()) {
                assert_eq!(code.category(), ErrorCategory::CardReader, "{code:?}");
            } else {
                assert_eq!(code.category(), ErrorCategory::None, "{code:?}");
            }
        }
    }

    #[test]
    fn test_no_code_uses_card_sdk_category() {
        for code in ErrorCode::all() {
            assert_ne!(code.category(), ErrorCategory::CardSdk);
        }
    }

    #[test]
    fn test_all_errors_have_message() {
        for code in ErrorCode::all() {
            assert!(!code.message().is_empty(), "{code:?} has empty message");
            if let Some(user_message) = code.user_message() {
                assert!(!user_message.is_empty(), "{code:?} has empty user message");
            }
        }
    }

    #[test]
    fn test_user_message_coverage() {
        let without: Vec<ErrorCode> = ErrorCode::all()
            .iter()
            .copied()
            .filter(|c| c.user_message().is_none())
            .collect();
        assert_eq!(
            without,
            vec![ErrorCode::CardReaderStatusError, ErrorCode::EmvTransactionError]
        );
    }

    #[test]
    fn test_from_code_round_trip() {
        for code in ErrorCode::all() {
            assert_eq!(ErrorCode::from_code(code.code()), Some(*code));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown_codes() {
        assert_eq!(ErrorCode::from_code(0), None);
        assert_eq!(ErrorCode::from_code(-1), None);
        assert_eq!(ErrorCode::from_code(-9999), None);
        assert_eq!(ErrorCode::from_code(-10042), None);
        assert_eq!(ErrorCode::from_code(10016), None);
    }

    #[test]
    fn test_code_name_matches_serialization() {
        for code in ErrorCode::all() {
            let json = serde_json::to_string(code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.name()));
        }
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::CardReaderTimeout).unwrap();
        assert_eq!(json, "\"CARD_READER_TIMEOUT\"");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::CardReaderTimeout);
    }

    #[test]
    fn test_category_serialization() {
        for category in ErrorCategory::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_category_accessors() {
        assert_eq!(ErrorCategory::all().len(), 3);
        for category in ErrorCategory::all() {
            assert!(!category.name().is_empty());
            assert!(!category.description().is_empty());
        }
        assert_eq!(ErrorCategory::CardReader.as_str(), "card_reader");
        assert_eq!(ErrorCategory::CardReader.name(), "Card Reader");
    }

    #[test]
    fn test_display_implementations() {
        assert_eq!(
            ErrorCode::CardReaderGeneralError.to_string(),
            "-10016: General swipe failure"
        );
        assert_eq!(ErrorCode::Unknown.to_string(), "-10000: Unexpected error");
        assert_eq!(ErrorCategory::CardReader.to_string(), "card_reader");
        assert_eq!(ErrorCategory::None.to_string(), "none");
    }

    #[test]
    fn test_lookup_resolves_sdk_codes() {
        let record = lookup(ErrorDomain::Sdk, -10018).unwrap();
        assert_eq!(record.code, -10018);
        assert_eq!(record.domain, ErrorDomain::Sdk);
        assert_eq!(record.category, ErrorCategory::CardReader);
        assert_eq!(record.message, "Reader timed out waiting for card");
        assert_eq!(record.user_message.as_deref(), Some("Card reader timed out."));
    }

    #[test]
    fn test_lookup_is_opaque_for_api_and_system() {
        // -10000 is a valid SDK code; other domains still refuse it.
        assert_eq!(lookup(ErrorDomain::Api, -10000), None);
        assert_eq!(lookup(ErrorDomain::System, -10000), None);
        assert_eq!(lookup(ErrorDomain::Api, 1008), None);
    }

    #[test]
    fn test_lookup_rejects_unknown_and_reserved() {
        assert_eq!(lookup(ErrorDomain::Sdk, -10007), None);
        assert_eq!(lookup(ErrorDomain::Sdk, -10042), None);
        assert_eq!(lookup(ErrorDomain::Sdk, 0), None);
    }

    #[test]
    fn test_record_round_trip() {
        for code in ErrorCode::all() {
            let record = code.record();
            assert_eq!(lookup(record.domain, record.code), Some(record));
        }
    }

    #[test]
    fn test_all_records_is_finite_and_restartable() {
        let first: Vec<ErrorRecord> = all_records().collect();
        let second: Vec<ErrorRecord> = all_records().collect();
        assert_eq!(first.len(), ErrorCode::all().len());
        assert_eq!(first, second);
        for (record, code) in first.iter().zip(ErrorCode::all()) {
            assert_eq!(record.code, code.code());
        }
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(ErrorCode::CardReaderBatteryTooLow.record()).unwrap();
        assert_eq!(json["code"], -10040);
        assert_eq!(json["domain"], "sdk");
        assert_eq!(json["category"], "card_reader");
        assert_eq!(json["message"], "Reader battery too low");
        assert!(json["user_message"].is_string());

        // Codes without a user message omit the field entirely.
        let json = serde_json::to_value(ErrorCode::CardReaderStatusError.record()).unwrap();
        assert!(json.get("user_message").is_none());
    }

    #[test]
    fn test_record_deserialization_tolerates_missing_user_message() {
        let record: ErrorRecord = serde_json::from_str(
            r#"{"code":-10019,"domain":"sdk","category":"card_reader","message":"Reader reported status error"}"#,
        )
        .unwrap();
        assert_eq!(record, ErrorCode::CardReaderStatusError.record());
    }

    #[test]
    fn test_format_brief() {
        let brief = ErrorCode::CardReaderGeneralError.record().format_brief();
        assert_eq!(brief, "[-10016] General swipe failure (card_reader)");
    }

    #[test]
    fn test_format_full() {
        let full = ErrorCode::CardReaderNotConnected.record().format_full();
        assert!(full.starts_with("Error -10034: Reader not connected"));
        assert!(full.contains("Domain:   sdk"));
        assert!(full.contains("Category: card_reader"));
        assert!(full.contains("User message: Card reader is not connected."));

        let full = ErrorCode::EmvTransactionError.record().format_full();
        assert!(!full.contains("User message"));
    }

    // =========================================================================
    // Stability contracts: numbers are public API and never change
    // =========================================================================

    #[test]
    fn test_general_codes_stable() {
        assert_eq!(ErrorCode::Unknown.code(), -10000);
        assert_eq!(ErrorCode::NoDataReturned.code(), -10015);
    }

    #[test]
    fn test_card_reader_codes_stable() {
        assert_eq!(ErrorCode::CardReaderGeneralError.code(), -10016);
        assert_eq!(ErrorCode::CardReaderInitializationError.code(), -10017);
        assert_eq!(ErrorCode::CardReaderTimeout.code(), -10018);
        assert_eq!(ErrorCode::CardReaderStatusError.code(), -10019);
        assert_eq!(ErrorCode::CardReaderNotConnected.code(), -10034);
        assert_eq!(ErrorCode::CardReaderModelNotSupported.code(), -10035);
        assert_eq!(ErrorCode::InvalidCardReaderSelection.code(), -10039);
        assert_eq!(ErrorCode::CardReaderBatteryTooLow.code(), -10040);
        assert_eq!(ErrorCode::CardReaderUnableToConnect.code(), -10041);
    }

    #[test]
    fn test_card_and_auth_codes_stable() {
        assert_eq!(ErrorCode::InvalidSignatureImage.code(), -10020);
        assert_eq!(ErrorCode::NameNotFound.code(), -10021);
        assert_eq!(ErrorCode::InvalidCardData.code(), -10022);
        assert_eq!(ErrorCode::CardNotSupported.code(), -10023);
        assert_eq!(ErrorCode::EmvTransactionError.code(), -10024);
        assert_eq!(ErrorCode::InvalidApplicationId.code(), -10025);
        assert_eq!(ErrorCode::DeclinedByCard.code(), -10026);
        assert_eq!(ErrorCode::CardBlocked.code(), -10027);
        assert_eq!(ErrorCode::DeclinedByIssuer.code(), -10028);
        assert_eq!(ErrorCode::IssuerUnreachable.code(), -10029);
        assert_eq!(ErrorCode::InvalidAuthInfo.code(), -10030);
        assert_eq!(ErrorCode::AuthInfoNotProvided.code(), -10031);
        assert_eq!(ErrorCode::PaymentMethodCannotBeTokenized.code(), -10032);
        assert_eq!(ErrorCode::FailedToGetBatteryLevel.code(), -10033);
    }

    #[test]
    fn test_transaction_codes_stable() {
        assert_eq!(ErrorCode::InvalidTransactionAmount.code(), -10036);
        assert_eq!(ErrorCode::InvalidTransactionCurrencyCode.code(), -10037);
        assert_eq!(ErrorCode::InvalidTransactionAccountId.code(), -10038);
    }
}
