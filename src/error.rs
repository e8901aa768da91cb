//! Error types for field validation and the payment call.
//!
//! Field errors carry the exact inline text shown next to the input; they
//! are values, not exceptions, and every one of them is recoverable by
//! corrected input. Transport errors come from the payment call itself and
//! are distinct from a backend-reported decline, which arrives as a
//! structured outcome instead (see [`crate::payment::PaymentOutcome`]).

use crate::field::FieldId;
use std::fmt;

/// A field-level validation failure.
///
/// `Display` produces the user-facing inline message for the field.
///
/// # Example
///
/// ```
/// use card_form::{FieldError, FieldId};
///
/// assert_eq!(
///     FieldError::Required(FieldId::CardNumber).to_string(),
///     "Card number is required."
/// );
/// assert_eq!(FieldError::CardChecksum.to_string(), "Invalid card number.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty.
    Required(FieldId),

    /// The card number is not 13-19 digits.
    CardLength,

    /// The card number failed the Luhn checksum.
    CardChecksum,

    /// The expiration is not a strict `MM/YY` with month 01-12.
    ExpirationFormat,

    /// The expiration date is in the past.
    Expired,

    /// The CVC is not exactly the expected number of digits.
    CvcLength {
        /// Digits required by the current card brand (3, or 4 for Amex).
        expected: usize,
    },

    /// The postal code is shorter than three characters.
    PostalTooShort,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => match field {
                FieldId::CardNumber => write!(f, "Card number is required."),
                FieldId::Expiration => write!(f, "Expiration date is required."),
                FieldId::Cvc => write!(f, "CVC is required."),
                FieldId::PostalCode => write!(f, "Postal code is required."),
            },
            Self::CardLength => write!(f, "Card number must be 13-19 digits."),
            Self::CardChecksum => write!(f, "Invalid card number."),
            Self::ExpirationFormat => write!(f, "Expiration must be MM/YY."),
            Self::Expired => write!(f, "Card has expired."),
            Self::CvcLength { expected } => {
                write!(f, "CVC must be {} digits.", expected)
            }
            Self::PostalTooShort => write!(f, "Postal code is too short."),
        }
    }
}

impl std::error::Error for FieldError {}

/// A transport-level fault from the payment call (network failure, no
/// structured payload).
///
/// Distinguished from a backend decline so callers can tell the two apart,
/// even though both surface to the user as a form-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Creates a transport error with the underlying fault description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the underlying fault description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payment transport fault: {}", self.message)
    }
}

impl std::error::Error for TransportError {}
