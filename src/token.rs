//! Tokenization: turning validated card data into an opaque reference.
//!
//! [`CardFields`] carries the four validated values to the tokenizer and
//! nowhere else; it zeroes its memory on drop and masks its `Debug`
//! output. The resulting [`PaymentToken`] is an opaque capability string:
//! the core never inspects its structure, and it must not be logged or
//! persisted beyond the payment call (its `Display`/`Debug` are masked so
//! accidental logging stays safe).
//!
//! # Security
//!
//! [`UuidTokenizer`] issues random identifiers with no mapping back to the
//! card data - nothing to steal, but also nothing a real gateway can
//! charge. It exists for demos and tests. A production deployment must
//! implement [`Tokenizer`] against an external PCI-scope tokenization
//! service and treat the result as an opaque capability.

use std::fmt;
use uuid::Uuid;
use zeroize::Zeroize;

/// The validated field values handed to the tokenizer.
///
/// Callers must only construct this from values that already passed
/// validation; the tokenizer does not re-validate.
pub struct CardFields {
    card_number: String,
    expiration: String,
    cvc: String,
    postal_code: String,
}

impl CardFields {
    /// Bundles the four validated values.
    pub fn new(
        card_number: impl Into<String>,
        expiration: impl Into<String>,
        cvc: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiration: expiration.into(),
            cvc: cvc.into(),
            postal_code: postal_code.into(),
        }
    }

    /// Returns the card number (display-formatted, as validated).
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Returns the `MM/YY` expiration.
    #[inline]
    pub fn expiration(&self) -> &str {
        &self.expiration
    }

    /// Returns the CVC.
    #[inline]
    pub fn cvc(&self) -> &str {
        &self.cvc
    }

    /// Returns the postal code.
    #[inline]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }
}

impl fmt::Debug for CardFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose card data through Debug
        f.debug_struct("CardFields")
            .field("card_number", &"****")
            .field("expiration", &"**/**")
            .field("cvc", &"***")
            .field("postal_code", &self.postal_code)
            .finish()
    }
}

impl Drop for CardFields {
    fn drop(&mut self) {
        self.card_number.zeroize();
        self.expiration.zeroize();
        self.cvc.zeroize();
        self.postal_code.zeroize();
    }
}

/// An opaque payment token.
///
/// Produced once per submit attempt and never reused; the only way to read
/// the raw value is [`PaymentToken::as_str`], which the payment client
/// uses to build its request.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PaymentToken(String);

impl PaymentToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value.
    ///
    /// For handing to the payment call only - never log or persist it.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PaymentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaymentToken({})", masked_tail(&self.0))
    }
}

impl fmt::Display for PaymentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", masked_tail(&self.0))
    }
}

impl Drop for PaymentToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Masks all but the last four characters: `****abcd`.
fn masked_tail(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("****{}", tail)
}

/// Produces an opaque token from validated card fields.
///
/// Contract: the input has already passed all field validation, the
/// adapter does not re-validate, and it must not expose raw card data
/// outside its own trust boundary. Tokens are unique per call.
pub trait Tokenizer: Send + Sync {
    /// Creates a fresh opaque token for one submission attempt.
    fn create_token(&self, fields: &CardFields) -> PaymentToken;
}

/// Demo tokenizer issuing random `tok_` identifiers.
///
/// It deliberately retains no mapping from token to card data, so the
/// token satisfies the opacity contract but cannot be redeemed anywhere.
/// Production code must replace this with a client for an external
/// PCI-scope tokenization service.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenizer;

impl Tokenizer for UuidTokenizer {
    fn create_token(&self, _fields: &CardFields) -> PaymentToken {
        PaymentToken::new(format!("tok_{}", Uuid::new_v4().simple()))
    }
}
