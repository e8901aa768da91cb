//! Card brand identification.
//!
//! The brand is always derived from the current card number prefix (see
//! [`crate::detect`]); it is never stored independently, so it can never go
//! stale against the number it was computed from.
//!
//! # Example
//!
//! ```
//! use card_form::CardBrand;
//!
//! assert_eq!(CardBrand::Visa.name(), "Visa");
//! assert_eq!(CardBrand::Amex.cvc_length(), 4);
//! assert_eq!(CardBrand::Visa.cvc_length(), 3);
//! ```

use std::fmt;

/// Card networks recognized by the form.
///
/// Anything that doesn't match a known prefix is `Unknown`; unknown cards
/// still validate by length and checksum, they just get the generic icon
/// and a 3-digit CVC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardBrand {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55
    Mastercard,
    /// American Express - prefix 34 or 37
    Amex,
    /// Discover - prefix 6011 or 65
    Discover,
    /// No recognized prefix
    Unknown,
}

impl CardBrand {
    /// Returns the human-readable brand name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "Amex",
            Self::Discover => "Discover",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the display glyph shown next to the card number input.
    #[inline]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Visa | Self::Mastercard => "💳",
            Self::Amex => "🟦",
            Self::Discover => "🟧",
            Self::Unknown => "❔",
        }
    }

    /// Returns the CVC length this brand requires.
    ///
    /// American Express prints a 4-digit code on the front; every other
    /// network uses 3 digits on the back.
    #[inline]
    pub const fn cvc_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
