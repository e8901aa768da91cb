//! Form field identifiers.
//!
//! The set of fields is fixed and their enumeration order matters: when a
//! submit attempt finds several invalid fields, the first one in
//! [`FieldId::ALL`] order receives focus.

use std::fmt;

/// Identifies one of the four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldId {
    /// The card number input
    CardNumber,
    /// The `MM/YY` expiration input
    Expiration,
    /// The CVC input
    Cvc,
    /// The postal code input
    PostalCode,
}

impl FieldId {
    /// All fields in enumeration order.
    ///
    /// This order is the tie-break for "first invalid field" focus on
    /// submit.
    pub const ALL: [FieldId; 4] = [
        FieldId::CardNumber,
        FieldId::Expiration,
        FieldId::Cvc,
        FieldId::PostalCode,
    ];

    /// Returns the display label for this field.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CardNumber => "Card Number",
            Self::Expiration => "Expiration",
            Self::Cvc => "CVC",
            Self::PostalCode => "Postal Code",
        }
    }

    /// Position of this field in [`FieldId::ALL`].
    #[inline]
    pub(crate) const fn index(&self) -> usize {
        match self {
            Self::CardNumber => 0,
            Self::Expiration => 1,
            Self::Cvc => 2,
            Self::PostalCode => 3,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
