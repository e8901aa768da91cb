//! Card brand detection from number prefixes.
//!
//! Classification looks at the leading digits only, in priority order:
//! `4` is Visa, `51`-`55` is Mastercard, `34`/`37` is Amex, `6011`/`65` is
//! Discover, anything else is Unknown. The prefixes are mutually exclusive,
//! so the first matching rule wins.
//!
//! # Example
//!
//! ```
//! use card_form::{detect_brand, CardBrand};
//!
//! assert_eq!(detect_brand("4242 4242 4242 4242"), CardBrand::Visa);
//! assert_eq!(detect_brand("5500-0000-0000-0004"), CardBrand::Mastercard);
//! assert_eq!(detect_brand("378282246310005"), CardBrand::Amex);
//! assert_eq!(detect_brand("6011111111111117"), CardBrand::Discover);
//! assert_eq!(detect_brand("9999"), CardBrand::Unknown);
//! ```

use crate::brand::CardBrand;

/// Detects the card brand from raw input.
///
/// Non-digit characters (separators, partial typing artifacts) are ignored,
/// so the function is safe to call on every keystroke with whatever is in
/// the input field.
#[inline]
pub fn detect_brand(input: &str) -> CardBrand {
    let mut digits = [0u8; 4];
    let mut count = 0;
    for b in input.bytes() {
        if b.is_ascii_digit() {
            digits[count] = b - b'0';
            count += 1;
            if count == digits.len() {
                break;
            }
        }
    }
    detect_brand_digits(&digits[..count])
}

/// Detects the card brand from a pre-parsed digit slice.
#[inline]
pub fn detect_brand_digits(digits: &[u8]) -> CardBrand {
    match digits {
        [4, ..] => CardBrand::Visa,
        [5, 1..=5, ..] => CardBrand::Mastercard,
        [3, 4, ..] | [3, 7, ..] => CardBrand::Amex,
        [6, 0, 1, 1, ..] | [6, 5, ..] => CardBrand::Discover,
        _ => CardBrand::Unknown,
    }
}
