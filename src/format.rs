//! Display formatting for the form inputs.
//!
//! These are pure, total functions: they never reject input, they only
//! normalize it into the canonical display string for the field. Deciding
//! whether the result is *valid* is the validator's job (see
//! [`crate::validate`]).
//!
//! # Example
//!
//! ```
//! use card_form::format::{format_card_number, format_cvc, format_expiration};
//! use card_form::CardBrand;
//!
//! assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
//! assert_eq!(format_expiration("1225"), "12/25");
//! assert_eq!(format_cvc("12345", CardBrand::Visa), "123");
//! assert_eq!(format_cvc("12345", CardBrand::Amex), "1234");
//! ```

use crate::brand::CardBrand;

/// Strips everything but ASCII digits from the input.
///
/// # Example
///
/// ```
/// use card_form::format::strip_digits;
///
/// assert_eq!(strip_digits("4242 4242-4242.4242"), "4242424242424242");
/// ```
#[inline]
pub fn strip_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a card number with a space every four digits.
///
/// The input may be any length and contain any characters; non-digits are
/// stripped before grouping and no trailing separator is ever produced, so
/// the function is idempotent:
/// `format_card_number(format_card_number(x)) == format_card_number(x)`.
///
/// # Example
///
/// ```
/// use card_form::format::format_card_number;
///
/// assert_eq!(format_card_number("42424"), "4242 4");
/// assert_eq!(format_card_number("4242 4242 4242 4242"), "4242 4242 4242 4242");
/// assert_eq!(format_card_number(""), "");
/// ```
pub fn format_card_number(input: &str) -> String {
    let digits = strip_digits(input);
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }

    out
}

/// Formats an expiration date as the user types.
///
/// Digits are capped at four; a `/` is inserted after the second digit once
/// at least three digits are present. A not-yet-complete month like `"1"`
/// or an out-of-range one like `"13"` formats as-is - rejection happens in
/// the validator, not here.
///
/// # Example
///
/// ```
/// use card_form::format::format_expiration;
///
/// assert_eq!(format_expiration("1"), "1");
/// assert_eq!(format_expiration("12"), "12");
/// assert_eq!(format_expiration("123"), "12/3");
/// assert_eq!(format_expiration("1225"), "12/25");
/// assert_eq!(format_expiration("122534"), "12/25");
/// ```
pub fn format_expiration(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(4).collect();

    if digits.len() >= 3 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Formats a CVC, truncating to the brand's expected length.
///
/// Four digits for American Express, three for everything else.
pub fn format_cvc(input: &str, brand: CardBrand) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(brand.cvc_length())
        .collect()
}
