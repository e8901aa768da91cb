//! Expiration date parsing and comparison.
//!
//! The form accepts exactly the `MM/YY` shape its own formatter produces
//! (month `01`-`12`, two-digit year). Comparison happens entirely in
//! two-digit-year space: `YY` is read as `20YY` on both sides, so the
//! stored "today" is also a two-digit year/month pair.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::{Expiry, YearMonth};
//!
//! let exp = Expiry::parse("12/30").unwrap();
//! assert_eq!(exp.month(), 12);
//! assert_eq!(exp.year(), 30);
//! assert!(!exp.is_expired_at(YearMonth::new(26, 8)));
//! assert!(exp.is_expired_at(YearMonth::new(31, 1)));
//!
//! assert!(Expiry::parse("13/30").is_none());
//! assert!(Expiry::parse("1230").is_none());
//! ```

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A parsed `MM/YY` expiration date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    /// Month (1-12)
    month: u8,
    /// Two-digit year (read as 2000 + year)
    year: u8,
}

impl Expiry {
    /// Parses a strict `MM/YY` string.
    ///
    /// The month must be zero-padded and in `01`-`12`, the year exactly two
    /// digits, with a single `/` between them and nothing else. Returns
    /// `None` for any other shape; looser inputs like `"1/25"` or `"1225"`
    /// are rejected because the formatter never produces them.
    pub fn parse(input: &str) -> Option<Self> {
        let (mm, yy) = input.split_once('/')?;
        if mm.len() != 2 || yy.len() != 2 {
            return None;
        }
        if !mm.bytes().all(|b| b.is_ascii_digit()) || !yy.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let month: u8 = mm.parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        let year: u8 = yy.parse().ok()?;

        Some(Self { month, year })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the two-digit year.
    #[inline]
    pub const fn year(&self) -> u8 {
        self.year
    }

    /// Returns true if this date is before `today`.
    ///
    /// A card is usable through the end of its expiry month, so a date
    /// equal to `today` is not expired.
    #[inline]
    pub fn is_expired_at(&self, today: YearMonth) -> bool {
        self.year < today.year() || (self.year == today.year() && self.month < today.month())
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

/// A two-digit year/month pair representing "today" for expiry checks.
///
/// Validation reads the current date from the system clock by default;
/// tests pin a fixed `YearMonth` instead (see
/// [`PaymentForm::with_today`](crate::PaymentForm::with_today)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    year: u8,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair from a two-digit year and a 1-12 month.
    #[inline]
    pub const fn new(year: u8, month: u8) -> Self {
        Self { year, month }
    }

    /// Returns the current year/month from the system clock.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        // Approximate calendar math, good enough for month-granularity
        // expiry comparison
        let days = secs / 86400;
        let years = days / 365;
        let year = ((1970 + years) % 100) as u8;
        let day_of_year = days % 365;
        let month = (day_of_year / 30).min(11) as u8 + 1;

        Self { year, month }
    }

    /// Returns the two-digit year.
    #[inline]
    pub const fn year(&self) -> u8 {
        self.year
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}
