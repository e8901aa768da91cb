//! # card_form
//!
//! Payment card form core: input formatting, field validation, opaque
//! tokenization, and an asynchronous submission state machine. The crate
//! is UI-agnostic - a host binds its input/blur/submit events to
//! [`FormEvent`] values and renders the [`Effect`]s the form emits back.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::expiry::YearMonth;
//! use card_form::{FieldId, FormEvent, FormState, PaymentForm, SimulatedGateway};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut form = PaymentForm::new().with_today(YearMonth::new(26, 8));
//!
//! // Keystrokes are normalized for display as they arrive
//! form.apply(FormEvent::Input {
//!     field: FieldId::CardNumber,
//!     text: "4242424242424242".into(),
//! });
//! assert_eq!(form.value(FieldId::CardNumber), "4242 4242 4242 4242");
//!
//! for (field, text) in [
//!     (FieldId::Expiration, "1230"),
//!     (FieldId::Cvc, "123"),
//!     (FieldId::PostalCode, "90210"),
//! ] {
//!     form.apply(FormEvent::Input { field, text: text.into() });
//! }
//!
//! // All fields valid: the form tokenizes, dispatches the payment call,
//! // and maps the resolution to a terminal state
//! let gateway = SimulatedGateway::approving();
//! form.submit(&gateway).await;
//! assert_eq!(*form.state(), FormState::Succeeded);
//! # }
//! ```
//!
//! ## Field Validation
//!
//! ```rust
//! use card_form::expiry::YearMonth;
//! use card_form::{validate_field, CardBrand, FieldError, FieldId, ValidationContext};
//!
//! let ctx = ValidationContext::new(CardBrand::Amex, YearMonth::new(26, 8));
//!
//! // Amex takes a 4-digit CVC; every other brand takes 3
//! assert!(validate_field(FieldId::Cvc, "1234", &ctx).is_ok());
//!
//! let visa = ValidationContext::new(CardBrand::Visa, YearMonth::new(26, 8));
//! assert_eq!(
//!     validate_field(FieldId::Cvc, "1234", &visa),
//!     Err(FieldError::CvcLength { expected: 3 })
//! );
//! ```
//!
//! ## Formatting
//!
//! ```rust
//! use card_form::format::{format_card_number, format_expiration};
//! use card_form::{detect_brand, CardBrand};
//!
//! assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
//! assert_eq!(format_expiration("1225"), "12/25");
//! assert_eq!(detect_brand("4242"), CardBrand::Visa);
//! ```
//!
//! ## Security
//!
//! - Raw card data lives only in [`CardFields`], which zeroes its memory
//!   on drop; `Debug` output is masked.
//! - [`PaymentToken`] is opaque, unique per submission attempt, and
//!   renders masked so accidental logging never exposes it.
//! - The payment backend receives the token only - raw card data never
//!   crosses the [`PaymentClient`] boundary.
//! - No unsafe code (`#![deny(unsafe_code)]`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod field;
pub mod form;
pub mod format;
pub mod luhn;
pub mod payment;
pub mod token;
pub mod validate;

// Re-export main types at crate root
pub use brand::CardBrand;
pub use detect::detect_brand;
pub use error::{FieldError, TransportError};
pub use field::FieldId;
pub use form::{
    Effect, FormEvent, FormState, PaymentForm, FORM_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE,
};
pub use payment::{PaymentClient, PaymentOutcome, PaymentStatus, SimulatedGateway};
pub use token::{CardFields, PaymentToken, Tokenizer, UuidTokenizer};
pub use validate::{validate_field, ValidationContext};
