//! The submission orchestrator.
//!
//! [`PaymentForm`] owns everything the UI may display - per-field values
//! and verdicts, the form-level error, and the [`FormState`] - and is the
//! only thing that mutates them. It is a pure state machine: host events
//! go in through [`PaymentForm::apply`], display updates come back out as
//! [`Effect`]s, and no UI binding is assumed. A thin adapter maps real
//! input/blur/submit events to [`FormEvent`] values and effects to
//! whatever the host renders with.
//!
//! The async half is [`PaymentForm::submit`]: it runs the synchronous
//! validation pass, and when that passes, drives the single in-flight
//! payment call and feeds the resolution back through the reducer.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::YearMonth;
//! use card_form::{FieldId, FormEvent, FormState, PaymentForm, SimulatedGateway};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut form = PaymentForm::new().with_today(YearMonth::new(26, 8));
//!
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
//! let gateway = SimulatedGateway::approving();
//! form.submit(&gateway).await;
//! assert_eq!(*form.state(), FormState::Succeeded);
//! # }
//! ```

use crate::brand::CardBrand;
use crate::detect::detect_brand;
use crate::error::{FieldError, TransportError};
use crate::expiry::YearMonth;
use crate::field::FieldId;
use crate::format::{format_card_number, format_cvc, format_expiration};
use crate::payment::{PaymentClient, PaymentOutcome, PaymentStatus};
use crate::token::{CardFields, PaymentToken, Tokenizer, UuidTokenizer};
use crate::validate::{validate_field, ValidationContext};
use std::fmt;
use tracing::{debug, info, warn};

/// Form-level error shown when submit finds at least one invalid field.
pub const FORM_ERROR_MESSAGE: &str = "Please complete all required fields correctly.";

/// Form-level error shown when the payment call faults at the transport
/// level.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Internal reason recorded in [`FormState::Failed`] for transport faults,
/// distinguishing them from backend-reported declines.
const NETWORK_ERROR_REASON: &str = "network error";

/// Where the form is in its submission lifecycle.
///
/// `Succeeded` and `Failed` are terminal for one submission attempt, but
/// the form stays editable: a later submit revalidates from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormState {
    /// Editable, nothing in flight.
    Idle,
    /// A payment call is in flight; new submits are ignored.
    Submitting,
    /// The last attempt's payment was approved.
    Succeeded,
    /// The last attempt failed, with the reason.
    Failed(String),
}

/// An inbound event from the host.
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// The user changed a field's text.
    Input {
        /// Which field changed.
        field: FieldId,
        /// The raw text as typed.
        text: String,
    },
    /// Focus left a field.
    Blur(FieldId),
    /// The user triggered submission.
    Submit,
    /// The in-flight payment call resolved.
    PaymentResolved(Result<PaymentOutcome, TransportError>),
}

/// An outbound display or dispatch instruction for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show (`Some`) or clear (`None`) a field's inline error.
    FieldError {
        /// The field whose error display changes.
        field: FieldId,
        /// The verdict to render, if any.
        error: Option<FieldError>,
    },
    /// Show (`Some`) or clear (`None`) the form-level error.
    FormError(Option<String>),
    /// Move input focus to this field.
    Focus(FieldId),
    /// Dispatch the payment call with this token.
    RequestPayment(PaymentToken),
    /// The payment was approved; the token reference is for the caller's
    /// record-keeping, not for redisplay.
    PaymentSucceeded(PaymentToken),
    /// The payment failed, with a human-readable reason.
    PaymentFailed(String),
}

/// The payment form state machine.
pub struct PaymentForm {
    values: [String; 4],
    errors: [Option<FieldError>; 4],
    form_error: Option<String>,
    state: FormState,
    in_flight: Option<PaymentToken>,
    tokenizer: Box<dyn Tokenizer>,
    /// Pinned "today" for expiry checks; `None` reads the system clock.
    today: Option<YearMonth>,
}

impl PaymentForm {
    /// Creates an empty form with the demo tokenizer.
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(UuidTokenizer))
    }

    /// Creates an empty form with a custom tokenizer (a production
    /// PCI-scope client, or a test double).
    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            values: std::array::from_fn(|_| String::new()),
            errors: [None, None, None, None],
            form_error: None,
            state: FormState::Idle,
            in_flight: None,
            tokenizer,
            today: None,
        }
    }

    /// Pins the date used for expiry comparison instead of reading the
    /// system clock.
    #[must_use]
    pub fn with_today(mut self, today: YearMonth) -> Self {
        self.today = Some(today);
        self
    }

    /// Returns a field's current display value.
    #[inline]
    pub fn value(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Returns a field's currently displayed verdict, if invalid.
    #[inline]
    pub fn field_error(&self, field: FieldId) -> Option<&FieldError> {
        self.errors[field.index()].as_ref()
    }

    /// Returns the current form-level error, if any.
    #[inline]
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Returns the current submission state.
    #[inline]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The card brand derived from the current card number.
    ///
    /// Always recomputed from the live value - a changed number can never
    /// show a stale brand.
    #[inline]
    pub fn brand(&self) -> CardBrand {
        detect_brand(self.value(FieldId::CardNumber))
    }

    /// Returns true while a payment call is in flight.
    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Clears all values, verdicts, and errors and returns to `Idle`.
    pub fn reset(&mut self) {
        self.values = std::array::from_fn(|_| String::new());
        self.errors = [None, None, None, None];
        self.form_error = None;
        self.state = FormState::Idle;
        self.in_flight = None;
    }

    /// Applies one event and returns the display/dispatch effects.
    ///
    /// This is the single mutation path for all form state.
    pub fn apply(&mut self, event: FormEvent) -> Vec<Effect> {
        match event {
            FormEvent::Input { field, text } => self.on_input(field, text),
            FormEvent::Blur(field) => self.on_blur(field),
            FormEvent::Submit => self.on_submit(),
            FormEvent::PaymentResolved(result) => self.on_payment_resolved(result),
        }
    }

    /// Runs a full submit: the synchronous validation pass, then - if all
    /// fields are valid - the payment call, feeding its resolution back
    /// through the reducer.
    ///
    /// Returns the concatenated effects of both halves. While a call is
    /// already in flight this is a no-op, so a double-click cannot
    /// dispatch two payments.
    pub async fn submit<C>(&mut self, client: &C) -> Vec<Effect>
    where
        C: PaymentClient + ?Sized,
    {
        let mut effects = self.apply(FormEvent::Submit);

        let token = effects.iter().find_map(|effect| match effect {
            Effect::RequestPayment(token) => Some(token.clone()),
            _ => None,
        });

        if let Some(token) = token {
            let result = client.charge(&token).await;
            effects.extend(self.apply(FormEvent::PaymentResolved(result)));
        }

        effects
    }

    fn today(&self) -> YearMonth {
        self.today.unwrap_or_else(YearMonth::now)
    }

    fn context(&self) -> ValidationContext {
        ValidationContext::new(self.brand(), self.today())
    }

    fn on_input(&mut self, field: FieldId, text: String) -> Vec<Effect> {
        let display = match field {
            FieldId::CardNumber => format_card_number(&text),
            FieldId::Expiration => format_expiration(&text),
            FieldId::Cvc => format_cvc(&text, self.brand()),
            FieldId::PostalCode => text,
        };
        self.values[field.index()] = display;

        // Optimistic clearing: hide the stale error while the user edits,
        // without re-validating mid-keystroke
        self.errors[field.index()] = None;
        vec![Effect::FieldError { field, error: None }]
    }

    fn on_blur(&mut self, field: FieldId) -> Vec<Effect> {
        let verdict = validate_field(field, self.value(field), &self.context()).err();
        debug!(field = %field, valid = verdict.is_none(), "field blurred");

        self.errors[field.index()] = verdict.clone();
        vec![Effect::FieldError {
            field,
            error: verdict,
        }]
    }

    fn on_submit(&mut self) -> Vec<Effect> {
        if self.state == FormState::Submitting {
            debug!("submit ignored: payment already in flight");
            return Vec::new();
        }

        let ctx = self.context();
        let mut effects = Vec::new();
        let mut first_invalid = None;

        for field in FieldId::ALL {
            let verdict = validate_field(field, self.value(field), &ctx).err();
            if verdict.is_some() && first_invalid.is_none() {
                first_invalid = Some(field);
            }
            self.errors[field.index()] = verdict.clone();
            effects.push(Effect::FieldError {
                field,
                error: verdict,
            });
        }

        if let Some(focus) = first_invalid {
            // Synchronous fail path: no state transition
            warn!(field = %focus, "submit blocked by invalid fields");
            self.form_error = Some(FORM_ERROR_MESSAGE.to_string());
            effects.push(Effect::FormError(self.form_error.clone()));
            effects.push(Effect::Focus(focus));
            return effects;
        }

        self.form_error = None;
        effects.push(Effect::FormError(None));

        let fields = CardFields::new(
            self.value(FieldId::CardNumber).trim(),
            self.value(FieldId::Expiration).trim(),
            self.value(FieldId::Cvc).trim(),
            self.value(FieldId::PostalCode).trim(),
        );
        let token = self.tokenizer.create_token(&fields);

        self.state = FormState::Submitting;
        self.in_flight = Some(token.clone());
        debug!(%token, "all fields valid, dispatching payment");
        effects.push(Effect::RequestPayment(token));
        effects
    }

    fn on_payment_resolved(
        &mut self,
        result: Result<PaymentOutcome, TransportError>,
    ) -> Vec<Effect> {
        if self.state != FormState::Submitting {
            warn!("payment resolution ignored: no payment in flight");
            return Vec::new();
        }
        let token = self.in_flight.take();

        match result {
            Ok(outcome) => match outcome.status {
                PaymentStatus::Approved => {
                    info!("payment approved");
                    self.state = FormState::Succeeded;
                    match token {
                        Some(token) => vec![Effect::PaymentSucceeded(token)],
                        None => Vec::new(),
                    }
                }
                PaymentStatus::Declined => {
                    warn!(message = %outcome.message, "payment declined");
                    self.state = FormState::Failed(outcome.message.clone());
                    self.form_error = Some(outcome.message.clone());
                    vec![
                        Effect::FormError(Some(outcome.message.clone())),
                        Effect::PaymentFailed(outcome.message),
                    ]
                }
            },
            Err(fault) => {
                warn!(error = %fault, "payment transport fault");
                self.state = FormState::Failed(NETWORK_ERROR_REASON.to_string());
                self.form_error = Some(NETWORK_ERROR_MESSAGE.to_string());
                vec![
                    Effect::FormError(Some(NETWORK_ERROR_MESSAGE.to_string())),
                    Effect::PaymentFailed(NETWORK_ERROR_MESSAGE.to_string()),
                ]
            }
        }
    }
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PaymentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field values are card data; keep them out of Debug
        f.debug_struct("PaymentForm")
            .field("state", &self.state)
            .field("form_error", &self.form_error)
            .field("brand", &self.brand())
            .finish_non_exhaustive()
    }
}
