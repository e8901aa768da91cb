//! End-to-end tests for the payment form state machine.
//!
//! These drive the form the way a host UI would: input events per
//! keystroke batch, blur per field, submit, and payment resolution
//! through the simulated gateway.

use card_form::expiry::YearMonth;
use card_form::{
    detect_brand, validate_field, CardBrand, Effect, FieldError, FieldId, FormEvent, FormState,
    PaymentForm, SimulatedGateway, ValidationContext, FORM_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE,
};

// Processor test numbers
const VISA: &str = "4242424242424242";
const VISA_BAD_CHECKSUM: &str = "4242424242424241";
const AMEX: &str = "378282246310005";

fn today() -> YearMonth {
    YearMonth::new(26, 8)
}

fn input(form: &mut PaymentForm, field: FieldId, text: &str) {
    form.apply(FormEvent::Input {
        field,
        text: text.to_string(),
    });
}

fn valid_form() -> PaymentForm {
    let mut form = PaymentForm::new().with_today(today());
    input(&mut form, FieldId::CardNumber, VISA);
    input(&mut form, FieldId::Expiration, "1230");
    input(&mut form, FieldId::Cvc, "123");
    input(&mut form, FieldId::PostalCode, "90210");
    form
}

fn success_notifications(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::PaymentSucceeded(_)))
        .count()
}

// =============================================================================
// VALIDATION PROPERTIES
// =============================================================================

#[test]
fn test_luhn_vectors() {
    let ctx = ValidationContext::new(CardBrand::Visa, today());
    assert!(validate_field(FieldId::CardNumber, VISA, &ctx).is_ok());
    assert_eq!(
        validate_field(FieldId::CardNumber, VISA_BAD_CHECKSUM, &ctx),
        Err(FieldError::CardChecksum)
    );
}

#[test]
fn test_formatter_never_rejects_validator_does() {
    // "13" formats as-is; the verdict comes from the validator
    assert_eq!(card_form::format::format_expiration("13"), "13");

    let mut form = PaymentForm::new().with_today(today());
    input(&mut form, FieldId::CardNumber, VISA);
    input(&mut form, FieldId::Expiration, "13");
    input(&mut form, FieldId::Cvc, "123");
    input(&mut form, FieldId::PostalCode, "90210");

    form.apply(FormEvent::Submit);
    assert_eq!(
        form.field_error(FieldId::Expiration),
        Some(&FieldError::ExpirationFormat)
    );
}

#[test]
fn test_cvc_verdict_depends_on_brand() {
    let amex = ValidationContext::new(CardBrand::Amex, today());
    let visa = ValidationContext::new(CardBrand::Visa, today());
    assert!(validate_field(FieldId::Cvc, "1234", &amex).is_ok());
    assert_eq!(
        validate_field(FieldId::Cvc, "1234", &visa),
        Err(FieldError::CvcLength { expected: 3 })
    );
}

#[test]
fn test_amex_card_number_drives_cvc_formatting() {
    let mut form = PaymentForm::new().with_today(today());
    input(&mut form, FieldId::CardNumber, AMEX);
    assert_eq!(form.brand(), CardBrand::Amex);

    input(&mut form, FieldId::Cvc, "98765");
    assert_eq!(form.value(FieldId::Cvc), "9876");

    form.apply(FormEvent::Blur(FieldId::Cvc));
    assert!(form.field_error(FieldId::Cvc).is_none());
}

// =============================================================================
// SUBMIT: SYNCHRONOUS FAIL PATH
// =============================================================================

#[test]
fn test_first_invalid_field_receives_focus() {
    // Card number empty; expiration "12/99" reads as 2099 and is fine;
    // CVC and postal valid. Focus lands on the card field.
    let mut form = PaymentForm::new().with_today(today());
    input(&mut form, FieldId::Expiration, "1299");
    input(&mut form, FieldId::Cvc, "123");
    input(&mut form, FieldId::PostalCode, "A1A");

    let effects = form.apply(FormEvent::Submit);
    assert!(effects.contains(&Effect::Focus(FieldId::CardNumber)));
    assert!(effects.contains(&Effect::FormError(Some(FORM_ERROR_MESSAGE.to_string()))));
    assert_eq!(
        form.field_error(FieldId::CardNumber),
        Some(&FieldError::Required(FieldId::CardNumber))
    );
    assert!(form.field_error(FieldId::Expiration).is_none());
}

#[test]
fn test_all_invalid_fields_get_errors_focus_goes_to_first() {
    let mut form = PaymentForm::new().with_today(today());
    // Every field invalid
    input(&mut form, FieldId::Expiration, "1220");
    input(&mut form, FieldId::Cvc, "1");
    input(&mut form, FieldId::PostalCode, "A");

    let effects = form.apply(FormEvent::Submit);

    let focused: Vec<_> = effects
        .iter()
        .filter(|e| matches!(e, Effect::Focus(_)))
        .collect();
    assert_eq!(focused, vec![&Effect::Focus(FieldId::CardNumber)]);

    assert!(form.field_error(FieldId::CardNumber).is_some());
    assert_eq!(form.field_error(FieldId::Expiration), Some(&FieldError::Expired));
    assert_eq!(
        form.field_error(FieldId::Cvc),
        Some(&FieldError::CvcLength { expected: 3 })
    );
    assert_eq!(
        form.field_error(FieldId::PostalCode),
        Some(&FieldError::PostalTooShort)
    );
}

#[test]
fn test_failed_submit_never_dispatches_payment() {
    let mut form = PaymentForm::new().with_today(today());
    let effects = form.apply(FormEvent::Submit);
    assert!(!effects
        .iter()
        .any(|e| matches!(e, Effect::RequestPayment(_))));
    assert_eq!(*form.state(), FormState::Idle);
}

// =============================================================================
// SUBMIT: ASYNC RESOLUTION PATHS
// =============================================================================

#[tokio::test]
async fn test_end_to_end_success() {
    let mut form = valid_form();
    let gateway = SimulatedGateway::approving();

    let effects = form.submit(&gateway).await;

    assert_eq!(*form.state(), FormState::Succeeded);
    assert_eq!(success_notifications(&effects), 1);
    assert!(form.form_error().is_none());
    assert_eq!(gateway.charge_count(), 1);
}

#[tokio::test]
async fn test_end_to_end_decline_surfaces_exact_message() {
    let mut form = valid_form();
    let gateway = SimulatedGateway::declining("Payment failed. Please try again.");

    let effects = form.submit(&gateway).await;

    assert_eq!(
        *form.state(),
        FormState::Failed("Payment failed. Please try again.".to_string())
    );
    assert_eq!(form.form_error(), Some("Payment failed. Please try again."));
    assert!(effects.contains(&Effect::PaymentFailed(
        "Payment failed. Please try again.".to_string()
    )));
    assert_eq!(success_notifications(&effects), 0);
}

#[tokio::test]
async fn test_end_to_end_transport_fault() {
    let mut form = valid_form();
    let gateway = SimulatedGateway::failing("connection refused");

    let effects = form.submit(&gateway).await;

    assert_eq!(*form.state(), FormState::Failed("network error".to_string()));
    assert_eq!(form.form_error(), Some(NETWORK_ERROR_MESSAGE));
    assert!(effects.contains(&Effect::PaymentFailed(NETWORK_ERROR_MESSAGE.to_string())));
}

#[tokio::test]
async fn test_submit_while_submitting_is_a_noop() {
    let mut form = valid_form();
    let gateway = SimulatedGateway::approving();

    // Enter Submitting without resolving
    form.apply(FormEvent::Submit);
    assert!(form.is_submitting());

    // A second trigger must not dispatch another payment
    let effects = form.submit(&gateway).await;
    assert!(effects.is_empty());
    assert_eq!(gateway.charge_count(), 0);
    assert!(form.is_submitting());
}

#[tokio::test]
async fn test_retry_after_decline_revalidates_and_succeeds() {
    let mut form = valid_form();

    let declining = SimulatedGateway::declining("Payment failed. Please try again.");
    form.submit(&declining).await;
    assert!(matches!(form.state(), FormState::Failed(_)));

    // The form stays editable; a retry runs the whole flow again
    let approving = SimulatedGateway::approving();
    let effects = form.submit(&approving).await;
    assert_eq!(*form.state(), FormState::Succeeded);
    assert_eq!(success_notifications(&effects), 1);
    assert_eq!(approving.charge_count(), 1);
}

#[tokio::test]
async fn test_tokens_differ_across_attempts() {
    let mut form = valid_form();

    let declining = SimulatedGateway::declining("declined");
    let first = form.submit(&declining).await;
    let second = form.submit(&declining).await;

    let token_of = |effects: &[Effect]| {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::RequestPayment(t) => Some(t.clone()),
                _ => None,
            })
            .expect("valid submit dispatches a payment")
    };
    assert_ne!(token_of(&first), token_of(&second));
}

// =============================================================================
// BLUR / INPUT INTERACTION
// =============================================================================

#[test]
fn test_blur_then_input_clears_error_optimistically() {
    let mut form = PaymentForm::new().with_today(today());

    form.apply(FormEvent::Blur(FieldId::PostalCode));
    assert_eq!(
        form.field_error(FieldId::PostalCode),
        Some(&FieldError::Required(FieldId::PostalCode))
    );

    // Typing one character clears the displayed error without judging
    // the still-too-short value
    input(&mut form, FieldId::PostalCode, "9");
    assert!(form.field_error(FieldId::PostalCode).is_none());
}

#[test]
fn test_brand_recomputed_not_persisted() {
    let mut form = PaymentForm::new().with_today(today());
    input(&mut form, FieldId::CardNumber, VISA);
    assert_eq!(form.brand(), CardBrand::Visa);
    assert_eq!(detect_brand(form.value(FieldId::CardNumber)), form.brand());

    input(&mut form, FieldId::CardNumber, AMEX);
    assert_eq!(form.brand(), CardBrand::Amex);
}

#[tokio::test]
async fn test_reset_returns_to_pristine_state() {
    let mut form = valid_form();
    let gateway = SimulatedGateway::declining("declined");
    form.submit(&gateway).await;

    form.reset();
    assert_eq!(*form.state(), FormState::Idle);
    assert_eq!(form.brand(), CardBrand::Unknown);
    for field in FieldId::ALL {
        assert_eq!(form.value(field), "");
        assert!(form.field_error(field).is_none());
    }
}
