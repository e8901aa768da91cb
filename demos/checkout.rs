//! End-to-end demo of the payment form core.
//!
//! Run with: `cargo run --example checkout`

use card_form::{
    Effect, FieldId, FormEvent, FormState, PaymentForm, SimulatedGateway,
};

fn show_effects(effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::FieldError {
                field,
                error: Some(error),
            } => println!("  [{}] {}", field, error),
            Effect::FieldError { .. } => {}
            Effect::FormError(Some(message)) => println!("  [form] {}", message),
            Effect::FormError(None) => {}
            Effect::Focus(field) => println!("  focus -> {}", field),
            Effect::RequestPayment(token) => println!("  dispatching payment ({})", token),
            Effect::PaymentSucceeded(token) => println!("  payment succeeded ({})", token),
            Effect::PaymentFailed(reason) => println!("  payment failed: {}", reason),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "card_form=debug".into()),
        )
        .init();

    let mut form = PaymentForm::new();

    println!("=== Payment Form Demo ===\n");

    // The user types a card number; the form normalizes the display
    form.apply(FormEvent::Input {
        field: FieldId::CardNumber,
        text: "4242424242424242".into(),
    });
    println!(
        "Card number displays as: {} ({} {})",
        form.value(FieldId::CardNumber),
        form.brand().icon(),
        form.brand(),
    );

    // Submitting with the other fields empty fails synchronously
    println!("\nSubmitting with missing fields:");
    let effects = form.apply(FormEvent::Submit);
    show_effects(&effects);

    // Fill in the rest
    for (field, text) in [
        (FieldId::Expiration, "1230"),
        (FieldId::Cvc, "123"),
        (FieldId::PostalCode, "90210"),
    ] {
        form.apply(FormEvent::Input {
            field,
            text: text.into(),
        });
    }

    // A declining backend surfaces its message as a form-level error
    println!("\nSubmitting against a declining gateway:");
    let declining = SimulatedGateway::declining("Payment failed. Please try again.");
    let effects = form.submit(&declining).await;
    show_effects(&effects);

    // Retrying against an approving backend succeeds
    println!("\nRetrying against an approving gateway:");
    let approving = SimulatedGateway::approving();
    let effects = form.submit(&approving).await;
    show_effects(&effects);

    match form.state() {
        FormState::Succeeded => println!("\nFinal state: succeeded"),
        state => println!("\nFinal state: {:?}", state),
    }
}
