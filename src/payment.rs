//! The external payment call contract.
//!
//! The form hands the payment backend nothing but an opaque
//! [`PaymentToken`](crate::PaymentToken). The call resolves to a
//! structured [`PaymentOutcome`] (approved or declined, with a message) or
//! fails at the transport level with a [`TransportError`] and no
//! structured payload. The form treats both non-success paths as errors,
//! but keeps them distinguishable.
//!
//! [`SimulatedGateway`] is a deterministic in-process stand-in for demos
//! and tests; real deployments implement [`PaymentClient`] over their
//! actual transport.

use crate::error::TransportError;
use crate::token::PaymentToken;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Terminal status reported by the payment backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaymentStatus {
    /// The payment went through.
    Approved,
    /// The backend refused the payment.
    Declined,
}

/// A structured resolution from the payment backend.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaymentOutcome {
    /// Whether the backend approved or declined.
    pub status: PaymentStatus,
    /// Backend-supplied human-readable message.
    pub message: String,
}

impl PaymentOutcome {
    /// An approved outcome with the given message.
    pub fn approved(message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Approved,
            message: message.into(),
        }
    }

    /// A declined outcome with the given message.
    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Declined,
            message: message.into(),
        }
    }
}

/// Asynchronous payment backend.
///
/// Implementations receive only the opaque token; the raw card data never
/// reaches this trait. The form guarantees at most one in-flight `charge`
/// per form instance.
#[async_trait]
pub trait PaymentClient: Send + Sync {
    /// Charges the payment represented by `token`.
    ///
    /// Resolves to a structured outcome, or fails with a transport fault
    /// if the call itself could not complete.
    async fn charge(&self, token: &PaymentToken) -> Result<PaymentOutcome, TransportError>;
}

#[derive(Debug, Clone)]
enum Resolution {
    Approve,
    Decline(String),
    Fail(String),
}

/// Deterministic in-process payment backend for demos and tests.
///
/// Each instance resolves every charge the same way, so a test can drive
/// the exact path it wants; `charge_count` exposes how many calls were
/// made, which the no-duplicate-submission tests rely on.
///
/// # Example
///
/// ```
/// use card_form::{PaymentClient, PaymentStatus, PaymentToken, SimulatedGateway};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let gateway = SimulatedGateway::approving();
/// let token = PaymentToken::new("tok_demo");
/// let outcome = gateway.charge(&token).await.unwrap();
/// assert_eq!(outcome.status, PaymentStatus::Approved);
/// assert_eq!(gateway.charge_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    resolution: Resolution,
    calls: Arc<AtomicUsize>,
}

impl SimulatedGateway {
    fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A gateway that approves every charge.
    pub fn approving() -> Self {
        Self::new(Resolution::Approve)
    }

    /// A gateway that declines every charge with the given message.
    pub fn declining(message: impl Into<String>) -> Self {
        Self::new(Resolution::Decline(message.into()))
    }

    /// A gateway whose transport fails on every charge.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(Resolution::Fail(message.into()))
    }

    /// Number of `charge` calls made against this gateway (shared across
    /// clones).
    pub fn charge_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentClient for SimulatedGateway {
    async fn charge(&self, token: &PaymentToken) -> Result<PaymentOutcome, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Token renders masked; the raw value stays out of the logs
        debug!(%token, "simulated gateway charging");

        match &self.resolution {
            Resolution::Approve => Ok(PaymentOutcome::approved("Payment processed successfully!")),
            Resolution::Decline(message) => Ok(PaymentOutcome::declined(message.clone())),
            Resolution::Fail(message) => Err(TransportError::new(message.clone())),
        }
    }
}
