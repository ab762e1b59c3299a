//! Driven port for the hosted checkout UI.
//!
//! Opening the checkout hands the order to the payer and resolves once the
//! gateway reports the signed payment identifiers, or the payer gives up.

use async_trait::async_trait;

use super::{CheckoutOrder, define_port_error};

/// Everything the checkout needs to render an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOptions {
    /// Public merchant key.
    pub key: String,
    /// Order created by the backend.
    pub order: CheckoutOrder,
    /// Merchant name shown to the payer.
    pub name: String,
    /// Purchase description.
    pub description: String,
    /// Accent colour, e.g. `#f59e0b`.
    pub theme_color: String,
}

/// Identifiers the gateway hands back after a successful payment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckoutCallback {
    /// Gateway payment identifier.
    pub payment_id: String,
    /// Gateway order identifier.
    pub order_id: String,
    /// Gateway signature.
    pub signature: String,
}

define_port_error! {
    /// Errors raised while the checkout is open.
    pub enum CheckoutError {
        /// The payer closed the checkout without paying.
        Cancelled => "checkout cancelled by payer",
        /// The gateway reported a failed payment.
        Failed { message: String } => "checkout failed: {message}",
        /// The checkout could not be driven at all.
        Unavailable { message: String } => "checkout unavailable: {message}",
        /// No callback arrived within the allowed time.
        TimedOut { seconds: u64 } => "checkout timed out after {seconds}s",
    }
}

/// Port for presenting a checkout and collecting its callback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Present the checkout and wait for the payer.
    async fn open(&self, options: &CheckoutOptions) -> Result<CheckoutCallback, CheckoutError>;
}
