//! Driven port for the hosted-checkout payment endpoints.
//!
//! The backend creates a gateway order for an amount, and later verifies the
//! signed callback the checkout produced. The client never sees the gateway
//! secret.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::domain::RecordId;

/// Gateway order created by the capture endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOrder {
    /// Gateway order identifier.
    pub id: String,
    /// Amount in the currency's minor unit, as the gateway reports it.
    pub amount: u64,
    /// ISO currency code.
    pub currency: String,
}

/// Body of the verification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentVerification {
    /// Gateway payment identifier.
    pub razorpay_payment_id: String,
    /// Gateway order identifier.
    pub razorpay_order_id: String,
    /// Gateway signature over order and payment ids.
    pub razorpay_signature: String,
    /// Paying vendor.
    #[serde(rename = "vendorId")]
    pub vendor_id: RecordId,
    /// Category being activated.
    #[serde(rename = "categoryId")]
    pub category_id: RecordId,
    /// Always `prepaid` for checkout payments.
    #[serde(rename = "paymentMode")]
    pub payment_mode: &'static str,
}

/// Port for the backend's payment gateway bridge.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentApi: Send + Sync {
    /// Create a gateway order for `amount` rupees. `None` when the backend
    /// answered without an order.
    async fn capture_payment(&self, amount: f64) -> Result<Option<CheckoutOrder>, ApiError>;

    /// Verify a checkout callback. `true` when the backend accepted it.
    async fn verify_payment(&self, verification: &PaymentVerification) -> Result<bool, ApiError>;
}
