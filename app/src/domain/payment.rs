//! Registration fee payment.
//!
//! The vendor pays for the first category handed over by registration,
//! either in cash (settled offline and approved by an administrator) or
//! through the hosted checkout, whose callback the backend verifies.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::ports::{
    CategoryApi, CheckoutCallback, CheckoutError, CheckoutGateway, CheckoutOptions, PaymentApi,
    PaymentVerification,
};
use super::{
    Category, CategoryPurchase, DomainError, PaymentMethod, PaymentRouteParams, RecordId, Route,
    Vendor,
};

/// How long the confirmation stays up before returning to login.
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(2500);

/// Name shown when the category has none.
pub const FALLBACK_CATEGORY_NAME: &str = "Service Category";

/// Purchase description shown in the checkout.
pub const CHECKOUT_DESCRIPTION: &str = "Purchase Category";

const PREPAID: &str = "prepaid";

/// How the vendor chose to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentChoice {
    /// Pay in person.
    Cash,
    /// Pay online through the hosted checkout.
    Upi,
}

impl fmt::Display for PaymentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cash => "cash",
            Self::Upi => "upi",
        })
    }
}

/// Error for text that names no payment choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentChoice(String);

impl FromStr for PaymentChoice {
    type Err = UnknownPaymentChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "upi" | "online" => Ok(Self::Upi),
            _ => Err(UnknownPaymentChoice(value.to_owned())),
        }
    }
}

/// What the payment screen shows: who pays, for what, and how much.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSummary {
    /// Paying vendor.
    pub vendor: Vendor,
    /// Category being purchased.
    pub category_id: RecordId,
    /// Category display name.
    pub category_name: String,
    /// Fee in rupees; never zero.
    pub fee: f64,
}

impl PaymentSummary {
    /// Build the summary from the registration hand-off.
    pub fn from_params(params: &PaymentRouteParams) -> Result<Self, DomainError> {
        let (vendor, categories) = params.decode()?;
        Self::new(vendor, &categories)
    }

    /// Build the summary for `vendor` paying for the first of `categories`.
    pub fn new(vendor: Vendor, categories: &[Category]) -> Result<Self, DomainError> {
        let category = categories
            .first()
            .ok_or_else(|| DomainError::invalid_request("Invalid vendor or category data"))?;
        let category_name = if category.name.trim().is_empty() {
            FALLBACK_CATEGORY_NAME.to_owned()
        } else {
            category.name.clone()
        };
        let fee = if category.price > 0.0 { category.price } else { 1.0 };
        Ok(Self {
            vendor,
            category_id: category.id.clone(),
            category_name,
            fee,
        })
    }

    /// Business name shown on the summary card.
    pub fn business_name(&self) -> &str {
        self.vendor
            .business_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("N/A")
    }
}

/// How the payment ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Cash request recorded; the vendor can log in once an administrator
    /// approves it.
    AwaitingApproval {
        /// Screen to show after acknowledging.
        next: Route,
    },
    /// Online payment verified and the category is active.
    Activated {
        /// How long to show the confirmation.
        redirect_after: Duration,
        /// Screen to show afterwards.
        next: Route,
    },
}

/// Merchant settings for the hosted checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    /// Public merchant key.
    pub key: String,
    /// Merchant name shown to the payer.
    pub merchant_name: String,
    /// Accent colour.
    pub theme_color: String,
    /// Longest wait for the checkout callback.
    pub timeout: Duration,
}

fn map_checkout_error(error: CheckoutError) -> DomainError {
    match error {
        CheckoutError::Cancelled => DomainError::invalid_request("Payment was cancelled"),
        CheckoutError::Failed { message } if !message.trim().is_empty() => {
            DomainError::invalid_request(message)
        }
        CheckoutError::Failed { .. } => DomainError::invalid_request("UPI payment failed"),
        CheckoutError::Unavailable { .. } => DomainError::service_unavailable("UPI payment failed"),
        CheckoutError::TimedOut { seconds } => DomainError::service_unavailable(format!(
            "No payment confirmation received within {seconds} seconds"
        )),
    }
}

/// Settles the registration fee.
#[derive(Clone)]
pub struct PaymentService<P, C, G> {
    payments: Arc<P>,
    categories: Arc<C>,
    checkout: Arc<G>,
    settings: CheckoutSettings,
}

impl<P, C, G> PaymentService<P, C, G> {
    /// Create the service.
    pub fn new(
        payments: Arc<P>,
        categories: Arc<C>,
        checkout: Arc<G>,
        settings: CheckoutSettings,
    ) -> Self {
        Self {
            payments,
            categories,
            checkout,
            settings,
        }
    }
}

impl<P, C, G> PaymentService<P, C, G>
where
    P: PaymentApi,
    C: CategoryApi,
    G: CheckoutGateway,
{
    /// Pay for `summary` with the chosen method.
    pub async fn pay(
        &self,
        summary: &PaymentSummary,
        choice: Option<PaymentChoice>,
    ) -> Result<PaymentOutcome, DomainError> {
        let choice = choice
            .ok_or_else(|| DomainError::invalid_request("Please choose how you want to pay"))?;
        debug!(vendor_id = %summary.vendor.id, method = %choice, "paying registration fee");
        match choice {
            PaymentChoice::Cash => self.pay_cash(summary).await,
            PaymentChoice::Upi => self.pay_online(summary).await,
        }
    }

    async fn pay_cash(&self, summary: &PaymentSummary) -> Result<PaymentOutcome, DomainError> {
        let purchase = CategoryPurchase {
            vendor_id: summary.vendor.id.clone(),
            category_id: summary.category_id.clone(),
            payment_method: PaymentMethod::Cash,
            amount: None,
        };
        self.categories
            .purchase_category(&purchase)
            .await
            .map_err(|err| {
                warn!(error = %err, "cash payment request failed");
                err.into_domain("Failed to submit cash payment request")
            })?;
        info!(vendor_id = %summary.vendor.id, "cash payment awaiting approval");
        Ok(PaymentOutcome::AwaitingApproval { next: Route::Login })
    }

    async fn pay_online(&self, summary: &PaymentSummary) -> Result<PaymentOutcome, DomainError> {
        let order = self
            .payments
            .capture_payment(summary.fee)
            .await
            .map_err(|err| {
                warn!(error = %err, "creating checkout order failed");
                err.into_domain("Failed to initiate payment")
            })?
            .ok_or_else(|| DomainError::service_unavailable("Failed to initiate payment"))?;

        let options = CheckoutOptions {
            key: self.settings.key.clone(),
            order,
            name: self.settings.merchant_name.clone(),
            description: CHECKOUT_DESCRIPTION.to_owned(),
            theme_color: self.settings.theme_color.clone(),
        };
        let callback = self.await_checkout(&options).await.map_err(|err| {
            warn!(error = %err, order_id = %options.order.id, "checkout did not complete");
            map_checkout_error(err)
        })?;

        let verification = PaymentVerification {
            razorpay_payment_id: callback.payment_id,
            razorpay_order_id: callback.order_id,
            razorpay_signature: callback.signature,
            vendor_id: summary.vendor.id.clone(),
            category_id: summary.category_id.clone(),
            payment_mode: PREPAID,
        };
        let verified = self
            .payments
            .verify_payment(&verification)
            .await
            .map_err(|err| {
                warn!(error = %err, "payment verification request failed");
                err.into_domain("Payment verification error")
            })?;
        if !verified {
            return Err(DomainError::invalid_request("Payment verification failed"));
        }

        info!(vendor_id = %summary.vendor.id, "online payment verified");
        Ok(PaymentOutcome::Activated {
            redirect_after: CONFIRMATION_DELAY,
            next: Route::Login,
        })
    }

    async fn await_checkout(
        &self,
        options: &CheckoutOptions,
    ) -> Result<CheckoutCallback, CheckoutError> {
        let timeout = self.settings.timeout;
        tokio::time::timeout(timeout, self.checkout.open(options))
            .await
            .map_err(|_| CheckoutError::timed_out(timeout.as_secs()))?
    }
}

#[cfg(test)]
#[path = "payment_tests.rs"]
mod tests;
