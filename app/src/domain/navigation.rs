//! Screen routes the domain services hand back to the front end.

use serde::{Deserialize, Serialize};

use super::{Category, DomainError, Vendor};

/// Destination screen after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Sign-in screen.
    Login,
    /// Registration wizard.
    Register,
    /// Signed-in home screen.
    Dashboard,
    /// Registration fee payment, carrying the freshly registered vendor.
    Payment(PaymentRouteParams),
}

/// Parameters passed to the payment screen.
///
/// Both values travel as JSON strings, so the payment screen can be opened
/// from any surface that only carries text (deep links, command arguments).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRouteParams {
    /// Vendor record as JSON.
    pub vendor: String,
    /// Category list as JSON; the first entry is the one being paid for.
    pub category: String,
}

impl PaymentRouteParams {
    /// Encode the registered vendor and the category list.
    pub fn encode(vendor: &Vendor, categories: &[Category]) -> Result<Self, DomainError> {
        let vendor = serde_json::to_string(vendor)
            .map_err(|err| DomainError::internal(format!("failed to encode vendor: {err}")))?;
        let category = serde_json::to_string(categories)
            .map_err(|err| DomainError::internal(format!("failed to encode categories: {err}")))?;
        Ok(Self { vendor, category })
    }

    /// Decode the vendor and category list.
    pub fn decode(&self) -> Result<(Vendor, Vec<Category>), DomainError> {
        let vendor = serde_json::from_str(&self.vendor)
            .map_err(|err| DomainError::invalid_request(format!("Invalid vendor data: {err}")))?;
        let categories = serde_json::from_str(&self.category)
            .map_err(|err| DomainError::invalid_request(format!("Invalid category data: {err}")))?;
        Ok((vendor, categories))
    }
}
