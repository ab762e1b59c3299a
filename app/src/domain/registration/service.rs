//! Registration service: loads the category picker and submits the
//! completed wizard.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use super::{RegistrationPayload, RegistrationWizard, StepOutcome, WizardError, WizardStep};
use crate::domain::ports::{CategoryApi, SessionStorage, VendorApi};
use crate::domain::{Category, DomainError, PaymentRouteParams, Route, SessionStore};

/// Message shown when the backend rejects a registration without saying why.
pub const REGISTRATION_FAILED: &str = "Registration failed";

const CATEGORIES_FAILED: &str = "Failed to load categories. Please try again.";

/// What happened after the vendor pressed "next".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardProgress {
    /// The wizard moved to another step.
    Moved(WizardStep),
    /// Registration succeeded; go here next.
    Registered(Route),
}

fn wizard_error(error: &WizardError) -> DomainError {
    DomainError::invalid_request(error.to_string()).with_details(json!({
        "step": error.step().title(),
        "missingFields": error.missing_fields(),
    }))
}

/// Drives registration against the vendor and category ports, signing the
/// new vendor in once the backend accepts them.
pub struct RegistrationService<V, C, S> {
    vendors: Arc<V>,
    categories: Arc<C>,
    session: Arc<SessionStore<S>>,
}

impl<V, C, S> RegistrationService<V, C, S> {
    /// Create the service.
    pub fn new(vendors: Arc<V>, categories: Arc<C>, session: Arc<SessionStore<S>>) -> Self {
        Self {
            vendors,
            categories,
            session,
        }
    }
}

impl<V, C, S> RegistrationService<V, C, S>
where
    V: VendorApi,
    C: CategoryApi,
    S: SessionStorage,
{
    /// Categories offered in the picker.
    pub async fn load_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.categories.list_categories().await.map_err(|err| {
            warn!(error = %err, "loading registration categories failed");
            err.into_domain(CATEGORIES_FAILED)
        })
    }

    /// Validate the current step and move on, registering the vendor when
    /// the last step passes.
    ///
    /// On failure the wizard keeps its step, so a rejected registration
    /// leaves the vendor on the credentials step to try again.
    pub async fn next(
        &self,
        wizard: &mut RegistrationWizard,
        categories: &[Category],
    ) -> Result<WizardProgress, DomainError> {
        match wizard.advance().map_err(|err| wizard_error(&err))? {
            StepOutcome::Moved(step) => Ok(WizardProgress::Moved(step)),
            StepOutcome::Submit(payload) => {
                let route = self.submit(&payload, categories).await?;
                Ok(WizardProgress::Registered(route))
            }
        }
    }

    /// Send one registration request, store the new vendor in the session,
    /// and route to payment.
    pub async fn submit(
        &self,
        payload: &RegistrationPayload,
        categories: &[Category],
    ) -> Result<Route, DomainError> {
        let vendor = self.vendors.register(payload).await.map_err(|err| {
            warn!(error = %err, "vendor registration failed");
            err.into_domain(REGISTRATION_FAILED)
        })?;
        info!(vendor_id = %vendor.id, "vendor registered");
        let params = PaymentRouteParams::encode(&vendor, categories)?;
        self.session.set_vendor(Some(vendor)).await?;
        Ok(Route::Payment(params))
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
