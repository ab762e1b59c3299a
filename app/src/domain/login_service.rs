//! Sign-in screen.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::{SessionStorage, VendorApi};
use super::{DomainError, LoginCredentials, Route, SessionStore};

const LOGIN_FAILED: &str = "Invalid email or password";

/// Signs the vendor in and opens the session.
pub struct LoginService<V, S> {
    vendors: Arc<V>,
    session: Arc<SessionStore<S>>,
}

impl<V, S> LoginService<V, S> {
    /// Create the service.
    pub fn new(vendors: Arc<V>, session: Arc<SessionStore<S>>) -> Self {
        Self { vendors, session }
    }
}

impl<V, S> LoginService<V, S>
where
    V: VendorApi,
    S: SessionStorage,
{
    /// Validate the form, sign in, and store the vendor.
    pub async fn login(&self, email: &str, password: &str) -> Result<Route, DomainError> {
        let credentials = LoginCredentials::try_from_parts(email, password)
            .map_err(|err| DomainError::invalid_request(err.to_string()))?;
        let vendor = self.vendors.login(&credentials).await.map_err(|err| {
            warn!(error = %err, "vendor login failed");
            err.into_domain(LOGIN_FAILED)
        })?;
        info!(vendor_id = %vendor.id, "vendor signed in");
        self.session.set_vendor(Some(vendor)).await?;
        Ok(Route::Dashboard)
    }
}
