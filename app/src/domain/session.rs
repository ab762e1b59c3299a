//! Authenticated vendor session.
//!
//! A single slot holds the signed-in vendor. Storage is written before the
//! in-memory slot changes, so a failed write leaves the session as it was.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::ports::{SessionStorage, SessionStorageError};
use super::{DomainError, Route, Vendor};

/// Storage key holding the vendor JSON.
pub const VENDOR_KEY: &str = "vendor";

fn map_storage_error(error: SessionStorageError) -> DomainError {
    DomainError::internal(format!("session storage failed: {error}"))
}

/// Session store backed by a [`SessionStorage`] adapter.
pub struct SessionStore<S> {
    storage: Arc<S>,
    vendor: RwLock<Option<Vendor>>,
}

impl<S> SessionStore<S> {
    /// Create an empty, signed-out session over `storage`.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            vendor: RwLock::new(None),
        }
    }
}

impl<S> SessionStore<S>
where
    S: SessionStorage,
{
    /// Replace the signed-in vendor. `None` signs out.
    pub async fn set_vendor(&self, vendor: Option<Vendor>) -> Result<(), DomainError> {
        match vendor {
            Some(vendor) => {
                let encoded = serde_json::to_string(&vendor).map_err(|err| {
                    DomainError::internal(format!("failed to encode vendor: {err}"))
                })?;
                self.storage
                    .set_item(VENDOR_KEY, &encoded)
                    .await
                    .map_err(map_storage_error)?;
                debug!(vendor_id = %vendor.id, "session vendor stored");
                *self.vendor.write().await = Some(vendor);
            }
            None => self.clear().await?,
        }
        Ok(())
    }

    /// Sign out and return the screen to show next.
    pub async fn logout(&self) -> Result<Route, DomainError> {
        self.clear().await?;
        Ok(Route::Login)
    }

    /// Rehydrate the session from storage and return the launch screen.
    ///
    /// A stored value that is not a vendor record is removed and the session
    /// starts signed out.
    pub async fn load_vendor(&self) -> Result<Route, DomainError> {
        let Some(stored) = self
            .storage
            .get_item(VENDOR_KEY)
            .await
            .map_err(map_storage_error)?
        else {
            return Ok(Route::Login);
        };

        match serde_json::from_str::<Vendor>(&stored) {
            Ok(vendor) => {
                debug!(vendor_id = %vendor.id, "session vendor restored");
                *self.vendor.write().await = Some(vendor);
                Ok(Route::Dashboard)
            }
            Err(err) => {
                warn!(error = %err, "discarding unreadable session vendor");
                self.clear().await?;
                Ok(Route::Login)
            }
        }
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.storage
            .remove_item(VENDOR_KEY)
            .await
            .map_err(map_storage_error)?;
        *self.vendor.write().await = None;
        debug!("session cleared");
        Ok(())
    }
}

impl<S> SessionStore<S> {
    /// Signed-in vendor, if any.
    pub async fn current(&self) -> Option<Vendor> {
        self.vendor.read().await.clone()
    }

    /// Whether a vendor is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.vendor.read().await.is_some()
    }

    /// Signed-in vendor, or `Unauthorized` when signed out.
    pub async fn require_vendor(&self) -> Result<Vendor, DomainError> {
        self.current()
            .await
            .ok_or_else(|| DomainError::unauthorized("Please log in to continue"))
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
