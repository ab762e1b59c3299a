//! Profile screen: edit, working hours, change requests, and logout.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::{SessionStorage, VendorApi};
use super::registration::Weekday;
use super::{
    DomainError, ProfileUpdate, ProfileUpdateRequest, Route, SessionStore, Vendor,
    WorkingHoursUpdate,
};

const UPDATE_FAILED: &str = "Failed to update profile";
const REFRESH_FAILED: &str = "Failed to load profile";
const HOURS_FAILED: &str = "Failed to update working hours";
const REQUEST_FAILED: &str = "Failed to send update request";

/// Edits the signed-in vendor's profile.
pub struct ProfileService<V, S> {
    vendors: Arc<V>,
    session: Arc<SessionStore<S>>,
}

impl<V, S> Clone for ProfileService<V, S> {
    fn clone(&self) -> Self {
        Self {
            vendors: Arc::clone(&self.vendors),
            session: Arc::clone(&self.session),
        }
    }
}

impl<V, S> ProfileService<V, S> {
    /// Create the service.
    pub fn new(vendors: Arc<V>, session: Arc<SessionStore<S>>) -> Self {
        Self { vendors, session }
    }
}

impl<V, S> ProfileService<V, S>
where
    V: VendorApi,
    S: SessionStorage,
{
    /// Re-read the vendor from the backend and keep the session in step.
    pub async fn refresh(&self) -> Result<Vendor, DomainError> {
        let current = self.session.require_vendor().await?;
        let vendor = self.vendors.get_vendor(&current.id).await.map_err(|err| {
            warn!(error = %err, vendor_id = %current.id, "profile refresh failed");
            err.into_domain(REFRESH_FAILED)
        })?;
        self.session.set_vendor(Some(vendor.clone())).await?;
        Ok(vendor)
    }

    /// Save profile edits. The backend's copy replaces the session vendor.
    pub async fn save(&self, update: &ProfileUpdate) -> Result<Vendor, DomainError> {
        let current = self.session.require_vendor().await?;
        let vendor = self
            .vendors
            .update_vendor(&current.id, update)
            .await
            .map_err(|err| {
                warn!(error = %err, vendor_id = %current.id, "profile update failed");
                err.into_domain(UPDATE_FAILED)
            })?;
        self.session.set_vendor(Some(vendor.clone())).await?;
        info!(vendor_id = %vendor.id, "profile updated");
        Ok(vendor)
    }

    /// Replace the working schedule.
    pub async fn update_working_hours(
        &self,
        days: &[Weekday],
        timings: &str,
    ) -> Result<(), DomainError> {
        if days.is_empty() {
            return Err(DomainError::invalid_request(
                "Please select at least one working day",
            ));
        }
        let current = self.session.require_vendor().await?;
        let names: Vec<&str> = days.iter().map(|day| day.as_str()).collect();
        let update = WorkingHoursUpdate {
            working_days: format!("{} | {}", names.join(", "), timings.trim()),
        };
        self.vendors
            .update_working_hours(&current.id, &update)
            .await
            .map_err(|err| {
                warn!(error = %err, vendor_id = %current.id, "working hours update failed");
                err.into_domain(HOURS_FAILED)
            })?;
        info!(vendor_id = %current.id, schedule = %update.working_days, "working hours updated");
        Ok(())
    }

    /// Ask an administrator to approve a change the vendor cannot make.
    pub async fn request_update(&self, message: &str) -> Result<(), DomainError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(DomainError::invalid_request("Please describe the change"));
        }
        let current = self.session.require_vendor().await?;
        let request = ProfileUpdateRequest {
            vendor_id: current.id.clone(),
            message: message.to_owned(),
        };
        self.vendors
            .request_profile_update(&request)
            .await
            .map_err(|err| {
                warn!(error = %err, vendor_id = %current.id, "profile update request failed");
                err.into_domain(REQUEST_FAILED)
            })?;
        info!(vendor_id = %current.id, "profile update requested");
        Ok(())
    }

    /// Sign out.
    pub async fn logout(&self) -> Result<Route, DomainError> {
        self.session.logout().await
    }
}

#[cfg(test)]
#[path = "profile_service_tests.rs"]
mod tests;
