//! Driven port for vendor account endpoints.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{
    LoginCredentials, ProfileUpdate, ProfileUpdateRequest, RecordId, RegistrationPayload, Vendor,
    WorkingHoursUpdate,
};

/// Port for the backend's vendor resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VendorApi: Send + Sync {
    /// Sign in and return the vendor record.
    async fn login(&self, credentials: &LoginCredentials) -> Result<Vendor, ApiError>;

    /// Submit a completed registration and return the created vendor.
    async fn register(&self, payload: &RegistrationPayload) -> Result<Vendor, ApiError>;

    /// Fetch one vendor record.
    async fn get_vendor(&self, vendor_id: &RecordId) -> Result<Vendor, ApiError>;

    /// Apply profile edits and return the updated record.
    async fn update_vendor(
        &self,
        vendor_id: &RecordId,
        update: &ProfileUpdate,
    ) -> Result<Vendor, ApiError>;

    /// Replace the vendor's working schedule.
    async fn update_working_hours(
        &self,
        vendor_id: &RecordId,
        update: &WorkingHoursUpdate,
    ) -> Result<(), ApiError>;

    /// Ask an administrator to approve a profile change.
    async fn request_profile_update(&self, request: &ProfileUpdateRequest) -> Result<(), ApiError>;
}
