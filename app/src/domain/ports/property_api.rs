//! Driven port for service listing endpoints (backend "properties").

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{ListingStatusUpdate, NewListing, RecordId, ServiceListing};

/// Port for the backend's property resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyApi: Send + Sync {
    /// Listings owned by the vendor.
    async fn vendor_properties(&self, vendor_id: &RecordId)
    -> Result<Vec<ServiceListing>, ApiError>;

    /// Create a listing.
    async fn create_property(&self, listing: &NewListing) -> Result<(), ApiError>;

    /// Change a listing's visibility.
    async fn update_property_status(
        &self,
        property_id: &RecordId,
        update: &ListingStatusUpdate,
    ) -> Result<(), ApiError>;

    /// Delete a listing.
    async fn delete_property(&self, property_id: &RecordId) -> Result<(), ApiError>;
}
