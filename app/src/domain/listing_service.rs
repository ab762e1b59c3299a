//! Services screen: the vendor's own listings.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::PropertyApi;
use super::{DomainError, ListingDraft, ListingStatusUpdate, RecordId, ServiceListing};

const LOAD_FAILED: &str = "Failed to load services";
const CREATE_FAILED: &str = "Failed to create service";
const DELETE_FAILED: &str = "Failed to delete service";
const STATUS_FAILED: &str = "Failed to update service status";

/// Lists, creates, deletes, and toggles service listings.
#[derive(Clone)]
pub struct ListingService<P> {
    properties: Arc<P>,
}

impl<P> ListingService<P> {
    /// Create the service.
    pub fn new(properties: Arc<P>) -> Self {
        Self { properties }
    }
}

impl<P> ListingService<P>
where
    P: PropertyApi,
{
    /// Fetch the vendor's listings.
    pub async fn load(&self, vendor_id: &RecordId) -> Result<Vec<ServiceListing>, DomainError> {
        self.properties
            .vendor_properties(vendor_id)
            .await
            .map_err(|err| {
                warn!(error = %err, vendor_id = %vendor_id, "loading services failed");
                err.into_domain(LOAD_FAILED)
            })
    }

    /// Validate `draft`, create the listing, and reload.
    pub async fn create(
        &self,
        vendor_id: &RecordId,
        draft: ListingDraft,
    ) -> Result<Vec<ServiceListing>, DomainError> {
        let listing = draft
            .validate(vendor_id.clone())
            .map_err(|err| DomainError::invalid_request(err.to_string()))?;
        self.properties
            .create_property(&listing)
            .await
            .map_err(|err| {
                warn!(error = %err, "creating service failed");
                err.into_domain(CREATE_FAILED)
            })?;
        info!(vendor_id = %vendor_id, name = %listing.name, "service created");
        self.load(vendor_id).await
    }

    /// Delete a listing and reload.
    pub async fn delete(
        &self,
        vendor_id: &RecordId,
        listing_id: &RecordId,
    ) -> Result<Vec<ServiceListing>, DomainError> {
        self.properties
            .delete_property(listing_id)
            .await
            .map_err(|err| {
                warn!(error = %err, listing_id = %listing_id, "deleting service failed");
                err.into_domain(DELETE_FAILED)
            })?;
        info!(listing_id = %listing_id, "service deleted");
        self.load(vendor_id).await
    }

    /// Flip a listing between active and inactive, then reload.
    pub async fn toggle_status(
        &self,
        vendor_id: &RecordId,
        listing_id: &RecordId,
    ) -> Result<Vec<ServiceListing>, DomainError> {
        let listings = self.load(vendor_id).await?;
        let listing = listings
            .iter()
            .find(|listing| &listing.id == listing_id)
            .ok_or_else(|| DomainError::not_found(format!("Service {listing_id} not found")))?;
        let update = ListingStatusUpdate {
            status: listing.status.toggled(),
        };
        self.properties
            .update_property_status(listing_id, &update)
            .await
            .map_err(|err| {
                warn!(error = %err, listing_id = %listing_id, "service status update failed");
                err.into_domain(STATUS_FAILED)
            })?;
        info!(listing_id = %listing_id, status = update.status.as_str(), "service status changed");
        self.load(vendor_id).await
    }
}

#[cfg(test)]
#[path = "listing_service_tests.rs"]
mod tests;
