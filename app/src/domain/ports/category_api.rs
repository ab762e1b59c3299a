//! Driven port for category endpoints.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{Category, CategoryPurchase, RecordId};

/// Port for the backend's category resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryApi: Send + Sync {
    /// Every category on offer.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Categories the vendor owns.
    async fn purchased_categories(&self, vendor_id: &RecordId) -> Result<Vec<Category>, ApiError>;

    /// Record a purchase. Cash purchases stay pending until approved.
    async fn purchase_category(&self, purchase: &CategoryPurchase) -> Result<(), ApiError>;
}
