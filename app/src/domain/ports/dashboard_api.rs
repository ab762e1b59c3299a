//! Driven port for dashboard counters.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{DashboardStats, RecordId};

/// Port for the backend's dashboard resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Headline counters for the vendor.
    async fn vendor_stats(&self, vendor_id: &RecordId) -> Result<DashboardStats, ApiError>;
}
