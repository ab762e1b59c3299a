//! Driven port for the activity log endpoint.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{LogEntry, RecordId};

/// Port for the backend's append-only activity log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogApi: Send + Sync {
    /// Activity entries for the vendor.
    async fn vendor_logs(&self, vendor_id: &RecordId) -> Result<Vec<LogEntry>, ApiError>;
}
