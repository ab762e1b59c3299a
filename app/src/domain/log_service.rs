//! Activity log screen.

use std::sync::Arc;

use tracing::warn;

use super::ports::LogApi;
use super::{DomainError, LogEntry, RecordId};

const LOAD_FAILED: &str = "Failed to load activity logs";

/// Reads the vendor's activity log.
#[derive(Clone)]
pub struct LogService<L> {
    logs: Arc<L>,
}

impl<L> LogService<L> {
    /// Create the service.
    pub fn new(logs: Arc<L>) -> Self {
        Self { logs }
    }
}

impl<L> LogService<L>
where
    L: LogApi,
{
    /// Fetch the vendor's entries in backend order.
    pub async fn load(&self, vendor_id: &RecordId) -> Result<Vec<LogEntry>, DomainError> {
        self.logs.vendor_logs(vendor_id).await.map_err(|err| {
            warn!(error = %err, vendor_id = %vendor_id, "loading activity logs failed");
            err.into_domain(LOAD_FAILED)
        })
    }
}
