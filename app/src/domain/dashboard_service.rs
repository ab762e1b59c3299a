//! Dashboard screen: counters, recent inquiries, and category tabs.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{ApiError, CategoryApi, ContactApi, DashboardApi};
use super::{DashboardSnapshot, DomainError, RecordId};

const DASHBOARD_FAILED: &str = "Failed to load dashboard";

fn map_api_error(error: ApiError) -> DomainError {
    warn!(error = %error, "dashboard fetch failed");
    error.into_domain(DASHBOARD_FAILED)
}

/// Loads everything the dashboard shows.
#[derive(Clone)]
pub struct DashboardService<D, K, C> {
    dashboard: Arc<D>,
    contacts: Arc<K>,
    categories: Arc<C>,
}

impl<D, K, C> DashboardService<D, K, C> {
    /// Create the service.
    pub fn new(dashboard: Arc<D>, contacts: Arc<K>, categories: Arc<C>) -> Self {
        Self {
            dashboard,
            contacts,
            categories,
        }
    }
}

impl<D, K, C> DashboardService<D, K, C>
where
    D: DashboardApi,
    K: ContactApi,
    C: CategoryApi,
{
    /// Fetch counters, inquiries, and both category lists concurrently. Any
    /// failure fails the whole load.
    pub async fn load(&self, vendor_id: &RecordId) -> Result<DashboardSnapshot, DomainError> {
        let (stats, inquiries, categories, purchased) = tokio::try_join!(
            self.dashboard.vendor_stats(vendor_id),
            self.contacts.vendor_contacts(vendor_id),
            self.categories.list_categories(),
            self.categories.purchased_categories(vendor_id),
        )
        .map_err(map_api_error)?;
        debug!(
            vendor_id = %vendor_id,
            inquiries = inquiries.len(),
            purchased = purchased.len(),
            "dashboard loaded"
        );
        Ok(DashboardSnapshot::compose(
            stats, inquiries, categories, &purchased,
        ))
    }
}

#[cfg(test)]
#[path = "dashboard_service_tests.rs"]
mod tests;
