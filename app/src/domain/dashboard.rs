//! Dashboard statistics and the composed dashboard view.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryTab, filter_categories, mark_purchased};
use super::inquiry::Inquiry;

/// Number of recent inquiries shown on the dashboard.
pub const RECENT_INQUIRY_LIMIT: usize = 5;

/// Headline counters reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Listings owned by the vendor.
    #[serde(default)]
    pub total_services: u64,
    /// Inquiries not yet answered.
    #[serde(default)]
    pub new_inquiries: u64,
    /// Bookings received.
    #[serde(default)]
    pub total_bookings: u64,
    /// Lifetime earnings in rupees.
    #[serde(default)]
    pub total_earnings: f64,
}

/// Everything the dashboard shows after one load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    /// Backend counters.
    pub stats: DashboardStats,
    /// Total inquiries fetched; shown as the "new inquiries" tile.
    pub inquiry_count: usize,
    /// Most recent inquiries, at most [`RECENT_INQUIRY_LIMIT`].
    pub recent_inquiries: Vec<Inquiry>,
    /// All categories, marked with ownership.
    pub categories: Vec<Category>,
}

impl DashboardSnapshot {
    /// Compose the snapshot from the four dashboard fetches.
    pub fn compose(
        stats: DashboardStats,
        inquiries: Vec<Inquiry>,
        categories: Vec<Category>,
        purchased: &[Category],
    ) -> Self {
        let inquiry_count = inquiries.len();
        let recent_inquiries = inquiries.into_iter().take(RECENT_INQUIRY_LIMIT).collect();
        Self {
            stats,
            inquiry_count,
            recent_inquiries,
            categories: mark_purchased(categories, purchased),
        }
    }

    /// Categories under the purchased or available tab.
    pub fn categories_for(&self, tab: CategoryTab) -> Vec<Category> {
        filter_categories(&self.categories, tab)
    }
}
