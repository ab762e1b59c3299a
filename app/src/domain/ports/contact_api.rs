//! Driven port for inquiry endpoints (backend "contacts").

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{Inquiry, InquiryStatusUpdate, RecordId};

/// Port for the backend's contact resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// Inquiries addressed to the vendor, newest first as the backend orders them.
    async fn vendor_contacts(&self, vendor_id: &RecordId) -> Result<Vec<Inquiry>, ApiError>;

    /// Change an inquiry's status tag.
    async fn update_contact_status(
        &self,
        inquiry_id: &RecordId,
        update: &InquiryStatusUpdate,
    ) -> Result<(), ApiError>;
}
