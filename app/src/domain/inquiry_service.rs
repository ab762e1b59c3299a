//! Inquiries screen.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::ContactApi;
use super::{DomainError, Inquiry, InquiryStatus, InquiryStatusUpdate, RecordId};

const LOAD_FAILED: &str = "Failed to load inquiries";
const UPDATE_FAILED: &str = "Failed to update inquiry";

/// Lists inquiries and marks them replied.
#[derive(Clone)]
pub struct InquiryService<K> {
    contacts: Arc<K>,
}

impl<K> InquiryService<K> {
    /// Create the service.
    pub fn new(contacts: Arc<K>) -> Self {
        Self { contacts }
    }
}

impl<K> InquiryService<K>
where
    K: ContactApi,
{
    /// Fetch inquiries addressed to the vendor.
    pub async fn load(&self, vendor_id: &RecordId) -> Result<Vec<Inquiry>, DomainError> {
        self.contacts
            .vendor_contacts(vendor_id)
            .await
            .map_err(|err| {
                warn!(error = %err, vendor_id = %vendor_id, "loading inquiries failed");
                err.into_domain(LOAD_FAILED)
            })
    }

    /// Tag an inquiry as replied and reload.
    pub async fn mark_replied(
        &self,
        vendor_id: &RecordId,
        inquiry_id: &RecordId,
    ) -> Result<Vec<Inquiry>, DomainError> {
        let update = InquiryStatusUpdate {
            status: InquiryStatus::Replied,
            vendor_id: vendor_id.clone(),
        };
        self.contacts
            .update_contact_status(inquiry_id, &update)
            .await
            .map_err(|err| {
                warn!(error = %err, inquiry_id = %inquiry_id, "inquiry update failed");
                err.into_domain(UPDATE_FAILED)
            })?;
        info!(inquiry_id = %inquiry_id, "inquiry marked replied");
        self.load(vendor_id).await
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::InquiryFilter;
    use crate::domain::ports::{ApiError, MockContactApi};
    use serde_json::json;

    fn id(value: &str) -> RecordId {
        RecordId::new(value).expect("id")
    }

    #[tokio::test]
    async fn mark_replied_sends_status_and_reloads() {
        let mut api = MockContactApi::new();
        api.expect_update_contact_status()
            .withf(|inquiry_id, update| {
                inquiry_id.as_ref() == "q1" && update.status == InquiryStatus::Replied
            })
            .times(1)
            .return_once(|_, _| Ok(()));
        api.expect_vendor_contacts().times(1).return_once(|_| {
            Ok(vec![
                serde_json::from_value(json!({ "_id": "q1", "status": "replied" }))
                    .expect("inquiry"),
                serde_json::from_value(json!({ "_id": "q2" })).expect("inquiry"),
            ])
        });

        let inquiries = InquiryService::new(Arc::new(api))
            .mark_replied(&id("v1"), &id("q1"))
            .await
            .expect("updated");

        let fresh = InquiryFilter::Status(InquiryStatus::New).apply(&inquiries);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh.first().map(|inquiry| inquiry.id.to_string()), Some("q2".to_owned()));
    }

    #[tokio::test]
    async fn failed_update_uses_screen_message() {
        let mut api = MockContactApi::new();
        api.expect_update_contact_status()
            .times(1)
            .return_once(|_, _| Err(ApiError::rejected(404_u16, "")));

        let err = InquiryService::new(Arc::new(api))
            .mark_replied(&id("v1"), &id("q1"))
            .await
            .expect_err("update failed");

        assert_eq!(err.message(), "Failed to update inquiry");
    }
}
