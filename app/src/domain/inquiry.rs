//! Customer inquiries (backend "contacts").

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Inquiry status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Not answered yet.
    #[default]
    New,
    /// The vendor has replied.
    Replied,
}

impl InquiryStatus {
    /// Wire and display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Replied => "replied",
        }
    }
}

/// A customer message about one of the vendor's services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    /// Backend identifier.
    #[serde(alias = "_id")]
    pub id: RecordId,
    /// Customer name; the backend also calls it `name`.
    #[serde(default, alias = "name")]
    pub customer_name: String,
    /// Customer email.
    #[serde(default, alias = "email")]
    pub customer_email: String,
    /// Customer phone.
    #[serde(default, alias = "phone")]
    pub customer_phone: String,
    /// Service the inquiry is about.
    #[serde(default)]
    pub service_name: String,
    /// Message body.
    #[serde(default)]
    pub message: String,
    /// Status tag; missing means new.
    #[serde(default)]
    pub status: InquiryStatus,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Inquiry list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InquiryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only inquiries with the given status.
    Status(InquiryStatus),
}

impl InquiryFilter {
    /// Visible inquiries, preserving fetch order.
    pub fn apply(self, inquiries: &[Inquiry]) -> Vec<Inquiry> {
        inquiries
            .iter()
            .filter(|inquiry| match self {
                Self::All => true,
                Self::Status(status) => inquiry.status == status,
            })
            .cloned()
            .collect()
    }
}

/// Body of an inquiry status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryStatusUpdate {
    /// New status.
    pub status: InquiryStatus,
    /// Vendor performing the update.
    pub vendor_id: RecordId,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn decodes_contact_shape_with_missing_status_as_new() {
        let inquiry: Inquiry = serde_json::from_value(json!({
            "_id": "q1",
            "name": "Meera",
            "email": "meera@example.com",
            "message": "Are you free on Sunday?"
        }))
        .expect("decode contact");
        assert_eq!(inquiry.customer_name, "Meera");
        assert_eq!(inquiry.status, InquiryStatus::New);
    }

    #[rstest]
    #[case(InquiryFilter::All, 3)]
    #[case(InquiryFilter::Status(InquiryStatus::New), 2)]
    #[case(InquiryFilter::Status(InquiryStatus::Replied), 1)]
    fn filter_by_status(#[case] filter: InquiryFilter, #[case] expected: usize) {
        let inquiries: Vec<Inquiry> = ["new", "replied", "new"]
            .into_iter()
            .enumerate()
            .map(|(index, status)| {
                serde_json::from_value(json!({ "_id": format!("q{index}"), "status": status }))
                    .expect("decode inquiry")
            })
            .collect();
        assert_eq!(filter.apply(&inquiries).len(), expected);
    }
}
