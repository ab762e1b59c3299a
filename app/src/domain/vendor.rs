//! Vendor account record and profile edits.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RecordId;

/// Vendor account as returned by the backend.
///
/// Only the fields the client reads are typed; everything else the backend
/// sends is kept in `extra` so the record survives a persist/rehydrate cycle
/// unchanged.
///
/// # Examples
/// ```
/// use vendor_app::domain::Vendor;
///
/// let vendor: Vendor = serde_json::from_str(
///     r#"{"_id":"v1","name":"Asha","phone":"98450","gstNumber":"29AB"}"#,
/// )
/// .expect("vendor json");
/// assert_eq!(vendor.id.as_ref(), "v1");
/// assert_eq!(vendor.extra["gstNumber"], "29AB");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Backend identifier (`_id` or `id` on the wire).
    #[serde(alias = "_id")]
    pub id: RecordId,
    /// Owner or authorised person name.
    #[serde(default)]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Primary phone number.
    #[serde(default)]
    pub phone: String,
    /// Registered business name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Display business name edited from the profile screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Free-text business description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_description: Option<String>,
    /// Profile image as a URL or data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Approval status reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation timestamp as sent by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Remaining backend fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Vendor {
    /// Name shown in greetings: the owner name, else the company.
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            return self.name.as_str();
        }
        self.company.as_deref().unwrap_or("Vendor")
    }

    /// Seed the profile edit form from the stored record.
    pub fn profile_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            phone: self.phone.clone(),
            business_name: self.business_name.clone().unwrap_or_default(),
            business_description: self.business_description.clone().unwrap_or_default(),
            profile_image: self.profile_image.clone().unwrap_or_default(),
        }
    }
}

/// Editable profile fields sent to the vendor update endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Owner name.
    pub name: String,
    /// Primary phone number.
    pub phone: String,
    /// Display business name.
    pub business_name: String,
    /// Business description.
    pub business_description: String,
    /// Profile image URL or data URI.
    pub profile_image: String,
}

/// Working-hours change request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursUpdate {
    /// Derived schedule string, e.g. `Mon, Wed | 9 AM - 7 PM`.
    pub working_days: String,
}

/// Request asking an administrator to approve profile changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    /// Vendor the request is raised for.
    pub vendor_id: RecordId,
    /// Free-text description of the requested change.
    pub message: String,
}
