//! Service listings the vendor offers (backend "properties").

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Listing visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Visible to customers.
    #[default]
    Active,
    /// Hidden from customers.
    Inactive,
}

impl ListingStatus {
    /// Status after the vendor toggles visibility.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    /// Wire and display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// A service listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    /// Backend identifier.
    #[serde(alias = "_id")]
    pub id: RecordId,
    /// Listing name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Price in rupees.
    #[serde(default)]
    pub price: f64,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Image URLs or data URIs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Typical duration.
    #[serde(default)]
    pub duration: String,
    /// Service area.
    #[serde(default)]
    pub location: String,
    /// Availability note.
    #[serde(default)]
    pub availability: String,
    /// Terms and conditions.
    #[serde(default)]
    pub terms: String,
    /// Visibility.
    #[serde(default)]
    pub status: ListingStatus,
}

/// Fields that failed listing draft validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingDraftError {
    /// One or more required fields were blank.
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// Price did not parse as a non-negative decimal.
    #[error("Price must be a non-negative number")]
    InvalidPrice,
}

/// Unvalidated add-service form input; price stays text until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDraft {
    /// Listing name, required.
    pub name: String,
    /// Description, required.
    pub description: String,
    /// Price text, required.
    pub price: String,
    /// Category label, required.
    pub category: String,
    /// Duration.
    pub duration: String,
    /// Service area.
    pub location: String,
    /// Availability note.
    pub availability: String,
    /// Terms.
    pub terms: String,
    /// Images.
    pub images: Vec<String>,
}

/// Validated body of a listing creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    /// Owner vendor; the backend calls it `vendor`.
    #[serde(rename = "vendor")]
    pub vendor_id: RecordId,
    /// Listing name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Parsed price.
    pub price: f64,
    /// Category label.
    pub category: String,
    /// Duration.
    pub duration: String,
    /// Service area.
    pub location: String,
    /// Availability note.
    pub availability: String,
    /// Terms.
    pub terms: String,
    /// Images.
    pub images: Vec<String>,
}

impl ListingDraft {
    /// Validate the draft for `vendor_id`.
    pub fn validate(self, vendor_id: RecordId) -> Result<NewListing, ListingDraftError> {
        let required = [
            ("name", &self.name),
            ("description", &self.description),
            ("price", &self.price),
            ("category", &self.category),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(ListingDraftError::MissingFields(missing));
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ListingDraftError::InvalidPrice)?;
        if !price.is_finite() || price < 0.0 {
            return Err(ListingDraftError::InvalidPrice);
        }

        Ok(NewListing {
            vendor_id,
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            price,
            category: self.category.trim().to_owned(),
            duration: self.duration,
            location: self.location,
            availability: self.availability,
            terms: self.terms,
            images: self.images,
        })
    }
}

/// Body of a listing status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingStatusUpdate {
    /// New status.
    pub status: ListingStatus,
}
