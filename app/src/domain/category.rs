//! Purchasable service categories and purchase requests.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::RecordId;

/// A purchasable classification of service offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend identifier (`_id` or `id` on the wire).
    #[serde(alias = "_id")]
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Purchase price in rupees.
    #[serde(default)]
    pub price: f64,
    /// Category kind label.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Sub-categories the backend auto-fills for this category. The backend
    /// sends either a single string or a list.
    #[serde(default, deserialize_with = "one_or_many")]
    pub auto_filled: Vec<String>,
    /// Whether the signed-in vendor already owns the category.
    #[serde(default)]
    pub is_purchased: bool,
}

impl Category {
    /// Sub-category text written into the registration form.
    pub fn sub_category(&self) -> String {
        self.auto_filled.join(", ")
    }

    /// Picker label, e.g. `Plumbing - ₹499`.
    pub fn label(&self) -> String {
        format!("{} - ₹{}", self.name, format_amount(self.price))
    }
}

/// Render a rupee amount without a trailing `.0` for whole values.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Nothing(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) if value.trim().is_empty() => Vec::new(),
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
        OneOrMany::Nothing(()) => Vec::new(),
    })
}

/// Payment method accepted by the category purchase endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Pay in person; the purchase waits for administrator approval.
    Cash,
    /// Pay by scanning the marketplace QR code.
    Qr,
}

/// Body of a category purchase request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPurchase {
    /// Purchasing vendor.
    pub vendor_id: RecordId,
    /// Category being purchased.
    pub category_id: RecordId,
    /// How the vendor pays.
    pub payment_method: PaymentMethod,
    /// Amount charged, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

/// Which category tab is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryTab {
    /// Every category the backend offers.
    #[default]
    All,
    /// Only categories the vendor owns.
    Purchased,
    /// Categories the vendor does not own yet.
    Available,
}

/// Mark each category in `all` as purchased when its id appears in
/// `purchased`.
pub fn mark_purchased(all: Vec<Category>, purchased: &[Category]) -> Vec<Category> {
    let owned: HashSet<&RecordId> = purchased.iter().map(|category| &category.id).collect();
    all.into_iter()
        .map(|mut category| {
            category.is_purchased = category.is_purchased || owned.contains(&category.id);
            category
        })
        .collect()
}

/// Select the categories visible under `tab`.
pub fn filter_categories(categories: &[Category], tab: CategoryTab) -> Vec<Category> {
    categories
        .iter()
        .filter(|category| match tab {
            CategoryTab::All => true,
            CategoryTab::Purchased => category.is_purchased,
            CategoryTab::Available => !category.is_purchased,
        })
        .cloned()
        .collect()
}
