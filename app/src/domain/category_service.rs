//! Categories screen.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::CategoryApi;
use super::{Category, CategoryPurchase, DomainError, PaymentMethod, RecordId, mark_purchased};

const LOAD_FAILED: &str = "Failed to load categories";
const PURCHASE_FAILED: &str = "Failed to purchase category. Please try again.";

/// Lists categories with ownership and buys new ones.
#[derive(Clone)]
pub struct CategoryService<C> {
    categories: Arc<C>,
}

impl<C> CategoryService<C> {
    /// Create the service.
    pub fn new(categories: Arc<C>) -> Self {
        Self { categories }
    }
}

impl<C> CategoryService<C>
where
    C: CategoryApi,
{
    /// Every category, marked purchased when the vendor owns it.
    pub async fn load(&self, vendor_id: &RecordId) -> Result<Vec<Category>, DomainError> {
        let (all, purchased) = tokio::try_join!(
            self.categories.list_categories(),
            self.categories.purchased_categories(vendor_id),
        )
        .map_err(|err| {
            warn!(error = %err, vendor_id = %vendor_id, "loading categories failed");
            err.into_domain(LOAD_FAILED)
        })?;
        Ok(mark_purchased(all, &purchased))
    }

    /// Buy a category at its listed price, then reload.
    pub async fn purchase(
        &self,
        vendor_id: &RecordId,
        category_id: &RecordId,
        method: PaymentMethod,
    ) -> Result<Vec<Category>, DomainError> {
        let categories = self.load(vendor_id).await?;
        let category = categories
            .iter()
            .find(|category| &category.id == category_id)
            .ok_or_else(|| DomainError::not_found(format!("Category {category_id} not found")))?;
        if category.is_purchased {
            return Err(DomainError::invalid_request(format!(
                "{} is already purchased",
                category.name
            )));
        }

        let purchase = CategoryPurchase {
            vendor_id: vendor_id.clone(),
            category_id: category_id.clone(),
            payment_method: method,
            amount: Some(category.price),
        };
        self.categories
            .purchase_category(&purchase)
            .await
            .map_err(|err| {
                warn!(error = %err, category_id = %category_id, "category purchase failed");
                err.into_domain(PURCHASE_FAILED)
            })?;
        info!(vendor_id = %vendor_id, category_id = %category_id, "category purchased");
        self.load(vendor_id).await
    }
}

#[cfg(test)]
#[path = "category_service_tests.rs"]
mod tests;
