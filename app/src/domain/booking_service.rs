//! Bookings screen.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::BookingApi;
use super::{Booking, BookingAction, BookingStatusUpdate, DomainError, RecordId};

const LOAD_FAILED: &str = "Failed to load bookings";
const UPDATE_FAILED: &str = "Failed to update booking status";

/// Lists bookings and applies vendor actions.
#[derive(Clone)]
pub struct BookingService<B> {
    bookings: Arc<B>,
}

impl<B> BookingService<B> {
    /// Create the service.
    pub fn new(bookings: Arc<B>) -> Self {
        Self { bookings }
    }
}

impl<B> BookingService<B>
where
    B: BookingApi,
{
    /// Fetch the vendor's bookings.
    pub async fn load(&self, vendor_id: &RecordId) -> Result<Vec<Booking>, DomainError> {
        self.bookings
            .vendor_bookings(vendor_id)
            .await
            .map_err(|err| {
                warn!(error = %err, vendor_id = %vendor_id, "loading bookings failed");
                err.into_domain(LOAD_FAILED)
            })
    }

    /// Apply `action` to one booking and return the reloaded list.
    ///
    /// Only actions offered for the booking's current status are sent.
    pub async fn act(
        &self,
        vendor_id: &RecordId,
        booking_id: &RecordId,
        action: BookingAction,
    ) -> Result<Vec<Booking>, DomainError> {
        let current = self.load(vendor_id).await?;
        let booking = current
            .iter()
            .find(|booking| &booking.id == booking_id)
            .ok_or_else(|| DomainError::not_found(format!("Booking {booking_id} not found")))?;
        if !booking.status.offers(action) {
            return Err(DomainError::invalid_request(format!(
                "A {} booking cannot be moved to {}",
                booking.status,
                action.target()
            )));
        }

        let update = BookingStatusUpdate {
            status: action.target(),
            vendor_id: vendor_id.clone(),
        };
        self.bookings
            .update_booking_status(booking_id, &update)
            .await
            .map_err(|err| {
                warn!(error = %err, booking_id = %booking_id, "booking update failed");
                err.into_domain(UPDATE_FAILED)
            })?;
        info!(booking_id = %booking_id, status = %update.status, "booking updated");
        self.load(vendor_id).await
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
