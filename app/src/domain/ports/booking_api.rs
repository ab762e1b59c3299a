//! Driven port for booking endpoints.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{Booking, BookingStatusUpdate, RecordId};

/// Port for the backend's booking resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Bookings addressed to the vendor.
    async fn vendor_bookings(&self, vendor_id: &RecordId) -> Result<Vec<Booking>, ApiError>;

    /// Move a booking to a new status.
    async fn update_booking_status(
        &self,
        booking_id: &RecordId,
        update: &BookingStatusUpdate,
    ) -> Result<(), ApiError>;
}
