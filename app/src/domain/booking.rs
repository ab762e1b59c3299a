//! Customer bookings and the vendor actions that move them along.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Requested by the customer, awaiting the vendor.
    Pending,
    /// Accepted by the vendor.
    Confirmed,
    /// Service delivered.
    Completed,
    /// Declined by the vendor.
    Cancelled,
}

impl BookingStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Wire and display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Actions the vendor is offered for a booking in this status.
    pub const fn actions(self) -> &'static [BookingAction] {
        match self {
            Self::Pending => &[BookingAction::Confirm, BookingAction::Cancel],
            Self::Confirmed => &[BookingAction::Complete],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    /// Whether `action` is offered for this status.
    pub fn offers(self, action: BookingAction) -> bool {
        self.actions().contains(&action)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vendor action on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingAction {
    /// pending → confirmed
    Confirm,
    /// pending → cancelled
    Cancel,
    /// confirmed → completed
    Complete,
}

impl BookingAction {
    /// Status the booking ends up in.
    pub const fn target(self) -> BookingStatus {
        match self {
            Self::Confirm => BookingStatus::Confirmed,
            Self::Cancel => BookingStatus::Cancelled,
            Self::Complete => BookingStatus::Completed,
        }
    }

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
            Self::Complete => "complete",
        }
    }
}

/// A customer-initiated service request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Backend identifier.
    #[serde(alias = "_id")]
    pub id: RecordId,
    /// Customer name.
    #[serde(default)]
    pub customer_name: String,
    /// Customer email.
    #[serde(default)]
    pub customer_email: String,
    /// Customer phone.
    #[serde(default)]
    pub customer_phone: String,
    /// Booked service name.
    #[serde(default)]
    pub service_name: String,
    /// Requested date as sent by the backend.
    #[serde(default)]
    pub booking_date: String,
    /// Requested time slot.
    #[serde(default)]
    pub booking_time: String,
    /// Amount payable.
    #[serde(default)]
    pub amount: f64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Booking list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingFilter {
    /// No filtering.
    #[default]
    All,
    /// Only bookings in the given status.
    Status(BookingStatus),
}

impl BookingFilter {
    /// Whether `booking` is visible under this filter.
    pub fn matches(self, booking: &Booking) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => booking.status == status,
        }
    }

    /// Visible bookings, preserving fetch order.
    pub fn apply(self, bookings: &[Booking]) -> Vec<Booking> {
        bookings
            .iter()
            .filter(|booking| self.matches(booking))
            .cloned()
            .collect()
    }
}

/// Body of a booking status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusUpdate {
    /// New status.
    pub status: BookingStatus,
    /// Vendor performing the update.
    pub vendor_id: RecordId,
}
