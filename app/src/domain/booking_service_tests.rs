//! Tests for the bookings service.

use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;
use serde_json::json;

use super::*;
use crate::domain::ports::{ApiError, MockBookingApi};
use crate::domain::{BookingStatus, ErrorCode};

fn id(value: &str) -> RecordId {
    RecordId::new(value).expect("id")
}

fn booking(booking_id: &str, status: &str) -> Booking {
    serde_json::from_value(json!({
        "_id": booking_id,
        "customerName": "Ravi",
        "serviceName": "Sofa cleaning",
        "status": status,
    }))
    .expect("booking")
}

#[rstest]
#[case("pending", BookingAction::Confirm, BookingStatus::Confirmed)]
#[case("pending", BookingAction::Cancel, BookingStatus::Cancelled)]
#[case("confirmed", BookingAction::Complete, BookingStatus::Completed)]
#[tokio::test]
async fn offered_action_updates_then_reloads(
    #[case] status: &'static str,
    #[case] action: BookingAction,
    #[case] target: BookingStatus,
) {
    let mut api = MockBookingApi::new();
    let fetches = AtomicUsize::new(0);
    api.expect_vendor_bookings().times(2).returning(move |_| {
        let current = if fetches.fetch_add(1, Ordering::SeqCst) == 0 {
            status
        } else {
            target.as_str()
        };
        Ok(vec![booking("b1", current)])
    });
    api.expect_update_booking_status()
        .withf(move |booking_id, update| {
            booking_id.as_ref() == "b1"
                && update.status == target
                && update.vendor_id.as_ref() == "v1"
        })
        .times(1)
        .return_once(|_, _| Ok(()));

    let service = BookingService::new(Arc::new(api));
    let reloaded = service
        .act(&id("v1"), &id("b1"), action)
        .await
        .expect("action applied");

    assert_eq!(reloaded.first().map(|b| b.status), Some(target));
}

#[rstest]
#[case("confirmed", BookingAction::Confirm)]
#[case("completed", BookingAction::Cancel)]
#[case("cancelled", BookingAction::Complete)]
#[tokio::test]
async fn actions_not_offered_are_refused(#[case] status: &'static str, #[case] action: BookingAction) {
    let mut api = MockBookingApi::new();
    api.expect_vendor_bookings()
        .times(1)
        .return_once(move |_| Ok(vec![booking("b1", status)]));
    api.expect_update_booking_status().times(0);

    let service = BookingService::new(Arc::new(api));
    let err = service
        .act(&id("v1"), &id("b1"), action)
        .await
        .expect_err("refused");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn unknown_booking_is_not_found() {
    let mut api = MockBookingApi::new();
    api.expect_vendor_bookings()
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let service = BookingService::new(Arc::new(api));
    let err = service
        .act(&id("v1"), &id("b9"), BookingAction::Confirm)
        .await
        .expect_err("missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn failed_update_uses_screen_message() {
    let mut api = MockBookingApi::new();
    api.expect_vendor_bookings()
        .times(1)
        .return_once(|_| Ok(vec![booking("b1", "pending")]));
    api.expect_update_booking_status()
        .times(1)
        .return_once(|_, _| Err(ApiError::rejected(500_u16, "")));

    let service = BookingService::new(Arc::new(api));
    let err = service
        .act(&id("v1"), &id("b1"), BookingAction::Confirm)
        .await
        .expect_err("update failed");

    assert_eq!(err.message(), "Failed to update booking status");
}
