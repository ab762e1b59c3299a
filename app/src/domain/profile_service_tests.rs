//! Tests for the profile service.

use serde_json::json;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{ApiError, MockSessionStorage, MockVendorApi};

fn vendor(name: &str) -> Vendor {
    serde_json::from_value(json!({ "_id": "v1", "name": name, "phone": "9845000000" }))
        .expect("vendor")
}

async fn signed_in_session(writes: usize) -> Arc<SessionStore<MockSessionStorage>> {
    let mut storage = MockSessionStorage::new();
    storage
        .expect_set_item()
        .times(writes + 1)
        .returning(|_, _| Ok(()));
    storage.expect_remove_item().returning(|_| Ok(()));
    let session = Arc::new(SessionStore::new(Arc::new(storage)));
    session
        .set_vendor(Some(vendor("Asha")))
        .await
        .expect("sign in");
    session
}

#[tokio::test]
async fn save_stores_the_returned_vendor() {
    let mut vendors = MockVendorApi::new();
    vendors
        .expect_update_vendor()
        .withf(|vendor_id, update| vendor_id.as_ref() == "v1" && update.name == "Asha Rao")
        .times(1)
        .return_once(|_, _| Ok(vendor("Asha Rao")));
    let session = signed_in_session(1).await;
    let service = ProfileService::new(Arc::new(vendors), Arc::clone(&session));

    let mut update = vendor("Asha").profile_update();
    update.name = "Asha Rao".to_owned();
    let saved = service.save(&update).await.expect("saved");

    assert_eq!(saved.name, "Asha Rao");
    assert_eq!(
        session.current().await.map(|current| current.name),
        Some("Asha Rao".to_owned())
    );
}

#[tokio::test]
async fn failed_save_keeps_old_vendor() {
    let mut vendors = MockVendorApi::new();
    vendors
        .expect_update_vendor()
        .times(1)
        .return_once(|_, _| Err(ApiError::rejected(500_u16, "")));
    let session = signed_in_session(0).await;
    let service = ProfileService::new(Arc::new(vendors), Arc::clone(&session));

    let err = service
        .save(&vendor("Other").profile_update())
        .await
        .expect_err("save failed");

    assert_eq!(err.message(), "Failed to update profile");
    assert_eq!(
        session.current().await.map(|current| current.name),
        Some("Asha".to_owned())
    );
}

#[tokio::test]
async fn signed_out_vendor_cannot_save() {
    let mut vendors = MockVendorApi::new();
    vendors.expect_update_vendor().times(0);
    let session = Arc::new(SessionStore::new(Arc::new(MockSessionStorage::new())));

    let err = ProfileService::new(Arc::new(vendors), session)
        .save(&ProfileUpdate::default())
        .await
        .expect_err("signed out");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
}

#[tokio::test]
async fn working_hours_send_schedule_string() {
    let mut vendors = MockVendorApi::new();
    vendors
        .expect_update_working_hours()
        .withf(|_, update| update.working_days == "Mon, Wed | 9 AM - 7 PM")
        .times(1)
        .return_once(|_, _| Ok(()));
    let session = signed_in_session(0).await;

    ProfileService::new(Arc::new(vendors), session)
        .update_working_hours(&[Weekday::Mon, Weekday::Wed], "9 AM - 7 PM")
        .await
        .expect("hours updated");
}

#[tokio::test]
async fn logout_routes_to_login() {
    let session = signed_in_session(0).await;
    let service = ProfileService::new(Arc::new(MockVendorApi::new()), Arc::clone(&session));

    assert_eq!(service.logout().await.expect("logout"), Route::Login);
    assert!(!session.is_authenticated().await);
}
