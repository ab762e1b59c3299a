//! End-to-end command flows against an in-memory backend.
//!
//! Each test parses real command lines, runs them through [`App::run`] with
//! buffered input and output, and checks what the vendor would see along
//! with what reached the backend.

mod support;

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8Path;
use clap::Parser;
use rstest::{fixture, rstest};
use serde_json::json;
use tempfile::TempDir;
use vendor_app::domain::{CheckoutSettings, ErrorCode, PaymentMethod, SessionStore, TaskStatus};
use vendor_app::inbound::cli::{App, Cli, CliError};
use vendor_app::outbound::storage::{FileSessionStorage, MemorySessionStorage};

use support::{EMAIL, FakeBackend, InstantCheckout, PASSWORD};

type MemoryApp = App<FakeBackend, MemorySessionStorage, InstantCheckout>;

fn settings() -> CheckoutSettings {
    CheckoutSettings {
        key: "rzp_test_key".to_owned(),
        merchant_name: "Mera GharSansaar".to_owned(),
        theme_color: "#f59e0b".to_owned(),
        timeout: Duration::from_secs(300),
    }
}

fn app_with<S>(backend: &Arc<FakeBackend>, storage: S) -> App<FakeBackend, S, InstantCheckout> {
    App::new(
        Arc::clone(backend),
        Arc::new(SessionStore::new(Arc::new(storage))),
        Arc::new(InstantCheckout { signature: "sig_ok" }),
        settings(),
    )
}

#[fixture]
fn backend() -> Arc<FakeBackend> {
    Arc::new(FakeBackend::default())
}

async fn run<S>(
    app: &App<FakeBackend, S, InstantCheckout>,
    args: &[&str],
    input: &str,
) -> Result<String, CliError>
where
    S: vendor_app::domain::ports::SessionStorage,
{
    let cli = Cli::try_parse_from(std::iter::once("vendor-app").chain(args.iter().copied()))
        .expect("command line parses");
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    app.run(cli.command, &mut input, &mut out).await?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

async fn signed_in(backend: &Arc<FakeBackend>) -> MemoryApp {
    let app = app_with(backend, MemorySessionStorage::default());
    run(&app, &["login", "--email", EMAIL, "--password", PASSWORD], "")
        .await
        .expect("login succeeds");
    app
}

#[rstest]
#[tokio::test]
async fn login_is_remembered_across_runs(backend: Arc<FakeBackend>) {
    let dir = TempDir::new().expect("temp dir");
    let path = Utf8Path::from_path(dir.path()).expect("utf-8 temp path");

    let first = app_with(&backend, FileSessionStorage::open(path).expect("open storage"));
    let greeting = run(&first, &["login", "--email", EMAIL], &format!("{PASSWORD}\n"))
        .await
        .expect("login succeeds");
    assert!(greeting.contains("Welcome back, Asha Rao"));

    let second = app_with(&backend, FileSessionStorage::open(path).expect("reopen storage"));
    let status = run(&second, &["status"], "").await.expect("status");
    assert!(status.contains("Asha Rao (v1)"));
    assert!(status.contains("vendor-app dashboard"));
}

#[rstest]
#[tokio::test]
async fn wrong_password_keeps_the_vendor_signed_out(backend: Arc<FakeBackend>) {
    let app = app_with(&backend, MemorySessionStorage::default());

    let err = run(&app, &["login", "--email", EMAIL, "--password", "nope"], "")
        .await
        .expect_err("login refused");

    let CliError::Domain(error) = err else {
        panic!("expected a domain error, got {err:?}");
    };
    assert_eq!(error.code(), ErrorCode::Unauthorized);
    assert_eq!(error.message(), "Invalid credentials");
    let status = run(&app, &["status"], "").await.expect("status");
    assert!(status.contains("vendor-app login"));
}

#[rstest]
#[tokio::test]
async fn screens_require_a_session(backend: Arc<FakeBackend>) {
    let app = app_with(&backend, MemorySessionStorage::default());

    let err = run(&app, &["dashboard"], "").await.expect_err("signed out");

    assert!(matches!(err, CliError::Domain(ref error) if error.code() == ErrorCode::Unauthorized));
}

#[rstest]
#[tokio::test]
async fn confirming_a_booking_reloads_the_list(backend: Arc<FakeBackend>) {
    let app = signed_in(&backend).await;

    let text = run(&app, &["bookings", "confirm", "b1"], "")
        .await
        .expect("confirm succeeds");

    assert!(text.contains("Booking confirmed"));
    assert!(text.contains("[confirmed] b1"));
    assert!(text.contains("actions: complete"));
}

#[rstest]
#[tokio::test]
async fn finished_bookings_cannot_move_again(backend: Arc<FakeBackend>) {
    let app = signed_in(&backend).await;

    let err = run(&app, &["bookings", "cancel", "b2"], "")
        .await
        .expect_err("completed booking is final");

    assert!(matches!(err, CliError::Domain(ref error) if error.code() == ErrorCode::InvalidRequest));
    let bookings = backend.bookings.lock().expect("bookings");
    assert_eq!(bookings[1].status.as_str(), "completed");
}

#[rstest]
#[tokio::test]
async fn booking_filter_shows_one_status(backend: Arc<FakeBackend>) {
    let app = signed_in(&backend).await;

    let text = run(&app, &["bookings", "list", "--status", "pending"], "")
        .await
        .expect("list");

    assert!(text.contains("b1"));
    assert!(!text.contains("b2"));
}

#[rstest]
#[tokio::test]
async fn tasks_move_between_columns(backend: Arc<FakeBackend>) {
    let app = signed_in(&backend).await;

    let added = run(
        &app,
        &["tasks", "add", "--title", "Buy supplies", "--priority", "high", "--due", "2026-11-02"],
        "",
    )
    .await
    .expect("add task");
    assert!(added.contains("Pending (1)"));
    assert!(added.contains("Buy supplies [high] due 2026-11-02"));

    let id = backend.tasks.lock().expect("tasks")[0].id.to_string();
    let toggled = run(&app, &["tasks", "toggle", &id], "").await.expect("toggle");

    assert!(toggled.contains("Pending (0)"));
    assert!(toggled.contains("Completed (1)"));
    assert_eq!(backend.tasks.lock().expect("tasks")[0].status, TaskStatus::Completed);
}

#[rstest]
#[tokio::test]
async fn malformed_due_date_never_reaches_the_backend(backend: Arc<FakeBackend>) {
    let app = signed_in(&backend).await;

    let err = run(&app, &["tasks", "add", "--title", "Invoice", "--due", "02/11/2026"], "")
        .await
        .expect_err("bad date");

    assert!(matches!(err, CliError::Domain(ref error) if error.code() == ErrorCode::InvalidRequest));
    assert!(backend.tasks.lock().expect("tasks").is_empty());
}

#[rstest]
#[tokio::test]
async fn replying_to_an_inquiry_updates_its_tag(backend: Arc<FakeBackend>) {
    let app = signed_in(&backend).await;

    let text = run(&app, &["inquiries", "reply", "q1"], "").await.expect("reply");

    assert!(text.contains("Inquiry marked as replied"));
    let new_only = run(&app, &["inquiries", "list", "--status", "new"], "")
        .await
        .expect("list");
    assert!(new_only.contains("No inquiries found"));
}

#[rstest]
#[tokio::test]
async fn working_hours_are_sent_as_one_schedule(backend: Arc<FakeBackend>) {
    let app = signed_in(&backend).await;

    run(
        &app,
        &["profile", "hours", "--day", "mon", "--day", "sat", "--timings", "9 AM - 7 PM"],
        "",
    )
    .await
    .expect("hours saved");

    let schedules = backend.schedules.lock().expect("schedules");
    assert_eq!(schedules.len(), 1);
    assert!(schedules[0].contains("Mon"));
    assert!(schedules[0].contains("Sat"));
}

#[rstest]
#[tokio::test]
async fn logout_forgets_the_vendor(backend: Arc<FakeBackend>) {
    let app = signed_in(&backend).await;

    let text = run(&app, &["logout"], "").await.expect("logout");

    assert!(text.contains("vendor-app login"));
    assert!(run(&app, &["logs"], "").await.is_err());
}

fn answers() -> serde_json::Value {
    json!({
        "company": "Sparkle Cleaners",
        "typeOfService": "Home cleaning",
        "category": "c1",
        "name": "Asha Rao",
        "phone": "9845000000",
        "hasWhatsapp": true,
        "address": "12 MG Road",
        "businessType": "proprietorship",
        "accountNumber": "001122",
        "confirmAccountNumber": "001122",
        "ifscCode": "sbin0001",
        "totalYears": "6 years",
        "workingDays": ["Mon", "Tue"],
        "password": "s3cret",
        "confirmPassword": "s3cret"
    })
}

fn write_answers(dir: &TempDir, answers: &serde_json::Value) -> String {
    let path = dir.path().join("answers.json");
    std::fs::write(&path, answers.to_string()).expect("write answers");
    path.to_str().expect("utf-8 path").to_owned()
}

#[rstest]
#[tokio::test]
async fn registration_with_cash_awaits_approval(backend: Arc<FakeBackend>) {
    let app = app_with(&backend, MemorySessionStorage::default());
    let dir = TempDir::new().expect("temp dir");
    let path = write_answers(&dir, &answers());

    let text = run(&app, &["register", "--answers", &path, "--pay", "cash"], "")
        .await
        .expect("registration completes");

    assert!(text.contains("Registration submitted."));
    assert!(text.contains("Category: Cleaning"));
    assert!(text.contains("Cash payment request submitted"));
    assert!(text.contains("vendor-app login"));

    let registrations = backend.registrations.lock().expect("registrations");
    assert_eq!(registrations[0]["bankDetail"]["IFSC"], "SBIN0001");
    assert_eq!(registrations[0]["status"], "pending");

    let purchases = backend.purchases.lock().expect("purchases");
    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0].vendor_id.to_string(), "v-new");
    assert_eq!(purchases[0].payment_method, PaymentMethod::Cash);
    assert_eq!(purchases[0].amount, None);
}

#[rstest]
#[tokio::test]
async fn incomplete_answers_name_the_missing_fields(backend: Arc<FakeBackend>) {
    let app = app_with(&backend, MemorySessionStorage::default());
    let dir = TempDir::new().expect("temp dir");
    let mut incomplete = answers();
    incomplete["phone"] = json!("");
    let path = write_answers(&dir, &incomplete);

    let err = run(&app, &["register", "--answers", &path, "--pay", "cash"], "")
        .await
        .expect_err("contact step fails");

    let CliError::Domain(error) = err else {
        panic!("expected a domain error, got {err:?}");
    };
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert!(error.message().contains("Phone"));
    assert!(backend.registrations.lock().expect("registrations").is_empty());
}

/// One answer per prompt, in the order the wizard asks them. The contact
/// step starts with `<`, so the basic step is asked twice.
const INTERACTIVE_ANSWERS: &[&str] = &[
    // basic
    "Rao Cleaners",
    "Home cleaning",
    "Asha Rao",
    "",
    "1",
    "2015",
    // contact, going back
    "<",
    // basic again, keeping every answer
    "",
    "",
    "",
    "",
    "",
    "",
    // contact
    "asha@example.com",
    "9845000000",
    "",
    "no",
    "12 MG Road",
    "Bengaluru",
    // business
    "2",
    "",
    "",
    "",
    "",
    // bank
    "State Bank",
    "Asha Rao",
    "001122",
    "001122",
    "sbin0001",
    "MG Road",
    // experience
    "6",
    "",
    "Deep cleaning",
    "Mon, Wed",
    "9am-6pm",
    // documents
    "",
    "",
    // credentials
    "s3cret",
    "s3cret",
    "",
    "",
];

#[rstest]
#[tokio::test]
async fn interactive_registration_goes_back_and_registers_once(backend: Arc<FakeBackend>) {
    let app = app_with(&backend, MemorySessionStorage::default());
    let input = format!("{}\n", INTERACTIVE_ANSWERS.join("\n"));

    let text = run(&app, &["register", "--pay", "cash"], &input)
        .await
        .expect("registration completes");

    assert_eq!(text.matches("Step 1 of 7").count(), 2);
    assert!(text.contains("Company name [Rao Cleaners]"));
    assert!(text.contains("Registration submitted."));
    {
        let registrations = backend.registrations.lock().expect("registrations");
        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations[0]["name"], "Asha Rao");
        assert_eq!(registrations[0]["company"], "Rao Cleaners");
        assert_eq!(registrations[0]["businessType"], "Partnership");
        assert_eq!(registrations[0]["bankDetail"]["IFSC"], "SBIN0001");
    }

    let status = run(&app, &["status"], "").await.expect("status");
    assert!(status.contains("Asha Rao (v-new)"));
    assert!(status.contains("vendor-app dashboard"));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn online_payment_is_verified_as_prepaid(backend: Arc<FakeBackend>) {
    let app = app_with(&backend, MemorySessionStorage::default());

    let text = run(&app, &["pay", "--vendor-id", "v1", "--category-id", "c2", "--method", "upi"], "")
        .await
        .expect("payment completes");

    assert!(text.contains("Category: Plumbing"));
    assert!(text.contains("Payment successful"));
    let verifications = backend.verifications.lock().expect("verifications");
    assert_eq!(verifications.len(), 1);
    assert_eq!(verifications[0].razorpay_order_id, "order_1");
    assert_eq!(verifications[0].payment_mode, "prepaid");
    assert_eq!(verifications[0].category_id.to_string(), "c2");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn rejected_signature_is_reported(backend: Arc<FakeBackend>) {
    let app = App::new(
        Arc::clone(&backend),
        Arc::new(SessionStore::new(Arc::new(MemorySessionStorage::default()))),
        Arc::new(InstantCheckout { signature: "sig_forged" }),
        settings(),
    );

    let err = run(&app, &["pay", "--vendor-id", "v1", "--method", "upi"], "")
        .await
        .expect_err("verification fails");

    let CliError::Domain(error) = err else {
        panic!("expected a domain error, got {err:?}");
    };
    assert_eq!(error.message(), "Payment verification failed");
}
