//! Domain model and screen services.
//!
//! Purpose: hold the vendor-side rules of the marketplace client. Entities
//! mirror backend records (serde shapes match the wire), validation happens
//! before any port call, and each screen of the app is a service generic
//! over the driven ports it needs.
//!
//! Public surface:
//! - DomainError / ErrorCode: failure type every service returns.
//! - SessionStore: the signed-in vendor slot.
//! - registration: the sign-up wizard and its service.
//! - one `*Service` per screen (dashboard, bookings, listings, inquiries,
//!   tasks, categories, logs, profile, login, payment).

pub mod activity_log;
pub mod auth;
pub mod booking;
pub mod booking_service;
pub mod category;
pub mod category_service;
pub mod dashboard;
pub mod dashboard_service;
pub mod error;
pub mod inquiry;
pub mod inquiry_service;
pub mod listing_service;
pub mod log_service;
pub mod login_service;
pub mod navigation;
pub mod payment;
pub mod ports;
pub mod profile_service;
pub mod record_id;
pub mod registration;
pub mod service_listing;
pub mod session;
pub mod task;
pub mod task_service;
pub mod vendor;

pub use self::activity_log::{LogEntry, LogKind};
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::booking::{
    Booking, BookingAction, BookingFilter, BookingStatus, BookingStatusUpdate,
};
pub use self::booking_service::BookingService;
pub use self::category::{
    Category, CategoryPurchase, CategoryTab, PaymentMethod, filter_categories, format_amount,
    mark_purchased,
};
pub use self::category_service::CategoryService;
pub use self::dashboard::{DashboardSnapshot, DashboardStats, RECENT_INQUIRY_LIMIT};
pub use self::dashboard_service::DashboardService;
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::inquiry::{Inquiry, InquiryFilter, InquiryStatus, InquiryStatusUpdate};
pub use self::inquiry_service::InquiryService;
pub use self::listing_service::ListingService;
pub use self::log_service::LogService;
pub use self::login_service::LoginService;
pub use self::navigation::{PaymentRouteParams, Route};
pub use self::payment::{
    CheckoutSettings, PaymentChoice, PaymentOutcome, PaymentService, PaymentSummary,
    UnknownPaymentChoice,
};
pub use self::profile_service::ProfileService;
pub use self::record_id::{RecordId, RecordIdValidationError};
pub use self::registration::{
    RegistrationPayload, RegistrationService, RegistrationWizard, WizardError, WizardStep,
};
pub use self::service_listing::{
    ListingDraft, ListingDraftError, ListingStatus, ListingStatusUpdate, NewListing,
    ServiceListing,
};
pub use self::session::{SessionStore, VENDOR_KEY};
pub use self::task::{
    NewTask, Task, TaskBoard, TaskDraft, TaskDraftError, TaskPriority, TaskStatus,
    TaskStatusUpdate,
};
pub use self::task_service::TaskService;
pub use self::vendor::{ProfileUpdate, ProfileUpdateRequest, Vendor, WorkingHoursUpdate};
