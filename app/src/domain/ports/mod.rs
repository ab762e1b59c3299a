//! Driven ports: the backend resources, the hosted checkout, and device
//! storage the domain talks to.

mod macros;
pub(crate) use macros::define_port_error;

mod api_error;
mod booking_api;
mod category_api;
mod checkout_gateway;
mod contact_api;
mod dashboard_api;
mod log_api;
mod payment_api;
mod property_api;
mod session_storage;
mod task_api;
mod vendor_api;

pub use api_error::ApiError;
#[cfg(test)]
pub use booking_api::MockBookingApi;
pub use booking_api::BookingApi;
#[cfg(test)]
pub use category_api::MockCategoryApi;
pub use category_api::CategoryApi;
#[cfg(test)]
pub use checkout_gateway::MockCheckoutGateway;
pub use checkout_gateway::{CheckoutCallback, CheckoutError, CheckoutGateway, CheckoutOptions};
#[cfg(test)]
pub use contact_api::MockContactApi;
pub use contact_api::ContactApi;
#[cfg(test)]
pub use dashboard_api::MockDashboardApi;
pub use dashboard_api::DashboardApi;
#[cfg(test)]
pub use log_api::MockLogApi;
pub use log_api::LogApi;
#[cfg(test)]
pub use payment_api::MockPaymentApi;
pub use payment_api::{CheckoutOrder, PaymentApi, PaymentVerification};
#[cfg(test)]
pub use property_api::MockPropertyApi;
pub use property_api::PropertyApi;
#[cfg(test)]
pub use session_storage::MockSessionStorage;
pub use session_storage::{SessionStorage, SessionStorageError};
#[cfg(test)]
pub use task_api::MockTaskApi;
pub use task_api::TaskApi;
#[cfg(test)]
pub use vendor_api::MockVendorApi;
pub use vendor_api::VendorApi;
