//! In-memory marketplace backend and checkout shared by the integration
//! tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use vendor_app::domain::ports::{
    ApiError, BookingApi, CategoryApi, CheckoutCallback, CheckoutError, CheckoutGateway,
    CheckoutOptions, CheckoutOrder, ContactApi, DashboardApi, LogApi, PaymentApi,
    PaymentVerification, PropertyApi, TaskApi, VendorApi,
};
use vendor_app::domain::{
    Booking, BookingStatusUpdate, Category, CategoryPurchase, DashboardStats, Inquiry,
    InquiryStatusUpdate, ListingStatusUpdate, LogEntry, LoginCredentials, NewListing, NewTask,
    ProfileUpdate, ProfileUpdateRequest, RecordId, RegistrationPayload, ServiceListing, Task,
    TaskStatusUpdate, Vendor, WorkingHoursUpdate,
};

pub const EMAIL: &str = "asha@example.com";
pub const PASSWORD: &str = "secret";

fn decode<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("fixture decodes")
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().expect("fake backend lock poisoned")
}

/// Backend double holding every resource in memory.
pub struct FakeBackend {
    pub vendor: Mutex<Vendor>,
    pub registrations: Mutex<Vec<Value>>,
    pub categories: Vec<Category>,
    pub purchases: Mutex<Vec<CategoryPurchase>>,
    pub listings: Mutex<Vec<ServiceListing>>,
    pub inquiries: Mutex<Vec<Inquiry>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub tasks: Mutex<Vec<Task>>,
    pub verifications: Mutex<Vec<PaymentVerification>>,
    pub schedules: Mutex<Vec<String>>,
    next_id: Mutex<u32>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            vendor: Mutex::new(decode(json!({
                "_id": "v1",
                "name": "Asha Rao",
                "email": EMAIL,
                "phone": "9845000000",
                "company": "Sparkle Cleaners"
            }))),
            registrations: Mutex::default(),
            categories: decode(json!([
                { "_id": "c1", "name": "Cleaning", "price": 499, "autoFilled": "Deep cleaning" },
                { "_id": "c2", "name": "Plumbing", "price": 699 }
            ])),
            purchases: Mutex::default(),
            listings: Mutex::default(),
            inquiries: Mutex::new(decode(json!([
                { "_id": "q1", "customerName": "Meera", "message": "Need a quote", "status": "new" },
                { "_id": "q2", "customerName": "Ravi", "message": "Thanks", "status": "replied" }
            ]))),
            bookings: Mutex::new(decode(json!([
                { "_id": "b1", "customerName": "Meera", "serviceName": "Sofa", "amount": 799, "status": "pending" },
                { "_id": "b2", "customerName": "Ravi", "serviceName": "Kitchen", "amount": 1499, "status": "completed" }
            ]))),
            tasks: Mutex::default(),
            verifications: Mutex::default(),
            schedules: Mutex::default(),
            next_id: Mutex::new(0),
        }
    }
}

impl FakeBackend {
    fn fresh_id(&self, prefix: &str) -> RecordId {
        let mut next = lock(&self.next_id);
        *next += 1;
        RecordId::new(format!("{prefix}{next}")).expect("generated id")
    }

    fn set_status<T, F>(items: &Mutex<Vec<T>>, id: &RecordId, apply: F) -> Result<(), ApiError>
    where
        F: FnOnce(&mut T),
        T: HasId,
    {
        let mut items = lock(items);
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| ApiError::rejected(404_u16, "Record not found"))?;
        apply(item);
        Ok(())
    }
}

trait HasId {
    fn id(&self) -> &RecordId;
}

impl HasId for Booking {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl HasId for Inquiry {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl HasId for Task {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl HasId for ServiceListing {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[async_trait]
impl VendorApi for FakeBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<Vendor, ApiError> {
        if credentials.email() == EMAIL && credentials.password() == PASSWORD {
            Ok(lock(&self.vendor).clone())
        } else {
            Err(ApiError::rejected(401_u16, "Invalid credentials"))
        }
    }

    async fn register(&self, payload: &RegistrationPayload) -> Result<Vendor, ApiError> {
        let body = serde_json::to_value(payload).expect("payload encodes");
        let vendor = decode(json!({
            "_id": "v-new",
            "name": body["name"],
            "phone": body["phone"],
            "company": body["company"],
            "status": "pending"
        }));
        lock(&self.registrations).push(body);
        Ok(vendor)
    }

    async fn get_vendor(&self, vendor_id: &RecordId) -> Result<Vendor, ApiError> {
        let vendor = lock(&self.vendor).clone();
        if &vendor.id == vendor_id {
            Ok(vendor)
        } else {
            Err(ApiError::rejected(404_u16, "Vendor not found"))
        }
    }

    async fn update_vendor(
        &self,
        _vendor_id: &RecordId,
        update: &ProfileUpdate,
    ) -> Result<Vendor, ApiError> {
        let mut vendor = lock(&self.vendor);
        vendor.name.clone_from(&update.name);
        vendor.phone.clone_from(&update.phone);
        vendor.business_name = Some(update.business_name.clone());
        Ok(vendor.clone())
    }

    async fn update_working_hours(
        &self,
        _vendor_id: &RecordId,
        update: &WorkingHoursUpdate,
    ) -> Result<(), ApiError> {
        lock(&self.schedules).push(update.working_days.clone());
        Ok(())
    }

    async fn request_profile_update(&self, _request: &ProfileUpdateRequest) -> Result<(), ApiError> {
        Ok(())
    }
}

#[async_trait]
impl CategoryApi for FakeBackend {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.categories.clone())
    }

    async fn purchased_categories(&self, vendor_id: &RecordId) -> Result<Vec<Category>, ApiError> {
        let purchases = lock(&self.purchases);
        Ok(self
            .categories
            .iter()
            .filter(|category| {
                purchases.iter().any(|purchase| {
                    &purchase.vendor_id == vendor_id && purchase.category_id == category.id
                })
            })
            .cloned()
            .collect())
    }

    async fn purchase_category(&self, purchase: &CategoryPurchase) -> Result<(), ApiError> {
        lock(&self.purchases).push(purchase.clone());
        Ok(())
    }
}

#[async_trait]
impl PropertyApi for FakeBackend {
    async fn vendor_properties(&self, _vendor_id: &RecordId) -> Result<Vec<ServiceListing>, ApiError> {
        Ok(lock(&self.listings).clone())
    }

    async fn create_property(&self, listing: &NewListing) -> Result<(), ApiError> {
        let mut body = serde_json::to_value(listing).expect("listing encodes");
        body["_id"] = json!(self.fresh_id("s").to_string());
        lock(&self.listings).push(decode(body));
        Ok(())
    }

    async fn update_property_status(
        &self,
        property_id: &RecordId,
        update: &ListingStatusUpdate,
    ) -> Result<(), ApiError> {
        Self::set_status(&self.listings, property_id, |listing| listing.status = update.status)
    }

    async fn delete_property(&self, property_id: &RecordId) -> Result<(), ApiError> {
        lock(&self.listings).retain(|listing| &listing.id != property_id);
        Ok(())
    }
}

#[async_trait]
impl ContactApi for FakeBackend {
    async fn vendor_contacts(&self, _vendor_id: &RecordId) -> Result<Vec<Inquiry>, ApiError> {
        Ok(lock(&self.inquiries).clone())
    }

    async fn update_contact_status(
        &self,
        inquiry_id: &RecordId,
        update: &InquiryStatusUpdate,
    ) -> Result<(), ApiError> {
        Self::set_status(&self.inquiries, inquiry_id, |inquiry| inquiry.status = update.status)
    }
}

#[async_trait]
impl BookingApi for FakeBackend {
    async fn vendor_bookings(&self, _vendor_id: &RecordId) -> Result<Vec<Booking>, ApiError> {
        Ok(lock(&self.bookings).clone())
    }

    async fn update_booking_status(
        &self,
        booking_id: &RecordId,
        update: &BookingStatusUpdate,
    ) -> Result<(), ApiError> {
        Self::set_status(&self.bookings, booking_id, |booking| booking.status = update.status)
    }
}

#[async_trait]
impl TaskApi for FakeBackend {
    async fn vendor_tasks(&self, _vendor_id: &RecordId) -> Result<Vec<Task>, ApiError> {
        Ok(lock(&self.tasks).clone())
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        let mut body = serde_json::to_value(task).expect("task encodes");
        body["_id"] = json!(self.fresh_id("t").to_string());
        lock(&self.tasks).push(decode(body));
        Ok(())
    }

    async fn update_task_status(
        &self,
        task_id: &RecordId,
        update: &TaskStatusUpdate,
    ) -> Result<(), ApiError> {
        Self::set_status(&self.tasks, task_id, |task| task.status = update.status)
    }

    async fn delete_task(&self, task_id: &RecordId, _vendor_id: &RecordId) -> Result<(), ApiError> {
        lock(&self.tasks).retain(|task| &task.id != task_id);
        Ok(())
    }
}

#[async_trait]
impl LogApi for FakeBackend {
    async fn vendor_logs(&self, _vendor_id: &RecordId) -> Result<Vec<LogEntry>, ApiError> {
        Ok(decode(json!([
            { "_id": "l1", "action": "VENDOR_LOGIN", "details": "Signed in", "timestamp": "2024-05-01T10:00:00Z" }
        ])))
    }
}

#[async_trait]
impl DashboardApi for FakeBackend {
    async fn vendor_stats(&self, _vendor_id: &RecordId) -> Result<DashboardStats, ApiError> {
        Ok(decode(json!({
            "totalServices": lock(&self.listings).len(),
            "totalBookings": lock(&self.bookings).len(),
            "totalEarnings": 2298
        })))
    }
}

#[async_trait]
impl PaymentApi for FakeBackend {
    async fn capture_payment(&self, _amount: f64) -> Result<Option<CheckoutOrder>, ApiError> {
        Ok(Some(CheckoutOrder {
            id: "order_1".to_owned(),
            amount: 49_900,
            currency: "INR".to_owned(),
        }))
    }

    async fn verify_payment(&self, verification: &PaymentVerification) -> Result<bool, ApiError> {
        lock(&self.verifications).push(verification.clone());
        Ok(verification.razorpay_signature == "sig_ok")
    }
}

/// Checkout that answers immediately with a fixed callback.
pub struct InstantCheckout {
    pub signature: &'static str,
}

#[async_trait]
impl CheckoutGateway for InstantCheckout {
    async fn open(&self, options: &CheckoutOptions) -> Result<CheckoutCallback, CheckoutError> {
        Ok(CheckoutCallback {
            payment_id: "pay_1".to_owned(),
            order_id: options.order.id.clone(),
            signature: self.signature.to_owned(),
        })
    }
}
