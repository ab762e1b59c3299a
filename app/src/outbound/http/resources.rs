//! Port implementations: one block per backend resource.

use async_trait::async_trait;
use serde::Serialize;

use super::HttpBackend;
use super::dto::{decode_list, decode_order, decode_record, decode_success};
use crate::domain::ports::{
    ApiError, BookingApi, CategoryApi, CheckoutOrder, ContactApi, DashboardApi, LogApi,
    PaymentApi, PaymentVerification, PropertyApi, TaskApi, VendorApi,
};
use crate::domain::{
    Booking, BookingStatusUpdate, Category, CategoryPurchase, DashboardStats, Inquiry,
    InquiryStatusUpdate, ListingStatusUpdate, LogEntry, LoginCredentials, NewListing, NewTask,
    ProfileUpdate, ProfileUpdateRequest, RecordId, RegistrationPayload, ServiceListing, Task,
    TaskStatusUpdate, Vendor, WorkingHoursUpdate,
};

const VENDOR_KEYS: &[&str] = &["user", "vendor"];

#[derive(Serialize)]
struct VendorFilter<'a> {
    vendor: &'a RecordId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VendorScope<'a> {
    vendor_id: &'a RecordId,
}

#[derive(Serialize)]
struct CaptureRequest {
    amount: f64,
}

#[async_trait]
impl VendorApi for HttpBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<Vendor, ApiError> {
        let body = self.post(&["vendor", "login"], credentials).await?;
        decode_record(&body, VENDOR_KEYS, "vendor")
    }

    async fn register(&self, payload: &RegistrationPayload) -> Result<Vendor, ApiError> {
        let body = self.post(&["vendor", "register"], payload).await?;
        decode_record(&body, VENDOR_KEYS, "vendor")
    }

    async fn get_vendor(&self, vendor_id: &RecordId) -> Result<Vendor, ApiError> {
        let body = self.get(&["vendor", "get", vendor_id.as_ref()]).await?;
        decode_record(&body, VENDOR_KEYS, "vendor")
    }

    async fn update_vendor(
        &self,
        vendor_id: &RecordId,
        update: &ProfileUpdate,
    ) -> Result<Vendor, ApiError> {
        let body = self
            .put(&["vendor", "update", vendor_id.as_ref()], update)
            .await?;
        decode_record(&body, VENDOR_KEYS, "vendor")
    }

    async fn update_working_hours(
        &self,
        vendor_id: &RecordId,
        update: &WorkingHoursUpdate,
    ) -> Result<(), ApiError> {
        self.put(&["vendor", "working-hours", vendor_id.as_ref()], update)
            .await?;
        Ok(())
    }

    async fn request_profile_update(&self, request: &ProfileUpdateRequest) -> Result<(), ApiError> {
        self.post(&["vendor", "request-update"], request).await?;
        Ok(())
    }
}

#[async_trait]
impl CategoryApi for HttpBackend {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let body = self.get(&["category", "getAll"]).await?;
        decode_list(&body, "categories")
    }

    async fn purchased_categories(&self, vendor_id: &RecordId) -> Result<Vec<Category>, ApiError> {
        let body = self
            .get(&["category", "purchased", vendor_id.as_ref()])
            .await?;
        decode_list(&body, "categories")
    }

    async fn purchase_category(&self, purchase: &CategoryPurchase) -> Result<(), ApiError> {
        self.post(&["category", "purchase"], purchase).await?;
        Ok(())
    }
}

#[async_trait]
impl PropertyApi for HttpBackend {
    async fn vendor_properties(
        &self,
        vendor_id: &RecordId,
    ) -> Result<Vec<ServiceListing>, ApiError> {
        let filter = VendorFilter { vendor: vendor_id };
        let body = self
            .post(&["property", "get-vendor-property"], &filter)
            .await?;
        decode_list(&body, "properties")
    }

    async fn create_property(&self, listing: &NewListing) -> Result<(), ApiError> {
        self.post(&["property", "create"], listing).await?;
        Ok(())
    }

    async fn update_property_status(
        &self,
        property_id: &RecordId,
        update: &ListingStatusUpdate,
    ) -> Result<(), ApiError> {
        self.put(&["property", "update-status", property_id.as_ref()], update)
            .await?;
        Ok(())
    }

    async fn delete_property(&self, property_id: &RecordId) -> Result<(), ApiError> {
        self.delete::<()>(&["property", "delete", property_id.as_ref()], None)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ContactApi for HttpBackend {
    async fn vendor_contacts(&self, vendor_id: &RecordId) -> Result<Vec<Inquiry>, ApiError> {
        let body = self.get(&["contact", "getAll", vendor_id.as_ref()]).await?;
        decode_list(&body, "contacts")
    }

    async fn update_contact_status(
        &self,
        inquiry_id: &RecordId,
        update: &InquiryStatusUpdate,
    ) -> Result<(), ApiError> {
        self.put(&["contact", "update-status", inquiry_id.as_ref()], update)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl BookingApi for HttpBackend {
    async fn vendor_bookings(&self, vendor_id: &RecordId) -> Result<Vec<Booking>, ApiError> {
        let body = self.get(&["booking", "get", vendor_id.as_ref()]).await?;
        decode_list(&body, "bookings")
    }

    async fn update_booking_status(
        &self,
        booking_id: &RecordId,
        update: &BookingStatusUpdate,
    ) -> Result<(), ApiError> {
        self.put(&["booking", "update", booking_id.as_ref()], update)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl TaskApi for HttpBackend {
    async fn vendor_tasks(&self, vendor_id: &RecordId) -> Result<Vec<Task>, ApiError> {
        let body = self.get(&["task", "get", vendor_id.as_ref()]).await?;
        decode_list(&body, "tasks")
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        self.post(&["task", "create"], task).await?;
        Ok(())
    }

    async fn update_task_status(
        &self,
        task_id: &RecordId,
        update: &TaskStatusUpdate,
    ) -> Result<(), ApiError> {
        self.put(&["task", "update", task_id.as_ref()], update)
            .await?;
        Ok(())
    }

    async fn delete_task(&self, task_id: &RecordId, vendor_id: &RecordId) -> Result<(), ApiError> {
        let scope = VendorScope { vendor_id };
        self.delete(&["task", "delete", task_id.as_ref()], Some(&scope))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl LogApi for HttpBackend {
    async fn vendor_logs(&self, vendor_id: &RecordId) -> Result<Vec<LogEntry>, ApiError> {
        let body = self.get(&["log", "get", vendor_id.as_ref()]).await?;
        decode_list(&body, "logs")
    }
}

#[async_trait]
impl DashboardApi for HttpBackend {
    async fn vendor_stats(&self, vendor_id: &RecordId) -> Result<DashboardStats, ApiError> {
        let body = self
            .get(&["dashboard", "vendor-stats", vendor_id.as_ref()])
            .await?;
        decode_record(&body, &[], "dashboard stats")
    }
}

#[async_trait]
impl PaymentApi for HttpBackend {
    async fn capture_payment(&self, amount: f64) -> Result<Option<CheckoutOrder>, ApiError> {
        let body = self
            .post(&["razorpay", "capturePayment"], &CaptureRequest { amount })
            .await?;
        decode_order(&body)
    }

    async fn verify_payment(&self, verification: &PaymentVerification) -> Result<bool, ApiError> {
        let body = self
            .post(&["razorpay", "verifyPayment"], verification)
            .await?;
        decode_success(&body)
    }
}
