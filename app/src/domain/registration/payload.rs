//! Registration request body.
//!
//! The backend expects bank details twice (top-level fields and a nested
//! `bankDetail` object) and experience twice (a `totalYears` string and an
//! `experience` object). The form keeps one copy of each; this module writes
//! both shapes.

use std::fmt;

use serde::{Serialize, Serializer};
use zeroize::Zeroizing;

use super::form::RegistrationForm;
use crate::domain::RecordId;

/// Status every new registration starts in.
pub const PENDING_STATUS: &str = "pending";

/// Password text that serialises normally but never appears in debug
/// output.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretText(Zeroizing<String>);

impl SecretText {
    fn new(value: &str) -> Self {
        Self(Zeroizing::new(value.to_owned()))
    }
}

impl fmt::Debug for SecretText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl Serialize for SecretText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.as_str())
    }
}

/// Nested bank object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetailPayload {
    /// Account number.
    pub account_number: String,
    /// Branch IFSC, upper case.
    #[serde(rename = "IFSC")]
    pub ifsc: String,
    /// Name on the account.
    pub account_holder_name: String,
    /// Branch name.
    pub branch: String,
}

/// Nested experience object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePayload {
    /// Whole years of experience.
    pub total_years: u32,
    /// Specialisations; the app never collects any.
    pub fields: Vec<String>,
}

/// Attached documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsPayload {
    /// Address proof reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_proof: Option<String>,
    /// Photograph reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

/// Body of `POST /vendor/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    /// Company name.
    pub company: String,
    /// Type of service.
    pub type_of_service: String,
    /// Business description.
    pub description: String,
    /// Year of establishment.
    pub year_of_establishment: String,
    /// Owner name.
    pub name: String,
    /// Address.
    pub address: String,
    /// Area served.
    pub service_location: String,
    /// Primary phone.
    pub phone: String,
    /// Alternate phone.
    pub alternate_phone: String,
    /// WhatsApp number.
    pub whatsapp_number: String,
    /// Email.
    pub email: String,
    /// Business type label.
    pub business_type: String,
    /// GST registration.
    pub gst_number: String,
    /// PAN.
    pub pan: String,
    /// Aadhaar.
    pub adhar: String,
    /// Trade licence.
    pub trade_license: String,
    /// Bank name.
    pub bank_name: String,
    /// Name on the account.
    pub account_holder_name: String,
    /// Account number.
    pub account_number: String,
    /// Branch IFSC.
    pub ifsc_code: String,
    /// Nested bank object.
    pub bank_detail: BankDetailPayload,
    /// Years of experience as text.
    pub total_years: String,
    /// Staff headcount.
    pub number_of_staff: u32,
    /// Services offered.
    pub services_offered: String,
    /// Schedule string, e.g. `Mon, Wed | 9 AM - 7 PM`.
    pub working_days: String,
    /// Nested experience object.
    pub experience: ExperiencePayload,
    /// Attached documents, omitted when none were attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<DocumentsPayload>,
    /// Password.
    pub password: SecretText,
    /// Password confirmation.
    pub confirm_password: SecretText,
    /// Referral code.
    pub referral_code: String,
    /// Referrer name.
    pub referral_name: String,
    /// Selected category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RecordId>,
    /// Sub-category text.
    pub sub_category: String,
    /// Always [`PENDING_STATUS`].
    pub status: &'static str,
}

impl From<&RegistrationForm> for RegistrationPayload {
    fn from(form: &RegistrationForm) -> Self {
        let years = form.experience_years();
        let bank = &form.bank;
        let documents = (!form.documents.is_empty()).then(|| DocumentsPayload {
            address_proof: form.documents.address_proof.clone(),
            profile_photo: form.documents.profile_photo.clone(),
        });

        Self {
            company: form.company.clone(),
            type_of_service: form.type_of_service.clone(),
            description: form.description.clone(),
            year_of_establishment: form.year_of_establishment.clone(),
            name: form.name.clone(),
            address: form.address.clone(),
            service_location: form.service_location.clone(),
            phone: form.phone.clone(),
            alternate_phone: form.alternate_phone.clone(),
            whatsapp_number: form.whatsapp_number.clone(),
            email: form.email.clone(),
            business_type: form
                .business_type
                .map(|kind| kind.as_str().to_owned())
                .unwrap_or_default(),
            gst_number: form.gst_number.clone(),
            pan: form.pan.clone(),
            adhar: form.adhar.clone(),
            trade_license: form.trade_license.clone(),
            bank_name: bank.bank_name.clone(),
            account_holder_name: bank.account_holder_name.clone(),
            account_number: bank.account_number.clone(),
            ifsc_code: bank.ifsc().to_owned(),
            bank_detail: BankDetailPayload {
                account_number: bank.account_number.clone(),
                ifsc: bank.ifsc().to_owned(),
                account_holder_name: bank.account_holder_name.clone(),
                branch: bank.branch.clone(),
            },
            total_years: years.to_string(),
            number_of_staff: form.number_of_staff,
            services_offered: form.services_offered.clone(),
            working_days: form.schedule(),
            experience: ExperiencePayload {
                total_years: years,
                fields: Vec::new(),
            },
            documents,
            password: SecretText::new(form.passwords.password()),
            confirm_password: SecretText::new(form.passwords.confirm()),
            referral_code: form.referral_code.clone(),
            referral_name: form.referral_name.clone(),
            category: form.category.clone(),
            sub_category: form.sub_category.clone(),
            status: PENDING_STATUS,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::registration::{BusinessType, PasswordPair, Weekday};
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn form() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.company = "Rao Cleaners".to_owned();
        form.name = "Asha Rao".to_owned();
        form.phone = "9845000000".to_owned();
        form.business_type = Some(BusinessType::PrivateLimited);
        form.total_years = "6".to_owned();
        form.working_timings = "9 AM - 7 PM".to_owned();
        form.passwords = PasswordPair::new("s3cret", "s3cret");
        form.bank.bank_name = "State Bank".to_owned();
        form.bank.account_holder_name = "Asha Rao".to_owned();
        form.bank.account_number = "001122".to_owned();
        form.bank.branch = "Indiranagar".to_owned();
        form.set_ifsc("sbin0001");
        form.toggle_working_day(Weekday::Mon);
        form.toggle_working_day(Weekday::Wed);
        form
    }

    fn encode(form: &RegistrationForm) -> Value {
        serde_json::to_value(RegistrationPayload::from(form)).expect("encode payload")
    }

    #[rstest]
    fn bank_details_are_written_in_both_shapes(form: RegistrationForm) {
        let body = encode(&form);
        assert_eq!(body["bankName"], "State Bank");
        assert_eq!(body["accountNumber"], "001122");
        assert_eq!(body["ifscCode"], "SBIN0001");
        assert_eq!(
            body["bankDetail"],
            json!({
                "accountNumber": "001122",
                "IFSC": "SBIN0001",
                "accountHolderName": "Asha Rao",
                "branch": "Indiranagar"
            })
        );
    }

    #[rstest]
    fn experience_and_schedule_are_derived(form: RegistrationForm) {
        let body = encode(&form);
        assert_eq!(body["totalYears"], "6");
        assert_eq!(body["experience"], json!({ "totalYears": 6, "fields": [] }));
        assert_eq!(body["workingDays"], "Mon, Wed | 9 AM - 7 PM");
        assert_eq!(body["businessType"], "Private Limited");
        assert_eq!(body["status"], "pending");
        assert_eq!(body["password"], "s3cret");
    }

    #[rstest]
    fn documents_only_sent_when_attached(mut form: RegistrationForm) {
        assert!(encode(&form).get("documents").is_none());

        form.documents.profile_photo = Some("photo.jpg".to_owned());
        assert_eq!(encode(&form)["documents"], json!({ "profilePhoto": "photo.jpg" }));
    }

    #[rstest]
    fn debug_output_hides_passwords(form: RegistrationForm) {
        let payload = RegistrationPayload::from(&form);
        assert!(!format!("{payload:?}").contains("s3cret"));
    }
}
