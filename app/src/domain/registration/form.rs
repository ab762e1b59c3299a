//! Registration form state and the per-field helpers the wizard screens use.

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroizing;

use crate::domain::{Category, RecordId};

/// Legal structure of the vendor's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessType {
    /// Sole proprietorship.
    Proprietorship,
    /// Partnership firm.
    Partnership,
    /// Limited liability partnership.
    Llp,
    /// Private limited company.
    PrivateLimited,
    /// Anything else.
    Other,
}

impl BusinessType {
    /// Every option, in picker order.
    pub const ALL: [Self; 5] = [
        Self::Proprietorship,
        Self::Partnership,
        Self::Llp,
        Self::PrivateLimited,
        Self::Other,
    ];

    /// Label sent to the backend.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proprietorship => "Proprietorship",
            Self::Partnership => "Partnership",
            Self::Llp => "LLP",
            Self::PrivateLimited => "Private Limited",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text names no known option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownOptionError {
    kind: &'static str,
    value: String,
}

impl FromStr for BusinessType {
    type Err = UnknownOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownOptionError {
                kind: "business type",
                value: value.to_owned(),
            })
    }
}

/// Day of the working week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl Weekday {
    /// Every day, in picker order.
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Three-letter label used in the schedule string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl FromStr for Weekday {
    type Err = UnknownOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownOptionError {
                kind: "weekday",
                value: value.to_owned(),
            })
    }
}

/// Bank account details, held once and mapped to both backend shapes when
/// the payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankDetails {
    /// Bank name.
    pub bank_name: String,
    /// Name on the account.
    pub account_holder_name: String,
    /// Account number.
    pub account_number: String,
    /// Account number typed a second time.
    pub confirm_account_number: String,
    /// IFSC, always upper case.
    ifsc: String,
    /// Branch name.
    pub branch: String,
}

impl BankDetails {
    /// Branch IFSC code.
    pub fn ifsc(&self) -> &str {
        self.ifsc.as_str()
    }

    /// Set the IFSC, upper-casing it.
    pub fn set_ifsc(&mut self, ifsc: &str) {
        self.ifsc = ifsc.trim().to_uppercase();
    }

    /// Whether both account number entries agree.
    pub fn account_numbers_match(&self) -> bool {
        self.account_number == self.confirm_account_number
    }
}

/// Optional document uploads, as file references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documents {
    /// Address proof such as a utility bill.
    pub address_proof: Option<String>,
    /// Recent photograph.
    pub profile_photo: Option<String>,
}

impl Documents {
    /// Whether any document was attached.
    pub fn is_empty(&self) -> bool {
        self.address_proof.is_none() && self.profile_photo.is_none()
    }
}

/// Account password pair. Debug output never shows the values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordPair {
    password: Zeroizing<String>,
    confirm: Zeroizing<String>,
}

impl PasswordPair {
    /// Build a pair from the two password inputs.
    pub fn new(password: &str, confirm: &str) -> Self {
        Self {
            password: Zeroizing::new(password.to_owned()),
            confirm: Zeroizing::new(confirm.to_owned()),
        }
    }

    /// Chosen password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Confirmation entry.
    pub fn confirm(&self) -> &str {
        self.confirm.as_str()
    }

    /// Non-empty and confirmed.
    pub fn is_confirmed(&self) -> bool {
        !self.password.is_empty() && self.password == self.confirm
    }
}

impl fmt::Debug for PasswordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordPair")
            .field("password", &"<redacted>")
            .field("confirm", &"<redacted>")
            .finish()
    }
}

/// Everything collected across the registration steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Registered company name.
    pub company: String,
    /// Free-text type of service.
    pub type_of_service: String,
    /// Business description.
    pub description: String,
    /// Selected category id.
    pub category: Option<RecordId>,
    /// Selected category name, for display.
    pub category_name: String,
    /// Sub-category auto-filled from the selected category.
    pub sub_category: String,
    /// Year the business was established.
    pub year_of_establishment: String,
    /// Owner or authorised person.
    pub name: String,

    /// Contact email.
    pub email: String,
    /// Primary phone.
    pub phone: String,
    /// Alternate phone.
    pub alternate_phone: String,
    /// WhatsApp number.
    pub whatsapp_number: String,
    has_whatsapp: Option<bool>,
    /// Business address.
    pub address: String,
    /// Area served.
    pub service_location: String,

    /// Legal structure.
    pub business_type: Option<BusinessType>,
    /// Aadhaar number.
    pub adhar: String,
    /// PAN.
    pub pan: String,
    /// GST registration.
    pub gst_number: String,
    /// Trade licence number.
    pub trade_license: String,

    /// Bank account.
    pub bank: BankDetails,

    /// Years of experience as typed.
    pub total_years: String,
    /// Staff headcount.
    pub number_of_staff: u32,
    /// Services offered, free text.
    pub services_offered: String,
    working_days: Vec<Weekday>,
    /// Working hours, e.g. `9 AM - 7 PM`.
    pub working_timings: String,

    /// Optional uploads.
    pub documents: Documents,

    /// Account password.
    pub passwords: PasswordPair,
    /// Referral code.
    pub referral_code: String,
    /// Name of the referrer.
    pub referral_name: String,
}

impl RegistrationForm {
    /// Select the service category, auto-filling its sub-category.
    pub fn select_category(&mut self, category: &Category) {
        self.category = Some(category.id.clone());
        self.category_name = category.name.clone();
        self.sub_category = category.sub_category();
    }

    /// Answer "do you have WhatsApp on this number?". Yes copies the phone
    /// number, no clears the WhatsApp number.
    pub fn set_has_whatsapp(&mut self, has_whatsapp: bool) {
        self.has_whatsapp = Some(has_whatsapp);
        self.whatsapp_number = if has_whatsapp {
            self.phone.clone()
        } else {
            String::new()
        };
    }

    /// WhatsApp answer, `None` until answered.
    pub fn has_whatsapp(&self) -> Option<bool> {
        self.has_whatsapp
    }

    /// Add `day` when absent, remove it when present. Selection order is
    /// kept.
    pub fn toggle_working_day(&mut self, day: Weekday) {
        if let Some(position) = self.working_days.iter().position(|selected| *selected == day) {
            self.working_days.remove(position);
        } else {
            self.working_days.push(day);
        }
    }

    /// Selected working days in selection order.
    pub fn working_days(&self) -> &[Weekday] {
        &self.working_days
    }

    /// Set the branch IFSC, upper-cased.
    pub fn set_ifsc(&mut self, ifsc: &str) {
        self.bank.set_ifsc(ifsc);
    }

    /// Schedule string sent as `workingDays`.
    ///
    /// # Examples
    /// ```
    /// use vendor_app::domain::registration::{RegistrationForm, Weekday};
    ///
    /// let mut form = RegistrationForm::default();
    /// form.toggle_working_day(Weekday::Mon);
    /// form.toggle_working_day(Weekday::Wed);
    /// form.working_timings = "9 AM - 7 PM".to_owned();
    /// assert_eq!(form.schedule(), "Mon, Wed | 9 AM - 7 PM");
    /// ```
    pub fn schedule(&self) -> String {
        if self.working_days.is_empty() {
            return String::new();
        }
        let days: Vec<&str> = self.working_days.iter().map(|day| day.as_str()).collect();
        format!("{} | {}", days.join(", "), self.working_timings)
    }

    /// Years of experience as a number. Leading digits are read and anything
    /// unreadable counts as zero.
    pub fn experience_years(&self) -> u32 {
        let digits: String = self
            .total_years
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().unwrap_or(0)
    }
}
