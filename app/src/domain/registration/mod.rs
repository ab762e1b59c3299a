//! Multi-step vendor registration.
//!
//! The wizard walks a fixed sequence of steps. Moving forward runs the
//! current step's validation; a failure leaves the wizard where it was and
//! names what is missing. Advancing from the last step yields the request
//! payload instead of moving.

mod form;
mod payload;
mod service;

use std::fmt;

pub use form::{
    BankDetails, BusinessType, Documents, PasswordPair, RegistrationForm, UnknownOptionError,
    Weekday,
};
pub use payload::{
    BankDetailPayload, DocumentsPayload, ExperiencePayload, PENDING_STATUS, RegistrationPayload,
    SecretText,
};
pub use service::{REGISTRATION_FAILED, RegistrationService, WizardProgress};

/// Registration steps in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WizardStep {
    /// Company, service type, category, owner.
    Basic,
    /// Phone, address, WhatsApp.
    Contact,
    /// Business type and identity numbers.
    Business,
    /// Bank account.
    Bank,
    /// Experience and working days.
    Experience,
    /// Optional uploads.
    Documents,
    /// Password and referral.
    Credentials,
}

impl WizardStep {
    /// Every step in order.
    pub const ALL: [Self; 7] = [
        Self::Basic,
        Self::Contact,
        Self::Business,
        Self::Bank,
        Self::Experience,
        Self::Documents,
        Self::Credentials,
    ];

    /// Zero-based position.
    pub const fn index(self) -> usize {
        match self {
            Self::Basic => 0,
            Self::Contact => 1,
            Self::Business => 2,
            Self::Bank => 3,
            Self::Experience => 4,
            Self::Documents => 5,
            Self::Credentials => 6,
        }
    }

    /// Heading shown above the step.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Basic => "Basic Info",
            Self::Contact => "Contact",
            Self::Business => "Business",
            Self::Bank => "Bank",
            Self::Experience => "Experience",
            Self::Documents => "Documents",
            Self::Credentials => "Credentials",
        }
    }

    /// The following step, `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The preceding step, `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        self.index()
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Completion percentage shown on the progress bar.
    pub fn progress_percent(self) -> f64 {
        let position = f64::from(u8::try_from(self.index() + 1).unwrap_or(u8::MAX));
        let total = f64::from(u8::try_from(Self::ALL.len()).unwrap_or(u8::MAX));
        position / total * 100.0
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Rule a step failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepRule {
    /// Required inputs were blank.
    #[error("Please fill all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// The WhatsApp question was not answered.
    #[error("Please indicate if you have WhatsApp")]
    WhatsappUnanswered,
    /// Account number and its confirmation differ.
    #[error("Account numbers do not match")]
    AccountNumberMismatch,
    /// No working day was selected.
    #[error("Please select at least one working day")]
    NoWorkingDays,
    /// Password blank or not confirmed.
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Validation failure that kept the wizard on `step`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{rule}")]
pub struct WizardError {
    step: WizardStep,
    rule: StepRule,
}

impl WizardError {
    /// Step that failed.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Rule that failed.
    pub fn rule(&self) -> &StepRule {
        &self.rule
    }

    /// Names of blank required inputs, empty for other rules.
    pub fn missing_fields(&self) -> &[&'static str] {
        match &self.rule {
            StepRule::MissingFields(fields) => fields.as_slice(),
            _ => &[],
        }
    }
}

/// Result of a successful [`RegistrationWizard::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The wizard moved to this step.
    Moved(WizardStep),
    /// The last step passed; send this payload.
    Submit(Box<RegistrationPayload>),
}

fn require(fields: &[(&'static str, &str)]) -> Result<(), StepRule> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(StepRule::MissingFields(missing))
    }
}

fn check_step(step: WizardStep, form: &RegistrationForm) -> Result<(), StepRule> {
    match step {
        WizardStep::Basic => require(&[
            ("Company Name", &form.company),
            ("Type of Service", &form.type_of_service),
            ("Owner Name", &form.name),
        ]),
        WizardStep::Contact => {
            require(&[("Phone", &form.phone), ("Address", &form.address)])?;
            if form.has_whatsapp().is_none() {
                return Err(StepRule::WhatsappUnanswered);
            }
            Ok(())
        }
        WizardStep::Business => {
            if form.business_type.is_none() {
                return Err(StepRule::MissingFields(vec!["Business Type"]));
            }
            Ok(())
        }
        WizardStep::Bank => {
            if !form.bank.account_numbers_match() {
                return Err(StepRule::AccountNumberMismatch);
            }
            Ok(())
        }
        WizardStep::Experience => {
            if form.working_days().is_empty() {
                return Err(StepRule::NoWorkingDays);
            }
            Ok(())
        }
        WizardStep::Documents => Ok(()),
        WizardStep::Credentials => {
            if !form.passwords.is_confirmed() {
                return Err(StepRule::PasswordMismatch);
            }
            Ok(())
        }
    }
}

/// Registration wizard state: the form plus the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationWizard {
    step: WizardStep,
    /// Values entered so far.
    pub form: RegistrationForm,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    /// Start on the first step with an empty form.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Basic,
            form: RegistrationForm::default(),
        }
    }

    /// Current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Completion percentage for the current step.
    pub fn progress_percent(&self) -> f64 {
        self.step.progress_percent()
    }

    /// Validate the current step and move forward.
    ///
    /// # Examples
    /// ```
    /// use vendor_app::domain::registration::{RegistrationWizard, WizardStep};
    ///
    /// let mut wizard = RegistrationWizard::new();
    /// let err = wizard.advance().expect_err("empty basic step");
    /// assert_eq!(err.step(), WizardStep::Basic);
    /// assert_eq!(wizard.step(), WizardStep::Basic);
    /// ```
    pub fn advance(&mut self) -> Result<StepOutcome, WizardError> {
        check_step(self.step, &self.form).map_err(|rule| WizardError {
            step: self.step,
            rule,
        })?;
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(StepOutcome::Moved(next))
            }
            None => Ok(StepOutcome::Submit(Box::new(RegistrationPayload::from(
                &self.form,
            )))),
        }
    }

    /// Move back one step; stays put on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }
}

#[cfg(test)]
mod tests;
