//! Registration wizard driver: interactive prompts or an answers file.

use std::io::{BufRead, Write};
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use super::CliError;
use super::prompt::{BACK, Prompt};
use crate::domain::ports::{CategoryApi, SessionStorage, VendorApi};
use crate::domain::registration::{
    BusinessType, PasswordPair, RegistrationForm, RegistrationService, RegistrationWizard,
    WizardProgress, WizardStep, Weekday,
};
use crate::domain::{Category, ErrorCode, PaymentRouteParams, Route};

enum Flow {
    Next,
    Back,
}

/// Every wizard answer, as read from an answers file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct RegistrationAnswers {
    company: String,
    type_of_service: String,
    description: String,
    category: Option<String>,
    year_of_establishment: String,
    name: String,
    email: String,
    phone: String,
    alternate_phone: String,
    has_whatsapp: Option<bool>,
    address: String,
    service_location: String,
    business_type: Option<String>,
    adhar: String,
    pan: String,
    gst_number: String,
    trade_license: String,
    bank_name: String,
    account_holder_name: String,
    account_number: String,
    confirm_account_number: String,
    ifsc_code: String,
    branch: String,
    total_years: String,
    number_of_staff: u32,
    services_offered: String,
    working_days: Vec<String>,
    working_timings: String,
    address_proof: Option<String>,
    profile_photo: Option<String>,
    password: String,
    confirm_password: String,
    referral_code: String,
    referral_name: String,
}

impl RegistrationAnswers {
    /// Read answers from a JSON file.
    pub(super) fn read(path: &Path) -> Result<Self, CliError> {
        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| CliError::invalid_input("answers", "path must name a file"))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        let text = dir.read_to_string(file_name)?;
        serde_json::from_str(&text).map_err(|err| CliError::invalid_input("answers", err))
    }

    fn apply(self, form: &mut RegistrationForm, categories: &[Category]) -> Result<(), CliError> {
        form.company = self.company;
        form.type_of_service = self.type_of_service;
        form.description = self.description;
        if let Some(wanted) = self.category {
            let category = categories
                .iter()
                .find(|category| category.id.as_ref() == wanted)
                .ok_or_else(|| CliError::invalid_input("category", format!("unknown id {wanted}")))?;
            form.select_category(category);
        }
        form.year_of_establishment = self.year_of_establishment;
        form.name = self.name;
        form.email = self.email;
        form.phone = self.phone;
        form.alternate_phone = self.alternate_phone;
        if let Some(has_whatsapp) = self.has_whatsapp {
            form.set_has_whatsapp(has_whatsapp);
        }
        form.address = self.address;
        form.service_location = self.service_location;
        form.business_type = self
            .business_type
            .map(|value| value.parse::<BusinessType>())
            .transpose()
            .map_err(|err| CliError::invalid_input("businessType", err))?;
        form.adhar = self.adhar;
        form.pan = self.pan;
        form.gst_number = self.gst_number;
        form.trade_license = self.trade_license;
        form.bank.bank_name = self.bank_name;
        form.bank.account_holder_name = self.account_holder_name;
        form.bank.account_number = self.account_number;
        form.bank.confirm_account_number = self.confirm_account_number;
        form.set_ifsc(&self.ifsc_code);
        form.bank.branch = self.branch;
        form.total_years = self.total_years;
        form.number_of_staff = self.number_of_staff;
        form.services_offered = self.services_offered;
        set_working_days(form, &self.working_days)?;
        form.working_timings = self.working_timings;
        form.documents.address_proof = self.address_proof;
        form.documents.profile_photo = self.profile_photo;
        form.passwords = PasswordPair::new(&self.password, &self.confirm_password);
        form.referral_code = self.referral_code;
        form.referral_name = self.referral_name;
        Ok(())
    }
}

fn set_working_days<S: AsRef<str>>(form: &mut RegistrationForm, days: &[S]) -> Result<(), CliError> {
    let parsed = days
        .iter()
        .map(|day| day.as_ref().parse::<Weekday>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| CliError::invalid_input("working days", err))?;
    for selected in form.working_days().to_vec() {
        form.toggle_working_day(selected);
    }
    for day in parsed {
        if !form.working_days().contains(&day) {
            form.toggle_working_day(day);
        }
    }
    Ok(())
}

fn payment_params(progress: WizardProgress) -> Result<Option<PaymentRouteParams>, CliError> {
    match progress {
        WizardProgress::Moved(_) => Ok(None),
        WizardProgress::Registered(Route::Payment(params)) => Ok(Some(params)),
        WizardProgress::Registered(other) => Err(CliError::invalid_input(
            "registration",
            format!("unexpected route {other:?}"),
        )),
    }
}

/// Fill the whole form from `answers` and walk every step.
pub(super) async fn register_from_answers<V, C, S>(
    service: &RegistrationService<V, C, S>,
    answers: RegistrationAnswers,
) -> Result<PaymentRouteParams, CliError>
where
    V: VendorApi,
    C: CategoryApi,
    S: SessionStorage,
{
    let categories = service.load_categories().await?;
    let mut wizard = RegistrationWizard::new();
    answers.apply(&mut wizard.form, &categories)?;
    loop {
        let progress = service.next(&mut wizard, &categories).await?;
        if let Some(params) = payment_params(progress)? {
            return Ok(params);
        }
    }
}

/// Ask each step's questions until the backend accepts the registration.
///
/// Validation failures are shown and the same step is asked again; `<` as
/// the first answer of a step goes back one step.
pub(super) async fn register_interactively<V, C, S, R, W>(
    service: &RegistrationService<V, C, S>,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<PaymentRouteParams, CliError>
where
    V: VendorApi,
    C: CategoryApi,
    S: SessionStorage,
    R: BufRead,
    W: Write,
{
    let categories = service.load_categories().await?;
    let mut wizard = RegistrationWizard::new();
    loop {
        let step = wizard.step();
        prompt.say(&format!(
            "\nStep {} of {}: {step} ({:.0}%)",
            step.index() + 1,
            WizardStep::ALL.len(),
            wizard.progress_percent()
        ))?;
        if matches!(fill_step(step, &mut wizard.form, &categories, prompt)?, Flow::Back) {
            wizard.back();
            continue;
        }
        match service.next(&mut wizard, &categories).await {
            Ok(progress) => {
                if let Some(params) = payment_params(progress)? {
                    return Ok(params);
                }
            }
            Err(err) if err.code() == ErrorCode::InvalidRequest => prompt.say(err.message())?,
            Err(err) => return Err(err.into()),
        }
    }
}

fn first_answer<R: BufRead, W: Write>(
    prompt: &mut Prompt<'_, R, W>,
    label: &str,
    current: &str,
) -> Result<Option<String>, CliError> {
    let answer = prompt.ask_or_keep(label, current)?;
    Ok((answer != BACK).then_some(answer))
}

fn fill_step<R: BufRead, W: Write>(
    step: WizardStep,
    form: &mut RegistrationForm,
    categories: &[Category],
    prompt: &mut Prompt<'_, R, W>,
) -> Result<Flow, CliError> {
    match step {
        WizardStep::Basic => fill_basic(form, categories, prompt),
        WizardStep::Contact => fill_contact(form, prompt),
        WizardStep::Business => fill_business(form, prompt),
        WizardStep::Bank => fill_bank(form, prompt),
        WizardStep::Experience => fill_experience(form, prompt),
        WizardStep::Documents => fill_documents(form, prompt),
        WizardStep::Credentials => fill_credentials(form, prompt),
    }
}

fn fill_basic<R: BufRead, W: Write>(
    form: &mut RegistrationForm,
    categories: &[Category],
    prompt: &mut Prompt<'_, R, W>,
) -> Result<Flow, CliError> {
    let Some(company) = first_answer(prompt, "Company name", &form.company)? else {
        return Ok(Flow::Back);
    };
    form.company = company;
    form.type_of_service = prompt.ask_or_keep("Type of service", &form.type_of_service)?;
    form.name = prompt.ask_or_keep("Owner name", &form.name)?;
    form.description = prompt.ask_or_keep("Description", &form.description)?;
    if !categories.is_empty() {
        if let Some(category) = prompt.choose("Category number", categories, Category::label)? {
            form.select_category(category);
        }
    }
    form.year_of_establishment =
        prompt.ask_or_keep("Year of establishment", &form.year_of_establishment)?;
    Ok(Flow::Next)
}

fn fill_contact<R: BufRead, W: Write>(
    form: &mut RegistrationForm,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<Flow, CliError> {
    let Some(email) = first_answer(prompt, "Email", &form.email)? else {
        return Ok(Flow::Back);
    };
    form.email = email;
    form.phone = prompt.ask_or_keep("Phone", &form.phone)?;
    form.alternate_phone = prompt.ask_or_keep("Alternate phone", &form.alternate_phone)?;
    if let Some(has_whatsapp) = prompt.ask_yes_no("WhatsApp on this number?")? {
        form.set_has_whatsapp(has_whatsapp);
    }
    form.address = prompt.ask_or_keep("Address", &form.address)?;
    form.service_location = prompt.ask_or_keep("Service location", &form.service_location)?;
    Ok(Flow::Next)
}

fn fill_business<R: BufRead, W: Write>(
    form: &mut RegistrationForm,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<Flow, CliError> {
    for (position, option) in BusinessType::ALL.iter().enumerate() {
        writeln!(prompt.writer(), "  {}. {option}", position + 1)?;
    }
    let answer = prompt.ask("Business type (number or name)")?;
    if answer == BACK {
        return Ok(Flow::Back);
    }
    let picked = answer
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| BusinessType::ALL.get(index).copied())
        .or_else(|| answer.parse().ok());
    if picked.is_some() {
        form.business_type = picked;
    }
    form.adhar = prompt.ask_or_keep("Aadhaar number", &form.adhar)?;
    form.pan = prompt.ask_or_keep("PAN", &form.pan)?;
    form.gst_number = prompt.ask_or_keep("GST number", &form.gst_number)?;
    form.trade_license = prompt.ask_or_keep("Trade license", &form.trade_license)?;
    Ok(Flow::Next)
}

fn fill_bank<R: BufRead, W: Write>(
    form: &mut RegistrationForm,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<Flow, CliError> {
    let Some(bank_name) = first_answer(prompt, "Bank name", &form.bank.bank_name)? else {
        return Ok(Flow::Back);
    };
    form.bank.bank_name = bank_name;
    form.bank.account_holder_name =
        prompt.ask_or_keep("Account holder name", &form.bank.account_holder_name)?;
    form.bank.account_number = prompt.ask("Account number")?;
    form.bank.confirm_account_number = prompt.ask("Confirm account number")?;
    let ifsc = prompt.ask_or_keep("IFSC code", form.bank.ifsc())?;
    form.set_ifsc(&ifsc);
    form.bank.branch = prompt.ask_or_keep("Branch", &form.bank.branch)?;
    Ok(Flow::Next)
}

fn fill_experience<R: BufRead, W: Write>(
    form: &mut RegistrationForm,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<Flow, CliError> {
    let Some(total_years) = first_answer(prompt, "Years of experience", &form.total_years)? else {
        return Ok(Flow::Back);
    };
    form.total_years = total_years;
    let staff = prompt.ask_or_keep("Number of staff", &form.number_of_staff.to_string())?;
    form.number_of_staff = staff.parse().unwrap_or(form.number_of_staff);
    form.services_offered = prompt.ask_or_keep("Services offered", &form.services_offered)?;
    let current: Vec<&str> = form.working_days().iter().map(|day| day.as_str()).collect();
    let days = prompt.ask_or_keep("Working days (e.g. Mon, Wed, Fri)", &current.join(", "))?;
    let names: Vec<&str> = days
        .split(',')
        .map(str::trim)
        .filter(|day| !day.is_empty())
        .collect();
    if let Err(err) = set_working_days(form, &names) {
        prompt.say(&err.to_string())?;
    }
    form.working_timings = prompt.ask_or_keep("Working timings", &form.working_timings)?;
    Ok(Flow::Next)
}

fn fill_documents<R: BufRead, W: Write>(
    form: &mut RegistrationForm,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<Flow, CliError> {
    let current = form.documents.address_proof.clone().unwrap_or_default();
    let Some(address_proof) = first_answer(prompt, "Address proof file (optional)", &current)?
    else {
        return Ok(Flow::Back);
    };
    form.documents.address_proof = Some(address_proof).filter(|value| !value.is_empty());
    let photo = prompt.ask("Profile photo file (optional)")?;
    form.documents.profile_photo = Some(photo).filter(|value| !value.is_empty());
    Ok(Flow::Next)
}

fn fill_credentials<R: BufRead, W: Write>(
    form: &mut RegistrationForm,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<Flow, CliError> {
    let password = prompt.ask("Password")?;
    if password == BACK {
        return Ok(Flow::Back);
    }
    let confirm = prompt.ask("Confirm password")?;
    form.passwords = PasswordPair::new(&password, &confirm);
    form.referral_code = prompt.ask_or_keep("Referral code (optional)", &form.referral_code)?;
    form.referral_name = prompt.ask_or_keep("Referral name (optional)", &form.referral_name)?;
    Ok(Flow::Next)
}
