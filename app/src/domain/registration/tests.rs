//! Regression coverage for the registration wizard.

use rstest::{fixture, rstest};

use super::*;

/// Wizard with every step's required inputs filled.
#[fixture]
fn completed() -> RegistrationWizard {
    let mut wizard = RegistrationWizard::new();
    let form = &mut wizard.form;
    form.company = "Rao Cleaners".to_owned();
    form.type_of_service = "Home cleaning".to_owned();
    form.name = "Asha Rao".to_owned();
    form.phone = "9845000000".to_owned();
    form.address = "12 MG Road".to_owned();
    form.set_has_whatsapp(true);
    form.business_type = Some(BusinessType::Proprietorship);
    form.bank.account_number = "001122".to_owned();
    form.bank.confirm_account_number = "001122".to_owned();
    form.toggle_working_day(Weekday::Mon);
    form.passwords = PasswordPair::new("s3cret", "s3cret");
    wizard
}

fn walk_to(wizard: &mut RegistrationWizard, target: WizardStep) {
    while wizard.step() != target {
        wizard.advance().expect("step passes");
    }
}

#[rstest]
fn starts_on_basic_with_first_progress_slice() {
    let wizard = RegistrationWizard::new();
    assert_eq!(wizard.step(), WizardStep::Basic);
    assert!((wizard.progress_percent() - 100.0 / 7.0).abs() < 1e-9);
}

#[rstest]
fn walks_every_step_then_submits(mut completed: RegistrationWizard) {
    for expected in WizardStep::ALL.iter().skip(1) {
        assert_eq!(completed.advance(), Ok(StepOutcome::Moved(*expected)));
    }
    assert!((completed.progress_percent() - 100.0).abs() < 1e-9);
    let outcome = completed.advance().expect("credentials pass");
    assert!(matches!(outcome, StepOutcome::Submit(_)));
    assert_eq!(completed.step(), WizardStep::Credentials);
}

#[rstest]
#[case::company(WizardStep::Basic, |form: &mut RegistrationForm| form.company.clear())]
#[case::owner(WizardStep::Basic, |form: &mut RegistrationForm| form.name = "  ".to_owned())]
#[case::phone(WizardStep::Contact, |form: &mut RegistrationForm| form.phone.clear())]
#[case::address(WizardStep::Contact, |form: &mut RegistrationForm| form.address.clear())]
#[case::business(WizardStep::Business, |form: &mut RegistrationForm| form.business_type = None)]
#[case::bank(WizardStep::Bank, |form: &mut RegistrationForm| {
    form.bank.confirm_account_number = "001123".to_owned();
})]
#[case::days(WizardStep::Experience, |form: &mut RegistrationForm| {
    form.toggle_working_day(Weekday::Mon);
})]
#[case::password(WizardStep::Credentials, |form: &mut RegistrationForm| {
    form.passwords = PasswordPair::new("s3cret", "secret");
})]
fn failed_validation_never_moves(
    mut completed: RegistrationWizard,
    #[case] step: WizardStep,
    #[case] break_form: fn(&mut RegistrationForm),
) {
    walk_to(&mut completed, step);
    break_form(&mut completed.form);

    let err = completed.advance().expect_err("validation fails");

    assert_eq!(err.step(), step);
    assert_eq!(completed.step(), step);
}

#[rstest]
fn missing_basic_fields_are_named() {
    let mut wizard = RegistrationWizard::new();
    wizard.form.type_of_service = "Plumbing".to_owned();

    let err = wizard.advance().expect_err("blank company and owner");

    assert_eq!(err.missing_fields(), &["Company Name", "Owner Name"]);
}

#[rstest]
fn contact_requires_whatsapp_answer() {
    let mut wizard = RegistrationWizard::new();
    let form = &mut wizard.form;
    form.company = "Rao Cleaners".to_owned();
    form.type_of_service = "Cleaning".to_owned();
    form.name = "Asha".to_owned();
    form.phone = "9845000000".to_owned();
    form.address = "12 MG Road".to_owned();
    walk_to(&mut wizard, WizardStep::Contact);

    let err = wizard.advance().expect_err("whatsapp unanswered");

    assert_eq!(err.rule(), &StepRule::WhatsappUnanswered);
    assert_eq!(wizard.step(), WizardStep::Contact);
}

#[rstest]
fn account_number_mismatch_blocks_bank_step(mut completed: RegistrationWizard) {
    walk_to(&mut completed, WizardStep::Bank);
    completed.form.bank.confirm_account_number = "999".to_owned();

    let err = completed.advance().expect_err("mismatch");

    assert_eq!(err.rule(), &StepRule::AccountNumberMismatch);
    assert_eq!(err.to_string(), "Account numbers do not match");
}

#[rstest]
fn documents_step_has_no_requirements(mut completed: RegistrationWizard) {
    walk_to(&mut completed, WizardStep::Documents);
    assert_eq!(
        completed.advance(),
        Ok(StepOutcome::Moved(WizardStep::Credentials))
    );
}

#[rstest]
fn back_is_a_no_op_on_the_first_step(mut completed: RegistrationWizard) {
    assert_eq!(completed.back(), WizardStep::Basic);
    walk_to(&mut completed, WizardStep::Bank);
    assert_eq!(completed.back(), WizardStep::Business);
}
