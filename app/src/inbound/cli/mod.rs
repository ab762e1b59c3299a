//! Command-line front end: one subcommand per screen.
//!
//! Commands map onto the domain services; results are written as plain text
//! to the supplied writer and questions are read from the supplied reader, so
//! the whole surface runs against in-memory buffers in tests.

mod args;
mod error;
mod prompt;
mod register;
mod render;

use std::io::{BufRead, Write};
use std::sync::Arc;

pub use args::{
    AddServiceArgs, BookingStatusArg, BookingsCommand, CategoriesCommand, Cli, Command,
    EditProfileArgs, InquiriesCommand, InquiryStatusArg, LoginArgs, MethodArg, PayArgs,
    PriorityArg, ProfileCommand, RegisterArgs, ServicesCommand, TabArg, TasksCommand,
};
pub use error::CliError;

use self::prompt::Prompt;
use self::register::{RegistrationAnswers, register_from_answers, register_interactively};
use crate::domain::ports::{
    BookingApi, CategoryApi, CheckoutGateway, ContactApi, DashboardApi, LogApi, PaymentApi,
    PropertyApi, SessionStorage, TaskApi, VendorApi,
};
use crate::domain::{
    BookingService, CategoryService, CheckoutSettings, DashboardService,
    InquiryFilter, InquiryService, ListingDraft, ListingService, LogService, LoginService,
    PaymentChoice, PaymentOutcome, PaymentRouteParams, PaymentService, PaymentSummary,
    ProfileService, RecordId, RegistrationService, SessionStore, TaskDraft, TaskService, Vendor,
};

const VENDOR_LOAD_FAILED: &str = "Failed to load vendor";

/// Every backend port in one bound, as implemented by the HTTP adapter.
pub trait MarketplaceBackend:
    VendorApi
    + CategoryApi
    + PropertyApi
    + ContactApi
    + BookingApi
    + TaskApi
    + LogApi
    + DashboardApi
    + PaymentApi
{
}

impl<T> MarketplaceBackend for T where
    T: VendorApi
        + CategoryApi
        + PropertyApi
        + ContactApi
        + BookingApi
        + TaskApi
        + LogApi
        + DashboardApi
        + PaymentApi
{
}

fn record_id(field: &str, raw: &str) -> Result<RecordId, CliError> {
    RecordId::new(raw).map_err(|err| CliError::invalid_input(field, err))
}

/// Wires the backend, session, and checkout into the screen services.
pub struct App<B, S, G> {
    backend: Arc<B>,
    session: Arc<SessionStore<S>>,
    checkout: Arc<G>,
    checkout_settings: CheckoutSettings,
}

impl<B, S, G> App<B, S, G> {
    /// Assemble the application.
    pub fn new(
        backend: Arc<B>,
        session: Arc<SessionStore<S>>,
        checkout: Arc<G>,
        checkout_settings: CheckoutSettings,
    ) -> Self {
        Self {
            backend,
            session,
            checkout,
            checkout_settings,
        }
    }
}

impl<B, S, G> App<B, S, G>
where
    B: MarketplaceBackend,
    S: SessionStorage,
    G: CheckoutGateway,
{
    /// Run one command, reading answers from `input` and writing to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] when a service refuses the command or the
    /// terminal cannot be read or written.
    pub async fn run<R, W>(&self, command: Command, input: &mut R, out: &mut W) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
    {
        match command {
            Command::Login(args) => self.login(args, input, out).await,
            Command::Logout => {
                let route = self.session.logout().await?;
                render::route(out, &route)?;
                Ok(())
            }
            Command::Status => self.status(out).await,
            Command::Register(args) => self.register(args, input, out).await,
            Command::Pay(args) => self.pay(args, input, out).await,
            Command::Dashboard { tab } => {
                let vendor = self.signed_in().await?;
                let service = DashboardService::new(
                    Arc::clone(&self.backend),
                    Arc::clone(&self.backend),
                    Arc::clone(&self.backend),
                );
                let snapshot = service.load(&vendor.id).await?;
                writeln!(out, "Welcome, {}", vendor.display_name())?;
                render::dashboard(out, &snapshot, tab.into())?;
                Ok(())
            }
            Command::Bookings(command) => self.bookings(command, out).await,
            Command::Services(command) => self.services(command, out).await,
            Command::Inquiries(command) => self.inquiries(command, out).await,
            Command::Tasks(command) => self.tasks(command, out).await,
            Command::Categories(command) => self.categories(command, out).await,
            Command::Logs => {
                let vendor = self.signed_in().await?;
                let entries = LogService::new(Arc::clone(&self.backend))
                    .load(&vendor.id)
                    .await?;
                render::logs(out, &entries)?;
                Ok(())
            }
            Command::Profile(command) => self.profile(command, out).await,
        }
    }

    async fn signed_in(&self) -> Result<Vendor, CliError> {
        self.session.load_vendor().await?;
        Ok(self.session.require_vendor().await?)
    }

    async fn status<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let route = self.session.load_vendor().await?;
        if let Some(vendor) = self.session.current().await {
            render::vendor(out, &vendor)?;
        }
        render::route(out, &route)?;
        Ok(())
    }

    async fn login<R: BufRead, W: Write>(
        &self,
        args: LoginArgs,
        input: &mut R,
        out: &mut W,
    ) -> Result<(), CliError> {
        let password = match args.password {
            Some(password) => password,
            None => Prompt::new(input, out).ask("Password")?,
        };
        let service = LoginService::new(Arc::clone(&self.backend), Arc::clone(&self.session));
        let route = service.login(&args.email, &password).await?;
        if let Some(vendor) = self.session.current().await {
            writeln!(out, "Welcome back, {}", vendor.display_name())?;
        }
        render::route(out, &route)?;
        Ok(())
    }

    async fn register<R: BufRead, W: Write>(
        &self,
        args: RegisterArgs,
        input: &mut R,
        out: &mut W,
    ) -> Result<(), CliError> {
        let service = RegistrationService::new(
            Arc::clone(&self.backend),
            Arc::clone(&self.backend),
            Arc::clone(&self.session),
        );
        let mut prompt = Prompt::new(input, out);
        let params = match args.answers {
            Some(path) => register_from_answers(&service, RegistrationAnswers::read(&path)?).await?,
            None => register_interactively(&service, &mut prompt).await?,
        };
        prompt.say("Registration submitted.")?;
        let summary = PaymentSummary::from_params(&params)?;
        self.settle(&summary, args.pay, &mut prompt).await
    }

    async fn pay<R: BufRead, W: Write>(
        &self,
        args: PayArgs,
        input: &mut R,
        out: &mut W,
    ) -> Result<(), CliError> {
        let vendor_id = record_id("vendor id", &args.vendor_id)?;
        let vendor = self
            .backend
            .get_vendor(&vendor_id)
            .await
            .map_err(|err| err.into_domain(VENDOR_LOAD_FAILED))?;
        let service = RegistrationService::new(
            Arc::clone(&self.backend),
            Arc::clone(&self.backend),
            Arc::clone(&self.session),
        );
        let mut categories = service.load_categories().await?;
        if let Some(wanted) = args.category_id {
            categories.retain(|category| category.id.as_ref() == wanted);
        }
        let params = PaymentRouteParams::encode(&vendor, &categories)?;
        let summary = PaymentSummary::from_params(&params)?;
        self.settle(&summary, Some(args.method), &mut Prompt::new(input, out))
            .await
    }

    async fn settle<R: BufRead, W: Write>(
        &self,
        summary: &PaymentSummary,
        choice: Option<PaymentChoice>,
        prompt: &mut Prompt<'_, R, W>,
    ) -> Result<(), CliError> {
        render::payment_summary(prompt.writer(), summary)?;
        let choice = match choice {
            Some(choice) => Some(choice),
            None => prompt.ask("Pay by (cash/upi)")?.parse().ok(),
        };
        let payments = PaymentService::new(
            Arc::clone(&self.backend),
            Arc::clone(&self.backend),
            Arc::clone(&self.checkout),
            self.checkout_settings.clone(),
        );
        let outcome = payments.pay(summary, choice).await?;
        render::payment_outcome(prompt.writer(), &outcome)?;
        let next = match outcome {
            PaymentOutcome::AwaitingApproval { next } => next,
            PaymentOutcome::Activated {
                redirect_after,
                next,
            } => {
                tokio::time::sleep(redirect_after).await;
                next
            }
        };
        render::route(prompt.writer(), &next)?;
        Ok(())
    }

    async fn bookings<W: Write>(&self, command: BookingsCommand, out: &mut W) -> Result<(), CliError> {
        let vendor = self.signed_in().await?;
        let service = BookingService::new(Arc::clone(&self.backend));
        let bookings = match command.action() {
            Some((action, id)) => {
                let booking_id = record_id("booking id", id)?;
                let updated = service.act(&vendor.id, &booking_id, action).await?;
                writeln!(out, "Booking {}", action.target())?;
                updated
            }
            None => command.filter().apply(&service.load(&vendor.id).await?),
        };
        render::bookings(out, &bookings)?;
        Ok(())
    }

    async fn services<W: Write>(&self, command: ServicesCommand, out: &mut W) -> Result<(), CliError> {
        let vendor = self.signed_in().await?;
        let service = ListingService::new(Arc::clone(&self.backend));
        let listings = match command {
            ServicesCommand::List => service.load(&vendor.id).await?,
            ServicesCommand::Add(args) => {
                let draft = ListingDraft {
                    name: args.name,
                    description: args.description,
                    price: args.price,
                    category: args.category,
                    duration: args.duration,
                    location: args.location,
                    availability: args.availability,
                    terms: args.terms,
                    images: args.images,
                };
                let listings = service.create(&vendor.id, draft).await?;
                writeln!(out, "Service added")?;
                listings
            }
            ServicesCommand::Delete { id } => {
                let listings = service
                    .delete(&vendor.id, &record_id("service id", &id)?)
                    .await?;
                writeln!(out, "Service deleted")?;
                listings
            }
            ServicesCommand::Toggle { id } => {
                service
                    .toggle_status(&vendor.id, &record_id("service id", &id)?)
                    .await?
            }
        };
        render::listings(out, &listings)?;
        Ok(())
    }

    async fn inquiries<W: Write>(
        &self,
        command: InquiriesCommand,
        out: &mut W,
    ) -> Result<(), CliError> {
        let vendor = self.signed_in().await?;
        let service = InquiryService::new(Arc::clone(&self.backend));
        let inquiries = match command {
            InquiriesCommand::List { status } => {
                let all = service.load(&vendor.id).await?;
                status.map_or(InquiryFilter::All, InquiryFilter::from).apply(&all)
            }
            InquiriesCommand::Reply { id } => {
                let inquiries = service
                    .mark_replied(&vendor.id, &record_id("inquiry id", &id)?)
                    .await?;
                writeln!(out, "Inquiry marked as replied")?;
                inquiries
            }
        };
        render::inquiries(out, &inquiries)?;
        Ok(())
    }

    async fn tasks<W: Write>(&self, command: TasksCommand, out: &mut W) -> Result<(), CliError> {
        let vendor = self.signed_in().await?;
        let service = TaskService::new(Arc::clone(&self.backend));
        let board = match command {
            TasksCommand::List => service.load(&vendor.id).await?,
            TasksCommand::Add {
                title,
                description,
                priority,
                due,
            } => {
                let draft = TaskDraft {
                    title,
                    description,
                    priority: priority.into(),
                    due_date: due,
                };
                service.create(&vendor.id, draft).await?
            }
            TasksCommand::Toggle { id } => {
                service
                    .toggle(&vendor.id, &record_id("task id", &id)?)
                    .await?
            }
            TasksCommand::Delete { id } => {
                service
                    .delete(&vendor.id, &record_id("task id", &id)?)
                    .await?
            }
        };
        render::task_board(out, &board)?;
        Ok(())
    }

    async fn categories<W: Write>(
        &self,
        command: CategoriesCommand,
        out: &mut W,
    ) -> Result<(), CliError> {
        let vendor = self.signed_in().await?;
        let service = CategoryService::new(Arc::clone(&self.backend));
        let categories = match command {
            CategoriesCommand::List { tab } => {
                let all = service.load(&vendor.id).await?;
                crate::domain::filter_categories(&all, tab.into())
            }
            CategoriesCommand::Buy { id, method } => {
                let categories = service
                    .purchase(&vendor.id, &record_id("category id", &id)?, method.into())
                    .await?;
                writeln!(out, "Purchase request submitted")?;
                categories
            }
        };
        render::categories(out, &categories)?;
        Ok(())
    }

    async fn profile<W: Write>(&self, command: ProfileCommand, out: &mut W) -> Result<(), CliError> {
        let profile = ProfileService::new(Arc::clone(&self.backend), Arc::clone(&self.session));
        let vendor = self.signed_in().await?;
        match command {
            ProfileCommand::Show => render::vendor(out, &vendor)?,
            ProfileCommand::Refresh => render::vendor(out, &profile.refresh().await?)?,
            ProfileCommand::Edit(args) => {
                let mut update = vendor.profile_update();
                if let Some(name) = args.name {
                    update.name = name;
                }
                if let Some(phone) = args.phone {
                    update.phone = phone;
                }
                if let Some(business_name) = args.business_name {
                    update.business_name = business_name;
                }
                if let Some(description) = args.business_description {
                    update.business_description = description;
                }
                if let Some(image) = args.profile_image {
                    update.profile_image = image;
                }
                let saved = profile.save(&update).await?;
                writeln!(out, "Profile updated")?;
                render::vendor(out, &saved)?;
            }
            ProfileCommand::Hours { days, timings } => {
                profile.update_working_hours(&days, &timings).await?;
                writeln!(out, "Working hours updated")?;
            }
            ProfileCommand::Request { message } => {
                profile.request_update(&message).await?;
                writeln!(out, "Update request sent")?;
            }
        }
        Ok(())
    }
}
