//! Command tree parsed by clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::registration::Weekday;
use crate::domain::{
    BookingAction, BookingFilter, BookingStatus, CategoryTab, InquiryFilter, InquiryStatus,
    PaymentChoice, PaymentMethod, TaskPriority,
};

/// `vendor-app` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vendor-app",
    about = "Vendor client for the home-services marketplace",
    version
)]
pub struct Cli {
    /// Backend base URL, overriding the configured one.
    #[arg(long, global = true, value_name = "url")]
    pub api_base_url: Option<String>,
    /// Session directory, overriding the configured one.
    #[arg(long, global = true, value_name = "dir")]
    pub session_dir: Option<String>,
    /// Screen or action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands, one per screen.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign in and remember the vendor.
    Login(LoginArgs),
    /// Forget the signed-in vendor.
    Logout,
    /// Show where the app opens: dashboard when signed in, login otherwise.
    Status,
    /// Walk through the registration wizard, then pay the category fee.
    Register(RegisterArgs),
    /// Pay the registration fee for an already registered vendor.
    Pay(PayArgs),
    /// Headline counters, recent inquiries, and categories.
    Dashboard {
        /// Category tab to list.
        #[arg(long, value_enum, default_value_t = TabArg::Available)]
        tab: TabArg,
    },
    /// Bookings received.
    #[command(subcommand)]
    Bookings(BookingsCommand),
    /// Service listings.
    #[command(subcommand)]
    Services(ServicesCommand),
    /// Customer inquiries.
    #[command(subcommand)]
    Inquiries(InquiriesCommand),
    /// Personal to-do list.
    #[command(subcommand)]
    Tasks(TasksCommand),
    /// Service categories.
    #[command(subcommand)]
    Categories(CategoriesCommand),
    /// Activity log.
    Logs,
    /// Vendor profile.
    #[command(subcommand)]
    Profile(ProfileCommand),
}

/// `login` arguments.
#[derive(Debug, Clone, Args)]
pub struct LoginArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,
    /// Password; read from standard input when omitted.
    #[arg(long)]
    pub password: Option<String>,
}

/// `register` arguments.
#[derive(Debug, Clone, Args)]
pub struct RegisterArgs {
    /// JSON file with every wizard answer; prompts interactively when omitted.
    #[arg(long, value_name = "path")]
    pub answers: Option<PathBuf>,
    /// Payment method for the fee; asked after registration when omitted.
    #[arg(long, value_name = "cash|upi")]
    pub pay: Option<PaymentChoice>,
}

/// `pay` arguments.
#[derive(Debug, Clone, Args)]
pub struct PayArgs {
    /// Registered vendor.
    #[arg(long = "vendor-id", value_name = "id")]
    pub vendor_id: String,
    /// Category to pay for; the first listed category when omitted.
    #[arg(long = "category-id", value_name = "id")]
    pub category_id: Option<String>,
    /// Payment method.
    #[arg(long, value_name = "cash|upi")]
    pub method: PaymentChoice,
}

/// Booking subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum BookingsCommand {
    /// List bookings.
    List {
        /// Only bookings in this status.
        #[arg(long, value_enum)]
        status: Option<BookingStatusArg>,
    },
    /// Confirm a pending booking.
    Confirm {
        /// Booking id.
        id: String,
    },
    /// Cancel a pending booking.
    Cancel {
        /// Booking id.
        id: String,
    },
    /// Complete a confirmed booking.
    Complete {
        /// Booking id.
        id: String,
    },
}

impl BookingsCommand {
    /// Action and target booking, for the action subcommands.
    pub fn action(&self) -> Option<(BookingAction, &str)> {
        match self {
            Self::List { .. } => None,
            Self::Confirm { id } => Some((BookingAction::Confirm, id)),
            Self::Cancel { id } => Some((BookingAction::Cancel, id)),
            Self::Complete { id } => Some((BookingAction::Complete, id)),
        }
    }

    /// List filter; everything for the action subcommands.
    pub fn filter(&self) -> BookingFilter {
        match self {
            Self::List {
                status: Some(status),
            } => (*status).into(),
            _ => BookingFilter::All,
        }
    }
}

/// Service listing subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ServicesCommand {
    /// List services.
    List,
    /// Add a service.
    Add(AddServiceArgs),
    /// Delete a service.
    Delete {
        /// Service id.
        id: String,
    },
    /// Switch a service between active and inactive.
    Toggle {
        /// Service id.
        id: String,
    },
}

/// `services add` arguments; blanks are reported by validation.
#[derive(Debug, Clone, Args)]
pub struct AddServiceArgs {
    /// Service name.
    #[arg(long, default_value = "")]
    pub name: String,
    /// Description.
    #[arg(long, default_value = "")]
    pub description: String,
    /// Price in rupees.
    #[arg(long, default_value = "")]
    pub price: String,
    /// Category label.
    #[arg(long, default_value = "")]
    pub category: String,
    /// Typical duration.
    #[arg(long, default_value = "")]
    pub duration: String,
    /// Service area.
    #[arg(long, default_value = "")]
    pub location: String,
    /// Availability note.
    #[arg(long, default_value = "")]
    pub availability: String,
    /// Terms and conditions.
    #[arg(long, default_value = "")]
    pub terms: String,
    /// Image URL; repeatable.
    #[arg(long = "image", value_name = "url")]
    pub images: Vec<String>,
}

/// Inquiry subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum InquiriesCommand {
    /// List inquiries.
    List {
        /// Only inquiries in this status.
        #[arg(long, value_enum)]
        status: Option<InquiryStatusArg>,
    },
    /// Mark an inquiry as replied.
    Reply {
        /// Inquiry id.
        id: String,
    },
}

/// Task subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum TasksCommand {
    /// Show pending and completed tasks.
    List,
    /// Add a task.
    Add {
        /// Title.
        #[arg(long, default_value = "")]
        title: String,
        /// Description.
        #[arg(long, default_value = "")]
        description: String,
        /// Priority.
        #[arg(long, value_enum, default_value_t = PriorityArg::Medium)]
        priority: PriorityArg,
        /// Due date as YYYY-MM-DD.
        #[arg(long, default_value = "")]
        due: String,
    },
    /// Flip a task between pending and completed.
    Toggle {
        /// Task id.
        id: String,
    },
    /// Delete a task.
    Delete {
        /// Task id.
        id: String,
    },
}

/// Category subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CategoriesCommand {
    /// List categories.
    List {
        /// Tab to show.
        #[arg(long, value_enum, default_value_t = TabArg::All)]
        tab: TabArg,
    },
    /// Buy a category at its listed price.
    Buy {
        /// Category id.
        id: String,
        /// Payment method.
        #[arg(long, value_enum)]
        method: MethodArg,
    },
}

/// Profile subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ProfileCommand {
    /// Show the stored profile.
    Show,
    /// Fetch the profile from the backend and store it.
    Refresh,
    /// Edit profile fields; omitted fields keep their current value.
    Edit(EditProfileArgs),
    /// Replace the working schedule.
    Hours {
        /// Working day; repeatable.
        #[arg(long = "day", value_name = "Mon..Sun", required = true)]
        days: Vec<Weekday>,
        /// Timings, e.g. `9 AM - 7 PM`.
        #[arg(long)]
        timings: String,
    },
    /// Ask an administrator to approve a change.
    Request {
        /// What should change.
        message: String,
    },
}

/// `profile edit` arguments.
#[derive(Debug, Clone, Default, Args)]
pub struct EditProfileArgs {
    /// Owner name.
    #[arg(long)]
    pub name: Option<String>,
    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,
    /// Business name.
    #[arg(long = "business-name")]
    pub business_name: Option<String>,
    /// Business description.
    #[arg(long = "business-description")]
    pub business_description: Option<String>,
    /// Profile image URL.
    #[arg(long = "profile-image")]
    pub profile_image: Option<String>,
}

/// Booking status as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BookingStatusArg {
    /// Awaiting the vendor.
    Pending,
    /// Accepted.
    Confirmed,
    /// Done.
    Completed,
    /// Called off.
    Cancelled,
}

impl From<BookingStatusArg> for BookingFilter {
    fn from(value: BookingStatusArg) -> Self {
        Self::Status(match value {
            BookingStatusArg::Pending => BookingStatus::Pending,
            BookingStatusArg::Confirmed => BookingStatus::Confirmed,
            BookingStatusArg::Completed => BookingStatus::Completed,
            BookingStatusArg::Cancelled => BookingStatus::Cancelled,
        })
    }
}

/// Inquiry status as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InquiryStatusArg {
    /// Not answered yet.
    New,
    /// Answered.
    Replied,
}

impl From<InquiryStatusArg> for InquiryFilter {
    fn from(value: InquiryStatusArg) -> Self {
        Self::Status(match value {
            InquiryStatusArg::New => InquiryStatus::New,
            InquiryStatusArg::Replied => InquiryStatus::Replied,
        })
    }
}

/// Task priority as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
}

impl From<PriorityArg> for TaskPriority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Low => Self::Low,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::High => Self::High,
        }
    }
}

/// Category tab as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    /// Every category.
    All,
    /// Categories the vendor owns.
    Purchased,
    /// Categories the vendor can still buy.
    Available,
}

impl From<TabArg> for CategoryTab {
    fn from(value: TabArg) -> Self {
        match value {
            TabArg::All => Self::All,
            TabArg::Purchased => Self::Purchased,
            TabArg::Available => Self::Available,
        }
    }
}

/// Category purchase method as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Pay in person.
    Cash,
    /// Pay by QR code.
    Qr,
}

impl From<MethodArg> for PaymentMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Cash => Self::Cash,
            MethodArg::Qr => Self::Qr,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for argument parsing.
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("vendor-app").chain(args.iter().copied()))
            .expect("arguments parse")
            .command
    }

    #[rstest]
    fn booking_actions_carry_their_id() {
        let Command::Bookings(bookings) = parse(&["bookings", "confirm", "b1"]) else {
            panic!("expected bookings command");
        };
        assert_eq!(bookings.action(), Some((BookingAction::Confirm, "b1")));
    }

    #[rstest]
    fn working_days_parse_case_insensitively() {
        let Command::Profile(ProfileCommand::Hours { days, timings }) = parse(&[
            "profile", "hours", "--day", "mon", "--day", "Wed", "--timings", "9 AM - 7 PM",
        ]) else {
            panic!("expected profile hours");
        };
        assert_eq!(days, vec![Weekday::Mon, Weekday::Wed]);
        assert_eq!(timings, "9 AM - 7 PM");
    }

    #[rstest]
    #[case("online", PaymentChoice::Upi)]
    #[case("cash", PaymentChoice::Cash)]
    fn pay_accepts_method_aliases(#[case] method: &str, #[case] expected: PaymentChoice) {
        let Command::Pay(args) = parse(&["pay", "--vendor-id", "v1", "--method", method]) else {
            panic!("expected pay command");
        };
        assert_eq!(args.method, expected);
    }

    #[rstest]
    fn unknown_payment_method_is_refused() {
        let result = Cli::try_parse_from(["vendor-app", "pay", "--vendor-id", "v1", "--method", "card"]);
        assert!(result.is_err());
    }

    #[rstest]
    fn overrides_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "vendor-app",
            "status",
            "--api-base-url",
            "https://api.example.com/api/v1",
            "--session-dir",
            "/tmp/session",
        ])
        .expect("arguments parse");
        assert_eq!(cli.api_base_url.as_deref(), Some("https://api.example.com/api/v1"));
        assert_eq!(cli.session_dir.as_deref(), Some("/tmp/session"));
    }

    #[rstest]
    fn task_priority_defaults_to_medium() {
        let Command::Tasks(TasksCommand::Add { priority, .. }) =
            parse(&["tasks", "add", "--title", "Call supplier"])
        else {
            panic!("expected tasks add");
        };
        assert_eq!(TaskPriority::from(priority), TaskPriority::Medium);
    }
}
