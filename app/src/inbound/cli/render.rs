//! Plain-text rendering of screen data.

use std::io::{self, Write};

use crate::domain::{
    Booking, Category, CategoryTab, DashboardSnapshot, Inquiry, LogEntry, PaymentOutcome,
    PaymentSummary, Route, ServiceListing, Task, TaskBoard, Vendor, format_amount,
};

fn rupees(amount: f64) -> String {
    format!("₹{}", format_amount(amount))
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

pub(super) fn route<W: Write>(out: &mut W, route: &Route) -> io::Result<()> {
    match route {
        Route::Login => writeln!(out, "Not signed in. Run `vendor-app login`."),
        Route::Register => writeln!(out, "Continue with `vendor-app register`."),
        Route::Dashboard => writeln!(out, "Signed in. Run `vendor-app dashboard`."),
        Route::Payment(_) => writeln!(out, "Registration fee pending."),
    }
}

pub(super) fn vendor<W: Write>(out: &mut W, vendor: &Vendor) -> io::Result<()> {
    writeln!(out, "{} ({})", vendor.display_name(), vendor.id)?;
    writeln!(out, "  email:    {}", or_dash(&vendor.email))?;
    writeln!(out, "  phone:    {}", or_dash(&vendor.phone))?;
    writeln!(
        out,
        "  business: {}",
        or_dash(
            vendor
                .business_name
                .as_deref()
                .or(vendor.company.as_deref())
                .unwrap_or_default()
        )
    )?;
    if let Some(description) = vendor.business_description.as_deref() {
        writeln!(out, "  about:    {}", or_dash(description))?;
    }
    writeln!(
        out,
        "  status:   {}",
        or_dash(vendor.status.as_deref().unwrap_or_default())
    )
}

pub(super) fn dashboard<W: Write>(
    out: &mut W,
    snapshot: &DashboardSnapshot,
    tab: CategoryTab,
) -> io::Result<()> {
    let stats = &snapshot.stats;
    writeln!(out, "Services:      {}", stats.total_services)?;
    writeln!(out, "New inquiries: {}", snapshot.inquiry_count)?;
    writeln!(out, "Bookings:      {}", stats.total_bookings)?;
    writeln!(out, "Earnings:      {}", rupees(stats.total_earnings))?;
    writeln!(out)?;
    writeln!(out, "Recent inquiries")?;
    inquiries(out, &snapshot.recent_inquiries)?;
    writeln!(out)?;
    writeln!(out, "Categories")?;
    categories(out, &snapshot.categories_for(tab))
}

pub(super) fn bookings<W: Write>(out: &mut W, bookings: &[Booking]) -> io::Result<()> {
    if bookings.is_empty() {
        return writeln!(out, "No bookings found");
    }
    for booking in bookings {
        writeln!(
            out,
            "[{}] {} - {} on {} {} - {} ({})",
            booking.status,
            booking.id,
            or_dash(&booking.service_name),
            or_dash(&booking.booking_date),
            booking.booking_time,
            or_dash(&booking.customer_name),
            rupees(booking.amount)
        )?;
        let actions: Vec<&str> = booking
            .status
            .actions()
            .iter()
            .map(|action| action.label())
            .collect();
        if !actions.is_empty() {
            writeln!(out, "    actions: {}", actions.join(", "))?;
        }
    }
    Ok(())
}

pub(super) fn listings<W: Write>(out: &mut W, listings: &[ServiceListing]) -> io::Result<()> {
    if listings.is_empty() {
        return writeln!(out, "No services yet");
    }
    for listing in listings {
        writeln!(
            out,
            "[{}] {} - {} ({}) {}",
            listing.status.as_str(),
            listing.id,
            listing.name,
            or_dash(&listing.category),
            rupees(listing.price)
        )?;
    }
    Ok(())
}

pub(super) fn inquiries<W: Write>(out: &mut W, inquiries: &[Inquiry]) -> io::Result<()> {
    if inquiries.is_empty() {
        return writeln!(out, "No inquiries found");
    }
    for inquiry in inquiries {
        writeln!(
            out,
            "[{}] {} - {} about {}: {}",
            inquiry.status.as_str(),
            inquiry.id,
            or_dash(&inquiry.customer_name),
            or_dash(&inquiry.service_name),
            or_dash(&inquiry.message)
        )?;
    }
    Ok(())
}

fn task_line<W: Write>(out: &mut W, task: &Task) -> io::Result<()> {
    let due = if task.due_date.is_empty() {
        String::new()
    } else {
        format!(" due {}", task.due_date)
    };
    writeln!(
        out,
        "  {} - {} [{}]{due}",
        task.id,
        task.title,
        task.priority.as_str()
    )
}

pub(super) fn task_board<W: Write>(out: &mut W, board: &TaskBoard) -> io::Result<()> {
    writeln!(out, "Pending ({})", board.pending.len())?;
    for task in &board.pending {
        task_line(out, task)?;
    }
    writeln!(out, "Completed ({})", board.completed.len())?;
    for task in &board.completed {
        task_line(out, task)?;
    }
    Ok(())
}

pub(super) fn categories<W: Write>(out: &mut W, categories: &[Category]) -> io::Result<()> {
    if categories.is_empty() {
        return writeln!(out, "No categories");
    }
    for category in categories {
        let owned = if category.is_purchased { " (purchased)" } else { "" };
        writeln!(out, "{} - {}{owned}", category.id, category.label())?;
    }
    Ok(())
}

pub(super) fn logs<W: Write>(out: &mut W, entries: &[LogEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No activity yet");
    }
    for entry in entries {
        writeln!(
            out,
            "{} [{}] {}: {}",
            or_dash(&entry.timestamp),
            entry.kind().label(),
            entry.action,
            entry.details
        )?;
    }
    Ok(())
}

pub(super) fn payment_summary<W: Write>(out: &mut W, summary: &PaymentSummary) -> io::Result<()> {
    writeln!(out, "Business: {}", summary.business_name())?;
    writeln!(out, "Owner:    {}", or_dash(&summary.vendor.name))?;
    writeln!(out, "Category: {}", summary.category_name)?;
    writeln!(out, "Fee:      {}", rupees(summary.fee))
}

pub(super) fn payment_outcome<W: Write>(out: &mut W, outcome: &PaymentOutcome) -> io::Result<()> {
    match outcome {
        PaymentOutcome::AwaitingApproval { .. } => writeln!(
            out,
            "Cash payment request submitted. You can log in once an administrator approves it."
        ),
        PaymentOutcome::Activated { .. } => {
            writeln!(out, "Payment successful. Your category is now active.")
        }
    }
}
