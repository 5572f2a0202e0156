//! TUI rendering traits for remindir types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to remindir-core types using owo_colors.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use remindir_core::calendar::{CalendarEntry, CalendarView, Month};
use remindir_core::company::CompanyInfo;
use remindir_core::status::ReminderStatus;
use remindir_core::summary::ReminderSummary;
use remindir_core::{Reminder, ReminderKind};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Rendering that depends on the current date.
pub trait RenderOn {
    fn render_on(&self, today: NaiveDate) -> String;
}

impl Render for ReminderStatus {
    fn render(&self) -> String {
        match self {
            ReminderStatus::Completed => "●".green().to_string(),
            ReminderStatus::Overdue => "●".red().to_string(),
            ReminderStatus::Pending => "○".dimmed().to_string(),
        }
    }
}

impl Render for ReminderKind {
    fn render(&self) -> String {
        let tag = format!("[{}]", self);
        match self {
            ReminderKind::Personal => tag.purple().to_string(),
            ReminderKind::Company => tag.blue().to_string(),
        }
    }
}

/// Colorize text according to the reminder status
fn colorize_status(status: ReminderStatus, text: &str) -> String {
    match status {
        ReminderStatus::Completed => text.green().strikethrough().to_string(),
        ReminderStatus::Overdue => text.red().to_string(),
        ReminderStatus::Pending => text.to_string(),
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Render reminders as a table in the given order.
pub fn render_table<'a>(reminders: impl IntoIterator<Item = &'a Reminder>, today: NaiveDate) -> String {
    let reminders: Vec<&Reminder> = reminders.into_iter().collect();

    if reminders.is_empty() {
        return "No reminders found.".dimmed().to_string();
    }

    let id_width = reminders.iter().map(|r| r.id.to_string().chars().count()).max().unwrap_or(0);
    let title_width = reminders.iter().map(|r| r.title.chars().count()).max().unwrap_or(0);

    let mut lines = vec![format!(
        "  {}  {}  {}  {}",
        pad("ID", id_width).dimmed(),
        pad("DUE", 10).dimmed(),
        pad("TITLE", title_width).dimmed(),
        "DESCRIPTION".dimmed()
    )];

    for reminder in reminders {
        let status = reminder.status(today);
        let description = reminder.description.as_deref().unwrap_or_default();

        lines.push(format!(
            "{} {}  {}  {}  {}",
            status.render(),
            pad(&reminder.id.to_string(), id_width).dimmed(),
            colorize_status(status, &pad(&reminder.display_date(), 10)),
            colorize_status(status, &pad(&reminder.title, title_width)),
            colorize_status(status, description).dimmed()
        ));
    }

    lines.join("\n")
}

impl RenderOn for ReminderSummary<'_> {
    fn render_on(&self, today: NaiveDate) -> String {
        let next = match self.next_activity {
            Some(r) => format!("{} {}", r.title.purple(), r.display_date().dimmed()),
            None => "No upcoming tasks".dimmed().to_string(),
        };
        let due_today = self
            .next_activity
            .and_then(|r| r.due_date().ok())
            .is_some_and(|d| d == today);

        [
            format!("  {:<15}{}", "Total Tasks".dimmed(), self.total.bold()),
            format!("  {:<15}{}", "Completed".dimmed(), self.completed.green()),
            format!("  {:<15}{}", "Overdue".dimmed(), self.overdue.red()),
            format!(
                "  {:<15}{}{}",
                "Next Activity".dimmed(),
                next,
                if due_today { " (today)".yellow().to_string() } else { String::new() }
            ),
        ]
        .join("\n")
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

impl RenderOn for CalendarEntry<'_> {
    fn render_on(&self, _today: NaiveDate) -> String {
        format!(
            "  {} {} {}",
            self.status.render(),
            colorize_status(self.status, &self.reminder.title),
            self.kind().render()
        )
    }
}

/// Render a month of the calendar as a day-by-day agenda.
pub fn render_agenda(view: &CalendarView<'_>, month: Month, today: NaiveDate) -> String {
    let mut lines = vec![month.label().bold().to_string()];

    let days = view.by_day(month);
    if days.is_empty() {
        lines.push("No reminders this month".dimmed().to_string());
    }

    for (date, entries) in days {
        lines.push(String::new());
        lines.push(format_date_label(date, today).bold().to_string());
        lines.extend(entries.iter().map(|e| e.render_on(today)));
    }

    if view.undated > 0 {
        lines.push(String::new());
        lines.push(
            format!("({} reminders without a readable due date not shown)", view.undated)
                .dimmed()
                .to_string(),
        );
    }

    lines.join("\n")
}

impl Render for CompanyInfo {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        match &self.company {
            Some(company) => lines.push(format!(
                "🏢 {} {}",
                company.name.bold(),
                format!("({})", company.id).dimmed()
            )),
            None => lines.push("🏢 Unknown company".dimmed().to_string()),
        }

        for dept in &self.departments {
            lines.push(format!(
                "   {:<20}{}",
                dept.name,
                format!("{} members", dept.member_count).blue()
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_labels() {
        let today = ymd(2026, 2, 24);
        assert_eq!(format_date_label(today, today), "Today");
        assert_eq!(format_date_label(ymd(2026, 2, 25), today), "Tomorrow");
        assert_eq!(format_date_label(ymd(2026, 2, 23), today), "Yesterday");
        assert_eq!(format_date_label(ymd(2026, 2, 27), today), "Fri Feb 27");
    }

    #[test]
    fn table_shows_formatted_and_fallback_dates() {
        let reminders = vec![
            Reminder::new(1, "Slash date", Some("2024/03/20")),
            Reminder::new(2, "Broken date", Some("invalid-date")),
        ];

        let table = render_table(&reminders, ymd(2024, 3, 1));
        assert!(table.contains("2024-03-20"));
        assert!(table.contains("invalid-date"));
        assert!(table.contains("Slash date"));
    }

    #[test]
    fn empty_table_message() {
        assert!(render_table(Vec::<&Reminder>::new(), ymd(2024, 3, 1)).contains("No reminders found."));
    }

    #[test]
    fn summary_without_upcoming_tasks() {
        let summary = ReminderSummary {
            total: 0,
            completed: 0,
            overdue: 0,
            next_activity: None,
        };
        assert!(summary.render_on(ymd(2024, 3, 1)).contains("No upcoming tasks"));
    }
}
