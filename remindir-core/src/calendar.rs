//! Calendar placement of personal and company reminders.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::reminder::{Reminder, ReminderKind};
use crate::status::ReminderStatus;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn containing(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|_| format!("Invalid month '{}'. Expected YYYY-MM", s))?;
        Ok(Self::containing(first))
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// e.g. "March 2024"
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// A reminder placed on its due date.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry<'a> {
    pub reminder: &'a Reminder,
    pub date: NaiveDate,
    pub status: ReminderStatus,
}

impl CalendarEntry<'_> {
    pub fn kind(&self) -> ReminderKind {
        self.reminder.kind
    }
}

/// Reminders placed on the calendar, plus how many could not be placed.
#[derive(Debug, Clone, Default)]
pub struct CalendarView<'a> {
    pub entries: Vec<CalendarEntry<'a>>,
    pub undated: usize,
}

impl<'a> CalendarView<'a> {
    pub fn in_month(&self, month: Month) -> impl Iterator<Item = &CalendarEntry<'a>> {
        self.entries.iter().filter(move |e| month.contains(e.date))
    }

    /// Entries of `month` grouped by day, days ascending.
    /// Within a day, entries keep their input order.
    pub fn by_day(&self, month: Month) -> BTreeMap<NaiveDate, Vec<&CalendarEntry<'a>>> {
        let mut days: BTreeMap<NaiveDate, Vec<&CalendarEntry<'a>>> = BTreeMap::new();
        for entry in self.in_month(month) {
            days.entry(entry.date).or_default().push(entry);
        }
        days
    }
}

/// Place every reminder whose due date normalizes.
pub fn calendar_entries(reminders: &[Reminder], today: NaiveDate) -> CalendarView<'_> {
    let mut view = CalendarView::default();

    for reminder in reminders {
        match reminder.due_date() {
            Ok(date) => view.entries.push(CalendarEntry {
                reminder,
                date,
                status: reminder.status(today),
            }),
            Err(_) => view.undated += 1,
        }
    }

    view
}
