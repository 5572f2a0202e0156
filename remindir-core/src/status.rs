//! Overdue classification.

use chrono::NaiveDate;

use crate::date::normalize_date;
use crate::reminder::Reminder;

/// True when the due date normalizes, falls strictly before `today`, and the
/// reminder is not completed. Unparseable dates are never overdue.
pub fn is_overdue(date: Option<&str>, completed: bool, today: NaiveDate) -> bool {
    if completed {
        return false;
    }

    match normalize_date(date) {
        Ok(due) => due < today,
        Err(_) => false,
    }
}

/// Display state of a reminder row. Completion takes precedence over overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderStatus {
    Completed,
    Overdue,
    Pending,
}

impl ReminderStatus {
    pub fn of(reminder: &Reminder, today: NaiveDate) -> Self {
        if reminder.completed {
            ReminderStatus::Completed
        } else if reminder.is_overdue(today) {
            ReminderStatus::Overdue
        } else {
            ReminderStatus::Pending
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReminderStatus::Completed => "done",
            ReminderStatus::Overdue => "overdue",
            ReminderStatus::Pending => "pending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_incomplete_is_overdue() {
        assert!(is_overdue(Some("2023-01-01"), false, ymd(2023, 1, 2)));
        assert!(is_overdue(Some("2023-01-01"), false, crate::date::today()));
    }

    #[test]
    fn completed_is_never_overdue() {
        assert!(!is_overdue(Some("2023-01-01"), true, ymd(2024, 6, 1)));
    }

    #[test]
    fn due_today_is_not_overdue() {
        assert!(!is_overdue(Some("2024-03-20"), false, ymd(2024, 3, 20)));
        assert!(!is_overdue(Some("03/20/2024"), false, ymd(2024, 3, 20)));
    }

    #[test]
    fn unparseable_is_never_overdue() {
        let today = ymd(2030, 1, 1);
        assert!(!is_overdue(Some("invalid-date"), false, today));
        assert!(!is_overdue(Some(""), false, today));
        assert!(!is_overdue(None, false, today));
    }

    #[test]
    fn status_precedence() {
        let today = ymd(2024, 3, 20);
        let late = Reminder::new(1, "late", Some("2024-03-01"));
        let done_late = late.clone().with_completed(true);
        let upcoming = Reminder::new(2, "upcoming", Some("2024-04-01"));

        assert_eq!(late.status(today), ReminderStatus::Overdue);
        assert_eq!(done_late.status(today), ReminderStatus::Completed);
        assert_eq!(upcoming.status(today), ReminderStatus::Pending);
    }
}
