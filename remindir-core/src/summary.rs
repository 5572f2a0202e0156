//! Dashboard statistics over a set of reminders.

use chrono::NaiveDate;

use crate::reminder::Reminder;

/// Counts and the next upcoming reminder, as shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderSummary<'a> {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub next_activity: Option<&'a Reminder>,
}

/// Summarize `reminders` relative to `today`.
pub fn summarize(reminders: &[Reminder], today: NaiveDate) -> ReminderSummary<'_> {
    let completed = reminders.iter().filter(|r| r.completed).count();
    let overdue = reminders.iter().filter(|r| r.is_overdue(today)).count();

    ReminderSummary {
        total: reminders.len(),
        completed,
        overdue,
        next_activity: next_activity(reminders, today),
    }
}

/// Earliest incomplete reminder due today or later.
///
/// Ties on the due date go to the reminder that comes first in `reminders`.
pub fn next_activity(reminders: &[Reminder], today: NaiveDate) -> Option<&Reminder> {
    reminders
        .iter()
        .filter(|r| !r.completed)
        .filter_map(|r| r.due_date().ok().map(|due| (due, r)))
        .filter(|(due, _)| *due >= today)
        .min_by_key(|(due, _)| *due)
        .map(|(_, r)| r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::RecordId;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_total_and_completed() {
        let reminders = vec![
            Reminder::new(1, "Test Reminder 2", Some("2024-03-21")).with_completed(true),
            Reminder::new(2, "Test Reminder 1", Some("2024-03-20")),
        ];

        let summary = summarize(&reminders, ymd(2024, 3, 1));
        assert_eq!(summary.total, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.overdue, 0);
        assert_eq!(summary.next_activity.map(|r| &r.id), Some(&RecordId::Number(2)));
    }

    #[test]
    fn empty_collection() {
        let summary = summarize(&[], ymd(2024, 3, 1));
        assert_eq!(
            summary,
            ReminderSummary {
                total: 0,
                completed: 0,
                overdue: 0,
                next_activity: None,
            }
        );
    }

    #[test]
    fn overdue_excludes_completed_and_unparseable() {
        let reminders = vec![
            Reminder::new(1, "late", Some("2024-01-01")),
            Reminder::new(2, "late but done", Some("2024-01-01")).with_completed(true),
            Reminder::new(3, "garbage", Some("someday")),
            Reminder::new(4, "future", Some("2024-12-01")),
        ];

        let summary = summarize(&reminders, ymd(2024, 3, 20));
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 4);
    }

    #[test]
    fn next_activity_includes_today() {
        let today = ymd(2024, 3, 20);
        let reminders = vec![
            Reminder::new(1, "tomorrow", Some("2024-03-21")),
            Reminder::new(2, "today", Some("2024/03/20")),
            Reminder::new(3, "yesterday", Some("2024-03-19")),
        ];

        assert_eq!(next_activity(&reminders, today).map(|r| r.title.as_str()), Some("today"));
    }

    #[test]
    fn next_activity_tie_goes_to_first_in_input() {
        let today = ymd(2024, 3, 1);
        let reminders = vec![
            Reminder::new(1, "later", Some("2024-04-01")),
            Reminder::new(2, "first", Some("2024-03-10")),
            Reminder::new(3, "second", Some("03/10/2024")),
        ];

        assert_eq!(next_activity(&reminders, today).map(|r| r.title.as_str()), Some("first"));
    }

    #[test]
    fn next_activity_skips_completed_and_unparseable() {
        let today = ymd(2024, 3, 1);
        let reminders = vec![
            Reminder::new(1, "done", Some("2024-03-02")).with_completed(true),
            Reminder::new(2, "garbage", Some("invalid-date")),
            Reminder::new(3, "missing", None),
        ];

        assert!(next_activity(&reminders, today).is_none());
    }

    #[test]
    fn summarizing_does_not_touch_input() {
        let reminders = vec![Reminder::new(1, "late", Some("2024/01/01"))];
        let before = reminders.clone();
        let _ = summarize(&reminders, ymd(2024, 3, 20));
        assert_eq!(reminders, before);
    }
}
