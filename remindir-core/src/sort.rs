//! Due-date ordering for reminder lists.

use chrono::NaiveDate;

use crate::reminder::Reminder;

/// Sort key: every normalizable date orders before every unparseable one.
/// Unparseable dates compare by their raw text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum DueKey<'a> {
    Date(NaiveDate),
    Raw(&'a str),
}

impl<'a> DueKey<'a> {
    fn of(reminder: &'a Reminder) -> Self {
        match reminder.due_date() {
            Ok(date) => DueKey::Date(date),
            Err(_) => DueKey::Raw(reminder.date.as_deref().unwrap_or_default()),
        }
    }
}

/// A borrowed, ordered view over a reminder slice.
///
/// The slice is left untouched; `iter()` can be called any number of times.
#[derive(Debug, Clone)]
pub struct SortedReminders<'a> {
    reminders: &'a [Reminder],
    order: Vec<usize>,
}

impl<'a> SortedReminders<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Reminder> + '_ {
        let reminders = self.reminders;
        self.order.iter().map(move |&i| &reminders[i])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Owned copy of the ordered reminders.
    pub fn to_vec(&self) -> Vec<Reminder> {
        self.iter().cloned().collect()
    }
}

impl<'s, 'a> IntoIterator for &'s SortedReminders<'a> {
    type Item = &'a Reminder;
    type IntoIter = Box<dyn Iterator<Item = &'a Reminder> + 's>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Order reminders ascending by due date. Equal keys keep their input order.
pub fn sort_by_due_date(reminders: &[Reminder]) -> SortedReminders<'_> {
    let keys: Vec<DueKey<'_>> = reminders.iter().map(DueKey::of).collect();

    let mut order: Vec<usize> = (0..reminders.len()).collect();
    order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));

    SortedReminders { reminders, order }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn titles(sorted: &SortedReminders<'_>) -> Vec<String> {
        sorted.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn sorts_mixed_formats_by_calendar_date() {
        let reminders = vec![
            Reminder::new(1, "c", Some("03/25/2024")),
            Reminder::new(2, "a", Some("2024-03-20")),
            Reminder::new(3, "b", Some("2024/03/21")),
        ];

        assert_eq!(titles(&sort_by_due_date(&reminders)), ["a", "b", "c"]);
    }

    #[test]
    fn unparseable_dates_follow_lexically() {
        let reminders = vec![
            Reminder::new(1, "zeta", Some("zzz")),
            Reminder::new(2, "dated", Some("2030-01-01")),
            Reminder::new(3, "alpha", Some("abc")),
            Reminder::new(4, "missing", None),
        ];

        assert_eq!(
            titles(&sort_by_due_date(&reminders)),
            ["dated", "missing", "alpha", "zeta"]
        );
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let reminders = vec![
            Reminder::new(1, "first", Some("2024-03-20")),
            Reminder::new(2, "earlier", Some("2024-03-01")),
            Reminder::new(3, "second", Some("2024/03/20")),
            Reminder::new(4, "third", Some("03/20/2024")),
        ];

        assert_eq!(
            titles(&sort_by_due_date(&reminders)),
            ["earlier", "first", "second", "third"]
        );
    }

    #[test]
    fn view_is_restartable_and_input_untouched() {
        let reminders = vec![
            Reminder::new(1, "b", Some("2024-03-21")),
            Reminder::new(2, "a", Some("2024-03-20")),
        ];
        let before = reminders.clone();

        let sorted = sort_by_due_date(&reminders);
        assert_eq!(titles(&sorted), titles(&sorted));
        assert_eq!(sorted.len(), 2);
        assert_eq!((&sorted).into_iter().count(), 2);
        assert_eq!(reminders, before);
    }

    #[test]
    fn empty_input() {
        let sorted = sort_by_due_date(&[]);
        assert!(sorted.is_empty());
        assert_eq!(sorted.iter().count(), 0);
    }

    fn arb_date() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            (2020i32..2026, 1u32..13, 1u32..29)
                .prop_map(|(y, m, d)| Some(format!("{:04}-{:02}-{:02}", y, m, d))),
            (2020i32..2026, 1u32..13, 1u32..29)
                .prop_map(|(y, m, d)| Some(format!("{:04}/{:02}/{:02}", y, m, d))),
            (2020i32..2026, 1u32..13, 1u32..29)
                .prop_map(|(y, m, d)| Some(format!("{:02}/{:02}/{:04}", m, d, y))),
            "[a-z]{0,6}".prop_map(Some),
            Just(None),
        ]
    }

    fn arb_reminders() -> impl Strategy<Value = Vec<Reminder>> {
        prop::collection::vec((arb_date(), any::<bool>()), 0..40).prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (date, completed))| {
                    Reminder::new(i as i64, format!("r{}", i), date.as_deref())
                        .with_completed(completed)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn sorting_is_idempotent(reminders in arb_reminders()) {
            let once = sort_by_due_date(&reminders).to_vec();
            let twice = sort_by_due_date(&once).to_vec();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn sorting_is_stable(reminders in arb_reminders()) {
            let sorted = sort_by_due_date(&reminders).to_vec();
            prop_assert_eq!(sorted.len(), reminders.len());

            for pair in sorted.windows(2) {
                let (a, b) = (DueKey::of(&pair[0]), DueKey::of(&pair[1]));
                prop_assert!(a <= b);
                if a == b {
                    // ids are input positions
                    prop_assert!(pair[0].id.to_string().parse::<i64>().unwrap()
                        < pair[1].id.to_string().parse::<i64>().unwrap());
                }
            }
        }
    }
}
