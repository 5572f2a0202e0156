//! View-state transitions after successful backend mutations.
//!
//! Each function returns a new collection; the input is never modified.
//! Personal and company ids come from separate listings and may collide, so
//! a reminder is identified by its kind together with its id.

use crate::reminder::{RecordId, Reminder, ReminderKind};

fn is_target(reminder: &Reminder, kind: ReminderKind, id: &RecordId) -> bool {
    reminder.kind == kind && &reminder.id == id
}

/// `reminders` with the completion flag of the `kind` reminder `id` flipped.
pub fn toggled(reminders: &[Reminder], kind: ReminderKind, id: &RecordId) -> Vec<Reminder> {
    reminders
        .iter()
        .map(|r| {
            if is_target(r, kind, id) {
                r.clone().with_completed(!r.completed)
            } else {
                r.clone()
            }
        })
        .collect()
}

/// `reminders` without the `kind` reminder `id`.
pub fn removed(reminders: &[Reminder], kind: ReminderKind, id: &RecordId) -> Vec<Reminder> {
    reminders
        .iter()
        .filter(|r| !is_target(r, kind, id))
        .cloned()
        .collect()
}

/// Personal reminders followed by company reminders.
pub fn merged(personal: &[Reminder], company: &[Reminder]) -> Vec<Reminder> {
    personal.iter().chain(company).cloned().collect()
}

/// Find a reminder by the id as typed by the user. Personal reminders win
/// over company reminders with the same id.
pub fn find_by_input<'a>(reminders: &'a [Reminder], input: &str) -> Option<&'a Reminder> {
    let input = input.trim();
    reminders.iter().find(|r| r.id.to_string() == input)
}
