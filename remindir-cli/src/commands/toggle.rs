use anyhow::Result;
use owo_colors::OwoColorize;
use remindir_core::date::today;
use remindir_core::view_state::{find_by_input, toggled};

use super::Session;
use crate::render::render_table;

pub async fn run(session: &Session, id: &str) -> Result<()> {
    let reminders = session.all_reminders().await;

    let Some(reminder) = find_by_input(&reminders, id) else {
        anyhow::bail!("Reminder '{}' not found", id);
    };

    session.client.toggle_complete(reminder).await?;

    let label = if reminder.completed {
        "Marked incomplete"
    } else {
        "Marked complete"
    };
    println!("{}", format!("  {}: {}", label, reminder.title).green());

    let next = toggled(&reminders, reminder.kind, &reminder.id);
    println!();
    println!("{}", render_table(&next, today()));

    Ok(())
}
