use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use remindir_core::date::today;
use remindir_core::view_state::{find_by_input, removed};

use super::Session;
use crate::render::render_table;

pub async fn run(session: &Session, id: &str, force: bool) -> Result<()> {
    let reminders = session.all_reminders().await;

    let Some(reminder) = find_by_input(&reminders, id) else {
        anyhow::bail!("Reminder '{}' not found", id);
    };

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", reminder.title))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    session.client.delete_reminder(&reminder.id).await?;
    println!("{}", format!("  Deleted: {}", reminder.title).green());

    let next = removed(&reminders, reminder.kind, &reminder.id);
    println!();
    println!("{}", render_table(&next, today()));

    Ok(())
}
