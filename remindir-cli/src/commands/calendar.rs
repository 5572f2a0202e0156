use anyhow::Result;
use remindir_core::calendar::{Month, calendar_entries};
use remindir_core::date::today;

use super::Session;
use crate::render::render_agenda;

pub async fn run(session: &Session, month: Option<String>) -> Result<()> {
    let today = today();
    let month = match month {
        Some(m) => Month::parse(&m).map_err(|e| anyhow::anyhow!(e))?,
        None => Month::containing(today),
    };

    let reminders = session.all_reminders().await;
    let view = calendar_entries(&reminders, today);

    println!("{}", render_agenda(&view, month, today));
    Ok(())
}
