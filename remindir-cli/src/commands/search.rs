use anyhow::Result;
use owo_colors::OwoColorize;
use remindir_core::date::today;

use super::Session;
use crate::render::render_table;
use crate::utils::tui;

pub async fn run(session: &Session, query: &str) -> Result<()> {
    let spinner = tui::create_spinner(format!("Searching for \"{}\"", query));
    let found = session.client.search_reminders(&session.user_id, query).await;
    spinner.finish_and_clear();

    println!("{}", format!("Results for \"{}\"", query).bold());
    println!("{}", render_table(&found, today()));
    Ok(())
}
