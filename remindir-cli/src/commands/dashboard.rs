use anyhow::Result;
use owo_colors::OwoColorize;
use remindir_core::date::today;
use remindir_core::summary::summarize;

use super::Session;
use crate::render::{RenderOn, render_table};

pub async fn run(session: &Session, company: bool) -> Result<()> {
    let reminders = session.reminders(company).await;
    let today = today();

    let heading = if company { "Company Reminders" } else { "My Reminders" };
    println!("{}", heading.bold());
    println!();
    println!("{}", summarize(&reminders, today).render_on(today));
    println!();
    println!("{}", render_table(&reminders, today));

    Ok(())
}
