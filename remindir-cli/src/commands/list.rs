use anyhow::Result;
use remindir_core::date::today;
use remindir_core::sort::sort_by_due_date;

use super::Session;
use crate::render::render_table;

pub async fn run(session: &Session, company: bool) -> Result<()> {
    let reminders = session.reminders(company).await;
    let sorted = sort_by_due_date(&reminders);

    println!("{}", render_table(&sorted, today()));
    Ok(())
}
