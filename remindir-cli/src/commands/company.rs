use anyhow::Result;
use owo_colors::OwoColorize;
use remindir_core::company::ChangeCompanyRequest;
use remindir_core::date::today;
use remindir_core::summary::summarize;

use super::Session;
use crate::render::{Render, RenderOn, render_table};
use crate::utils::tui;

pub async fn show(session: &Session) -> Result<()> {
    let spinner = tui::create_spinner("Fetching company");
    let company_id = session.client.company_id(&session.user_id).await;
    let info = match &company_id {
        Some(id) => session.client.company_information(id).await,
        None => None,
    };
    spinner.finish_and_clear();

    let Some(info) = info else {
        println!("{}", "You are not part of a company".dimmed());
        println!();
        println!("Join one with:\n  remindir company switch <company-id>");
        return Ok(());
    };

    println!("{}", info.render());
    println!();

    let reminders = session.reminders(true).await;
    let today = today();
    println!("{}", summarize(&reminders, today).render_on(today));
    println!();
    println!("{}", render_table(&reminders, today));

    Ok(())
}

pub async fn switch(session: &Session, company_id: &str) -> Result<()> {
    let password = rpassword::prompt_password("  Company password: ")?;

    let body = ChangeCompanyRequest {
        user_id: session.user_id.clone(),
        company_id: company_id.trim().to_string(),
        password,
    };

    let spinner = tui::create_spinner("Changing company");
    let result = session.client.change_company(&body).await;
    spinner.finish_and_clear();
    result?;

    println!("{}", "  Company changed successfully!".green());
    println!();

    show(session).await
}
