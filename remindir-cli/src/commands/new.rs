use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use remindir_core::date::{format_date, normalize_date};
use remindir_core::{NewReminder, Reminder, ReminderKind};

use super::Session;

/// Options for a company reminder.
pub struct CompanyCodes {
    /// Defaults to the user's own company.
    pub company_code: Option<String>,
    pub create_code: Option<String>,
}

pub async fn run(
    session: &Session,
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
    company: Option<CompanyCodes>,
) -> Result<()> {
    let interactive = title.is_none() || date.is_none();

    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    let date = match date {
        Some(d) => d,
        None => prompt_date("  Due date (YYYY-MM-DD)")?,
    };

    let description = match description {
        Some(d) => Some(d),
        None if interactive => {
            let d: String = Input::new()
                .with_prompt("  Description (skip)")
                .default(String::new())
                .show_default(false)
                .interact_text()?;
            Some(d)
        }
        None => None,
    };

    let kind = if company.is_some() {
        ReminderKind::Company
    } else {
        ReminderKind::Personal
    };

    let reminder = build_reminder(kind, &session.user_id, title, description, date)?;

    let created = match company {
        None => session.client.create_reminder(&reminder).await?,
        Some(codes) => {
            let (company_code, create_code) = resolve_codes(session, codes).await?;
            session
                .client
                .create_company_reminder(&reminder, &company_code, &create_code)
                .await?
        }
    };

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", created_label(created.as_ref(), &reminder)).green());

    Ok(())
}

/// Title and date of the new reminder, from the submitted payload when the
/// backend does not echo the record.
fn created_label(created: Option<&Reminder>, submitted: &NewReminder) -> String {
    match created {
        Some(r) => format!("{} ({})", r.title, format_date(r.date.as_deref())),
        None => format!("{} ({})", submitted.title, submitted.date),
    }
}

/// Build a creation payload with a canonical date.
fn build_reminder(
    kind: ReminderKind,
    user_id: &str,
    title: String,
    description: Option<String>,
    date: String,
) -> Result<NewReminder> {
    let description = description.filter(|d| !d.trim().is_empty());
    Ok(NewReminder::new(kind, user_id, title, description, date).into_validated()?)
}

async fn resolve_codes(session: &Session, codes: CompanyCodes) -> Result<(String, String)> {
    let company_code = match codes.company_code {
        Some(code) => code,
        None => match session.client.company_id(&session.user_id).await {
            Some(id) => id.to_string(),
            None => anyhow::bail!(
                "You are not part of a company.\n\n\
                Join one with:\n  \
                remindir company switch <company-id>"
            ),
        },
    };

    let create_code = match codes.create_code {
        Some(code) => code,
        None => Input::<String>::new()
            .with_prompt("  Create code")
            .interact_text()?,
    };

    Ok((company_code, create_code))
}

/// Prompt until the input parses as a date.
fn prompt_date(prompt: &str) -> Result<String> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match normalize_date(Some(&input)) {
            Ok(_) => return Ok(input),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_date_is_canonical() {
        let reminder = build_reminder(
            ReminderKind::Personal,
            "auth0|abc",
            "Pay rent".into(),
            None,
            "03/20/2024".into(),
        )
        .unwrap();

        assert_eq!(reminder.date, "2024-03-20");
        assert_eq!(reminder.type_code, 1);
        assert_eq!(reminder.description, "");
    }

    #[test]
    fn blank_description_is_dropped() {
        let reminder = build_reminder(
            ReminderKind::Company,
            "auth0|abc",
            "Standup".into(),
            Some("   ".into()),
            "2024-03-20".into(),
        )
        .unwrap();

        assert_eq!(reminder.description, "");
        assert_eq!(reminder.type_code, 2);
    }

    #[test]
    fn created_label_falls_back_to_submitted_fields() {
        let submitted = build_reminder(
            ReminderKind::Personal,
            "auth0|abc",
            "Pay rent".into(),
            None,
            "2024/03/20".into(),
        )
        .unwrap();
        assert_eq!(created_label(None, &submitted), "Pay rent (2024-03-20)");

        let echoed = Reminder::new(3, "Pay rent", Some("03/21/2024"));
        assert_eq!(created_label(Some(&echoed), &submitted), "Pay rent (2024-03-21)");
    }

    #[test]
    fn missing_title_is_rejected() {
        let err = build_reminder(
            ReminderKind::Personal,
            "auth0|abc",
            " ".into(),
            None,
            "2024-03-20".into(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("Title is required"));
    }
}
