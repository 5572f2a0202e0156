pub mod auth;
pub mod calendar;
pub mod company;
pub mod dashboard;
pub mod delete;
pub mod list;
pub mod new;
pub mod search;
pub mod toggle;

use anyhow::Result;
use remindir_core::Reminder;
use remindir_core::config::RemindirConfig;
use remindir_core::view_state::merged;

use crate::client::Client;
use crate::utils::tui;

/// A signed-in user and a client for their backend.
pub struct Session {
    pub client: Client,
    pub user_id: String,
}

impl Session {
    /// Fails with sign-in guidance when no user is configured.
    pub fn new(config: &RemindirConfig) -> Result<Self> {
        let user_id = config.require_user()?.to_string();
        let client = Client::new(config)?;
        Ok(Session { client, user_id })
    }

    /// Personal or company reminders, behind a spinner.
    pub async fn reminders(&self, company: bool) -> Vec<Reminder> {
        let spinner = tui::create_spinner("Fetching reminders");
        let reminders = if company {
            self.client.company_reminders(&self.user_id).await
        } else {
            self.client.personal_reminders(&self.user_id).await
        };
        spinner.finish_and_clear();
        reminders
    }

    /// Personal reminders followed by company reminders.
    pub async fn all_reminders(&self) -> Vec<Reminder> {
        let spinner = tui::create_spinner("Fetching reminders");
        let (personal, company) = tokio::join!(
            self.client.personal_reminders(&self.user_id),
            self.client.company_reminders(&self.user_id)
        );
        spinner.finish_and_clear();
        merged(&personal, &company)
    }
}
