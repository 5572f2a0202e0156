//! HTTP client for the reminder backend.
//!
//! Reads degrade: a failed listing is logged and comes back empty, a failed
//! company lookup comes back as `None`. Writes propagate their error so the
//! command can report it; nothing is retried.

use std::time::Duration;

use anyhow::{Context, Result};
use remindir_core::company::{ChangeCompanyRequest, CompanyInfo};
use remindir_core::config::RemindirConfig;
use remindir_core::{NewReminder, RecordId, Reminder, ReminderKind};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP client for the reminder backend
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

// Response types matching the backend API

#[derive(Deserialize)]
struct RemindersResponse {
    #[serde(default)]
    reminders: Vec<Reminder>,
}

#[derive(Serialize)]
struct DeleteRequest<'a> {
    id: &'a RecordId,
}

impl Client {
    pub fn new(config: &RemindirConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /Home/GetRemindersByUserId
    pub async fn personal_reminders(&self, user_id: &str) -> Vec<Reminder> {
        let request = self
            .http
            .get(self.url("/Home/GetRemindersByUserId"))
            .query(&[("user_id", user_id)]);

        self.reminders_or_empty(request, ReminderKind::Personal).await
    }

    /// GET /Home/GetRemindersByCompany
    pub async fn company_reminders(&self, user_id: &str) -> Vec<Reminder> {
        let request = self
            .http
            .get(self.url("/Home/GetRemindersByCompany"))
            .query(&[("user_id", user_id)]);

        self.reminders_or_empty(request, ReminderKind::Company).await
    }

    /// GET /Home/SearchReminders
    pub async fn search_reminders(&self, user_id: &str, search_input: &str) -> Vec<Reminder> {
        let request = self
            .http
            .get(self.url("/Home/SearchReminders"))
            .query(&[("user_id", user_id), ("searchInput", search_input)]);

        self.reminders_or_empty(request, ReminderKind::Personal).await
    }

    /// POST /Home/ToggleCompleteReminder
    ///
    /// Returns the updated reminder when the backend echoes one back.
    pub async fn toggle_complete(&self, reminder: &Reminder) -> Result<Option<Reminder>> {
        let request = self
            .http
            .post(self.url("/Home/ToggleCompleteReminder"))
            .json(reminder);

        let body = send_body(request)
            .await
            .with_context(|| format!("Failed to update reminder: {}", reminder.title))?;

        Ok(echoed_reminder(body).map(|updated| updated.with_kind(reminder.kind)))
    }

    /// DELETE /Home/DeleteReminder
    pub async fn delete_reminder(&self, id: &RecordId) -> Result<Value> {
        let request = self
            .http
            .delete(self.url("/Home/DeleteReminder"))
            .json(&DeleteRequest { id });

        send_body(request)
            .await
            .with_context(|| format!("Failed to delete reminder {}", id))
    }

    /// POST /Home/CreateReminder
    ///
    /// Any success status counts as created; the record is returned when the
    /// backend echoes one back.
    pub async fn create_reminder(&self, reminder: &NewReminder) -> Result<Option<Reminder>> {
        let request = self.http.post(self.url("/Home/CreateReminder")).json(reminder);

        let body = send_body(request)
            .await
            .with_context(|| format!("Failed to create reminder: {}", reminder.title))?;

        Ok(echoed_reminder(body))
    }

    /// POST /Home/CreateCompanyReminder
    pub async fn create_company_reminder(
        &self,
        reminder: &NewReminder,
        company_code: &str,
        create_code: &str,
    ) -> Result<Option<Reminder>> {
        let request = self
            .http
            .post(self.url("/Home/CreateCompanyReminder"))
            .query(&[("company_code", company_code), ("create_code", create_code)])
            .json(reminder);

        let body = send_body(request)
            .await
            .with_context(|| format!("Failed to create company reminder: {}", reminder.title))?;

        Ok(echoed_reminder(body).map(|created| created.with_kind(ReminderKind::Company)))
    }

    /// GET /User/GetCompanyInformation
    pub async fn company_information(&self, company_id: &RecordId) -> Option<CompanyInfo> {
        let company_id = company_id.to_string();
        let request = self
            .http
            .get(self.url("/User/GetCompanyInformation"))
            .query(&[("company_id", company_id.as_str())]);

        send_json(request)
            .await
            .inspect_err(|e| log::warn!("Could not fetch company information: {e:#}"))
            .ok()
    }

    /// GET /User/GetCompanyId
    ///
    /// `None` when the lookup fails or the user has no company.
    pub async fn company_id(&self, user_id: &str) -> Option<RecordId> {
        let request = self
            .http
            .get(self.url("/User/GetCompanyId"))
            .query(&[("user_id", user_id)]);

        let id: Option<RecordId> = send_json(request)
            .await
            .inspect_err(|e| log::warn!("Could not fetch company id: {e:#}"))
            .ok()?;

        id.filter(|id| !matches!(id, RecordId::Text(s) if s.is_empty()))
    }

    /// POST /User/ChangeCompanyId
    pub async fn change_company(&self, body: &ChangeCompanyRequest) -> Result<Value> {
        let request = self.http.post(self.url("/User/ChangeCompanyId")).json(body);

        send_body(request)
            .await
            .with_context(|| format!("Failed to change company to {}", body.company_id))
    }

    async fn reminders_or_empty(&self, request: RequestBuilder, kind: ReminderKind) -> Vec<Reminder> {
        match send_json::<RemindersResponse>(request).await {
            Ok(response) => response
                .reminders
                .into_iter()
                .map(|r| r.with_kind(kind))
                .collect(),
            Err(e) => {
                log::warn!("Could not fetch {} reminders: {e:#}", kind);
                Vec::new()
            }
        }
    }
}

/// Send a request and decode a JSON body, failing on non-success status.
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let resp = send(request).await?;
    resp.json().await.context("Unexpected response body")
}

/// Send a write request. Any success status is accepted whatever the body:
/// empty is `Null`, non-JSON text is kept as a string.
async fn send_body(request: RequestBuilder) -> Result<Value> {
    let resp = send(request).await?;
    let text = resp.text().await.context("Failed to read response body")?;

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

fn echoed_reminder(body: Value) -> Option<Reminder> {
    serde_json::from_value(body).ok()
}

async fn send(request: RequestBuilder) -> Result<Response> {
    let (http, request) = request.build_split();
    let request = request.context("Failed to build request")?;
    log::debug!("{} {}", request.method(), request.url());

    let resp = http
        .execute(request)
        .await
        .context("Failed to connect to server")?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Server returned {}: {}", status, body.trim());
    }

    Ok(resp)
}
