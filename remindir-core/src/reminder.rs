//! Reminder records as exchanged with the reminder backend.
//!
//! The backend is loosely typed: ids arrive as numbers or strings, the due
//! date is free text, and records carry fields this client never looks at.
//! `Reminder` declares the fields the views depend on and keeps everything
//! else in `extra`, so a record can be posted back exactly as it was received.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::DATE_FORMAT;
use crate::date::{DateError, format_date, normalize_date};
use crate::error::{RemindirError, RemindirResult};
use crate::status::{ReminderStatus, is_overdue};

/// Opaque backend identifier (reminders, companies).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Interpret user input: numeric text becomes a numeric id.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<i64>() {
            Ok(n) => RecordId::Number(n),
            Err(_) => RecordId::Text(input.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// Which listing a reminder was fetched from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    #[default]
    Personal,
    Company,
}

impl ReminderKind {
    /// Numeric `type` code the backend expects on creation.
    pub fn type_code(self) -> u8 {
        match self {
            ReminderKind::Personal => 1,
            ReminderKind::Company => 2,
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderKind::Personal => f.write_str("personal"),
            ReminderKind::Company => f.write_str("company"),
        }
    }
}

/// A reminder as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Due date exactly as the backend sent it. See [`crate::date`].
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub completed: bool,

    /// Set by the fetch path, never read from the payload.
    #[serde(skip)]
    pub kind: ReminderKind,

    /// Fields not modeled here (including the backend's own `type`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Reminder {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, date: Option<&str>) -> Self {
        Reminder {
            id: id.into(),
            title: title.into(),
            description: None,
            date: date.map(str::to_string),
            completed: false,
            kind: ReminderKind::Personal,
            extra: Map::new(),
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_kind(mut self, kind: ReminderKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn due_date(&self) -> Result<NaiveDate, DateError> {
        normalize_date(self.date.as_deref())
    }

    /// Due date for display, falling back to the raw text.
    pub fn display_date(&self) -> String {
        format_date(self.date.as_deref())
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        is_overdue(self.date.as_deref(), self.completed, today)
    }

    pub fn status(&self, today: NaiveDate) -> ReminderStatus {
        ReminderStatus::of(self, today)
    }
}

/// Owner reference embedded in creation payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRef {
    pub id: String,
}

/// Body of `CreateReminder` / `CreateCompanyReminder`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReminder {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_code: u8,
    #[serde(rename = "picture_Url", skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    pub date: String,
    pub start_time: String,
    pub user: UserRef,
}

impl NewReminder {
    pub fn new(
        kind: ReminderKind,
        user_id: &str,
        title: impl Into<String>,
        description: Option<String>,
        date: impl Into<String>,
    ) -> Self {
        NewReminder {
            title: title.into(),
            description: description.unwrap_or_default(),
            type_code: kind.type_code(),
            picture_url: None,
            date: date.into(),
            start_time: "00:00".to_string(),
            user: UserRef {
                id: user_id.to_string(),
            },
        }
    }

    /// Check the fields the creation form requires.
    pub fn validate(&self) -> RemindirResult<()> {
        let mut problems = Vec::new();

        if self.title.trim().is_empty() {
            problems.push("Title is required".to_string());
        }

        if self.date.trim().is_empty() {
            problems.push("Due date is required".to_string());
        } else if let Err(e) = normalize_date(Some(&self.date)) {
            problems.push(e.to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(RemindirError::InvalidReminder(problems.join("; ")))
        }
    }

    /// Validate and rewrite the date in canonical `YYYY-MM-DD` form.
    pub fn into_validated(mut self) -> RemindirResult<Self> {
        self.validate()?;
        let date = normalize_date(Some(&self.date))
            .map_err(|e| RemindirError::InvalidReminder(e.to_string()))?;
        self.title = self.title.trim().to_string();
        self.date = date.format(DATE_FORMAT).to_string();
        Ok(self)
    }
}
