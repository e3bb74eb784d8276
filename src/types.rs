//! Shared data contracts for tickets, sessions, and toast notifications.
//!
//! DESIGN
//! ======
//! Field names and enum value sets mirror the JSON the API client and the
//! login flow exchange, so serde round-trips stay lossless. Timestamps travel
//! as ISO-8601 strings and are kept verbatim; `parse_timestamp` reads them
//! only where a comparison is needed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on ticket description length accepted by the edit form.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Parse an ISO-8601 timestamp.
///
/// Accepts full RFC 3339 values, date-times without an offset, and bare
/// dates. The last two are read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Lifecycle state of a ticket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// Wire representation (`"open"`, `"in_progress"`, `"closed"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

/// Relative urgency of a ticket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TicketPriority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire representation (`"low"`, `"medium"`, `"high"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// A ticket as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique ticket identifier. Assigned on creation, never changes.
    pub id: String,
    /// Owning user. Assigned on creation, never changes.
    pub user_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    /// ISO-8601 creation timestamp, as sent by the API.
    pub created_at: String,
    /// ISO-8601 last-change timestamp, as sent by the API.
    pub updated_at: String,
}

/// Editable draft of a ticket. Identity and timestamps are assigned elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFormData {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
}

impl TicketFormData {
    /// Check the draft and collect per-field messages.
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if self.title.trim().is_empty() {
            errors.title = Some("Title is required".to_owned());
        }
        if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.description = Some(format!(
                "Description must be at most {DESCRIPTION_MAX_CHARS} characters"
            ));
        }
        errors
    }
}

impl From<&Ticket> for TicketFormData {
    fn from(ticket: &Ticket) -> Self {
        Self {
            title: ticket.title.clone(),
            description: ticket.description.clone().unwrap_or_default(),
            status: ticket.status,
            priority: ticket.priority,
        }
    }
}

/// Validation output for the ticket form. A missing field means no error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none() && self.description.is_none()
    }
}

/// The authenticated principal, as persisted by the login flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    /// ISO-8601 expiry, as written by the login flow.
    pub expires_at: String,
}

impl SessionData {
    /// Parsed `expires_at`, or `None` if it is not a timestamp.
    #[must_use]
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.expires_at)
    }

    /// A session stops being valid at the instant `expires_at` is reached.
    /// An unreadable expiry never counts as valid.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry().map_or(true, |expiry| now >= expiry)
    }

    /// Name to greet the user with, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Visual flavor of a toast notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Ephemeral notification shown over the current view. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastState {
    pub show: bool,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
}

impl ToastState {
    fn shown(kind: ToastKind, message: impl Into<String>) -> Self {
        Self { show: true, message: message.into(), kind }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::shown(ToastKind::Success, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::shown(ToastKind::Error, message)
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::shown(ToastKind::Info, message)
    }

    /// Hide the toast, keeping its last message and kind for fade-out.
    pub fn dismiss(&mut self) {
        self.show = false;
    }
}
