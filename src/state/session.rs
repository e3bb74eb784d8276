//! Persisted login session: the single source of truth for "who is signed in".
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes a JSON `SessionData` under `ticketapp_session`; the
//! navigation guard reads it through `SessionRepository::check` before every
//! route change. Reads that find a corrupt or expired entry erase it, so the
//! slot never holds a value that would be half-trusted on the next read.
//!
//! ERROR HANDLING
//! ==============
//! `load` reports why a stored session is unusable; `check` absorbs those
//! errors into "no session" after logging, so callers only ever see
//! `Option<SessionData>`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use chrono::{DateTime, Utc};

use crate::types::SessionData;
use crate::util::storage::{BrowserStorage, SessionStorage, StorageError};

/// `localStorage` key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "ticketapp_session";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("stored session is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("stored session has unreadable expiry {expires_at:?}")]
    InvalidExpiry { expires_at: String },
    #[error("stored session expired at {expires_at}")]
    Expired { expires_at: String },
    #[error("failed to encode session: {0}")]
    Encode(serde_json::Error),
    #[error("failed to persist session: {0}")]
    Storage(#[from] StorageError),
}

/// Session the guard admitted the current page with, provided as context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentSession(pub Option<SessionData>);

/// Accessor/mutator pair over the persisted session slot.
#[derive(Clone, Debug, Default)]
pub struct SessionRepository<S> {
    storage: S,
}

impl SessionRepository<BrowserStorage> {
    /// Repository backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: SessionStorage> SessionRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Parse the stored session and check it against `now`.
    ///
    /// Returns `Ok(None)` when nothing is stored. Has no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] if the entry does not match the
    /// session shape, [`SessionError::InvalidExpiry`] if its expiry is not an
    /// ISO-8601 timestamp, or [`SessionError::Expired`] if `now` has reached
    /// its expiry.
    pub fn load(&self, now: DateTime<Utc>) -> Result<Option<SessionData>, SessionError> {
        let Some(raw) = self.storage.get_item(SESSION_STORAGE_KEY) else {
            return Ok(None);
        };
        let session: SessionData = serde_json::from_str(&raw)?;
        let Some(expiry) = session.expiry() else {
            return Err(SessionError::InvalidExpiry { expires_at: session.expires_at });
        };
        if now >= expiry {
            return Err(SessionError::Expired { expires_at: session.expires_at });
        }
        Ok(Some(session))
    }

    /// Current valid session, if any, as of `now`.
    ///
    /// A malformed or expired entry is removed from storage and reported as
    /// no session.
    pub fn check_at(&self, now: DateTime<Utc>) -> Option<SessionData> {
        match self.load(now) {
            Ok(session) => session,
            Err(e) => {
                match &e {
                    SessionError::Expired { .. } => log::debug!("session check: {e}"),
                    _ => log::error!("session check: {e}"),
                }
                self.storage.remove_item(SESSION_STORAGE_KEY);
                None
            }
        }
    }

    /// Current valid session, if any, as of the wall clock.
    pub fn check(&self) -> Option<SessionData> {
        self.check_at(Utc::now())
    }

    /// Persist `session`, replacing any existing entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be serialized or the storage
    /// backend refuses the write.
    pub fn save(&self, session: &SessionData) -> Result<(), SessionError> {
        let raw = serde_json::to_string(session).map_err(SessionError::Encode)?;
        self.storage.set_item(SESSION_STORAGE_KEY, &raw)?;
        log::info!("session saved for user {}", session.user_id);
        Ok(())
    }

    /// Remove the stored session (logout).
    pub fn clear(&self) {
        self.storage.remove_item(SESSION_STORAGE_KEY);
    }
}
