//! Pre-navigation auth guard.
//!
//! `decide` is the whole policy: a pure mapping from the target route and
//! whether a valid session exists to proceed-or-redirect. `evaluate` feeds it
//! from the session repository and hands back the session it saw.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{self, DASHBOARD_PATH, GUEST_ONLY_PATHS, LOGIN_PATH, RouteDef};
use crate::state::session::SessionRepository;
use crate::types::SessionData;
use crate::util::storage::SessionStorage;

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

/// Decide whether navigation to `target` may proceed.
#[must_use]
pub fn decide(target: &RouteDef, has_session: bool) -> Navigation {
    if target.requires_auth && !has_session {
        Navigation::Redirect(LOGIN_PATH)
    } else if !target.requires_auth && has_session && GUEST_ONLY_PATHS.contains(&target.path) {
        Navigation::Redirect(DASHBOARD_PATH)
    } else {
        Navigation::Proceed
    }
}

/// What the guard resolved for one navigation: the outcome, and the session
/// it was decided against so the mounted page need not read storage again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardOutcome {
    pub navigation: Navigation,
    pub session: Option<SessionData>,
}

/// Run the guard for navigation to `path` against the stored session.
///
/// The session is checked exactly once. Paths outside the route table carry
/// no policy and always proceed.
pub fn evaluate<S: SessionStorage>(path: &str, sessions: &SessionRepository<S>) -> GuardOutcome {
    let session = sessions.check();
    let navigation = match routes::by_path(path) {
        Some(target) => decide(target, session.is_some()),
        None => Navigation::Proceed,
    };
    if let Navigation::Redirect(to) = navigation {
        log::debug!("guard: {path} -> {to}");
    }
    GuardOutcome { navigation, session }
}
