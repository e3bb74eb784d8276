use super::*;
use crate::router::routes::{ROUTES, by_path};
use crate::state::session::SESSION_STORAGE_KEY;
use crate::util::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

const VALID: &str = r#"{"userId":"u1","email":"a@b.com","expiresAt":"2099-01-01T00:00:00Z"}"#;
const EXPIRED: &str = r#"{"userId":"u1","email":"a@b.com","expiresAt":"2000-01-01T00:00:00Z"}"#;

fn repo_with(raw: &str) -> SessionRepository<MemoryStorage> {
    SessionRepository::new(MemoryStorage::with_item(SESSION_STORAGE_KEY, raw))
}

fn empty_repo() -> SessionRepository<MemoryStorage> {
    SessionRepository::new(MemoryStorage::new())
}

fn route(path: &str) -> &'static RouteDef {
    by_path(path).unwrap()
}

// =============================================================
// decide
// =============================================================

#[test]
fn protected_routes_without_session_redirect_to_login() {
    for target in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(decide(target, false), Navigation::Redirect("/login"), "{}", target.path);
    }
}

#[test]
fn protected_routes_with_session_proceed() {
    for target in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(decide(target, true), Navigation::Proceed, "{}", target.path);
    }
}

#[test]
fn guest_only_routes_with_session_redirect_to_dashboard() {
    assert_eq!(decide(route("/login"), true), Navigation::Redirect("/dashboard"));
    assert_eq!(decide(route("/sign-up"), true), Navigation::Redirect("/dashboard"));
}

#[test]
fn landing_with_session_proceeds() {
    assert_eq!(decide(route("/"), true), Navigation::Proceed);
}

#[test]
fn public_routes_without_session_proceed() {
    for target in ROUTES.iter().filter(|r| !r.requires_auth) {
        assert_eq!(decide(target, false), Navigation::Proceed, "{}", target.path);
    }
}

#[test]
fn decide_never_redirects_to_its_own_target() {
    for target in &ROUTES {
        for has_session in [false, true] {
            if let Navigation::Redirect(to) = decide(target, has_session) {
                assert_ne!(to, target.path);
                // The redirect target itself must settle without a further hop.
                assert_eq!(decide(route(to), has_session), Navigation::Proceed);
            }
        }
    }
}

// =============================================================
// evaluate
// =============================================================

fn navigation<S: SessionStorage>(path: &str, repo: &SessionRepository<S>) -> Navigation {
    evaluate(path, repo).navigation
}

#[test]
fn valid_session_reaches_dashboard() {
    let repo = repo_with(VALID);
    assert_eq!(navigation("/dashboard", &repo), Navigation::Proceed);
}

#[test]
fn expired_session_redirects_tickets_and_clears_storage() {
    let repo = repo_with(EXPIRED);
    assert_eq!(navigation("/tickets", &repo), Navigation::Redirect("/login"));
    assert!(repo.storage().get_item(SESSION_STORAGE_KEY).is_none());
}

#[test]
fn empty_storage_allows_landing_but_not_dashboard() {
    let repo = empty_repo();
    assert_eq!(navigation("/", &repo), Navigation::Proceed);
    assert_eq!(navigation("/dashboard", &repo), Navigation::Redirect("/login"));
}

#[test]
fn malformed_session_is_logged_out_and_cleared() {
    let repo = repo_with("not-json");
    assert_eq!(navigation("/tickets", &repo), Navigation::Redirect("/login"));
    assert!(repo.storage().is_empty());
}

#[test]
fn malformed_session_can_still_open_login() {
    let repo = repo_with("{}");
    assert_eq!(navigation("/login", &repo), Navigation::Proceed);
    assert!(repo.storage().is_empty());
}

#[test]
fn valid_session_bounces_off_sign_up() {
    let repo = repo_with(VALID);
    assert_eq!(navigation("/sign-up", &repo), Navigation::Redirect("/dashboard"));
    // A valid session is never erased by the guard.
    assert!(repo.storage().get_item(SESSION_STORAGE_KEY).is_some());
}

#[test]
fn unknown_path_proceeds() {
    assert_eq!(navigation("/nowhere", &empty_repo()), Navigation::Proceed);
    assert_eq!(navigation("/nowhere", &repo_with(VALID)), Navigation::Proceed);
}

#[test]
fn table_paths_follow_decide() {
    for target in &ROUTES {
        assert_eq!(navigation(target.path, &empty_repo()), decide(target, false), "{}", target.path);
        assert_eq!(navigation(target.path, &repo_with(VALID)), decide(target, true), "{}", target.path);
    }
}

#[test]
fn outcome_carries_resolved_session() {
    let outcome = evaluate("/dashboard", &repo_with(VALID));
    assert_eq!(outcome.navigation, Navigation::Proceed);
    let session = outcome.session.unwrap();
    assert_eq!(session.user_id, "u1");
    assert_eq!(session.email, "a@b.com");
}

#[test]
fn outcome_has_no_session_after_expiry_cleanup() {
    let repo = repo_with(EXPIRED);
    let outcome = evaluate("/", &repo);
    assert_eq!(outcome.navigation, Navigation::Proceed);
    assert!(outcome.session.is_none());
    assert!(repo.storage().is_empty());
}
