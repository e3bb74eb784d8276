//! Static route table.
//!
//! DESIGN
//! ======
//! Each entry pairs a path with its page and its auth policy. The table is
//! plain data; the guard reads `requires_auth` from it and never mutates it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LANDING_PATH: &str = "/";
/// Where unauthenticated visitors of a protected route are sent.
pub const LOGIN_PATH: &str = "/login";
pub const SIGN_UP_PATH: &str = "/sign-up";
/// Where signed-in visitors of a guest-only route are sent.
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const TICKETS_PATH: &str = "/tickets";
/// Public routes that a signed-in user is bounced away from.
pub const GUEST_ONLY_PATHS: [&str; 2] = [LOGIN_PATH, SIGN_UP_PATH];

/// Pages the router can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    SignUp,
    Dashboard,
    Tickets,
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    /// Exact URL path, with leading slash.
    pub path: &'static str,
    /// Unique route name.
    pub name: &'static str,
    pub page: Page,
    pub requires_auth: bool,
}

impl RouteDef {
    /// Path without the leading slash, as a router path segment.
    #[must_use]
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

pub static ROUTES: [RouteDef; 5] = [
    RouteDef { path: LANDING_PATH, name: "landing", page: Page::Landing, requires_auth: false },
    RouteDef { path: LOGIN_PATH, name: "login", page: Page::Login, requires_auth: false },
    RouteDef { path: SIGN_UP_PATH, name: "signup", page: Page::SignUp, requires_auth: false },
    RouteDef { path: DASHBOARD_PATH, name: "dashboard", page: Page::Dashboard, requires_auth: true },
    RouteDef { path: TICKETS_PATH, name: "tickets", page: Page::Tickets, requires_auth: true },
];

/// Route whose path matches `path` exactly.
#[must_use]
pub fn by_path(path: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.path == path)
}

#[must_use]
pub fn by_page(page: Page) -> &'static RouteDef {
    // Every `Page` variant has exactly one table entry.
    match page {
        Page::Landing => &ROUTES[0],
        Page::Login => &ROUTES[1],
        Page::SignUp => &ROUTES[2],
        Page::Dashboard => &ROUTES[3],
        Page::Tickets => &ROUTES[4],
    }
}
