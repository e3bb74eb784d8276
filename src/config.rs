//! Build-time client configuration.
//!
//! A WASM bundle has no process environment, so settings are baked in from
//! the environment of the build (`TICKETAPP_BASE_URL`, `TICKETAPP_LOG_LEVEL`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Client configuration resolved at compile time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Path prefix the app is served under, e.g. `/app`. `None` means `/`.
    pub base_url: Option<String>,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { base_url: None, log_level: log::Level::Info }
    }
}

impl AppConfig {
    /// Load from `TICKETAPP_BASE_URL` and `TICKETAPP_LOG_LEVEL` as set at
    /// build time. Missing or invalid values fall back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TICKETAPP_BASE_URL"), option_env!("TICKETAPP_LOG_LEVEL"))
    }

    #[must_use]
    pub fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base_url = base_url.and_then(normalize_base_url);
        let log_level = log_level
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(log::Level::Info);
        Self { base_url, log_level }
    }
}

/// Canonical base path: leading slash, no trailing slash, `None` for root.
fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("/{trimmed}"))
}
