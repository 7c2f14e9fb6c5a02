//! API Configuration
//!
//! Where requests go. Defaults to the page origin, so the app talks to the
//! server that served it.

use log::LevelFilter;

/// Build-time override for the API base, e.g. `http://localhost:8000`
const API_BASE_OVERRIDE: Option<&str> = option_env!("STOCKROOM_API_BASE");

/// Lines kept by the activity log
pub const LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time override if present, otherwise `window.location.origin`
    pub fn resolve() -> Self {
        match API_BASE_OVERRIDE {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::new(page_origin()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base with an absolute path (`/items`, `/clock-in/abc`)
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

pub fn log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.url("/items"), "http://localhost:8000/items");
    }

    #[test]
    fn test_relative_path_joined() {
        let config = ApiConfig::new("https://stock.example");
        assert_eq!(config.url("clock-in"), "https://stock.example/clock-in");
    }

    #[test]
    fn test_empty_base_keeps_path() {
        assert_eq!(ApiConfig::new("").url("/items"), "/items");
    }
}
