//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port of the metadata API when it is served next to the frontend host
pub const DEFAULT_API_PORT: u16 = 3000;

/// localStorage key that overrides the derived API base (e.g. `https://meta.internal`)
pub const API_BASE_OVERRIDE_KEY: &str = "table_editor_api_base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub protocol: String,
    pub hostname: String,
    pub port: u16,
    pub base_override: Option<String>,
}

impl ApiConfig {
    /// Reads protocol and hostname from `window.location` and the override from localStorage
    pub fn from_window() -> Self {
        let window = web_sys::window();
        let location = window.as_ref().map(|w| w.location());
        let protocol = location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .unwrap_or_else(|| "http:".to_string());
        let hostname = location
            .as_ref()
            .and_then(|l| l.hostname().ok())
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let base_override = window
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(API_BASE_OVERRIDE_KEY).ok().flatten())
            .filter(|v| !v.trim().is_empty());

        Self {
            protocol,
            hostname,
            port: DEFAULT_API_PORT,
            base_override,
        }
    }

    /// Base URL like "http://localhost:3000" (no trailing slash)
    pub fn base_url(&self) -> String {
        match &self.base_override {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("{}//{}:{}", self.protocol, self.hostname, self.port),
        }
    }

    /// Build a full API URL from a path that starts with "/api/"
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

/// Get the base URL for API requests from the current window
pub fn api_base() -> String {
    ApiConfig::from_window().base_url()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_override: Option<&str>) -> ApiConfig {
        ApiConfig {
            protocol: "https:".to_string(),
            hostname: "studio.local".to_string(),
            port: DEFAULT_API_PORT,
            base_override: base_override.map(str::to_string),
        }
    }

    #[test]
    fn test_base_url_from_location() {
        assert_eq!(config(None).base_url(), "https://studio.local:3000");
    }

    #[test]
    fn test_base_url_override_trims_slash() {
        let cfg = config(Some("https://meta.internal/"));
        assert_eq!(cfg.url("/api/pg-meta/abc/tables"), "https://meta.internal/api/pg-meta/abc/tables");
    }
}
