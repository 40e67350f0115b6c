//! API endpoint configuration
//!
//! The base URL is resolved once per request from, in order:
//! 1. `localStorage["category_api_base"]`
//! 2. the page's protocol and hostname with [`DEFAULT_API_PORT`]
//! 3. [`FALLBACK_API_BASE`] when no window is available (tests, workers)

use web_sys::window;

/// localStorage key that overrides the API base URL
pub const API_BASE_STORAGE_KEY: &str = "category_api_base";

/// Port the Category API listens on
pub const DEFAULT_API_PORT: u16 = 5163;

pub const FALLBACK_API_BASE: &str = "http://localhost:5163";

/// Page location parts used to derive the API base
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    pub protocol: Option<String>,
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve the configuration from the browser environment
    pub fn from_window() -> Self {
        let Some(win) = window() else {
            return Self::resolve(None, None);
        };

        let override_base = win
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten());

        let location = win.location();
        let page = PageLocation {
            protocol: location.protocol().ok(),
            hostname: location.hostname().ok(),
        };

        Self::resolve(override_base, Some(page))
    }

    /// Pure resolution rule, see module docs
    pub fn resolve(override_base: Option<String>, page: Option<PageLocation>) -> Self {
        if let Some(base) = override_base
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
        {
            return Self { base_url: base };
        }

        let base_url = match page {
            Some(PageLocation {
                protocol,
                hostname: Some(hostname),
            }) if !hostname.is_empty() => {
                let protocol = protocol
                    .filter(|p| p.starts_with("http"))
                    .unwrap_or_else(|| "http:".to_string());
                format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
            }
            _ => FALLBACK_API_BASE.to_string(),
        };

        Self { base_url }
    }
}
