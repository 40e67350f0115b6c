//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::ApiConfig;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:5163"
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/Category/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    ApiConfig::from_window().base_url
}

/// Build a full API URL from a base and a path
///
/// # Arguments
/// * `base` - The API base URL, without a trailing slash
/// * `path` - The API path (should start with "/api/")
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
