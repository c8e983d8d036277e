//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use contracts::domain::common::image::asset_url;

use super::config::config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the configuration when set. Otherwise the URL is
/// constructed from the current window location, using port 3000 for the
/// backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let configured = &config().api.base_url;
    if !configured.is_empty() {
        return configured.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/category/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Absolute URL of an uploaded image stored as a server-relative path
pub fn image_url(path: &str) -> String {
    let assets = &config().api.assets_url;
    if assets.is_empty() {
        asset_url(&api_base(), path)
    } else {
        asset_url(assets, path)
    }
}
