//! API utilities for frontend-backend communication
//!
//! The classification service is served from the same origin as the page.

/// Get the base URL for API requests
///
/// # Returns
/// - Page origin like "http://localhost:5000" or "https://example.com"
/// - Empty string if window is not available (the URL then stays relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Join a base and an API path without doubling or dropping the slash.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://localhost:5000/", "/api/classify"), "http://localhost:5000/api/classify");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
