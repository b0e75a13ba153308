//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing backend URLs.

use super::config::config;

/// Build a full API URL from a path
///
/// The base is the build-time `API_BASE_URL`, falling back to
/// `http://localhost:8000`.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/chat/");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&config().api_base_url, path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:8000", "/upload/"), "http://localhost:8000/upload/");
        assert_eq!(join_url("http://localhost:8000", "chat/"), "http://localhost:8000/chat/");
    }
}
