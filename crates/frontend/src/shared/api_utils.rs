//! API utilities for frontend-backend communication
//!
//! The backend base URL is fixed at build time through the
//! `SERIAL_FILTER_API_URL` environment variable.

/// Used when `SERIAL_FILTER_API_URL` is not set during the build
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Get the base URL for API requests, without a trailing slash
///
/// # Example
/// ```ignore
/// let url = format!("{}/status", api_base());
/// ```
pub fn api_base() -> String {
    let configured = option_env!("SERIAL_FILTER_API_URL").unwrap_or(DEFAULT_API_BASE);
    normalize_base(configured)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The endpoint path relative to the base (e.g. "/filter")
///
/// # Example
/// ```ignore
/// let url = api_url("/upload");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim();
    if trimmed.is_empty() {
        return DEFAULT_API_BASE.to_string();
    }
    trimmed.trim_end_matches('/').to_string()
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
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://host:8080/api/"), "http://host:8080/api");
        assert_eq!(normalize_base("  "), DEFAULT_API_BASE);
        assert_eq!(normalize_base(DEFAULT_API_BASE), DEFAULT_API_BASE);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5000/api", "/filter-retailer"),
            "http://localhost:5000/api/filter-retailer"
        );
        assert_eq!(
            join_url("http://localhost:5000/api", "status"),
            "http://localhost:5000/api/status"
        );
    }
}
