//! API configuration and error type for frontend-backend communication.

use thiserror::Error;

/// Port the console backend listens on.
const BACKEND_PORT: u16 = 3000;

/// Backend address, constructed once and handed to the fetch functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Derive the backend address from the current window location.
    ///
    /// Returns e.g. "http://localhost:3000". Falls back to a relative base
    /// (empty string) when there is no window.
    pub fn from_location() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::new(""),
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        Self::new(format!("{}//{}:{}", protocol, hostname, BACKEND_PORT))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full API URL from a path starting with "/api/".
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Http { status: u16 },
    #[error("failed to parse response: {0}")]
    Decode(String),
}
