//! Client configuration: base URL, default timeout, default headers.

use std::collections::HashMap;
use std::time::Duration;

use crate::Error;

/// Request timeout applied when neither the config nor the request overrides
/// it, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Immutable configuration for a [`Client`](crate::Client).
///
/// Built once at startup; base URL, timeout, and default headers are fixed
/// for the client's lifetime. Header names are normalized to lowercase, and
/// `content-type: application/json` is injected unless the caller supplies
/// its own value.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) default_headers: HashMap<String, String>,
}

impl ClientConfig {
    /// Validates and builds a config.
    ///
    /// Fails with [`Error::Client`] if `base_url` is empty or `timeout_ms`
    /// is zero. A trailing slash on the base URL is dropped so paths always
    /// join with exactly one separator.
    pub fn new(
        base_url: &str,
        timeout_ms: u64,
        default_headers: HashMap<String, String>,
    ) -> Result<Self, Error> {
        if base_url.trim().is_empty() {
            return Err(Error::Client {
                message: "base URL must not be empty".to_string(),
            });
        }
        if timeout_ms == 0 {
            return Err(Error::Client {
                message: "timeout must be greater than zero".to_string(),
            });
        }

        let mut headers: HashMap<String, String> = default_headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
        headers
            .entry("content-type".to_string())
            .or_insert_with(|| "application/json".to_string());

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(timeout_ms),
            default_headers: headers,
        })
    }

    /// Config with the default 30-second timeout and JSON content type.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(base_url, DEFAULT_TIMEOUT_MS, HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_rejected() {
        let result = ClientConfig::new("  ", DEFAULT_TIMEOUT_MS, HashMap::new());
        assert!(matches!(result, Err(Error::Client { .. })));
    }

    #[test]
    fn zero_timeout_rejected() {
        let result = ClientConfig::new("https://api.example.com", 0, HashMap::new());
        assert!(matches!(result, Err(Error::Client { .. })));
    }

    #[test]
    fn trailing_slash_trimmed() {
        let config = ClientConfig::with_base_url("https://api.example.com/").unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn json_content_type_injected() {
        let config = ClientConfig::with_base_url("https://api.example.com").unwrap();
        assert_eq!(
            config.default_headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn caller_content_type_wins() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/xml".to_string());
        let config =
            ClientConfig::new("https://api.example.com", DEFAULT_TIMEOUT_MS, headers).unwrap();
        assert_eq!(
            config.default_headers.get("content-type").map(String::as_str),
            Some("application/xml")
        );
    }
}
