//! Request descriptors consumed by [`Client::send`](crate::Client::send).

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

/// A single outbound request: method, path relative to the client's base
/// URL, optional headers, optional JSON body, optional timeout override.
///
/// Built per call site and consumed exactly once by `send`; it never changes
/// after being handed to the client.
#[derive(Clone, Debug)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<Value>,
    pub(crate) timeout: Option<Duration>,
}

impl Request {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// GET request for the given path.
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request for the given path.
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Adds a header, overriding any default header with the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .push((name.to_ascii_lowercase(), value.to_string()));
        self
    }

    /// Sets a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Overrides the client's default timeout for this request only.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
