//! HTTP client wrapper for the bmall catalog API.

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    query::{Query, SkuQuery},
    request::Request,
    types::{Brand, ItemDetail, SkuListResponse},
    Error,
};

/// HTTP client for the bmall catalog API.
///
/// Holds a fixed base URL, default timeout, and default headers. Every
/// request goes through [`Client::send`], which classifies each failure into
/// exactly one [`Error`] variant and logs it exactly once before returning.
/// The client performs no retries and no caching; callers decide recovery.
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Builds the process-wide client from a validated config. The config is
    /// immutable for the client's lifetime.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| client_error(format!("failed to build HTTP transport: {e}")))?;
        Ok(Self { config, http })
    }

    /// Client with the default timeout and headers. Used for testing with
    /// wiremock and by the CLI.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::with_base_url(base_url)?)
    }

    fn build_url(&self, path: &str) -> Result<Url, Error> {
        let sep = if path.starts_with('/') { "" } else { "/" };
        Url::parse(&format!("{}{}{}", self.config.base_url, sep, path))
            .map_err(|e| client_error(format!("invalid URL for path {path}: {e}")))
    }

    /// Issues a request and classifies the outcome.
    ///
    /// Returns exactly one of: `Ok(Response)`, [`Error::Server`] (response
    /// received with a non-success status), [`Error::Network`] (dispatched
    /// but no response), or [`Error::Client`] (could not be built, or the
    /// success body was not valid JSON).
    pub async fn send(&self, request: Request) -> Result<Response, Error> {
        let url = self.build_url(&request.path)?;
        self.dispatch(url, request).await
    }

    async fn dispatch(&self, url: Url, request: Request) -> Result<Response, Error> {
        let method = request.method.clone();

        let mut headers = self.config.default_headers.clone();
        for (name, value) in request.headers {
            headers.insert(name, value);
        }

        let mut builder = self.http.request(method.clone(), url.clone());
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(e) if e.is_builder() => {
                return Err(client_error(format!(
                    "failed to build request for {method} {url}: {e}"
                )))
            }
            Err(e) => return Err(network_error(&url, &method, &e)),
        };

        let status = resp.status();
        let headers = resp.headers().clone();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => return Err(network_error(&url, &method, &e)),
        };

        if !status.is_success() {
            return Err(server_error(status.as_u16(), &text, &url, &method));
        }

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| {
                let snippet = truncate_body(&text);
                client_error(format!(
                    "failed to parse response body for {method} {url}: {e} | body: {snippet}"
                ))
            })?
        };

        Ok(Response {
            status: status.as_u16(),
            headers,
            body,
            url: url.to_string(),
            method,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let mut url = self.build_url(path)?;
        if let Some(query) = query {
            url = query.add_to_url(&url);
        }
        let resp = self.dispatch(url, Request::get(path)).await?;
        serde_json::from_value(resp.body)
            .map_err(|e| client_error(format!("failed to decode response for GET {path}: {e}")))
    }

    /// Fetches all brands with their live listing counts.
    pub async fn get_brands(&self) -> Result<Vec<Brand>, Error> {
        self.get::<Vec<Brand>, SkuQuery>("/api/brands", None).await
    }

    /// Fetches a page of SKUs with price ranges matching the given query.
    pub async fn get_skus(&self, query: &SkuQuery) -> Result<SkuListResponse, Error> {
        self.get::<SkuListResponse, SkuQuery>("/api/skus", Some(query))
            .await
    }

    /// Fetches all live listings for a SKU, cheapest first.
    pub async fn get_sku_items(&self, sku_id: i64) -> Result<Vec<ItemDetail>, Error> {
        self.get::<Vec<ItemDetail>, SkuQuery>(format!("/api/sku/{}/items", sku_id).as_str(), None)
            .await
    }
}

/// Successful outcome of [`Client::send`]: status, headers, parsed JSON body,
/// and the originating URL and method for diagnostics.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Value,
    pub url: String,
    pub method: Method,
}

fn client_error(message: String) -> Error {
    tracing::error!("API client error: {}", message);
    Error::Client { message }
}

fn network_error(url: &Url, method: &Method, err: &reqwest::Error) -> Error {
    tracing::error!("no response for {} {}: {}", method, url, err);
    Error::Network {
        url: url.to_string(),
        method: method.to_string(),
    }
}

fn server_error(status: u16, text: &str, url: &Url, method: &Method) -> Error {
    tracing::error!(
        "server returned {} for {} {}: {}",
        status,
        method,
        url,
        truncate_body(text)
    );
    // Error bodies are often plain text; keep whatever the server sent.
    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    };
    Error::Server {
        status,
        body,
        url: url.to_string(),
        method: method.to_string(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_short_unchanged() {
        assert_eq!(truncate_body("{}"), "{}");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "初音未来".repeat(400);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < body.len());
    }

    #[test]
    fn error_display() {
        let err = Error::Server {
            status: 404,
            body: serde_json::json!({"error": "not found"}),
            url: "https://api.example.com/api/brands".to_string(),
            method: "GET".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("/api/brands"));

        let err = Error::Network {
            url: "https://api.example.com/api/brands".to_string(),
            method: "GET".to_string(),
        };
        assert!(err.to_string().contains("no response"));

        let err = Error::Client {
            message: "base URL must not be empty".to_string(),
        };
        assert!(err.to_string().contains("base URL"));
    }
}
