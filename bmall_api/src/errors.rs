//! Error types for the API client.

/// Normalized failure raised by [`Client::send`](crate::Client::send) and the
/// typed endpoint methods.
///
/// Every failure reaching a caller is exactly one of these variants; no raw
/// `reqwest::Error` ever crosses the crate boundary. Classification order:
/// a response with a non-success status is `Server`, a dispatched request
/// with no response is `Network`, and anything that could not be built or
/// whose outcome could not be processed is `Client`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server answered with a non-success status. Carries the exact
    /// status and body received (body parsed as JSON when possible,
    /// otherwise kept as a JSON string).
    #[error("server returned {status} for {method} {url}")]
    Server {
        status: u16,
        body: serde_json::Value,
        url: String,
        method: String,
    },
    /// The request went out but no response came back: timeout, connection
    /// refused or reset, DNS failure, or the body was cut off mid-read.
    #[error("no response received for {method} {url}")]
    Network { url: String, method: String },
    /// The request could not be constructed or its outcome could not be
    /// processed (bad configuration, invalid path, unparseable success body).
    #[error("{message}")]
    Client { message: String },
}
