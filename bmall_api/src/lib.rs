//! Typed HTTP client for the bmall catalog API.
//!
//! Every request goes through [`Client`], which owns a fixed base URL,
//! default timeout, and default headers, and normalizes all failures into
//! the three [`Error`] variants before they reach a caller.

mod client;
mod config;
mod errors;
mod query;
mod request;
pub mod types;

pub use self::client::{Client, Response};
pub use self::config::{ClientConfig, DEFAULT_TIMEOUT_MS};
pub use self::errors::Error;
pub use self::query::{Query, QueryCommon, SkuQuery};
pub use self::request::Request;
