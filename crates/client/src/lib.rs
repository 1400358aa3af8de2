//! Crosspost Client - HTTP access to the backend
//!
//! This crate wraps the Crosspost HTTP API: a typed client with the
//! backend's response-envelope conventions, retry with exponential
//! backoff and the small formatting and validation helpers frontends
//! share.

pub mod client;
pub mod config;
pub mod datetime;
pub mod error;
pub mod query;
pub mod reqwest_client;
pub mod retry;
pub mod transport;
pub mod validation;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT, RequestOptions};
pub use error::user_message;
pub use query::{QueryPairs, parse_query_string};
pub use reqwest_client::ReqwestTransport;
pub use retry::{
    DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS, RetryPolicy, retry_with_backoff,
    retry_with_backoff_observed,
};
pub use transport::{
    Method, Transport, TransportError, TransportRequest, TransportResponse, UnknownMethodError,
};

pub use crosspost_domain::api::{ApiError, ApiResponse, Pagination, ResponseMeta};
