//! Transport port for the API client.
//!
//! The client is generic over [`Transport`] so the HTTP library stays
//! swappable and tests can drive the client with scripted responses.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP methods the API client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET request.
    #[default]
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// PATCH request.
    Patch,
    /// DELETE request.
    Delete,
}

impl Method {
    /// Returns all supported methods.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Get, Self::Post, Self::Put, Self::Patch, Self::Delete]
    }

    /// Returns the method as an uppercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether this method typically carries a request body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unsupported HTTP method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported HTTP method: {0}")]
pub struct UnknownMethodError(pub String);

impl FromStr for Method {
    type Err = UnknownMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(UnknownMethodError(s.to_string())),
        }
    }
}

/// A fully prepared request handed to a transport.
///
/// The client has already joined the URL, merged the headers and
/// serialized the body by the time a transport sees this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: String,
    /// Merged header map.
    pub headers: BTreeMap<String, String>,
    /// JSON body text for write methods.
    pub body: Option<String>,
}

/// A raw response produced by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response with the given status and body and no headers.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Errors a transport can produce.
///
/// These never escape the API client; it folds them into the response
/// envelope as network errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport's own deadline expired.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (limit {max})")]
    TooManyRedirects {
        /// Maximum number of redirects allowed.
        max: u32,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for sending prepared HTTP requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the exchange cannot be
    /// completed. Non-2xx statuses are not errors at this layer.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("get".parse::<Method>(), Ok(Method::Get));
        assert_eq!("Post".parse::<Method>(), Ok(Method::Post));
        assert_eq!("DELETE".parse::<Method>(), Ok(Method::Delete));
    }

    #[test]
    fn method_rejects_unknown_verbs() {
        let error = "TRACE".parse::<Method>();
        assert_eq!(error, Err(UnknownMethodError("TRACE".to_string())));
    }

    #[test]
    fn method_display_round_trips() {
        for method in Method::all() {
            let parsed: Method = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn write_methods_carry_bodies() {
        assert!(Method::Post.has_body());
        assert!(Method::Put.has_body());
        assert!(Method::Patch.has_body());
        assert!(!Method::Get.has_body());
        assert!(!Method::Delete.has_body());
    }

    #[test]
    fn response_success_covers_the_2xx_range() {
        assert!(TransportResponse::new(200, Vec::new()).is_success());
        assert!(TransportResponse::new(204, Vec::new()).is_success());
        assert!(!TransportResponse::new(199, Vec::new()).is_success());
        assert!(!TransportResponse::new(301, Vec::new()).is_success());
        assert!(!TransportResponse::new(500, Vec::new()).is_success());
    }
}
