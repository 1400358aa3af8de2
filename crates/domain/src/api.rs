//! API envelope types
//!
//! Every backend endpoint answers with the same wrapper: a payload under
//! `data`, optional `meta` (pagination), and a normalized `error` object
//! when the call failed. The client never surfaces failures any other way.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized error carried inside a response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status of the failed call, or `0` when the failure happened
    /// before a status was available (timeout, connection error).
    pub status: u16,
    /// Machine-readable error name (e.g., `"ValidationError"`).
    pub name: String,
    /// Human-readable message.
    pub message: String,
    /// Structured details from the backend, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates a transport-level failure, reported with status `0` and the
    /// name `NetworkError`.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            name: "NetworkError".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a protocol failure with the default name and message, for
    /// responses whose body carried no usable error object.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        Self {
            status,
            name: "ApiError".to_string(),
            message: "An error occurred".to_string(),
            details: None,
        }
    }

    /// Attaches structured details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// True for failures that never reached the backend.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        self.status == 0
    }

    /// True for 4xx statuses.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// True for 5xx statuses.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Pagination block of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, starting at 1.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total number of pages.
    pub page_count: u32,
    /// Total number of items.
    pub total: u64,
}

impl Pagination {
    /// True when pages remain after the current one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.page_count
    }

    /// True when the current page is not the first.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}

/// Metadata accompanying a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResponseMeta {
    /// Pagination, on list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// The uniform envelope returned by every API call.
///
/// Exactly one of `data` and `error` describes the outcome: `error` is
/// `None` on success, and `data` is `None` on failure (and on successful
/// calls that return no payload).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    /// The payload, when the call produced one.
    pub data: Option<T>,
    /// Metadata, when the backend provided it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
    /// Failure description; `None` on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// A success envelope carrying a payload.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            data: Some(data),
            meta: None,
            error: None,
        }
    }

    /// A success envelope carrying a payload and metadata.
    #[must_use]
    pub const fn success_with_meta(data: T, meta: ResponseMeta) -> Self {
        Self {
            data: Some(data),
            meta: Some(meta),
            error: None,
        }
    }

    /// A success envelope with no payload (e.g., 204 No Content).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: None,
            meta: None,
            error: None,
        }
    }

    /// A failure envelope.
    #[must_use]
    pub const fn failure(error: ApiError) -> Self {
        Self {
            data: None,
            meta: None,
            error: Some(error),
        }
    }

    /// True when no error is present.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// True when an error is present.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the pagination block, when present.
    #[must_use]
    pub fn pagination(&self) -> Option<&Pagination> {
        self.meta.as_ref().and_then(|meta| meta.pagination.as_ref())
    }

    /// Converts the envelope into a `Result` for `?`-style composition.
    ///
    /// # Errors
    ///
    /// Returns the envelope's [`ApiError`] when one is present.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}
