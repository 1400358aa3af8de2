//! The API client.
//!
//! [`ApiClient`] wraps a [`Transport`] with the conventions of the
//! Crosspost backend: JSON bodies, the uniform response envelope and
//! client-side deadlines. Every call resolves to an [`ApiResponse`];
//! connection failures, timeouts, non-2xx statuses and malformed bodies
//! all fold into the envelope's `error` field instead of surfacing as
//! `Err` values.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crosspost_domain::api::{ApiError, ApiResponse, ResponseMeta};

use crate::config::{ClientConfig, RequestOptions};
use crate::reqwest_client::ReqwestTransport;
use crate::transport::{Method, Transport, TransportError, TransportRequest, TransportResponse};

/// HTTP client for the Crosspost backend.
pub struct ApiClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    transport: Arc<T>,
}

impl ApiClient<ReqwestTransport> {
    /// Creates a client over the reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    /// Returns the client's configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues a GET request.
    pub async fn get<D: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<D> {
        self.request(Method::Get, endpoint, None, None).await
    }

    /// Issues a POST request with a JSON body.
    pub async fn post<D, B>(&self, endpoint: &str, body: &B) -> ApiResponse<D>
    where
        D: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match encode_body(body) {
            Ok(value) => self.request(Method::Post, endpoint, Some(value), None).await,
            Err(response) => response,
        }
    }

    /// Issues a PUT request with a JSON body.
    pub async fn put<D, B>(&self, endpoint: &str, body: &B) -> ApiResponse<D>
    where
        D: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match encode_body(body) {
            Ok(value) => self.request(Method::Put, endpoint, Some(value), None).await,
            Err(response) => response,
        }
    }

    /// Issues a PATCH request with a JSON body.
    pub async fn patch<D, B>(&self, endpoint: &str, body: &B) -> ApiResponse<D>
    where
        D: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match encode_body(body) {
            Ok(value) => self.request(Method::Patch, endpoint, Some(value), None).await,
            Err(response) => response,
        }
    }

    /// Issues a DELETE request.
    pub async fn delete<D: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<D> {
        self.request(Method::Delete, endpoint, None, None).await
    }

    /// Issues a request with full control over method, body and per-call
    /// options.
    ///
    /// The endpoint is joined to the configured base URL, headers are
    /// merged (defaults, then the client's, then the call's, later wins)
    /// and the call races against its deadline. The outcome is always an
    /// envelope; inspect [`ApiResponse::error`] or use
    /// [`ApiResponse::into_result`] to branch on failures.
    pub async fn request<D: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
        options: Option<RequestOptions>,
    ) -> ApiResponse<D> {
        let request_id = Uuid::now_v7();
        let options = options.unwrap_or_default();
        let timeout = options.timeout.unwrap_or(self.config.timeout);

        let request = TransportRequest {
            method,
            url: self.config.endpoint_url(endpoint),
            headers: self.merged_headers(&options),
            body: body.map(|value| value.to_string()),
        };

        tracing::debug!(%request_id, %method, url = %request.url, "dispatching API request");

        match tokio::time::timeout(timeout, self.transport.send(request)).await {
            Err(_) => {
                tracing::warn!(%request_id, ?timeout, "API request timed out");
                ApiResponse::failure(ApiError::network(format!(
                    "request timed out after {} ms",
                    timeout.as_millis()
                )))
            }
            Ok(Err(error)) => {
                tracing::warn!(%request_id, %error, "API request failed in transport");
                ApiResponse::failure(ApiError::network(error.to_string()))
            }
            Ok(Ok(response)) => {
                let status = response.status;
                let envelope = normalize(response);
                tracing::debug!(
                    %request_id,
                    status,
                    success = envelope.is_success(),
                    "API request completed"
                );
                envelope
            }
        }
    }

    fn merged_headers(&self, options: &RequestOptions) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        for (name, value) in &self.config.headers {
            headers.insert(name.clone(), value.clone());
        }
        for (name, value) in &options.headers {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }
}

impl<T: Transport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Serializes a request body, folding failures into an error envelope.
fn encode_body<D, B>(body: &B) -> Result<serde_json::Value, ApiResponse<D>>
where
    B: Serialize + ?Sized,
{
    serde_json::to_value(body).map_err(|e| {
        ApiResponse::failure(ApiError::network(format!(
            "failed to encode request body: {e}"
        )))
    })
}

/// Folds a raw transport response into the envelope.
fn normalize<D: DeserializeOwned>(response: TransportResponse) -> ApiResponse<D> {
    if response.is_success() {
        decode_success(&response.body)
    } else {
        ApiResponse::failure(error_from_body(response.status, &response.body))
    }
}

/// Decodes a 2xx body into a typed payload.
///
/// An empty body is a success without payload. The payload is the body's
/// `data` field when the body is an object carrying one, otherwise the
/// whole body. A body that cannot be parsed or decoded becomes a network
/// error: the exchange succeeded, the failure is on this side of it.
fn decode_success<D: DeserializeOwned>(body: &[u8]) -> ApiResponse<D> {
    if body.is_empty() {
        return ApiResponse::empty();
    }

    let parsed: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            return ApiResponse::failure(ApiError::network(format!(
                "failed to decode response body: {e}"
            )));
        }
    };

    let meta = parsed
        .get("meta")
        .cloned()
        .and_then(|meta| serde_json::from_value::<ResponseMeta>(meta).ok());

    let payload = match parsed {
        serde_json::Value::Object(mut object) => match object.remove("data") {
            Some(data) => data,
            None => serde_json::Value::Object(object),
        },
        other => other,
    };

    if payload.is_null() {
        return ApiResponse {
            data: None,
            meta,
            error: None,
        };
    }

    match serde_json::from_value::<D>(payload) {
        Ok(data) => ApiResponse {
            data: Some(data),
            meta,
            error: None,
        },
        Err(e) => ApiResponse::failure(ApiError::network(format!(
            "failed to decode response body: {e}"
        ))),
    }
}

/// Builds the normalized error for a non-2xx response.
///
/// Fields come from the body's `error` object when present; the status
/// always comes from the response line, never from the body.
fn error_from_body(status: u16, body: &[u8]) -> ApiError {
    let mut error = ApiError::from_status(status);

    let Ok(parsed) = serde_json::from_slice::<serde_json::Value>(body) else {
        return error;
    };
    let Some(object) = parsed.get("error") else {
        return error;
    };

    if let Some(name) = object.get("name").and_then(serde_json::Value::as_str) {
        error.name = name.to_string();
    }
    if let Some(message) = object.get("message").and_then(serde_json::Value::as_str) {
        error.message = message.to_string();
    }
    error.details = object.get("details").cloned();

    error
}
