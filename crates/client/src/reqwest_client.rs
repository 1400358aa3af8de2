//! Transport adapter backed by reqwest.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::{Client, Url};

use crate::transport::{Method, Transport, TransportError, TransportRequest, TransportResponse};

/// [`Transport`] implementation using a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with default settings.
    ///
    /// - Redirects: followed, up to 10
    /// - TLS verification: enabled
    /// - User-Agent: `crosspost/<version>`
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Other`] if the underlying client cannot
    /// be constructed.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("crosspost/", env!("CARGO_PKG_VERSION")))
            .redirect(Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Creates a transport from a pre-configured client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    const fn to_reqwest_method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout(error.to_string());
        }
        if error.is_connect() {
            return TransportError::ConnectionFailed(error.to_string());
        }
        if error.is_redirect() {
            return TransportError::TooManyRedirects { max: 10 };
        }
        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let url = Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {e}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

        let status = response.status().as_u16();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or("<binary>").to_string(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?
            .to_vec();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn converts_methods_to_reqwest() {
        assert_eq!(
            ReqwestTransport::to_reqwest_method(Method::Get),
            reqwest::Method::GET
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(Method::Post),
            reqwest::Method::POST
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(Method::Put),
            reqwest::Method::PUT
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(Method::Patch),
            reqwest::Method::PATCH
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(Method::Delete),
            reqwest::Method::DELETE
        );
    }

    #[test]
    fn creates_transport_with_defaults() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[tokio::test]
    async fn rejects_unparsable_urls() {
        let transport = ReqwestTransport::new().unwrap();
        let request = TransportRequest {
            method: Method::Get,
            url: "not a url".to_string(),
            headers: BTreeMap::new(),
            body: None,
        };

        let error = transport.send(request).await.unwrap_err();
        assert!(matches!(error, TransportError::InvalidUrl(_)));
    }
}
