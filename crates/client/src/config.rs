//! Client configuration and per-call options.

use std::collections::BTreeMap;
use std::time::Duration;

/// Default per-call deadline: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Configuration shared by every request an [`ApiClient`] issues.
///
/// [`ApiClient`]: crate::ApiClient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL endpoint paths are joined to.
    pub base_url: String,
    /// Deadline applied to each call unless overridden per request.
    pub timeout: Duration,
    /// Headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Creates a configuration with the default timeout and no extra
    /// headers.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            headers: BTreeMap::new(),
        }
    }

    /// Sets the per-call deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replaces the default header map.
    #[must_use]
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Joins an endpoint path to the base URL with exactly one slash
    /// between them, whatever combination of trailing and leading
    /// slashes the two carry.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        if path.is_empty() {
            return base.to_string();
        }
        format!("{base}/{path}")
    }
}

/// Overrides applied to a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Extra headers merged over the client's defaults. On conflict the
    /// per-call value wins.
    pub headers: BTreeMap<String, String>,
    /// Replaces the client's timeout for this call.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            headers: BTreeMap::new(),
            timeout: None,
        }
    }

    /// Adds a header for this call only.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets a deadline for this call only.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn joins_endpoints_with_a_single_slash() {
        let config = ClientConfig::new("http://localhost:1337/api");

        assert_eq!(
            config.endpoint_url("/posts"),
            "http://localhost:1337/api/posts"
        );
        assert_eq!(
            config.endpoint_url("posts"),
            "http://localhost:1337/api/posts"
        );
    }

    #[test]
    fn joins_endpoints_when_the_base_has_a_trailing_slash() {
        let config = ClientConfig::new("http://localhost:1337/api/");

        assert_eq!(
            config.endpoint_url("/posts"),
            "http://localhost:1337/api/posts"
        );
        assert_eq!(
            config.endpoint_url("posts"),
            "http://localhost:1337/api/posts"
        );
    }

    #[test]
    fn empty_endpoint_resolves_to_the_base() {
        let config = ClientConfig::new("http://localhost:1337/api/");

        assert_eq!(config.endpoint_url(""), "http://localhost:1337/api");
        assert_eq!(config.endpoint_url("/"), "http://localhost:1337/api");
    }

    #[test]
    fn builder_collects_headers_and_timeout() {
        let config = ClientConfig::new("http://localhost:1337/api")
            .with_timeout(Duration::from_secs(5))
            .with_header("Authorization", "Bearer token")
            .with_header("X-Request-Source", "tests");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.headers.get("Authorization").map(String::as_str),
            Some("Bearer token")
        );
        assert_eq!(config.headers.len(), 2);
    }

    #[test]
    fn options_default_to_no_overrides() {
        let options = RequestOptions::new();

        assert!(options.headers.is_empty());
        assert_eq!(options.timeout, None);
        assert_eq!(options, RequestOptions::default());
    }
}
