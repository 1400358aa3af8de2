//! Smoke check binary for the Crosspost API client.
//!
//! Issues a read against a running backend and reports the outcome,
//! retrying transient failures. Configuration comes from the
//! environment:
//!
//! - `CROSSPOST_API_URL`: base URL, default `http://localhost:1337/api`
//! - `CROSSPOST_API_TOKEN`: optional bearer token

use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crosspost_client::{
    ApiClient, ClientConfig, RetryPolicy, retry_with_backoff_observed, user_message,
};
use crosspost_domain::Post;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("CROSSPOST_API_URL")
        .unwrap_or_else(|_| "http://localhost:1337/api".to_string());

    let mut config = ClientConfig::new(&base_url).with_timeout(Duration::from_secs(10));
    if let Ok(token) = std::env::var("CROSSPOST_API_TOKEN") {
        config = config.with_header("Authorization", format!("Bearer {token}"));
    }

    tracing::info!(%base_url, "crosspost smoke check v{}", env!("CARGO_PKG_VERSION"));

    let client = match ApiClient::new(config) {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(%error, "could not construct the HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let outcome = retry_with_backoff_observed(
        RetryPolicy::default(),
        || async { client.get::<Vec<Post>>("/posts").await.into_result() },
        |attempt, error| {
            tracing::warn!(
                attempt,
                status = error.status,
                "attempt failed: {}",
                user_message(error)
            );
        },
    )
    .await;

    match outcome {
        Ok(posts) => {
            let count = posts.map_or(0, |posts| posts.len());
            tracing::info!(count, "backend reachable, posts listed");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(
                status = error.status,
                "smoke check failed: {}",
                user_message(&error)
            );
            ExitCode::FAILURE
        }
    }
}
