//! Webhook subscriptions

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events a webhook can subscribe to.
///
/// Wire names are dotted, e.g. `post.created`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEvent {
    /// A post was created.
    #[serde(rename = "post.created")]
    PostCreated,
    /// A post was edited.
    #[serde(rename = "post.updated")]
    PostUpdated,
    /// A post went live.
    #[serde(rename = "post.published")]
    PostPublished,
    /// Publishing a post failed.
    #[serde(rename = "post.failed")]
    PostFailed,
    /// A campaign was created.
    #[serde(rename = "campaign.created")]
    CampaignCreated,
    /// A campaign finished.
    #[serde(rename = "campaign.completed")]
    CampaignCompleted,
}

impl WebhookEvent {
    /// Returns the event's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PostCreated => "post.created",
            Self::PostUpdated => "post.updated",
            Self::PostPublished => "post.published",
            Self::PostFailed => "post.failed",
            Self::CampaignCreated => "campaign.created",
            Self::CampaignCompleted => "campaign.completed",
        }
    }
}

impl fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered webhook endpoint.
///
/// Dispatching deliveries is the backend's job; this type records the
/// subscription and answers whether an event should be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Backend-assigned identifier.
    pub id: String,
    /// Endpoint URL deliveries are sent to.
    pub url: String,
    /// Events the endpoint subscribed to.
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
    /// Shared secret used to sign deliveries.
    pub secret: String,
    /// Whether deliveries are currently enabled.
    pub is_active: bool,
    /// When the webhook was registered.
    pub created_at: DateTime<Utc>,
}

impl Webhook {
    /// Creates an active webhook with no subscriptions.
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            events: Vec::new(),
            secret: secret.into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Sets the subscribed events.
    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = WebhookEvent>) -> Self {
        self.events = events.into_iter().collect();
        self
    }

    /// True when the webhook is active and subscribed to the event.
    #[must_use]
    pub fn should_deliver(&self, event: WebhookEvent) -> bool {
        self.is_active && self.events.contains(&event)
    }
}
