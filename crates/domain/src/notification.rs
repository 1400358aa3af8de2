//! In-app notifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// A post went live.
    PostPublished,
    /// Publishing a post failed.
    PostFailed,
    /// A workflow step is waiting on the user.
    ApprovalRequired,
    /// The user was mentioned.
    Mention,
    /// A campaign goal was reached.
    CampaignMilestone,
}

/// A notification delivered to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Backend-assigned identifier.
    pub id: String,
    /// The recipient.
    pub user_id: String,
    /// What the notification is about.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Short headline.
    pub title: String,
    /// Longer body text.
    pub message: String,
    /// Whether the recipient has seen it.
    pub read: bool,
    /// Free-form payload for deep-linking into the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// When the notification was raised.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates an unread notification with the current timestamp.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        kind: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            read: false,
            data: None,
            created_at: Utc::now(),
        }
    }

    /// Attaches a deep-link payload.
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// True when the recipient has not seen the notification.
    #[must_use]
    pub const fn is_unread(&self) -> bool {
        !self.read
    }

    /// Marks the notification as seen.
    pub const fn mark_read(&mut self) {
        self.read = true;
    }
}
