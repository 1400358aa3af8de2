//! Connected social network accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// A social network account connected to the CMS.
///
/// Carries the OAuth material the backend uses when publishing on the
/// owner's behalf. Token acquisition and refresh live in the backend;
/// this type only tracks what it hands out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccount {
    /// Backend-assigned identifier.
    pub id: String,
    /// The network this account belongs to.
    pub platform: Platform,
    /// The network's own user identifier.
    pub platform_user_id: String,
    /// Handle on the network.
    pub platform_username: String,
    /// Access token used when publishing.
    pub access_token: String,
    /// Refresh token for obtaining new access tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// When the access token expires, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<DateTime<Utc>>,
    /// Whether the connection is currently enabled.
    pub is_active: bool,
    /// When the account was connected.
    pub connected_at: DateTime<Utc>,
}

impl SocialAccount {
    /// Creates a newly connected, active account.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        platform: Platform,
        platform_user_id: impl Into<String>,
        platform_username: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            platform,
            platform_user_id: platform_user_id.into(),
            platform_username: platform_username.into(),
            access_token: access_token.into(),
            refresh_token: None,
            token_expires_at: None,
            is_active: true,
            connected_at: Utc::now(),
        }
    }

    /// Attaches a refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Sets the access token expiry.
    #[must_use]
    pub const fn with_token_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.token_expires_at = Some(expires_at);
        self
    }

    /// Check if the token is expired or will expire within the given buffer.
    ///
    /// Tokens without a recorded expiry never report as expiring.
    #[must_use]
    pub fn is_token_expired_or_expiring(&self, buffer_seconds: i64) -> bool {
        self.token_expires_at.is_some_and(|expires_at| {
            let buffer = chrono::Duration::seconds(buffer_seconds);
            Utc::now() + buffer >= expires_at
        })
    }

    /// Check if the account's token can be refreshed.
    #[must_use]
    pub const fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// True when the account is active and its token is not expired.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.is_active && !self.is_token_expired_or_expiring(0)
    }
}
