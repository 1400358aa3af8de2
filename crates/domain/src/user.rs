//! User accounts and roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access role of a CMS user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// Creates, edits, and publishes content.
    Editor,
    /// Creates and edits content, but cannot publish.
    Contributor,
    /// Read-only access.
    #[default]
    Viewer,
}

impl UserRole {
    /// Returns true if this role can create or edit content.
    #[must_use]
    pub const fn can_author(self) -> bool {
        matches!(self, Self::Admin | Self::Editor | Self::Contributor)
    }

    /// Returns true if this role can publish or schedule content.
    #[must_use]
    pub const fn can_publish(self) -> bool {
        matches!(self, Self::Admin | Self::Editor)
    }

    /// Returns true if this role can manage other users.
    #[must_use]
    pub const fn can_manage_users(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A CMS user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned identifier.
    pub id: String,
    /// Unique email address.
    pub email: String,
    /// Unique handle.
    pub username: String,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Access role.
    pub role: UserRole,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last modified.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new viewer account with the current timestamp.
    #[must_use]
    pub fn new(id: impl Into<String>, email: impl Into<String>, username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            email: email.into(),
            username: username.into(),
            first_name: None,
            last_name: None,
            role: UserRole::default(),
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the access role.
    #[must_use]
    pub const fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the given and family names.
    #[must_use]
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    /// Returns the full name when known, falling back to the username.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(single), None) | (None, Some(single)) => single.clone(),
            (None, None) => self.username.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_role_capabilities() {
        assert!(UserRole::Admin.can_manage_users());
        assert!(UserRole::Editor.can_publish());
        assert!(!UserRole::Contributor.can_publish());
        assert!(UserRole::Contributor.can_author());
        assert!(!UserRole::Viewer.can_author());
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let user = User::new("u1", "ada@example.com", "ada").with_name("Ada", "Lovelace");
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = User::new("u1", "ada@example.com", "ada");
        assert_eq!(user.display_name(), "ada");
    }

    #[test]
    fn test_user_wire_shape() {
        let user = User::new("u1", "ada@example.com", "ada").with_role(UserRole::Editor);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], "u1");
        assert_eq!(json["role"], "editor");
        assert!(json.get("firstName").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
