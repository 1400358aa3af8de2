//! Posts and their publishing lifecycle

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::Campaign;
use crate::error::{DomainError, DomainResult};
use crate::media::Media;
use crate::platform::{Platform, PlatformMetadata};
use crate::user::User;

/// Lifecycle status of a post.
///
/// The normal path is draft → scheduled → published; failed and archived
/// are the off-ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Being written, not yet queued.
    #[default]
    Draft,
    /// Queued for a future publish time.
    Scheduled,
    /// Live on at least one platform.
    Published,
    /// Publishing was attempted and failed.
    Failed,
    /// Retired and hidden from listings.
    Archived,
}

impl PostStatus {
    /// Returns true if no further transitions are allowed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Archived)
    }

    /// Returns true if the transition to `next` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Scheduled | Self::Published | Self::Archived)
                | (
                    Self::Scheduled,
                    Self::Draft | Self::Published | Self::Failed | Self::Archived
                )
                | (Self::Published, Self::Archived)
                | (Self::Failed, Self::Draft | Self::Scheduled | Self::Archived)
        )
    }
}

/// Per-platform publishing metadata for a post.
///
/// Holds at most one entry per platform; [`PostMetadata::insert`] replaces
/// an existing entry for the same platform. Deserialized data may still
/// contain duplicates, which [`Post::validate_at`] rejects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostMetadata {
    entries: Vec<PlatformMetadata>,
}

impl PostMetadata {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts an entry, replacing any existing entry for the same platform.
    ///
    /// Returns the replaced entry.
    pub fn insert(&mut self, entry: PlatformMetadata) -> Option<PlatformMetadata> {
        let platform = entry.platform();
        match self.entries.iter().position(|e| e.platform() == platform) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index], entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    /// Returns the entry for a platform.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&PlatformMetadata> {
        self.entries.iter().find(|e| e.platform() == platform)
    }

    /// Returns true if an entry exists for the platform.
    #[must_use]
    pub fn contains(&self, platform: Platform) -> bool {
        self.get(platform).is_some()
    }

    /// Iterates over the platforms that have entries.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.entries.iter().map(PlatformMetadata::platform)
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlatformMetadata> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PlatformMetadata> for PostMetadata {
    /// Collects entries with insert semantics: a later entry for a platform
    /// replaces an earlier one.
    fn from_iter<T: IntoIterator<Item = PlatformMetadata>>(iter: T) -> Self {
        let mut metadata = Self::new();
        for entry in iter {
            metadata.insert(entry);
        }
        metadata
    }
}

impl<'a> IntoIterator for &'a PostMetadata {
    type Item = &'a PlatformMetadata;
    type IntoIter = std::slice::Iter<'a, PlatformMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A piece of content targeted at one or more platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Backend-assigned identifier.
    pub id: String,
    /// Internal title shown in the CMS.
    pub title: String,
    /// Body text published to the platforms.
    pub content: String,
    /// Lifecycle status.
    pub status: PostStatus,
    /// Platforms this post targets.
    pub platforms: BTreeSet<Platform>,
    /// When the post should go live, for scheduled posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// When the post actually went live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Who wrote the post.
    pub author: User,
    /// Campaign the post belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<Box<Campaign>>,
    /// Attached media assets.
    #[serde(default)]
    pub media: Vec<Media>,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Per-platform publishing options.
    #[serde(default, skip_serializing_if = "PostMetadata::is_empty")]
    pub metadata: PostMetadata,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Creates an empty draft with the current timestamp.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: User) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            status: PostStatus::default(),
            platforms: BTreeSet::new(),
            scheduled_at: None,
            published_at: None,
            author,
            campaign: None,
            media: Vec::new(),
            tags: Vec::new(),
            metadata: PostMetadata::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the target platforms.
    #[must_use]
    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms = platforms.into_iter().collect();
        self
    }

    /// Queues the post for the given publish time.
    #[must_use]
    pub const fn scheduled_for(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(at);
        self.status = PostStatus::Scheduled;
        self
    }

    /// Attaches a media asset.
    #[must_use]
    pub fn with_media(mut self, media: Media) -> Self {
        self.media.push(media);
        self
    }

    /// Assigns the post to a campaign.
    #[must_use]
    pub fn with_campaign(mut self, campaign: Campaign) -> Self {
        self.campaign = Some(Box::new(campaign));
        self
    }

    /// Adds platform-specific publishing options, replacing any existing
    /// entry for that platform.
    #[must_use]
    pub fn with_metadata(mut self, entry: PlatformMetadata) -> Self {
        self.metadata.insert(entry);
        self
    }

    /// Returns true if the post targets the given platform.
    #[must_use]
    pub fn targets(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Returns the publishing options for a platform.
    #[must_use]
    pub fn metadata_for(&self, platform: Platform) -> Option<&PlatformMetadata> {
        self.metadata.get(platform)
    }

    /// Validates the post's invariants against the given instant.
    ///
    /// # Errors
    ///
    /// - [`DomainError::DuplicateMetadata`] when two metadata entries share
    ///   a platform.
    /// - [`DomainError::MetadataForUntargetedPlatform`] when a metadata
    ///   entry names a platform outside the post's platform set.
    /// - [`DomainError::MissingSchedule`] when a scheduled post has no
    ///   schedule timestamp.
    /// - [`DomainError::ScheduleNotInFuture`] when the schedule timestamp
    ///   is not after `now`.
    pub fn validate_at(&self, now: DateTime<Utc>) -> DomainResult<()> {
        let mut seen = BTreeSet::new();
        for entry in &self.metadata {
            let platform = entry.platform();
            if !seen.insert(platform) {
                return Err(DomainError::DuplicateMetadata(platform));
            }
            if !self.platforms.contains(&platform) {
                return Err(DomainError::MetadataForUntargetedPlatform(platform));
            }
        }

        if self.status == PostStatus::Scheduled {
            match self.scheduled_at {
                None => return Err(DomainError::MissingSchedule),
                Some(at) if at <= now => return Err(DomainError::ScheduleNotInFuture(at)),
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Validates the post's invariants against the current instant.
    ///
    /// # Errors
    ///
    /// See [`Post::validate_at`].
    pub fn validate(&self) -> DomainResult<()> {
        self.validate_at(Utc::now())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::platform::{FacebookMetadata, TwitterMetadata};
    use pretty_assertions::assert_eq;

    fn author() -> User {
        User::new("u1", "ada@example.com", "ada")
    }

    fn facebook_entry() -> PlatformMetadata {
        PlatformMetadata::Facebook(FacebookMetadata::default())
    }

    fn twitter_entry() -> PlatformMetadata {
        PlatformMetadata::Twitter(TwitterMetadata::default())
    }

    #[test]
    fn test_metadata_insert_replaces_same_platform() {
        let mut metadata = PostMetadata::new();
        assert!(metadata.insert(facebook_entry()).is_none());
        assert!(metadata.insert(twitter_entry()).is_none());
        assert_eq!(metadata.len(), 2);

        let replaced = metadata.insert(facebook_entry());
        assert!(replaced.is_some());
        assert_eq!(metadata.len(), 2);
    }

    #[test]
    fn test_metadata_from_iterator_keeps_last() {
        let metadata: PostMetadata = vec![facebook_entry(), twitter_entry(), facebook_entry()]
            .into_iter()
            .collect();
        assert_eq!(metadata.len(), 2);
        assert!(metadata.contains(Platform::Facebook));
        assert!(metadata.contains(Platform::Twitter));
    }

    #[test]
    fn test_validate_ok_for_matching_platforms() {
        let post = Post::new("p1", "Hello", author())
            .with_platforms([Platform::Facebook, Platform::Twitter])
            .with_metadata(facebook_entry())
            .with_metadata(twitter_entry());

        assert!(post.validate_at(Utc::now()).is_ok());
    }

    #[test]
    fn test_validate_rejects_untargeted_metadata() {
        let post = Post::new("p1", "Hello", author())
            .with_platforms([Platform::Twitter])
            .with_metadata(facebook_entry());

        assert_eq!(
            post.validate_at(Utc::now()),
            Err(DomainError::MetadataForUntargetedPlatform(Platform::Facebook))
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_metadata() {
        // Bypass insert to mimic duplicates arriving over the wire.
        let mut post = Post::new("p1", "Hello", author()).with_platforms([Platform::Facebook]);
        post.metadata = serde_json::from_value(serde_json::json!([
            {"platform": "facebook", "postType": "status"},
            {"platform": "facebook", "postType": "photo"}
        ]))
        .unwrap();

        assert_eq!(
            post.validate_at(Utc::now()),
            Err(DomainError::DuplicateMetadata(Platform::Facebook))
        );
    }

    #[test]
    fn test_validate_scheduled_requires_timestamp() {
        let post = Post::new("p1", "Hello", author()).with_status(PostStatus::Scheduled);
        assert_eq!(post.validate_at(Utc::now()), Err(DomainError::MissingSchedule));
    }

    #[test]
    fn test_validate_scheduled_requires_future_timestamp() {
        let now = Utc::now();
        let past = now - chrono::Duration::minutes(5);
        let post = Post::new("p1", "Hello", author()).scheduled_for(past);

        assert_eq!(
            post.validate_at(now),
            Err(DomainError::ScheduleNotInFuture(past))
        );

        let future = now + chrono::Duration::minutes(5);
        let post = Post::new("p2", "Hello", author()).scheduled_for(future);
        assert!(post.validate_at(now).is_ok());
    }

    #[test]
    fn test_status_transitions() {
        assert!(PostStatus::Draft.can_transition_to(PostStatus::Scheduled));
        assert!(PostStatus::Scheduled.can_transition_to(PostStatus::Published));
        assert!(PostStatus::Scheduled.can_transition_to(PostStatus::Failed));
        assert!(PostStatus::Failed.can_transition_to(PostStatus::Scheduled));
        assert!(PostStatus::Published.can_transition_to(PostStatus::Archived));

        assert!(!PostStatus::Published.can_transition_to(PostStatus::Draft));
        assert!(!PostStatus::Archived.can_transition_to(PostStatus::Draft));
        assert!(PostStatus::Archived.is_terminal());
    }

    #[test]
    fn test_post_wire_shape() {
        let post = Post::new("p1", "Hello", author())
            .with_content("Hello, world")
            .with_platforms([Platform::Twitter, Platform::Facebook])
            .with_metadata(twitter_entry());

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["status"], "draft");
        // BTreeSet keeps platform order deterministic.
        assert_eq!(json["platforms"], serde_json::json!(["facebook", "twitter"]));
        assert_eq!(json["metadata"][0]["platform"], "twitter");
        assert!(json.get("scheduledAt").is_none());

        let back: Post = serde_json::from_value(json).unwrap();
        assert_eq!(back, post);
    }
}
