//! Social platform enumeration and per-platform publishing metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Supported social networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Facebook pages and profiles
    Facebook,
    /// Instagram feed, stories, and reels
    Instagram,
    /// Twitter timelines
    Twitter,
    /// LinkedIn profiles and organization pages
    LinkedIn,
    /// TikTok videos
    TikTok,
    /// YouTube channels
    YouTube,
}

impl Platform {
    /// Returns all supported platforms.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Facebook,
            Self::Instagram,
            Self::Twitter,
            Self::LinkedIn,
            Self::TikTok,
            Self::YouTube,
        ]
    }

    /// Returns the platform's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().as_str() {
            "facebook" => Ok(Self::Facebook),
            "instagram" => Ok(Self::Instagram),
            "twitter" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::LinkedIn),
            "tiktok" => Ok(Self::TikTok),
            "youtube" => Ok(Self::YouTube),
            other => Err(DomainError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Platform-specific publishing options for a post.
///
/// Serialized internally tagged by `platform`, so each entry carries its
/// own platform name on the wire and deserialization picks the matching
/// variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum PlatformMetadata {
    /// Options for a Facebook post.
    Facebook(FacebookMetadata),
    /// Options for an Instagram post.
    Instagram(InstagramMetadata),
    /// Options for a Twitter post.
    Twitter(TwitterMetadata),
    /// Options for a LinkedIn post.
    LinkedIn(LinkedInMetadata),
    /// Options for a TikTok post.
    TikTok(TikTokMetadata),
    /// Options for a YouTube post.
    YouTube(YouTubeMetadata),
}

impl PlatformMetadata {
    /// Returns the platform this metadata applies to.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        match self {
            Self::Facebook(_) => Platform::Facebook,
            Self::Instagram(_) => Platform::Instagram,
            Self::Twitter(_) => Platform::Twitter,
            Self::LinkedIn(_) => Platform::LinkedIn,
            Self::TikTok(_) => Platform::TikTok,
            Self::YouTube(_) => Platform::YouTube,
        }
    }
}

/// How a Facebook post is rendered on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FacebookPostType {
    /// A shared link with preview
    Link,
    /// A photo post
    Photo,
    /// A video post
    Video,
    /// A plain status update
    #[default]
    Status,
}

/// Facebook-specific publishing options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacebookMetadata {
    /// Target page id when publishing to a page rather than a profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    /// How the content is rendered.
    pub post_type: FacebookPostType,
    /// Free-form audience targeting, passed through to the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<serde_json::Value>,
}

/// Where an Instagram post appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InstagramPostType {
    /// A regular feed post
    #[default]
    Feed,
    /// A 24-hour story
    Story,
    /// A reel
    Reel,
}

/// Instagram-specific publishing options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstagramMetadata {
    /// Business account id to publish through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Where the post appears.
    pub post_type: InstagramPostType,
    /// Optional location tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Twitter-specific publishing options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwitterMetadata {
    /// Id of the tweet this post replies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<String>,
    /// Poll choices, when the post carries a poll.
    #[serde(default)]
    pub poll_options: Vec<String>,
    /// Poll duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_duration: Option<u32>,
}

/// Who can see a LinkedIn post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkedInVisibility {
    /// Visible to everyone
    #[default]
    Public,
    /// Visible to the author's connections only
    Connections,
}

/// LinkedIn-specific publishing options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkedInMetadata {
    /// Organization page to publish as, instead of the member profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    /// Post visibility.
    pub visibility: LinkedInVisibility,
}

/// Who can see a TikTok post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TikTokPrivacy {
    /// Visible to everyone
    #[default]
    Public,
    /// Visible to the author only
    Private,
    /// Visible to mutual followers
    Friends,
}

/// TikTok-specific publishing options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TikTokMetadata {
    /// Post visibility.
    pub privacy: TikTokPrivacy,
    /// Whether viewers may comment.
    pub allow_comments: bool,
    /// Whether viewers may duet with the video.
    pub allow_duet: bool,
    /// Whether viewers may stitch the video.
    pub allow_stitch: bool,
}

impl Default for TikTokMetadata {
    fn default() -> Self {
        Self {
            privacy: TikTokPrivacy::Public,
            allow_comments: true,
            allow_duet: true,
            allow_stitch: true,
        }
    }
}

/// Who can see a YouTube video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum YouTubePrivacy {
    /// Visible to everyone
    Public,
    /// Visible to the channel owner only
    #[default]
    Private,
    /// Visible to anyone with the link
    Unlisted,
}

/// YouTube-specific publishing options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct YouTubeMetadata {
    /// Channel to upload to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Video visibility.
    pub privacy: YouTubePrivacy,
    /// Video category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// COPPA made-for-kids designation.
    #[serde(default)]
    pub made_for_kids: bool,
}
