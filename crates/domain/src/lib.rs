//! Crosspost Domain - Core content types
//!
//! This crate defines the shared data model for the Crosspost publishing
//! platform: users, connected social accounts, posts and their per-platform
//! metadata, media, campaigns, analytics, workflows, webhooks, notifications,
//! and the API envelope every backend endpoint answers with.
//!
//! All types here are pure Rust with no I/O dependencies.

pub mod account;
pub mod analytics;
pub mod api;
pub mod campaign;
pub mod error;
pub mod media;
pub mod notification;
pub mod platform;
pub mod post;
pub mod user;
pub mod webhook;
pub mod workflow;

pub use account::SocialAccount;
pub use analytics::{Analytics, AnalyticsSet, AnalyticsSummary, ReportingPeriod};
pub use api::{ApiError, ApiResponse, Pagination, ResponseMeta};
pub use campaign::{Campaign, CampaignGoal, CampaignStatus};
pub use error::{DomainError, DomainResult};
pub use media::{Media, MediaType};
pub use notification::{Notification, NotificationType};
pub use platform::{
    FacebookMetadata, FacebookPostType, InstagramMetadata, InstagramPostType, LinkedInMetadata,
    LinkedInVisibility, Platform, PlatformMetadata, TikTokMetadata, TikTokPrivacy, TwitterMetadata,
    YouTubeMetadata, YouTubePrivacy,
};
pub use post::{Post, PostMetadata, PostStatus};
pub use user::{User, UserRole};
pub use webhook::{Webhook, WebhookEvent};
pub use workflow::{Workflow, WorkflowStep, WorkflowStepType};
