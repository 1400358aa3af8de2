//! Per-platform engagement analytics

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::post::Post;

/// Engagement counters for one post on one platform.
///
/// Records are uniquely keyed by `(post_id, platform)`; the same post has
/// one record per platform it was published to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// The post these counters belong to.
    pub post_id: String,
    /// The platform the counters were collected from.
    pub platform: Platform,
    /// Times the post was displayed.
    pub impressions: u64,
    /// Unique accounts that saw the post.
    pub reach: u64,
    /// Total interactions of any kind.
    pub engagement: u64,
    /// Like reactions.
    pub likes: u64,
    /// Comments.
    pub comments: u64,
    /// Shares or reposts.
    pub shares: u64,
    /// Link clicks.
    pub clicks: u64,
    /// Video views, for video content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_views: Option<u64>,
    /// When the counters were last refreshed.
    pub last_updated: DateTime<Utc>,
}

impl Analytics {
    /// Creates a zeroed record with the current timestamp.
    #[must_use]
    pub fn new(post_id: impl Into<String>, platform: Platform) -> Self {
        Self {
            post_id: post_id.into(),
            platform,
            impressions: 0,
            reach: 0,
            engagement: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            clicks: 0,
            video_views: None,
            last_updated: Utc::now(),
        }
    }

    /// Returns the record's unique key.
    #[must_use]
    pub fn key(&self) -> (&str, Platform) {
        (&self.post_id, self.platform)
    }

    /// Interactions per impression, as a fraction.
    ///
    /// Records with no impressions report zero.
    #[must_use]
    pub fn engagement_rate(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.engagement as f64 / self.impressions as f64
            }
        }
    }
}

/// A collection of analytics records, at most one per `(post, platform)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalyticsSet {
    items: Vec<Analytics>,
}

impl AnalyticsSet {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inserts a record, replacing any record sharing its key.
    ///
    /// Returns the replaced record.
    pub fn upsert(&mut self, record: Analytics) -> Option<Analytics> {
        match self
            .items
            .iter()
            .position(|existing| existing.key() == record.key())
        {
            Some(index) => Some(std::mem::replace(&mut self.items[index], record)),
            None => {
                self.items.push(record);
                None
            }
        }
    }

    /// Returns the record for a post on a platform.
    #[must_use]
    pub fn get(&self, post_id: &str, platform: Platform) -> Option<&Analytics> {
        self.items
            .iter()
            .find(|record| record.post_id == post_id && record.platform == platform)
    }

    /// Iterates over every record for one post.
    pub fn for_post<'a>(&'a self, post_id: &'a str) -> impl Iterator<Item = &'a Analytics> {
        self.items.iter().filter(move |r| r.post_id == post_id)
    }

    /// Iterates over all records.
    pub fn iter(&self) -> std::slice::Iter<'_, Analytics> {
        self.items.iter()
    }

    /// Returns the number of records.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Analytics> for AnalyticsSet {
    /// Collects records with upsert semantics: a later record for a key
    /// replaces an earlier one.
    fn from_iter<T: IntoIterator<Item = Analytics>>(iter: T) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.upsert(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a AnalyticsSet {
    type Item = &'a Analytics;
    type IntoIter = std::slice::Iter<'a, Analytics>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Date range covered by a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// Start of the range.
    pub start: DateTime<Utc>,
    /// End of the range.
    pub end: DateTime<Utc>,
}

/// Aggregated analytics computed by the backend for a reporting period.
///
/// The core only defines the shape; aggregation itself happens server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Range the summary covers.
    pub period: ReportingPeriod,
    /// Posts published in the period.
    pub total_posts: u64,
    /// Impressions across all platforms.
    pub total_impressions: u64,
    /// Interactions across all platforms.
    pub total_engagement: u64,
    /// Rolled-up counters per platform.
    #[serde(default)]
    pub platform_breakdown: BTreeMap<Platform, Analytics>,
    /// Best performing posts in the period.
    #[serde(default)]
    pub top_posts: Vec<Post>,
}
