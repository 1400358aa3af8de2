//! Campaigns grouping posts toward shared goals

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::post::Post;
use crate::user::User;

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Being prepared, not yet visible to schedulers.
    #[default]
    Draft,
    /// Currently running.
    Active,
    /// Temporarily halted.
    Paused,
    /// Finished normally.
    Completed,
    /// Retired and hidden from listings.
    Archived,
}

/// A named metric a campaign is trying to move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignGoal {
    /// Metric name (e.g., "impressions").
    pub metric: String,
    /// Target value to reach.
    pub target: f64,
    /// Current value.
    pub current: f64,
}

impl CampaignGoal {
    /// Creates a goal starting from zero.
    #[must_use]
    pub fn new(metric: impl Into<String>, target: f64) -> Self {
        Self {
            metric: metric.into(),
            target,
            current: 0.0,
        }
    }

    /// Fraction of the target reached, clamped to `[0, 1]`.
    ///
    /// Goals with a non-positive target report no progress.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            0.0
        } else {
            (self.current / self.target).clamp(0.0, 1.0)
        }
    }

    /// True once the current value has reached the target.
    #[must_use]
    pub fn is_met(&self) -> bool {
        self.target > 0.0 && self.current >= self.target
    }
}

/// A named grouping of posts over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Backend-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the campaign begins.
    pub start_date: DateTime<Utc>,
    /// When the campaign ends; open-ended when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: CampaignStatus,
    /// Posts belonging to the campaign.
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Budget in the account's currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// Metrics the campaign is tracked against.
    #[serde(default)]
    pub goals: Vec<CampaignGoal>,
    /// Who created the campaign.
    pub created_by: User,
    /// When the campaign was created.
    pub created_at: DateTime<Utc>,
    /// When the campaign was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Creates a draft campaign starting at the given date.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        created_by: User,
        start_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            start_date,
            end_date: None,
            status: CampaignStatus::default(),
            posts: Vec::new(),
            tags: Vec::new(),
            budget: None,
            goals: Vec::new(),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the end date.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: CampaignStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a goal.
    #[must_use]
    pub fn with_goal(mut self, goal: CampaignGoal) -> Self {
        self.goals.push(goal);
        self
    }

    /// Validates the date range.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDateRange`] when the end date precedes
    /// the start date.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err(DomainError::InvalidDateRange {
                start: self.start_date,
                end,
            });
        }
        Ok(())
    }

    /// True when the campaign is active and the instant falls in its range.
    #[must_use]
    pub fn is_running_at(&self, now: DateTime<Utc>) -> bool {
        self.status == CampaignStatus::Active
            && self.start_date <= now
            && self.end_date.is_none_or(|end| now <= end)
    }

    /// True when the campaign is running right now.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.is_running_at(Utc::now())
    }

    /// True once every goal with a positive target is met.
    ///
    /// Campaigns without goals report false.
    #[must_use]
    pub fn all_goals_met(&self) -> bool {
        !self.goals.is_empty() && self.goals.iter().all(CampaignGoal::is_met)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn creator() -> User {
        User::new("u1", "ada@example.com", "ada")
    }

    #[test]
    fn test_goal_progress() {
        let mut goal = CampaignGoal::new("impressions", 1000.0);
        assert!((goal.progress() - 0.0).abs() < f64::EPSILON);
        assert!(!goal.is_met());

        goal.current = 250.0;
        assert!((goal.progress() - 0.25).abs() < f64::EPSILON);

        goal.current = 1500.0;
        assert!((goal.progress() - 1.0).abs() < f64::EPSILON);
        assert!(goal.is_met());
    }

    #[test]
    fn test_goal_with_zero_target_never_met() {
        let goal = CampaignGoal::new("clicks", 0.0);
        assert!((goal.progress() - 0.0).abs() < f64::EPSILON);
        assert!(!goal.is_met());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let start = Utc::now();
        let campaign = Campaign::new("c1", "Launch", creator(), start)
            .with_end_date(start - chrono::Duration::days(1));

        assert!(campaign.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_open_ended() {
        let campaign = Campaign::new("c1", "Launch", creator(), Utc::now());
        assert!(campaign.validate().is_ok());
    }

    #[test]
    fn test_is_running_at() {
        let start = Utc::now() - chrono::Duration::days(1);
        let end = Utc::now() + chrono::Duration::days(1);
        let campaign = Campaign::new("c1", "Launch", creator(), start)
            .with_end_date(end)
            .with_status(CampaignStatus::Active);

        assert!(campaign.is_running_at(Utc::now()));
        assert!(!campaign.is_running_at(end + chrono::Duration::seconds(1)));
    }

    #[test]
    fn test_paused_campaign_is_not_running() {
        let campaign = Campaign::new("c1", "Launch", creator(), Utc::now() - chrono::Duration::days(1))
            .with_status(CampaignStatus::Paused);
        assert!(!campaign.is_running());
    }

    #[test]
    fn test_all_goals_met() {
        let mut reached = CampaignGoal::new("impressions", 100.0);
        reached.current = 100.0;

        let campaign = Campaign::new("c1", "Launch", creator(), Utc::now()).with_goal(reached);
        assert!(campaign.all_goals_met());

        let empty = Campaign::new("c2", "Quiet", creator(), Utc::now());
        assert!(!empty.all_goals_met());
    }

    #[test]
    fn test_campaign_wire_shape() {
        let campaign = Campaign::new("c1", "Launch", creator(), Utc::now())
            .with_status(CampaignStatus::Active);
        let json = serde_json::to_value(&campaign).unwrap();

        assert_eq!(json["status"], "active");
        assert!(json.get("startDate").is_some());
        assert!(json.get("createdBy").is_some());
        assert!(json.get("endDate").is_none());
    }
}
