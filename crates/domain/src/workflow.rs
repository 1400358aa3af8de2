//! Approval workflows for content review

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// What a workflow step does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStepType {
    /// Content is written.
    Draft,
    /// Content is reviewed for quality.
    Review,
    /// Content requires sign-off.
    Approval,
    /// Content is queued for publishing.
    Schedule,
    /// Content goes live.
    Publish,
}

/// One step in an approval workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    /// Backend-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the step does.
    #[serde(rename = "type")]
    pub kind: WorkflowStepType,
    /// Users who can act on the step.
    #[serde(default)]
    pub assigned_to: Vec<User>,
    /// Approvals required before the step completes.
    pub required_approvals: u32,
    /// Position in the workflow; lower runs first.
    pub order: u32,
}

/// An ordered sequence of review steps content passes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Backend-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The steps, in no particular stored order.
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
    /// Whether the workflow applies to new content.
    pub is_active: bool,
    /// When the workflow was created.
    pub created_at: DateTime<Utc>,
}

impl Workflow {
    /// Creates an active workflow with no steps.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            steps: Vec::new(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Adds a step.
    #[must_use]
    pub fn with_step(mut self, step: WorkflowStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Returns the steps sorted by their order field.
    #[must_use]
    pub fn steps_in_order(&self) -> Vec<&WorkflowStep> {
        let mut steps: Vec<&WorkflowStep> = self.steps.iter().collect();
        steps.sort_by_key(|step| step.order);
        steps
    }

    /// Returns the step that runs first.
    #[must_use]
    pub fn first_step(&self) -> Option<&WorkflowStep> {
        self.steps.iter().min_by_key(|step| step.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn step(id: &str, kind: WorkflowStepType, order: u32) -> WorkflowStep {
        WorkflowStep {
            id: id.to_string(),
            name: id.to_string(),
            kind,
            assigned_to: Vec::new(),
            required_approvals: 1,
            order,
        }
    }

    #[test]
    fn test_steps_in_order_sorts_by_order_field() {
        let workflow = Workflow::new("w1", "Standard review")
            .with_step(step("publish", WorkflowStepType::Publish, 30))
            .with_step(step("draft", WorkflowStepType::Draft, 10))
            .with_step(step("review", WorkflowStepType::Review, 20));

        let ordered: Vec<&str> = workflow
            .steps_in_order()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ordered, vec!["draft", "review", "publish"]);
    }

    #[test]
    fn test_first_step() {
        let workflow = Workflow::new("w1", "Standard review")
            .with_step(step("review", WorkflowStepType::Review, 20))
            .with_step(step("draft", WorkflowStepType::Draft, 10));

        assert_eq!(workflow.first_step().map(|s| s.id.as_str()), Some("draft"));
        assert!(Workflow::new("w2", "Empty").first_step().is_none());
    }
}
