use crate::domain::common::{FixtureRecord, StatusTone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkflowNodeId(pub u32);

impl std::fmt::Display for WorkflowNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Completed,
    InProgress,
    Pending,
    Upcoming,
    Risk,
    Future,
}

impl MilestoneStatus {
    pub fn all() -> [MilestoneStatus; 6] {
        [
            MilestoneStatus::Completed,
            MilestoneStatus::InProgress,
            MilestoneStatus::Pending,
            MilestoneStatus::Upcoming,
            MilestoneStatus::Risk,
            MilestoneStatus::Future,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::InProgress => "in-progress",
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::Upcoming => "upcoming",
            MilestoneStatus::Risk => "risk",
            MilestoneStatus::Future => "future",
        }
    }

    /// Badge text, e.g. "IN PROGRESS"
    pub fn badge_label(&self) -> String {
        self.as_str().replace('-', " ").to_uppercase()
    }

    /// Legend text
    pub fn legend_label(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "Completed",
            MilestoneStatus::InProgress => "In Progress",
            MilestoneStatus::Pending => "Pending",
            MilestoneStatus::Upcoming => "Upcoming",
            MilestoneStatus::Risk => "Risk/Warning",
            MilestoneStatus::Future => "Future Milestone",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            MilestoneStatus::Completed => StatusTone::Success,
            MilestoneStatus::InProgress => StatusTone::Warning,
            MilestoneStatus::Pending => StatusTone::Neutral,
            MilestoneStatus::Upcoming => StatusTone::Brand,
            MilestoneStatus::Risk => StatusTone::Danger,
            MilestoneStatus::Future => StatusTone::Accent,
        }
    }
}

/// Canvas coordinates of a node's top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A contract obligation or milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: WorkflowNodeId,
    pub label: String,
    pub status: MilestoneStatus,
    pub description: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub id: String,
    pub source: WorkflowNodeId,
    pub target: WorkflowNodeId,
}

impl WorkflowEdge {
    pub fn between(source: WorkflowNodeId, target: WorkflowNodeId) -> Self {
        Self {
            id: format!("e{}-{}", source, target),
            source,
            target,
        }
    }
}

impl FixtureRecord for WorkflowNode {
    fn fixture_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "workflow"
    }

    fn list_name() -> &'static str {
        "Contract Workflow"
    }
}
