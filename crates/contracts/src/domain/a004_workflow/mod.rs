pub mod aggregate;
pub mod fixtures;
pub mod graph;

pub use aggregate::{MilestoneStatus, Position, WorkflowEdge, WorkflowNode, WorkflowNodeId};
pub use fixtures::employment_workflow;
pub use graph::{MilestoneCounts, WorkflowError, WorkflowGraph};
