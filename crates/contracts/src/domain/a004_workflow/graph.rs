use super::aggregate::{MilestoneStatus, Position, WorkflowEdge, WorkflowNode, WorkflowNodeId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Unknown workflow node: {0}")]
    UnknownNode(WorkflowNodeId),

    #[error("A milestone cannot depend on itself")]
    SelfLoop,

    #[error("Milestones {0} and {1} are already connected")]
    DuplicateEdge(WorkflowNodeId, WorkflowNodeId),
}

/// Per-status counters for the overview panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MilestoneCounts {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub risks: usize,
}

/// Milestones and their dependencies.
///
/// Edge endpoints always name nodes of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowGraph {
    nodes: Vec<WorkflowNode>,
    edges: Vec<WorkflowEdge>,
}

impl WorkflowGraph {
    pub fn new(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Self {
        let edges = edges
            .into_iter()
            .filter(|e| {
                nodes.iter().any(|n| n.id == e.source) && nodes.iter().any(|n| n.id == e.target)
            })
            .collect();
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[WorkflowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[WorkflowEdge] {
        &self.edges
    }

    pub fn node(&self, id: WorkflowNodeId) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Moves a node to a new position (dragging on the canvas)
    pub fn move_node(&mut self, id: WorkflowNodeId, position: Position) -> Result<(), WorkflowError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(WorkflowError::UnknownNode(id))?;
        node.position = position;
        Ok(())
    }

    /// Adds a dependency edge from `source` to `target`
    pub fn connect(
        &mut self,
        source: WorkflowNodeId,
        target: WorkflowNodeId,
    ) -> Result<&WorkflowEdge, WorkflowError> {
        for id in [source, target] {
            if self.node(id).is_none() {
                return Err(WorkflowError::UnknownNode(id));
            }
        }
        if source == target {
            return Err(WorkflowError::SelfLoop);
        }
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return Err(WorkflowError::DuplicateEdge(source, target));
        }

        self.edges.push(WorkflowEdge::between(source, target));
        Ok(&self.edges[self.edges.len() - 1])
    }

    pub fn count(&self, status: MilestoneStatus) -> usize {
        self.nodes.iter().filter(|n| n.status == status).count()
    }

    pub fn counts(&self) -> MilestoneCounts {
        MilestoneCounts {
            total: self.nodes.len(),
            completed: self.count(MilestoneStatus::Completed),
            in_progress: self.count(MilestoneStatus::InProgress),
            risks: self.count(MilestoneStatus::Risk),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_workflow::fixtures::employment_workflow;

    #[test]
    fn test_connect_adds_edge() {
        let mut graph = employment_workflow();
        let edge = graph
            .connect(WorkflowNodeId(2), WorkflowNodeId(6))
            .expect("new edge");
        assert_eq!(edge.id, "e2-6");
        assert_eq!(graph.edges().len(), 7);
    }

    #[test]
    fn test_connect_rejects_invalid_edges() {
        let mut graph = employment_workflow();
        assert_eq!(
            graph.connect(WorkflowNodeId(1), WorkflowNodeId(2)),
            Err(WorkflowError::DuplicateEdge(WorkflowNodeId(1), WorkflowNodeId(2)))
        );
        assert_eq!(
            graph.connect(WorkflowNodeId(3), WorkflowNodeId(3)),
            Err(WorkflowError::SelfLoop)
        );
        assert_eq!(
            graph.connect(WorkflowNodeId(1), WorkflowNodeId(42)),
            Err(WorkflowError::UnknownNode(WorkflowNodeId(42)))
        );
        assert_eq!(graph.edges().len(), 6);
    }

    #[test]
    fn test_move_node() {
        let mut graph = employment_workflow();
        graph
            .move_node(WorkflowNodeId(5), Position::new(12.0, 34.0))
            .expect("known node");
        assert_eq!(
            graph.node(WorkflowNodeId(5)).map(|n| n.position),
            Some(Position::new(12.0, 34.0))
        );
        assert!(graph
            .move_node(WorkflowNodeId(9), Position::default())
            .is_err());
    }

    #[test]
    fn test_counts() {
        let counts = employment_workflow().counts();
        assert_eq!(
            counts,
            MilestoneCounts {
                total: 6,
                completed: 1,
                in_progress: 1,
                risks: 1,
            }
        );
    }

    #[test]
    fn test_dangling_edges_are_dropped() {
        let graph = WorkflowGraph::new(
            vec![],
            vec![WorkflowEdge::between(WorkflowNodeId(1), WorkflowNodeId(2))],
        );
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_badge_label() {
        assert_eq!(MilestoneStatus::InProgress.badge_label(), "IN PROGRESS");
    }
}
