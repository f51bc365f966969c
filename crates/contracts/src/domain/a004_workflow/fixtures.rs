use super::aggregate::{MilestoneStatus, Position, WorkflowEdge, WorkflowNode, WorkflowNodeId};
use super::graph::WorkflowGraph;

fn node(id: u32, label: &str, status: MilestoneStatus, description: &str, x: f64, y: f64) -> WorkflowNode {
    WorkflowNode {
        id: WorkflowNodeId(id),
        label: label.into(),
        status,
        description: description.into(),
        position: Position::new(x, y),
    }
}

/// Obligations and milestones of the sample employment contract
pub fn employment_workflow() -> WorkflowGraph {
    let nodes = vec![
        node(1, "Contract Signing", MilestoneStatus::Completed, "Employment agreement signed by both parties", 250.0, 5.0),
        node(2, "Probation Period", MilestoneStatus::InProgress, "90-day probationary period - currently day 45", 100.0, 100.0),
        node(3, "Benefits Enrollment", MilestoneStatus::Pending, "Health insurance and 401k enrollment due", 400.0, 100.0),
        node(4, "Performance Review", MilestoneStatus::Upcoming, "Scheduled for end of probation period", 250.0, 200.0),
        node(5, "Non-compete Activation", MilestoneStatus::Risk, "Non-compete clause becomes active upon termination", 100.0, 300.0),
        node(6, "Stock Options Vesting", MilestoneStatus::Future, "First vesting milestone at 1-year mark", 400.0, 300.0),
    ];
    let edges = [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5), (4, 6)]
        .into_iter()
        .map(|(s, t)| WorkflowEdge::between(WorkflowNodeId(s), WorkflowNodeId(t)))
        .collect();

    WorkflowGraph::new(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_is_present() {
        let graph = employment_workflow();
        for status in MilestoneStatus::all() {
            assert!(graph.nodes().iter().any(|n| n.status == status));
        }
    }

    #[test]
    fn test_edges_reference_known_nodes() {
        let graph = employment_workflow();
        for edge in graph.edges() {
            assert!(graph.node(edge.source).is_some());
            assert!(graph.node(edge.target).is_some());
        }
        assert_eq!(graph.edges().len(), 6);
    }
}
