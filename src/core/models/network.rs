//! In-memory visualization model built from a graph description

use super::description::{EdgeSpec, GraphDescription, NodeId};
use std::collections::HashMap;

/// A registered node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Node identifier
    pub id: NodeId,
    /// Display label
    pub label: String,
}

/// Accumulates nodes and edges for rendering
///
/// Nodes are unique by id and kept in the order their id was first seen;
/// registering an id again replaces its label. Edges are kept exactly as
/// added, including duplicates and self-loops, and are not checked against
/// the node set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualizationModel {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<EdgeSpec>,
    physics: bool,
}

impl VisualizationModel {
    /// Create an empty model with physics off
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node, overwriting the label if the id already exists
    ///
    /// Returns `true` when the id was not registered before.
    pub fn add_node(&mut self, id: NodeId, label: impl Into<String>) -> bool {
        let label = label.into();
        if let Some(&slot) = self.index.get(&id) {
            self.nodes[slot].label = label;
            false
        } else {
            self.index.insert(id, self.nodes.len());
            self.nodes.push(Node { id, label });
            true
        }
    }

    /// Register a directed edge
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) {
        self.edges.push(EdgeSpec { source, target });
    }

    /// Toggle the force-directed physics simulation
    pub fn set_physics(&mut self, enabled: bool) {
        self.physics = enabled;
    }

    /// Whether physics is enabled
    #[must_use]
    pub const fn physics(&self) -> bool {
        self.physics
    }

    /// Registered nodes in first-registration order
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Registered edges in insertion order
    #[must_use]
    pub fn edges(&self) -> &[EdgeSpec] {
        &self.edges
    }

    /// Number of distinct nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by id
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    /// Check if a node id is registered
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Edges with at least one endpoint that is not registered
    #[must_use]
    pub fn dangling_edges(&self) -> Vec<EdgeSpec> {
        self.edges
            .iter()
            .filter(|e| !self.contains_node(e.source) || !self.contains_node(e.target))
            .copied()
            .collect()
    }
}

impl std::fmt::Display for VisualizationModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Network ({} nodes, {} edges, physics {}):",
            self.nodes.len(),
            self.edges.len(),
            if self.physics { "on" } else { "off" }
        )?;
        for node in &self.nodes {
            writeln!(f, "  {} \"{}\"", node.id, node.label)?;
        }
        for edge in &self.edges {
            writeln!(f, "  {} → {}", edge.source, edge.target)?;
        }
        Ok(())
    }
}

/// Build a model from a description
///
/// Nodes are registered first, in input order, then edges in input order.
#[must_use]
pub fn build_model(description: GraphDescription) -> VisualizationModel {
    let mut model = VisualizationModel::new();
    for node in description.nodes {
        model.add_node(node.id, node.label);
    }
    for edge in description.edges {
        model.add_edge(edge.source, edge.target);
    }
    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::NodeSpec;

    #[test]
    fn test_model_creation() {
        let model = VisualizationModel::new();
        assert_eq!(model.node_count(), 0);
        assert_eq!(model.edge_count(), 0);
        assert!(!model.physics());
    }

    #[test]
    fn test_duplicate_id_keeps_position_and_last_label() {
        let mut model = VisualizationModel::new();
        assert!(model.add_node(NodeId(1), "A"));
        assert!(model.add_node(NodeId(2), "B"));
        assert!(!model.add_node(NodeId(1), "C"));

        assert_eq!(model.node_count(), 2);
        assert_eq!(model.nodes()[0].id, NodeId(1));
        assert_eq!(model.node(NodeId(1)).map(|n| n.label.as_str()), Some("C"));
    }

    #[test]
    fn test_edges_are_not_deduplicated() {
        let mut model = VisualizationModel::new();
        model.add_node(NodeId(1), "A");
        model.add_edge(NodeId(1), NodeId(1));
        model.add_edge(NodeId(1), NodeId(1));
        assert_eq!(model.edge_count(), 2);
    }

    #[test]
    fn test_dangling_edges() {
        let mut model = VisualizationModel::new();
        model.add_node(NodeId(1), "A");
        model.add_edge(NodeId(1), NodeId(2));
        model.add_edge(NodeId(1), NodeId(1));
        assert_eq!(model.dangling_edges(), vec![EdgeSpec::new(1, 2)]);
    }

    #[test]
    fn test_build_model_preserves_input_order() {
        let description = GraphDescription::new(
            vec![NodeSpec::new(3, "C"), NodeSpec::new(1, "A"), NodeSpec::new(2, "B")],
            vec![EdgeSpec::new(2, 3), EdgeSpec::new(1, 2)],
        );
        let model = build_model(description);

        let ids: Vec<i64> = model.nodes().iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(model.edges(), &[EdgeSpec::new(2, 3), EdgeSpec::new(1, 2)]);
    }

    #[test]
    fn test_model_display() {
        let mut model = VisualizationModel::new();
        model.add_node(NodeId(1), "A");
        model.add_node(NodeId(2), "B");
        model.add_edge(NodeId(1), NodeId(2));

        let display = format!("{model}");
        assert!(display.contains("2 nodes, 1 edges"));
        assert!(display.contains("1 → 2"));
    }
}
