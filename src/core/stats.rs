//! Summary statistics for a graph description

use crate::core::models::{EdgeSpec, GraphDescription, NodeId};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Counts and anomalies found in a [`GraphDescription`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of node entries in the input
    pub node_entries: usize,
    /// Number of distinct node ids
    pub distinct_nodes: usize,
    /// Ids declared more than once, ascending
    pub duplicate_ids: Vec<NodeId>,
    /// Number of edge entries
    pub edge_count: usize,
    /// Number of edges whose endpoints are the same node
    pub self_loops: usize,
    /// Edges with an endpoint that is never declared, in input order
    pub dangling_edges: Vec<EdgeSpec>,
}

impl GraphStats {
    /// Compute statistics for a description
    #[must_use]
    pub fn from_description(description: &GraphDescription) -> Self {
        let mut seen = HashSet::new();
        let mut duplicates = BTreeSet::new();
        for node in &description.nodes {
            if !seen.insert(node.id) {
                duplicates.insert(node.id);
            }
        }

        let dangling_edges = description
            .edges
            .iter()
            .filter(|e| !seen.contains(&e.source) || !seen.contains(&e.target))
            .copied()
            .collect();

        Self {
            node_entries: description.nodes.len(),
            distinct_nodes: seen.len(),
            duplicate_ids: duplicates.into_iter().collect(),
            edge_count: description.edges.len(),
            self_loops: description.edges.iter().filter(|e| e.is_self_loop()).count(),
            dangling_edges,
        }
    }

    /// Whether every edge endpoint is a declared node
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.dangling_edges.is_empty()
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Node entries:   {}", self.node_entries)?;
        writeln!(f, "Distinct nodes: {}", self.distinct_nodes)?;
        writeln!(f, "Edges:          {}", self.edge_count)?;
        writeln!(f, "Self-loops:     {}", self.self_loops)?;

        if !self.duplicate_ids.is_empty() {
            let ids: Vec<String> = self.duplicate_ids.iter().map(ToString::to_string).collect();
            writeln!(f, "Duplicate ids:  {} (last label wins)", ids.join(", "))?;
        }

        if self.dangling_edges.is_empty() {
            writeln!(f, "Dangling edges: none")?;
        } else {
            writeln!(f, "Dangling edges: {}", self.dangling_edges.len())?;
            for edge in &self.dangling_edges {
                writeln!(f, "  {} → {}", edge.source, edge.target)?;
            }
        }
        Ok(())
    }
}
