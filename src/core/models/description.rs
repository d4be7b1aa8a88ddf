//! Typed graph description produced by the loader

use serde::Serialize;
use std::fmt;

/// Integer identifier of a node
///
/// Edge endpoints refer to nodes through this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NodeId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// A node entry as declared in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    /// Node identifier
    pub id: NodeId,
    /// Display label
    pub label: String,
}

impl NodeSpec {
    /// Create a node entry
    #[must_use]
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// An edge entry as declared in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Source node id
    pub source: NodeId,
    /// Target node id
    pub target: NodeId,
}

impl EdgeSpec {
    /// Create an edge entry
    #[must_use]
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Whether both endpoints are the same node
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Validated graph description, entries kept in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDescription {
    /// Node entries (may repeat ids)
    pub nodes: Vec<NodeSpec>,
    /// Edge entries (may repeat pairs or loop)
    pub edges: Vec<EdgeSpec>,
}

impl GraphDescription {
    /// Create a description from node and edge entries
    #[must_use]
    pub const fn new(nodes: Vec<NodeSpec>, edges: Vec<EdgeSpec>) -> Self {
        Self { nodes, edges }
    }

    /// Whether the description declares nothing at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
