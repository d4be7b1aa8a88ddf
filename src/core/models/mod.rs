//! Data models for `graphview`

pub mod description;
pub mod network;

pub use description::{EdgeSpec, GraphDescription, NodeId, NodeSpec};
pub use network::{build_model, Node, VisualizationModel};
