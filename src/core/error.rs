//! Error types for loading and rendering graphs

use crate::core::models::NodeId;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input missing, unreadable, or not valid JSON
    Parse,
    /// Required field absent or of the wrong type
    Schema,
    /// Artifact generation failed
    Render,
}

/// Failures raised while producing the HTML artifact
#[derive(Debug, Error)]
pub enum RenderError {
    /// An edge names a node id that was never registered
    #[error("edge {from} -> {to} references unknown node {missing}")]
    DanglingEdge {
        /// Edge source id
        from: NodeId,
        /// Edge target id
        to: NodeId,
        /// The endpoint that is not registered
        missing: NodeId,
    },

    /// Template rendering failed
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    /// Embedding graph data as JSON failed
    #[error("failed to serialize graph data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for the load → build → configure → render pipeline
#[derive(Debug, Error)]
pub enum GraphError {
    /// The input file could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed JSON
    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The JSON is well-formed but does not describe a graph
    #[error("schema error at {location}: {message}")]
    Schema {
        /// Where the problem was found (e.g. `nodes[2].id`), or `line:column`
        location: String,
        /// What was wrong
        message: String,
    },

    /// Rendering the artifact failed
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

impl GraphError {
    /// Classify this error as a parse, schema, or render failure
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::Parse(_) => ErrorKind::Parse,
            Self::Schema { .. } => ErrorKind::Schema,
            Self::Render(_) => ErrorKind::Render,
        }
    }

    pub(crate) fn schema(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            location: location.into(),
            message: message.into(),
        }
    }
}

/// Result alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
