//! JSON parser for graph descriptions
//!
//! The input is deserialized into a loose shape first so that a missing or
//! mistyped field can be reported with its location (`nodes[2].id`), then
//! converted into the typed [`GraphDescription`].

use crate::core::error::{GraphError, Result};
use crate::core::models::{EdgeSpec, GraphDescription, NodeId, NodeSpec};
use serde::Deserialize;
use serde_json::error::Category;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawGraph {
    nodes: Option<Vec<RawNode>>,
    edges: Option<Vec<RawEdge>>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: Option<RawId>,
    label: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    source: Option<RawId>,
    target: Option<RawId>,
}

/// Any JSON value found in an id position, before integer coercion
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl RawId {
    /// Coerce to an integer id
    ///
    /// Accepts integers, floats with no fractional part, and strings holding
    /// an integer. Booleans, fractional numbers, and other values are rejected.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn to_node_id(&self, location: &str) -> Result<NodeId> {
        match self {
            Self::Int(value) => Ok(NodeId(*value)),
            Self::Float(value)
                if value.fract() == 0.0
                    && *value >= i64::MIN as f64
                    && *value < i64::MAX as f64 =>
            {
                Ok(NodeId(*value as i64))
            }
            Self::Float(value) => Err(GraphError::schema(
                location,
                format!("{value} is not an integer id"),
            )),
            Self::Text(text) => text.trim().parse::<i64>().map(NodeId).map_err(|_| {
                GraphError::schema(location, format!("\"{text}\" is not an integer id"))
            }),
            Self::Other(value) => Err(GraphError::schema(
                location,
                format!("expected an integer id, found {}", describe(value)),
            )),
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn required_id(raw: Option<&RawId>, location: String) -> Result<NodeId> {
    raw.map_or_else(
        || Err(GraphError::schema(&location, "missing required field")),
        |id| id.to_node_id(&location),
    )
}

fn convert_node(index: usize, raw: RawNode) -> Result<NodeSpec> {
    let id = required_id(raw.id.as_ref(), format!("nodes[{index}].id"))?;
    let label = match raw.label {
        Some(Value::String(label)) => label,
        Some(other) => {
            return Err(GraphError::schema(
                format!("nodes[{index}].label"),
                format!("expected a string, found {}", describe(&other)),
            ))
        }
        None => {
            return Err(GraphError::schema(
                format!("nodes[{index}].label"),
                "missing required field",
            ))
        }
    };
    Ok(NodeSpec { id, label })
}

fn convert_edge(index: usize, raw: &RawEdge) -> Result<EdgeSpec> {
    Ok(EdgeSpec {
        source: required_id(raw.source.as_ref(), format!("edges[{index}].source"))?,
        target: required_id(raw.target.as_ref(), format!("edges[{index}].target"))?,
    })
}

/// Map a `serde_json` failure onto the parse/schema split
fn classify(err: serde_json::Error) -> GraphError {
    match err.classify() {
        Category::Data => GraphError::schema("document", err.to_string()),
        Category::Io | Category::Syntax | Category::Eof => GraphError::Parse(err),
    }
}

fn convert(raw: RawGraph) -> Result<GraphDescription> {
    let raw_nodes = raw
        .nodes
        .ok_or_else(|| GraphError::schema("nodes", "missing required field"))?;
    let raw_edges = raw
        .edges
        .ok_or_else(|| GraphError::schema("edges", "missing required field"))?;

    let nodes = raw_nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| convert_node(i, node))
        .collect::<Result<Vec<_>>>()?;
    let edges = raw_edges
        .iter()
        .enumerate()
        .map(|(i, edge)| convert_edge(i, edge))
        .collect::<Result<Vec<_>>>()?;

    Ok(GraphDescription { nodes, edges })
}

/// Parse a graph description from any reader
///
/// # Errors
/// Returns a parse error for malformed JSON and a schema error for missing or
/// mistyped fields.
pub fn load_reader<R: Read>(reader: R) -> Result<GraphDescription> {
    let raw: RawGraph = serde_json::from_reader(reader).map_err(classify)?;
    convert(raw)
}

/// Parse a graph description from an in-memory JSON document
///
/// # Errors
/// Returns a parse error for malformed JSON and a schema error for missing or
/// mistyped fields.
pub fn load_str(text: &str) -> Result<GraphDescription> {
    let raw: RawGraph = serde_json::from_str(text).map_err(classify)?;
    convert(raw)
}

/// Load a graph description from a JSON file
///
/// The file is opened for the duration of this call only.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// Returns [`GraphError::Read`] if the file cannot be opened or read,
/// [`GraphError::Parse`] if it is not valid JSON, and [`GraphError::Schema`]
/// if required fields are missing or not integer-convertible.
pub fn load<P: AsRef<Path>>(path: P) -> Result<GraphDescription> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GraphError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(BufReader::new(file)).map_err(|err| match err {
        GraphError::Parse(inner) if inner.is_io() => GraphError::Read {
            path: path.to_path_buf(),
            source: inner.into(),
        },
        other => other,
    })
}
