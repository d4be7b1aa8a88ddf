//! HTML network renderer
//!
//! Produces a single self-contained HTML page: the canvas renderer script is
//! compiled into the binary and inlined, and the node, edge, and option data
//! are embedded as JSON. When a vis-network script URL is configured the page
//! loads that library instead. Output is deterministic for a given model and
//! settings.

use super::{NetworkRenderer, RenderSettings};
use crate::core::error::RenderError;
use crate::core::models::NodeId;
use crate::warn;
use askama::Template;
use serde::Serialize;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Canvas renderer inlined into every page that has no external script URL
const GRAPH_CANVAS_JS: &str = include_str!("../assets/graph_canvas.js");

#[derive(Template)]
#[template(path = "network.html")]
struct NetworkPage<'a> {
    title: &'a str,
    width: &'a str,
    height: &'a str,
    vis_js_url: &'a str,
    graph_js: &'a str,
    node_count: usize,
    edge_count: usize,
    nodes_json: String,
    edges_json: String,
    options_json: String,
}

#[derive(Debug, Clone, Serialize)]
struct VisNode {
    id: NodeId,
    label: String,
    title: String,
    shape: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct VisEdge {
    from: NodeId,
    to: NodeId,
}

/// HTML page implementation of [`NetworkRenderer`]
///
/// Edges to ids that were never added are rejected unless
/// `allow_dangling_edges` is set, in which case they are embedded as-is and
/// the page skips drawing them.
#[derive(Debug, Clone)]
pub struct VisNetwork {
    settings: RenderSettings,
    nodes: Vec<VisNode>,
    index: HashMap<NodeId, usize>,
    edges: Vec<VisEdge>,
    dangling: HashSet<(NodeId, NodeId)>,
}

impl VisNetwork {
    /// Create an empty network canvas
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            dangling: HashSet::new(),
        }
    }

    /// Settings this canvas renders with
    #[must_use]
    pub const fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Number of nodes registered
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges registered
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn options(&self) -> serde_json::Value {
        json!({
            "physics": {
                "enabled": self.settings.physics,
                "stabilization": { "iterations": 1000 }
            },
            "edges": {
                "arrows": { "to": { "enabled": self.settings.directed } },
                "smooth": { "type": "continuous" }
            },
            "interaction": { "hover": true }
        })
    }

    /// Render the full HTML document
    ///
    /// # Errors
    /// Returns an error if the data cannot be serialized or the template fails
    pub fn to_html(&self) -> Result<String, RenderError> {
        let page = NetworkPage {
            title: &self.settings.title,
            width: &self.settings.width,
            height: &self.settings.height,
            vis_js_url: self.settings.vis_js_url.trim(),
            graph_js: GRAPH_CANVAS_JS,
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            nodes_json: script_json(&self.nodes)?,
            edges_json: script_json(&self.edges)?,
            options_json: script_json(&self.options())?,
        };
        Ok(page.render()?)
    }
}

/// Serialize for embedding inside a `<script>` element
///
/// `<`, `>` and `&` only occur inside JSON strings, where their `\u` escapes
/// are equivalent, so a label cannot close the script tag.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    let raw = serde_json::to_string(value)?;
    Ok(raw
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

impl NetworkRenderer for VisNetwork {
    fn add_node(&mut self, id: NodeId, label: &str) -> Result<(), RenderError> {
        let node = VisNode {
            id,
            label: label.to_string(),
            title: label.to_string(),
            shape: "dot",
        };
        if let Some(&slot) = self.index.get(&id) {
            self.nodes[slot] = node;
        } else {
            self.index.insert(id, self.nodes.len());
            self.nodes.push(node);
        }
        Ok(())
    }

    fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<(), RenderError> {
        let missing = [source, target]
            .into_iter()
            .find(|id| !self.index.contains_key(id));
        if let Some(missing) = missing {
            if !self.settings.allow_dangling_edges {
                return Err(RenderError::DanglingEdge {
                    from: source,
                    to: target,
                    missing,
                });
            }
            if self.dangling.insert((source, target)) {
                warn!("Edge {source} -> {target} references unknown node {missing}; it will not be drawn");
            }
        }
        self.edges.push(VisEdge {
            from: source,
            to: target,
        });
        Ok(())
    }

    fn set_physics(&mut self, enabled: bool) {
        self.settings.physics = enabled;
    }

    fn export(&self, output_path: &Path) -> Result<(), RenderError> {
        let document = self.to_html()?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| RenderError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(output_path, document).map_err(|source| RenderError::Write {
            path: output_path.to_path_buf(),
            source,
        })
    }
}
