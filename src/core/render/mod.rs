//! Rendering of visualization models
//!
//! The drawing itself is delegated to a [`NetworkRenderer`]. The built-in
//! implementation is [`VisNetwork`], which writes a self-contained HTML page
//! with its drawing script inlined; tests substitute a recorder.

pub mod html;

use crate::core::config::Config;
use crate::core::error::RenderError;
use crate::core::models::{NodeId, VisualizationModel};
use crate::debug;
use std::path::Path;

pub use html::VisNetwork;

/// Default canvas edge length
pub const DEFAULT_CANVAS_SIZE: &str = "1500px";


/// Capability a network drawing backend must provide
pub trait NetworkRenderer {
    /// Register a node (re-registering an id replaces its label)
    ///
    /// # Errors
    /// Returns an error if the backend rejects the node
    fn add_node(&mut self, id: NodeId, label: &str) -> Result<(), RenderError>;

    /// Register a directed connection between two node ids
    ///
    /// # Errors
    /// Returns an error if the backend rejects the edge (e.g. unknown endpoint)
    fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<(), RenderError>;

    /// Toggle the force-directed physics simulation
    fn set_physics(&mut self, enabled: bool);

    /// Write the finished artifact
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn export(&self, output_path: &Path) -> Result<(), RenderError>;
}

/// Presentation settings for a rendered network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Canvas width as a CSS length
    pub width: String,
    /// Canvas height as a CSS length
    pub height: String,
    /// Enable the physics simulation
    pub physics: bool,
    /// Draw arrowheads on edges
    pub directed: bool,
    /// Page title
    pub title: String,
    /// Script URL for vis-network; empty inlines the built-in renderer
    pub vis_js_url: String,
    /// Embed edges to unknown nodes instead of failing
    pub allow_dangling_edges: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE.to_string(),
            height: DEFAULT_CANVAS_SIZE.to_string(),
            physics: true,
            directed: false,
            title: "graphview".to_string(),
            vis_js_url: String::new(),
            allow_dangling_edges: false,
        }
    }
}

impl From<&Config> for RenderSettings {
    /// Take settings from config, keeping defaults for an empty size or title
    fn from(config: &Config) -> Self {
        let defaults = Self::default();
        let or_default = |value: &str, fallback: String| {
            if value.trim().is_empty() {
                fallback
            } else {
                value.to_string()
            }
        };
        Self {
            width: or_default(&config.render.width, defaults.width),
            height: or_default(&config.render.height, defaults.height),
            physics: config.render.physics,
            directed: config.render.directed,
            title: or_default(&config.render.title, defaults.title),
            vis_js_url: config.render.vis_js_url.trim().to_string(),
            allow_dangling_edges: config.validation.allow_dangling_edges,
        }
    }
}

/// Apply rendering configuration to a built model
#[must_use]
pub fn configure(mut model: VisualizationModel, settings: &RenderSettings) -> VisualizationModel {
    model.set_physics(settings.physics);
    model
}

/// Feed a model into a renderer and export it once
///
/// All nodes are registered before any edge.
///
/// # Errors
/// Returns the first error raised by the renderer
pub fn render<R: NetworkRenderer + ?Sized>(
    model: &VisualizationModel,
    renderer: &mut R,
    output_path: &Path,
) -> Result<(), RenderError> {
    for node in model.nodes() {
        renderer.add_node(node.id, &node.label)?;
    }
    for edge in model.edges() {
        renderer.add_edge(edge.source, edge.target)?;
    }
    renderer.set_physics(model.physics());
    debug!(
        "Exporting {} nodes and {} edges to {}",
        model.node_count(),
        model.edge_count(),
        output_path.display()
    );
    renderer.export(output_path)
}

/// Render a model to an HTML file with [`VisNetwork`]
///
/// # Errors
/// Returns an error on a rejected dangling edge, a template failure, or a write failure
pub fn render_html(
    model: &VisualizationModel,
    settings: &RenderSettings,
    output_path: &Path,
) -> Result<(), RenderError> {
    let mut network = VisNetwork::new(settings.clone());
    render(model, &mut network, output_path)
}
