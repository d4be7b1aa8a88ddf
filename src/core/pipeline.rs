//! End-to-end pipeline: load → build model → configure → render

use crate::core::error::Result;
use crate::core::loader::load;
use crate::core::models::build_model;
use crate::core::render::{configure, render_html, RenderSettings};
use crate::core::stats::GraphStats;
use crate::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Outcome of a successful pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Where the artifact was written
    pub output: PathBuf,
    /// Distinct nodes rendered
    pub nodes: usize,
    /// Edges rendered
    pub edges: usize,
    /// Ids that were declared more than once
    pub duplicate_ids: usize,
    /// Edges passed through with an unknown endpoint
    pub dangling_edges: usize,
}

/// Render the graph described in `input` to an HTML file at `output`
///
/// Nothing is written, and no directory created, unless loading and edge
/// validation succeed. The output's parent directory is created when missing.
///
/// # Errors
/// Returns the first parse, schema, or render error encountered.
pub fn run(input: &Path, output: &Path, settings: &RenderSettings) -> Result<RenderSummary> {
    let description = load(input)?;
    let stats = GraphStats::from_description(&description);
    info!(
        "Graph loaded: {} ({} node entries, {} edges)",
        input.display(),
        stats.node_entries,
        stats.edge_count
    );
    for id in &stats.duplicate_ids {
        warn!("Node id {id} is declared more than once; keeping the last label");
    }

    let model = configure(build_model(description), settings);
    debug!(
        "Model built: {} nodes, {} edges, physics {}",
        model.node_count(),
        model.edge_count(),
        model.physics()
    );

    render_html(&model, settings, output)?;
    info!("Network exported to: {}", output.display());

    Ok(RenderSummary {
        output: output.to_path_buf(),
        nodes: model.node_count(),
        edges: model.edge_count(),
        duplicate_ids: stats.duplicate_ids.len(),
        dangling_edges: stats.dangling_edges.len(),
    })
}
