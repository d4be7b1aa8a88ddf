//! Render command handler
//!
//! Loads the graph description, builds and configures the model, and writes
//! the HTML network.

use graphview::config::Config;
use graphview::core::pipeline;
use graphview::core::render::RenderSettings;
use graphview::{error, info, verbose, GraphError};
use std::path::PathBuf;

/// Run the render command with paths and settings taken from `config`.
///
/// # Errors
/// Returns the pipeline error after logging it.
pub fn run(config: &Config) -> Result<(), GraphError> {
    let input = PathBuf::from(&config.paths.input);
    let output = PathBuf::from(&config.paths.output);
    let settings = RenderSettings::from(config);

    verbose!(
        "Rendering {} → {} ({} × {}, physics {})",
        input.display(),
        output.display(),
        settings.width,
        settings.height,
        if settings.physics { "on" } else { "off" }
    );

    let summary = pipeline::run(&input, &output, &settings).map_err(|e| {
        error!("Render failed for {}: {e}", input.display());
        e
    })?;

    println!("✓ Network generated: {}", summary.output.display());
    println!("  {} nodes, {} edges", summary.nodes, summary.edges);
    if summary.duplicate_ids > 0 {
        println!(
            "  {} duplicate node ids (last label kept)",
            summary.duplicate_ids
        );
    }
    if summary.dangling_edges > 0 {
        println!(
            "⚠️  {} edges reference undeclared nodes and will not be drawn",
            summary.dangling_edges
        );
    }
    info!("Render complete: {}", summary.output.display());
    Ok(())
}
