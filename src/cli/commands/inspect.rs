//! Inspect command handler

use graphview::config::Config;
use graphview::core::loader::load;
use graphview::core::stats::GraphStats;
use graphview::{error, GraphError};
use std::path::Path;

/// Load the configured input and print its statistics.
///
/// # Errors
/// Returns the load error after logging it.
pub fn run(config: &Config) -> Result<(), GraphError> {
    let input = Path::new(&config.paths.input);
    let description = load(input).map_err(|e| {
        error!("Failed to load graph {}: {e}", input.display());
        e
    })?;

    let stats = GraphStats::from_description(&description);
    println!("\n=== {} ===", input.display());
    print!("{stats}");
    if !stats.is_closed() && !config.validation.allow_dangling_edges {
        println!("\nRendering will fail; pass --allow-dangling to keep these edges.");
    }
    Ok(())
}
