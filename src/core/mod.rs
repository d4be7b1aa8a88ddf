//! Core graph loading and rendering functionality

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod stats;

/// Returns the current version of the `graphview` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
