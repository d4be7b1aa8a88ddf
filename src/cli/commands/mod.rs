//! CLI command handlers for `graphview`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod inspect;
pub mod render;
