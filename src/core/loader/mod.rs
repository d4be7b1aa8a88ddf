//! Input loading for graph descriptions

pub mod json_parser;

pub use json_parser::{load, load_reader, load_str};
