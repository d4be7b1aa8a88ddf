//! Library for `graphview`
//!
//! Loads a JSON graph description and renders it as a self-contained,
//! interactive HTML network page:
//!
//! ```no_run
//! use graphview::core::{loader, models, render};
//! use std::path::Path;
//!
//! let description = loader::load("graph.json")?;
//! let settings = render::RenderSettings::default();
//! let model = render::configure(models::build_model(description), &settings);
//! render::render_html(&model, &settings, Path::new("nx.html"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod logger;

pub use self::core::config;
pub use self::core::error::{ErrorKind, GraphError, RenderError};
pub use self::core::get_version;
