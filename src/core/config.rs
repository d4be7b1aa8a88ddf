//! Configuration module for `graphview`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path-like values
const DIR_VARIABLE: &str = "$GRAPHVIEW";

const fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Canvas width as a CSS length (e.g. `1500px`)
    #[serde(default)]
    pub width: String,
    /// Canvas height as a CSS length
    #[serde(default)]
    pub height: String,
    /// Enable the force-directed physics simulation
    #[serde(default = "default_true")]
    pub physics: bool,
    /// Draw arrowheads on edges
    #[serde(default)]
    pub directed: bool,
    /// Title of the generated page
    #[serde(default)]
    pub title: String,
    /// Script URL for vis-network; empty keeps the page self-contained
    #[serde(default)]
    pub vis_js_url: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: String::new(),
            height: String::new(),
            physics: true,
            directed: false,
            title: String::new(),
            vis_js_url: String::new(),
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Graph description read when no input is given
    #[serde(default)]
    pub input: String,
    /// HTML file written when no output is given
    #[serde(default)]
    pub output: String,
}

/// Input validation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Embed edges to undeclared nodes instead of failing the render
    #[serde(default)]
    pub allow_dangling_edges: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override canvas width
    pub width: Option<String>,
    /// Override canvas height
    pub height: Option<String>,
    /// Override physics toggle
    pub physics: Option<bool>,
    /// Override arrowheads
    pub directed: Option<bool>,
    /// Override page title
    pub title: Option<String>,
    /// Override default input path
    pub input: Option<String>,
    /// Override default output path
    pub output: Option<String>,
    /// Override dangling edge policy
    pub allow_dangling_edges: Option<bool>,
}

/// Fill `target` from `default` when it is empty. Returns `true` if it changed.
fn fill_empty(target: &mut String, default: &str) -> bool {
    if target.is_empty() && !default.is_empty() {
        default.clone_into(target);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$GRAPHVIEW` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/graphview`
    /// - macOS: `~/Library/Application Support/graphview`
    /// - Windows: `%APPDATA%\graphview`
    #[must_use]
    pub fn get_graphview_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("graphview")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled; booleans keep whatever the file (or its serde default) says.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let merged = [
            fill_empty(&mut self.logging.level, &defaults.logging.level),
            fill_empty(&mut self.logging.file, &defaults.logging.file),
            fill_empty(&mut self.render.width, &defaults.render.width),
            fill_empty(&mut self.render.height, &defaults.render.height),
            fill_empty(&mut self.render.title, &defaults.render.title),
            fill_empty(&mut self.paths.input, &defaults.paths.input),
            fill_empty(&mut self.paths.output, &defaults.paths.output),
        ];
        merged.contains(&true)
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the configuration file is not touched.
    /// Only non-`None` values replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     physics: Some(false),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(width) = &overrides.width {
            self.render.width.clone_from(width);
        }
        if let Some(height) = &overrides.height {
            self.render.height.clone_from(height);
        }
        if let Some(physics) = overrides.physics {
            self.render.physics = physics;
        }
        if let Some(directed) = overrides.directed {
            self.render.directed = directed;
        }
        if let Some(title) = &overrides.title {
            self.render.title.clone_from(title);
        }

        if let Some(input) = &overrides.input {
            self.paths.input.clone_from(input);
        }
        if let Some(output) = &overrides.output {
            self.paths.output.clone_from(output);
        }

        if let Some(allow) = overrides.allow_dangling_edges {
            self.validation.allow_dangling_edges = allow;
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_graphview_dir`](Self::get_graphview_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_graphview_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GRAPHVIEW` to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_graphview_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$GRAPHVIEW` is expanded in
    /// the log file and path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.input = Self::expand_variables(&config.paths.input);
        config.paths.output = Self::expand_variables(&config.paths.output);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled in and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - File exists: load it, merge missing fields from defaults, save if anything was added.
    /// - First run: create the config directory and write the defaults.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory cannot
    /// be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `width`, `height`, `physics`,
    /// `directed`, `title`, `vis_js_url`, `input`, `output`,
    /// `allow_dangling_edges`. Underscores may be written as dashes.
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "width" => Some(self.render.width.clone()),
            "height" => Some(self.render.height.clone()),
            "physics" => Some(self.render.physics.to_string()),
            "directed" => Some(self.render.directed.to_string()),
            "title" => Some(self.render.title.clone()),
            "vis_js_url" | "vis-js-url" => Some(self.render.vis_js_url.clone()),
            "input" => Some(self.paths.input.clone()),
            "output" => Some(self.paths.output.clone()),
            "allow_dangling_edges" | "allow-dangling-edges" => {
                Some(self.validation.allow_dangling_edges.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Boolean keys (`verbose`, `physics`, `directed`, `allow_dangling_edges`)
    /// accept `true`/`false`; `level` must be a known log level. Call
    /// [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let parse_bool = |value: &str| {
            value
                .parse::<bool>()
                .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
        };
        match key {
            "level" => {
                let level = value.parse::<crate::logger::Level>()?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool(value)?,
            "width" => self.render.width = value.to_string(),
            "height" => self.render.height = value.to_string(),
            "physics" => self.render.physics = parse_bool(value)?,
            "directed" => self.render.directed = parse_bool(value)?,
            "title" => self.render.title = value.to_string(),
            "vis_js_url" | "vis-js-url" => self.render.vis_js_url = value.to_string(),
            "input" => self.paths.input = value.to_string(),
            "output" => self.paths.output = value.to_string(),
            "allow_dangling_edges" | "allow-dangling-edges" => {
                self.validation.allow_dangling_edges = parse_bool(value)?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "width" => self.render.width.clone_from(&defaults.render.width),
            "height" => self.render.height.clone_from(&defaults.render.height),
            "physics" => self.render.physics = defaults.render.physics,
            "directed" => self.render.directed = defaults.render.directed,
            "title" => self.render.title.clone_from(&defaults.render.title),
            "vis_js_url" | "vis-js-url" => self
                .render
                .vis_js_url
                .clone_from(&defaults.render.vis_js_url),
            "input" => self.paths.input.clone_from(&defaults.paths.input),
            "output" => self.paths.output.clone_from(&defaults.paths.output),
            "allow_dangling_edges" | "allow-dangling-edges" => {
                self.validation.allow_dangling_edges = defaults.validation.allow_dangling_edges;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[render]")?;
        writeln!(f, "  width = \"{}\"", self.render.width)?;
        writeln!(f, "  height = \"{}\"", self.render.height)?;
        writeln!(f, "  physics = {}", self.render.physics)?;
        writeln!(f, "  directed = {}", self.render.directed)?;
        writeln!(f, "  title = \"{}\"", self.render.title)?;
        writeln!(f, "  vis_js_url = \"{}\"", self.render.vis_js_url)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  input = \"{}\"", self.paths.input)?;
        writeln!(f, "  output = \"{}\"", self.paths.output)?;

        writeln!(f, "\n[validation]")?;
        writeln!(
            f,
            "  allow_dangling_edges = {}",
            self.validation.allow_dangling_edges
        )?;

        Ok(())
    }
}
