//! Configuration loader for the xmlnodes binary.
//!
//! `defaults/xmlnodes.default.toml` is embedded so the documented defaults and runtime
//! behavior stay in sync. Callers layer user files and command line overrides on top via
//! [`Loader`] before deserializing into [`XmlNodesConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::xml::formats::{JsonFormatter, TreevizFormatter};

const DEFAULT_TOML: &str = include_str!("../../defaults/xmlnodes.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct XmlNodesConfig {
    pub output: OutputConfig,
    pub treeviz: TreevizConfig,
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// What the binary prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Treeviz,
    Json,
    Yaml,
    /// The raw token stream, one token per line
    Tokens,
}

impl OutputFormat {
    /// Registry name of the document format; `None` for the token dump
    pub fn formatter_name(self) -> Option<&'static str> {
        match self {
            OutputFormat::Treeviz => Some("treeviz"),
            OutputFormat::Json => Some("json"),
            OutputFormat::Yaml => Some("yaml"),
            OutputFormat::Tokens => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub show_line_numbers: bool,
    pub label_width: usize,
}

impl From<&TreevizConfig> for TreevizFormatter {
    fn from(config: &TreevizConfig) -> Self {
        TreevizFormatter {
            show_line_numbers: config.show_line_numbers,
            label_width: config.label_width,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

impl From<&JsonConfig> for JsonFormatter {
    fn from(config: &JsonConfig) -> Self {
        JsonFormatter {
            pretty: config.pretty,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<XmlNodesConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<XmlNodesConfig, ConfigError> {
    Loader::new().build()
}
