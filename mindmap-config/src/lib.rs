//! Shared configuration loader for the mindmap toolchain.
//!
//! `defaults/mindmap.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`MindmapConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mindmap_babel::formats::freemind::FreemindFormat;
use mindmap_babel::formats::plantuml::PlantumlFormat;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mindmap.default.toml");

/// Top-level configuration consumed by mindmap applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MindmapConfig {
    pub convert: ConvertConfig,
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub freemind: FreemindConfig,
    pub plantuml: PlantumlConfig,
}

/// Knobs for the Freemind XML side.
#[derive(Debug, Clone, Deserialize)]
pub struct FreemindConfig {
    /// Version attribute written on the `<map>` element.
    pub version: String,
}

/// Knobs for the PlantUML side.
#[derive(Debug, Clone, Deserialize)]
pub struct PlantumlConfig {
    /// Reject unrecognized lines instead of skipping them.
    pub strict: bool,
}

impl From<&FreemindConfig> for FreemindFormat {
    fn from(config: &FreemindConfig) -> Self {
        FreemindFormat::with_version(config.version.clone())
    }
}

impl From<FreemindConfig> for FreemindFormat {
    fn from(config: FreemindConfig) -> Self {
        FreemindFormat::with_version(config.version)
    }
}

impl From<&PlantumlConfig> for PlantumlFormat {
    fn from(config: &PlantumlConfig) -> Self {
        PlantumlFormat::with_strict(config.strict)
    }
}

impl From<PlantumlConfig> for PlantumlFormat {
    fn from(config: PlantumlConfig) -> Self {
        PlantumlFormat::with_strict(config.strict)
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MindmapConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MindmapConfig, ConfigError> {
    Loader::new().build()
}
