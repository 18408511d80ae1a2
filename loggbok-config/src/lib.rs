//! # loggbok-config
//!
//! Configuration layer for the loggbok logging shim.
//!
//! Builds a ready-to-use [`Logging`](loggbok_core::Logging) context from
//! layered sources: built-in defaults, an optional YAML file, and
//! `LOGGBOK_*` environment variables. The debug-namespace list seeds the
//! registry at construction; everything stays switchable at runtime
//! through the registry afterwards.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use loggbok_core::{DebugRegistry, Logging};
use loggbok_sink::{ConsoleSink, NullSink, OutputSink, TracingSink};

mod error;
mod validation;

pub use error::ConfigError;

/// Which sink a configured context emits to.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// stdout/stderr console emission.
    #[default]
    Console,
    /// Discard everything.
    Null,
    /// Forward onto the `tracing` macros.
    Tracing,
}

/// Debug-gating configuration.
#[derive(Debug, Default, Serialize, Deserialize, Validate, Clone)]
pub struct DebugConfig {
    /// Enable debug output for every logger.
    #[serde(default)]
    pub all: bool,

    /// Namespaces with debug output enabled by name.
    #[serde(default)]
    #[validate(custom(function = validation::validate_namespace_list))]
    pub namespaces: Vec<String>,
}

/// Top-level logging configuration.
#[derive(Debug, Default, Serialize, Deserialize, Validate, Clone)]
pub struct LoggingConfig {
    /// Debug-gating state to seed the registry with.
    #[validate(nested)]
    pub debug: DebugConfig,

    /// Sink selection.
    #[serde(default)]
    pub sink: SinkKind,
}

impl LoggingConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values.
    /// 2. `config/loggbok.yaml`, if present.
    /// 3. `LOGGBOK_*` environment variables (`__` separates nesting, e.g.
    ///    `LOGGBOK_DEBUG__ALL=true`).
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(LoggingConfig::default()));

        if Path::new("config/loggbok.yaml").exists() {
            figment = figment.merge(Yaml::file("config/loggbok.yaml"));
        }

        figment
            .merge(Env::prefixed("LOGGBOK_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path for testing/validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("LOGGBOK_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Builds a registry seeded with this configuration's debug state.
    pub fn build_registry(&self) -> DebugRegistry {
        let registry = DebugRegistry::new();
        if self.debug.all {
            registry.enable_all();
        }
        for namespace in &self.debug.namespaces {
            registry.enable(namespace);
        }
        registry
    }

    /// Builds a full logging context: seeded registry plus the configured
    /// sink.
    pub fn build_logging(&self) -> Logging {
        let sink: Option<Arc<dyn OutputSink>> = match self.sink {
            SinkKind::Console => Some(Arc::new(ConsoleSink::new())),
            SinkKind::Null => Some(Arc::new(NullSink::new())),
            SinkKind::Tracing => Some(Arc::new(TracingSink::new())),
        };
        Logging::with_parts(Arc::new(self.build_registry()), sink)
    }
}
