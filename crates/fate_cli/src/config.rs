//! CLI configuration management
//!
//! Loads an optional TOML file, then lets command-line flags and the
//! `FATE_SEED` environment variable override it.
//!
//! ```toml
//! trials = 50000
//!
//! [generator]
//! seed = 42
//! ```

use std::path::Path;

use fate_core::GeneratorConfig;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, Result};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "fate.toml";

/// Default sample count for `fate histogram`.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Contents of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Generator seeding.
    pub generator: GeneratorConfig,
    /// Samples per histogram.
    pub trials: usize,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            trials: DEFAULT_TRIALS,
        }
    }
}

impl FileConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(CliError::ConfigNotFound(path.display().to_string()));
            }
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => {
                debug!("no configuration file, using defaults");
                return Ok(Self::default());
            }
        };

        debug!(path = %path.display(), "loading configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Applies a seed override from the command line or environment.
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Result<Self> {
        if let Some(seed) = seed {
            self.generator = GeneratorConfig::builder().seed(seed).build()?;
        }
        Ok(self)
    }
}
