//! Generator configuration.
//!
//! This module provides [`GeneratorConfig`] and its builder, the validated
//! input from which a [`Generator`](crate::Generator) or the process-wide
//! default instance is initialised.

use crate::error::{Result, RngError};

/// Where a generator takes its initial seed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeedSource {
    /// Seed drawn from the operating system; differs on every run.
    #[default]
    Entropy,

    /// Seed taken from the configuration; every run is reproducible.
    Fixed,
}

/// Generator configuration.
///
/// Immutable once built. Use [`GeneratorConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use fate_core::{GeneratorConfig, SeedSource};
///
/// let config = GeneratorConfig::builder()
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.source(), SeedSource::Fixed);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GeneratorConfigBuilder"))]
pub struct GeneratorConfig {
    /// Seed source.
    source: SeedSource,
    /// Seed used when `source` is `Fixed`.
    seed: Option<u64>,
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the seed source.
    #[inline]
    pub fn source(&self) -> SeedSource {
        self.source
    }

    /// Returns the fixed seed, or `None` for entropy seeding.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        match self.source {
            SeedSource::Fixed => self.seed,
            SeedSource::Entropy => None,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if:
    /// - `source` is `Fixed` but no seed is set
    /// - `source` is `Entropy` but a seed is set
    pub fn validate(&self) -> Result<()> {
        match (self.source, self.seed) {
            (SeedSource::Fixed, None) => Err(RngError::InvalidConfig {
                name: "seed",
                reason: "must be specified for a fixed seed source".to_string(),
            }),
            (SeedSource::Entropy, Some(seed)) => Err(RngError::InvalidConfig {
                name: "seed",
                reason: format!("seed {} conflicts with entropy seed source", seed),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`GeneratorConfig`].
///
/// Setting a seed implies [`SeedSource::Fixed`]; leaving it unset gives
/// entropy seeding. Deserialised configurations go through the builder, so
/// they are validated the same way.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfigBuilder {
    source: Option<SeedSource>,
    seed: Option<u64>,
}

impl GeneratorConfigBuilder {
    /// Sets a fixed seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed; `None` leaves the builder unchanged.
    #[inline]
    pub fn seed_opt(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Sets the seed source explicitly.
    #[inline]
    pub fn source(mut self, source: SeedSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the source and the seed disagree.
    pub fn build(self) -> Result<GeneratorConfig> {
        let source = self.source.unwrap_or(match self.seed {
            Some(_) => SeedSource::Fixed,
            None => SeedSource::Entropy,
        });

        let config = GeneratorConfig {
            source,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<GeneratorConfigBuilder> for GeneratorConfig {
    type Error = RngError;

    fn try_from(builder: GeneratorConfigBuilder) -> Result<Self> {
        builder.build()
    }
}
