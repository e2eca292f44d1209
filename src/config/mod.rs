//! Run configuration with YAML schema and validation.
//!
//! The program needs no configuration to run; everything here has a default.
//! A YAML file can still override the cadence, the seed, or the strand glyph,
//! with the same load-then-validate shape used for any config the crate ever
//! grows.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HelixError, HelixResult};

/// Top-level run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Delay between frames in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Clear the screen every this many frames.
    #[serde(default = "default_clear_interval")]
    pub clear_interval: u64,

    /// Seed override. When unset, a hardware-derived seed is used.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Strand glyph override. When unset, the glyph follows the detected
    /// distribution and the time-of-day brightness.
    #[serde(default)]
    pub strand: Option<char>,
}

const fn default_tick_ms() -> u64 {
    100
}

const fn default_clear_interval() -> u64 {
    50
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            clear_interval: default_clear_interval(),
            seed: None,
            strand: None,
        }
    }
}

impl RunConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> HelixResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> HelixResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> HelixResult<()> {
        if self.tick_ms == 0 {
            return Err(HelixError::config("tick_ms must be positive"));
        }
        if self.tick_ms > 10_000 {
            return Err(HelixError::config(
                "tick_ms should not exceed 10000 (10 seconds per frame)",
            ));
        }
        if self.clear_interval == 0 {
            return Err(HelixError::config("clear_interval must be positive"));
        }
        Ok(())
    }
}

/// Builder for [`RunConfig`].
#[derive(Debug, Default)]
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    /// Set the frame delay in milliseconds.
    #[must_use]
    pub fn tick_ms(mut self, tick_ms: u64) -> Self {
        self.config.tick_ms = tick_ms;
        self
    }

    /// Set the clear cadence in frames.
    #[must_use]
    pub fn clear_interval(mut self, clear_interval: u64) -> Self {
        self.config.clear_interval = clear_interval;
        self
    }

    /// Override the seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Force a specific strand glyph.
    #[must_use]
    pub fn strand(mut self, strand: char) -> Self {
        self.config.strand = Some(strand);
        self
    }

    /// Build the configuration, validating constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if a constraint is violated.
    pub fn build(self) -> HelixResult<RunConfig> {
        self.config.validate_semantic()?;
        Ok(self.config)
    }
}
