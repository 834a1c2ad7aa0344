//! # EngineConfig
//!
//! Configuration for one evolution run: population size, mutation rate,
//! termination policy and the parallel evaluation threshold. Construction
//! validates eagerly, so an invalid configuration fails at build time rather
//! than mid-run.
//!
//! ## Example
//!
//! ```rust
//! use evogen::engine::{EngineConfig, Termination};
//!
//! let config = EngineConfig::builder()
//!     .population_size(100)
//!     .mutation_rate(0.01)
//!     .termination(Termination::FixedGenerations(200))
//!     .build()
//!     .unwrap();
//! assert_eq!(config.population_size(), 100);
//! ```

use crate::engine::termination::Termination;
use crate::error::{EvolveError, Result};

/// Configuration options for the evolution engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    population_size: usize,
    mutation_rate: f64,
    termination: Termination,
    /// Minimum number of pending evaluations before rayon is used.
    parallel_threshold: usize,
}

impl EngineConfig {
    /// Returns a builder for constructing an `EngineConfig`.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Returns the constant population size.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Returns the per-gene mutation probability.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Returns the termination policy governing the run.
    pub fn termination(&self) -> &Termination {
        &self.termination
    }

    /// Returns the minimum number of pending evaluations processed in
    /// parallel.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.01,
            termination: Termination::FixedGenerations(100),
            parallel_threshold: 1000,
        }
    }
}

/// Builder for [`EngineConfig`].
///
/// Provides a fluent interface; `build` performs the validation.
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    termination: Option<Termination>,
    parallel_threshold: Option<usize>,
}

impl EngineConfigBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the termination policy.
    pub fn termination(mut self, value: Termination) -> Self {
        self.termination = Some(value);
        self
    }

    /// Sets the parallel evaluation threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the population size is zero or the
    /// mutation rate lies outside `[0, 1]`.
    pub fn build(self) -> Result<EngineConfig> {
        let defaults = EngineConfig::default();
        let config = EngineConfig {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            termination: self.termination.unwrap_or(defaults.termination),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        };

        if config.population_size == 0 {
            return Err(EvolveError::Configuration(
                "population size must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&config.mutation_rate) {
            return Err(EvolveError::Configuration(format!(
                "mutation rate must be in [0, 1], got {}",
                config.mutation_rate
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_applies_defaults() {
        let config = EngineConfig::builder().build().unwrap();
        assert_eq!(config.population_size(), 100);
        assert_eq!(config.mutation_rate(), 0.01);
        assert_eq!(config.parallel_threshold(), 1000);
    }

    #[test]
    fn test_zero_population_size_is_rejected() {
        let result = EngineConfig::builder().population_size(0).build();
        match result {
            Err(EvolveError::Configuration(msg)) => {
                assert!(msg.contains("population size"));
            }
            _ => panic!("expected Configuration error"),
        }
    }

    #[test]
    fn test_mutation_rate_outside_unit_interval_is_rejected() {
        assert!(EngineConfig::builder().mutation_rate(-0.01).build().is_err());
        assert!(EngineConfig::builder().mutation_rate(1.01).build().is_err());
        assert!(EngineConfig::builder().mutation_rate(1.0).build().is_ok());
    }
}
