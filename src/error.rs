//! # Error Types
//!
//! This module defines the error types used throughout the engine. Every
//! fallible operation returns the crate-wide [`Result`] alias so that errors
//! can be propagated with `?` and matched on by callers.
//!
//! ## Examples
//!
//! ```rust
//! use evogen::error::{EvolveError, Result};
//!
//! fn positive(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(EvolveError::Configuration(
//!             "population size must be positive".to_string(),
//!         ));
//!     }
//!     Ok(size)
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the engine.
#[derive(Error, Debug)]
pub enum EvolveError {
    /// Error that occurs when an invalid configuration is provided, such as a
    /// non-positive population size or a mutation rate outside `[0, 1]`.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an operation is attempted on an empty population.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when two chromosomes of different lengths are crossed.
    #[error("Length mismatch: cannot cross chromosomes of length {left} and {right}")]
    LengthMismatch {
        /// Length of the left-hand chromosome.
        left: usize,
        /// Length of the right-hand chromosome.
        right: usize,
    },

    /// Error that occurs when a selection strategy cannot produce parents.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a fitness evaluation fails or produces an
    /// invalid score. Evaluation is assumed pure, so this aborts the run.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when the evolution loop itself fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for engine operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `EvolveError`.
pub type Result<T> = std::result::Result<T, EvolveError>;
