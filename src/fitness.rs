//! # Fitness Contract
//!
//! The [`Challenge`] trait is the pluggable fitness evaluator: a pure,
//! deterministic function from a chromosome to a [`Fitness`] value, together
//! with a declaration of how many objectives it scores and the optimization
//! [`Direction`] of each. Single- and multi-objective fitness share one
//! tagged representation instead of separate type hierarchies.
//!
//! ## Example
//!
//! ```rust
//! use evogen::chromosome::Chromosome;
//! use evogen::fitness::{Challenge, Direction, Fitness};
//! use evogen::error::Result;
//!
//! struct OnesCount;
//!
//! impl Challenge<u8> for OnesCount {
//!     fn objectives(&self) -> &[Direction] {
//!         &[Direction::Maximize]
//!     }
//!
//!     fn score(&self, chromosome: &Chromosome<u8>) -> Result<Fitness> {
//!         let ones = chromosome.genes().iter().filter(|&&g| g == 1).count();
//!         Ok(Fitness::Scalar(ones as f64))
//!     }
//! }
//! ```

use crate::chromosome::{Allele, Chromosome};
use crate::error::Result;

/// Per-objective optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Larger values are better.
    Maximize,
    /// Smaller values are better.
    Minimize,
}

impl Direction {
    /// Orients a raw objective value so that smaller is always better.
    ///
    /// Dominance checks and front sorting operate exclusively on oriented
    /// values, which keeps the comparison logic direction-free.
    pub fn orient(&self, value: f64) -> f64 {
        match self {
            Direction::Maximize => -value,
            Direction::Minimize => value,
        }
    }
}

/// A fitness score: either a single scalar or a vector of objective values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fitness {
    /// Single-objective score.
    Scalar(f64),
    /// Multi-objective score, one value per declared objective.
    Vector(Vec<f64>),
}

impl Fitness {
    /// Returns the scalar value, or `None` for a vector fitness.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Fitness::Scalar(value) => Some(*value),
            Fitness::Vector(_) => None,
        }
    }

    /// Returns the objective values as a slice, regardless of arity.
    pub fn objectives(&self) -> &[f64] {
        match self {
            Fitness::Scalar(value) => std::slice::from_ref(value),
            Fitness::Vector(values) => values,
        }
    }

    /// Returns the number of objectives this fitness scores.
    pub fn arity(&self) -> usize {
        self.objectives().len()
    }

    /// Returns `true` if every objective value is finite.
    pub fn is_finite(&self) -> bool {
        self.objectives().iter().all(|v| v.is_finite())
    }
}

/// The pluggable fitness evaluator.
///
/// Implementations must be pure: the score of a chromosome may not depend on
/// anything but the chromosome and the challenge's own read-only parameters.
/// This is what allows the engine to evaluate a whole generation in parallel
/// and to cache each individual's fitness.
pub trait Challenge<A: Allele>: Send + Sync {
    /// Declares the number of objectives and the direction of each.
    ///
    /// The returned slice must be non-empty and stable for the lifetime of a
    /// run; the arity of every [`Fitness`] returned by [`Challenge::score`]
    /// must match its length.
    fn objectives(&self) -> &[Direction];

    /// Scores one chromosome.
    ///
    /// # Errors
    ///
    /// An error here aborts the run: evaluation is assumed pure and
    /// error-free under normal problem definitions, so failures are fatal
    /// rather than retried.
    fn score(&self, chromosome: &Chromosome<A>) -> Result<Fitness>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orient_flips_maximization_only() {
        assert_eq!(Direction::Maximize.orient(3.0), -3.0);
        assert_eq!(Direction::Minimize.orient(3.0), 3.0);
    }

    #[test]
    fn test_scalar_accessors() {
        let fitness = Fitness::Scalar(0.25);
        assert_eq!(fitness.scalar(), Some(0.25));
        assert_eq!(fitness.objectives(), &[0.25]);
        assert_eq!(fitness.arity(), 1);
    }

    #[test]
    fn test_vector_accessors() {
        let fitness = Fitness::Vector(vec![110.0, 550.0]);
        assert_eq!(fitness.scalar(), None);
        assert_eq!(fitness.objectives(), &[110.0, 550.0]);
        assert_eq!(fitness.arity(), 2);
    }

    #[test]
    fn test_is_finite_detects_nan_and_infinity() {
        assert!(Fitness::Scalar(1.0).is_finite());
        assert!(!Fitness::Scalar(f64::NAN).is_finite());
        assert!(!Fitness::Vector(vec![1.0, f64::INFINITY]).is_finite());
    }
}
