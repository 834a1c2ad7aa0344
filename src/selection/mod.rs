//! # Selection Strategies
//!
//! A [`SelectionStrategy`] turns an evaluated population into a
//! [`MatingPool`]: a transient multiset of chromosomes from which the engine
//! draws parent pairs with replacement. Two strategies are provided:
//! fitness-proportional selection ([`RouletteWheelSelection`]) for scalar
//! fitness and non-dominated-sort plus crowding-distance selection
//! ([`NonDominatedSelection`]) for multi-objective fitness.

pub mod nsga;
pub mod roulette;

use std::fmt::Debug;

use crate::chromosome::{Allele, Chromosome};
use crate::error::{EvolveError, Result};
use crate::fitness::Direction;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

pub use nsga::NonDominatedSelection;
pub use roulette::RouletteWheelSelection;

/// Trait for selection strategies.
///
/// A strategy inspects one evaluated population and produces the mating pool
/// used to draw parents for every crossover event of that generation. The
/// pool exists only for the duration of one selection step.
pub trait SelectionStrategy<A>: Debug + Send + Sync
where
    A: Allele,
{
    /// Builds the mating pool for one generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty, if any member is
    /// unevaluated, or if the strategy cannot operate on the declared
    /// objectives (e.g. roulette selection over vector fitness).
    fn mating_pool(
        &self,
        population: &Population<A>,
        directions: &[Direction],
    ) -> Result<MatingPool<A>>;
}

/// A transient multiset of chromosomes drawn from one population, with
/// multiplicity decided by the selection strategy.
#[derive(Debug, Clone)]
pub struct MatingPool<A: Allele> {
    chromosomes: Vec<Chromosome<A>>,
}

impl<A: Allele> MatingPool<A> {
    /// Creates a pool from the given chromosomes.
    ///
    /// # Errors
    ///
    /// Returns a `Selection` error for an empty pool; strategies fall back to
    /// uniform sampling before ever constructing one.
    pub fn new(chromosomes: Vec<Chromosome<A>>) -> Result<Self> {
        if chromosomes.is_empty() {
            return Err(EvolveError::Selection(
                "mating pool must not be empty".to_string(),
            ));
        }
        Ok(Self { chromosomes })
    }

    /// Returns the pool size, counting multiplicity.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Returns `true` if the pool is empty. Construction forbids this.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Draws one parent uniformly at random, with replacement.
    pub fn draw(&self, rng: &mut RandomNumberGenerator) -> &Chromosome<A> {
        &self.chromosomes[rng.index(self.chromosomes.len())]
    }
}
