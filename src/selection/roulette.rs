//! # RouletteWheelSelection
//!
//! Fitness-proportional selection. Each individual is replicated
//! `floor(fitness * scale)` times in the mating pool, so parents are drawn
//! with probability proportional to fitness. The scale constant is
//! historically the chromosome length.

use crate::chromosome::Allele;
use crate::error::{EvolveError, Result};
use crate::fitness::Direction;
use crate::population::Population;
use crate::selection::{MatingPool, SelectionStrategy};

/// A selection strategy that builds a fitness-proportional mating pool.
///
/// Requires scalar fitness. Individuals with fitness ≤ 0 contribute no
/// copies; if that leaves the pool empty (every fitness ≤ 0), the strategy
/// falls back to uniform sampling over the whole population. The fallback is
/// documented behavior, not an error, and it is what makes the strategy
/// usable for scalarized minimization problems whose fitness is a negated
/// cost.
///
/// # Examples
///
/// ```
/// use evogen::chromosome::{Alphabet, Chromosome};
/// use evogen::fitness::Direction;
/// use evogen::population::{Individual, Population};
/// use evogen::rng::RandomNumberGenerator;
/// use evogen::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// # use evogen::fitness::{Challenge, Fitness};
/// # use evogen::error::Result;
/// # struct Half;
/// # impl Challenge<u8> for Half {
/// #     fn objectives(&self) -> &[Direction] { &[Direction::Maximize] }
/// #     fn score(&self, _: &Chromosome<u8>) -> Result<Fitness> { Ok(Fitness::Scalar(0.5)) }
/// # }
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let alphabet = Alphabet::new(vec![0u8, 1u8]).unwrap();
/// let mut population = Population::random(4, &alphabet, 8, &mut rng);
/// population.evaluate(&Half, usize::MAX).unwrap();
///
/// let selection = RouletteWheelSelection::new(8.0);
/// let pool = selection
///     .mating_pool(&population, &[Direction::Maximize])
///     .unwrap();
/// // floor(0.5 * 8) = 4 copies of each of the 4 individuals
/// assert_eq!(pool.len(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheelSelection {
    /// Fixed scaling constant applied before flooring the copy count.
    scale: f64,
}

impl RouletteWheelSelection {
    /// Creates a roulette wheel selection with the given scale constant.
    ///
    /// For normalized fitness in `[0, 1]` the chromosome length is the
    /// customary choice.
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl<A> SelectionStrategy<A> for RouletteWheelSelection
where
    A: Allele,
{
    fn mating_pool(
        &self,
        population: &Population<A>,
        directions: &[Direction],
    ) -> Result<MatingPool<A>> {
        if population.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        if directions.len() != 1 {
            return Err(EvolveError::Selection(
                "roulette wheel selection requires a single objective".to_string(),
            ));
        }

        let mut pool = Vec::new();
        for member in population.members() {
            let fitness = member.fitness_or_err()?.scalar().ok_or_else(|| {
                EvolveError::Selection(
                    "roulette wheel selection requires scalar fitness".to_string(),
                )
            })?;
            let copies = (fitness * self.scale).floor();
            if copies >= 1.0 {
                for _ in 0..copies as usize {
                    pool.push(member.chromosome().clone());
                }
            }
        }

        // Degenerate case: every fitness ≤ 0 leaves the pool empty. Fall
        // back to uniform sampling over the whole population.
        if pool.is_empty() {
            pool = population
                .members()
                .iter()
                .map(|member| member.chromosome().clone())
                .collect();
        }

        MatingPool::new(pool)
    }
}
