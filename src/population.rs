//! # Population
//!
//! One generation's worth of individuals. An [`Individual`] pairs a
//! chromosome with its cached fitness; a [`Population`] owns the individuals
//! of one generation index and derives the bookkeeping the engine needs: the
//! best individual for scalar runs, the current non-dominated front for
//! vector runs.
//!
//! Fitness evaluation happens exactly once per individual. Populations at or
//! above the configured parallel threshold are evaluated with rayon; smaller
//! ones sequentially, since the fork overhead outweighs the win.

use rayon::prelude::*;

use crate::chromosome::{Allele, Alphabet, Chromosome};
use crate::error::{EvolveError, Result};
use crate::fitness::{Challenge, Direction, Fitness};
use crate::rng::RandomNumberGenerator;
use crate::selection::nsga;

/// A chromosome paired with its cached fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<A: Allele> {
    chromosome: Chromosome<A>,
    fitness: Option<Fitness>,
}

impl<A: Allele> Individual<A> {
    /// Creates an unevaluated individual.
    pub fn new(chromosome: Chromosome<A>) -> Self {
        Self {
            chromosome,
            fitness: None,
        }
    }

    /// Returns the genotype.
    pub fn chromosome(&self) -> &Chromosome<A> {
        &self.chromosome
    }

    /// Returns the cached fitness, if this individual has been evaluated.
    pub fn fitness(&self) -> Option<&Fitness> {
        self.fitness.as_ref()
    }

    /// Returns the cached fitness or an error if the individual has not been
    /// evaluated yet.
    pub fn fitness_or_err(&self) -> Result<&Fitness> {
        self.fitness.as_ref().ok_or_else(|| {
            EvolveError::Evolution("individual has not been evaluated".to_string())
        })
    }
}

/// The ordered collection of individuals belonging to one generation.
#[derive(Debug, Clone)]
pub struct Population<A: Allele> {
    generation: usize,
    members: Vec<Individual<A>>,
}

impl<A: Allele> Population<A> {
    /// Creates a population from pre-built individuals.
    pub fn new(generation: usize, members: Vec<Individual<A>>) -> Self {
        Self {
            generation,
            members,
        }
    }

    /// Creates the random generation-0 population.
    pub fn random(
        size: usize,
        alphabet: &Alphabet<A>,
        chromosome_length: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let members = (0..size)
            .map(|_| Individual::new(Chromosome::random(alphabet, chromosome_length, rng)))
            .collect();
        Self {
            generation: 0,
            members,
        }
    }

    /// Returns the generation index of this population.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the individuals of this population.
    pub fn members(&self) -> &[Individual<A>] {
        &self.members
    }

    /// Returns the population size.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the population has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Evaluates every unevaluated individual against the challenge.
    ///
    /// Individuals that already carry a fitness are skipped, so repeated
    /// calls never re-score a chromosome. Evaluation runs in parallel when
    /// the number of pending individuals reaches `parallel_threshold`.
    ///
    /// # Errors
    ///
    /// Returns a `FitnessCalculation` error if the challenge fails, returns a
    /// fitness whose arity differs from its declared objectives, or produces
    /// a non-finite value. The first error aborts the evaluation.
    pub fn evaluate<C>(&mut self, challenge: &C, parallel_threshold: usize) -> Result<()>
    where
        C: Challenge<A>,
    {
        let arity = challenge.objectives().len();
        let mut pending: Vec<&mut Individual<A>> = self
            .members
            .iter_mut()
            .filter(|member| member.fitness.is_none())
            .collect();

        if pending.len() >= parallel_threshold {
            pending.into_par_iter().try_for_each(|member| {
                member.fitness = Some(checked_score(challenge, &member.chromosome, arity)?);
                Ok(())
            })
        } else {
            pending.iter_mut().try_for_each(|member| {
                member.fitness = Some(checked_score(challenge, &member.chromosome, arity)?);
                Ok(())
            })
        }
    }

    /// Returns the best individual by scalar fitness under the given
    /// direction.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` for an empty population and an `Evolution`
    /// error if any member is unevaluated or carries a vector fitness.
    pub fn best(&self, direction: Direction) -> Result<&Individual<A>> {
        if self.members.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        let mut best: Option<(&Individual<A>, f64)> = None;
        for member in &self.members {
            let value = member.fitness_or_err()?.scalar().ok_or_else(|| {
                EvolveError::Evolution(
                    "best individual is only defined for scalar fitness".to_string(),
                )
            })?;
            let oriented = direction.orient(value);
            match best {
                Some((_, incumbent)) if incumbent <= oriented => {}
                _ => best = Some((member, oriented)),
            }
        }
        // Non-empty population, so best is always set here.
        best.map(|(member, _)| member)
            .ok_or(EvolveError::EmptyPopulation)
    }

    /// Returns the current non-dominated front of this population.
    ///
    /// No member of the returned set dominates another member, under the
    /// dominance definition oriented by `directions`.
    pub fn non_dominated_front(&self, directions: &[Direction]) -> Result<Vec<&Individual<A>>> {
        if self.members.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        let oriented = self.oriented_objectives(directions)?;
        let fronts = nsga::non_dominated_sort(&oriented);
        Ok(fronts[0].iter().map(|&i| &self.members[i]).collect())
    }

    /// Collects the objective matrix of this population with every objective
    /// oriented to smaller-is-better.
    pub(crate) fn oriented_objectives(&self, directions: &[Direction]) -> Result<Vec<Vec<f64>>> {
        self.members
            .iter()
            .map(|member| {
                let fitness = member.fitness_or_err()?;
                if fitness.arity() != directions.len() {
                    return Err(EvolveError::FitnessCalculation(format!(
                        "fitness arity {} does not match {} declared objectives",
                        fitness.arity(),
                        directions.len()
                    )));
                }
                Ok(fitness
                    .objectives()
                    .iter()
                    .zip(directions)
                    .map(|(&value, direction)| direction.orient(value))
                    .collect())
            })
            .collect()
    }
}

fn checked_score<A, C>(challenge: &C, chromosome: &Chromosome<A>, arity: usize) -> Result<Fitness>
where
    A: Allele,
    C: Challenge<A>,
{
    let fitness = challenge.score(chromosome)?;
    if fitness.arity() != arity {
        return Err(EvolveError::FitnessCalculation(format!(
            "challenge declared {} objectives but scored {}",
            arity,
            fitness.arity()
        )));
    }
    if !fitness.is_finite() {
        return Err(EvolveError::FitnessCalculation(format!(
            "non-finite fitness encountered: {:?}",
            fitness
        )));
    }
    Ok(fitness)
}
