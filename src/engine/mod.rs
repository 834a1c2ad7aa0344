//! # Evolution Engine
//!
//! The [`Engine`] drives the generation loop: evaluate, bookkeeping,
//! terminate-check, select, vary, evaluate again. It owns one population per
//! generation and nothing is shared across runs; randomness comes from the
//! caller-supplied [`RandomNumberGenerator`], so seeded runs are
//! reproducible.
//!
//! Single-objective runs track the best individual and the generation at
//! which it was recorded; multi-objective runs maintain a [`ParetoArchive`]
//! across the whole run instead. Progress is reported through an observer
//! callback invoked once per generation; the callback is a side channel with
//! no effect on control flow.
//!
//! ## Example
//!
//! ```rust
//! use evogen::engine::{Encoding, Engine, EngineConfig, EvolutionOutcome, Termination};
//! use evogen::problems::text::TextMatch;
//! use evogen::rng::RandomNumberGenerator;
//! use evogen::selection::RouletteWheelSelection;
//!
//! let challenge = TextMatch::new("to be").unwrap();
//! let encoding = Encoding::new(challenge.alphabet().clone(), challenge.target_len()).unwrap();
//! let config = EngineConfig::builder()
//!     .population_size(50)
//!     .mutation_rate(0.02)
//!     .termination(Termination::FixedGenerations(30))
//!     .build()
//!     .unwrap();
//! let engine = Engine::new(encoding, challenge, RouletteWheelSelection::new(5.0), config).unwrap();
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! match engine.run(&mut rng).unwrap() {
//!     EvolutionOutcome::Best(best) => assert!((0.0..=1.0).contains(&best.fitness)),
//!     EvolutionOutcome::Pareto(_) => unreachable!(),
//! }
//! ```

pub mod config;
pub mod termination;

use tracing::{debug, info};

use crate::chromosome::{Allele, Alphabet, Chromosome};
use crate::error::{EvolveError, Result};
use crate::fitness::Challenge;
use crate::pareto::{ArchiveEntry, ParetoArchive};
use crate::population::{Individual, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use termination::{RunLedger, Termination};

/// The genotype encoding of one problem: the gene alphabet and the fixed
/// chromosome length.
#[derive(Debug, Clone)]
pub struct Encoding<A: Allele> {
    alphabet: Alphabet<A>,
    length: usize,
}

impl<A: Allele> Encoding<A> {
    /// Creates an encoding.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `length` is zero.
    pub fn new(alphabet: Alphabet<A>, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(EvolveError::Configuration(
                "chromosome length must be positive".to_string(),
            ));
        }
        Ok(Self { alphabet, length })
    }

    /// Returns the gene alphabet.
    pub fn alphabet(&self) -> &Alphabet<A> {
        &self.alphabet
    }

    /// Returns the fixed chromosome length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Per-generation progress handed to the observer callback.
#[derive(Debug)]
pub enum Progress<'a, A: Allele> {
    /// Single-objective runs report the generation's best individual.
    Best {
        /// Best scalar fitness of the generation.
        fitness: f64,
        /// The individual carrying that fitness.
        individual: &'a Individual<A>,
    },
    /// Multi-objective runs report the generation's non-dominated front.
    Front {
        /// Members of the current front.
        members: Vec<&'a Individual<A>>,
    },
}

/// The best individual of a single-objective run.
#[derive(Debug, Clone, PartialEq)]
pub struct BestIndividual<A: Allele> {
    /// The genotype.
    pub chromosome: Chromosome<A>,
    /// Its scalar fitness.
    pub fitness: f64,
    /// The generation at which it was first recorded.
    pub generation: usize,
}

/// The structured result of one run.
#[derive(Debug, Clone)]
pub enum EvolutionOutcome<A: Allele> {
    /// Single-objective result: the best individual over the whole run.
    Best(BestIndividual<A>),
    /// Multi-objective result: the Pareto archive, sorted by the first
    /// objective ascending.
    Pareto(Vec<ArchiveEntry<A>>),
}

/// Drives the evolution of one problem configuration.
#[derive(Debug, Clone)]
pub struct Engine<A, C, S>
where
    A: Allele,
    C: Challenge<A>,
    S: SelectionStrategy<A>,
{
    encoding: Encoding<A>,
    challenge: C,
    selection: S,
    config: EngineConfig,
}

impl<A, C, S> Engine<A, C, S>
where
    A: Allele,
    C: Challenge<A>,
    S: SelectionStrategy<A>,
{
    /// Creates a new engine.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the challenge declares no
    /// objectives. The config itself is validated by its builder.
    pub fn new(encoding: Encoding<A>, challenge: C, selection: S, config: EngineConfig) -> Result<Self> {
        if challenge.objectives().is_empty() {
            return Err(EvolveError::Configuration(
                "challenge must declare at least one objective".to_string(),
            ));
        }
        Ok(Self {
            encoding,
            challenge,
            selection,
            config,
        })
    }

    /// Runs the evolution to termination without progress reporting.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<EvolutionOutcome<A>> {
        self.run_with_observer(rng, |_, _| {})
    }

    /// Runs the evolution to termination, invoking `observer` once per
    /// generation with the generation index and the best individual or
    /// current front. The observer's effects are invisible to the engine.
    ///
    /// # Errors
    ///
    /// Propagates fitness evaluation failures and selection errors; either
    /// aborts the run.
    pub fn run_with_observer<F>(
        &self,
        rng: &mut RandomNumberGenerator,
        mut observer: F,
    ) -> Result<EvolutionOutcome<A>>
    where
        F: FnMut(usize, Progress<'_, A>),
    {
        let directions = self.challenge.objectives();
        let multi_objective = directions.len() > 1;
        let threshold = self.config.parallel_threshold();

        info!(
            population_size = self.config.population_size(),
            objectives = directions.len(),
            "starting evolution run"
        );

        let mut population = Population::random(
            self.config.population_size(),
            self.encoding.alphabet(),
            self.encoding.length(),
            rng,
        );
        population.evaluate(&self.challenge, threshold)?;

        let mut ledger = RunLedger::new(directions[0]);
        let mut archive = ParetoArchive::new(directions.to_vec());
        let mut best: Option<BestIndividual<A>> = None;

        loop {
            let generation = population.generation();

            if multi_objective {
                let front = population.non_dominated_front(directions)?;
                let mut entries = Vec::with_capacity(front.len());
                for member in &front {
                    entries.push(ArchiveEntry {
                        chromosome: member.chromosome().clone(),
                        objectives: member.fitness_or_err()?.objectives().to_vec(),
                    });
                }
                let changed = archive.merge(entries);
                ledger.record_front(changed);
                debug!(
                    generation,
                    front_size = front.len(),
                    archive_size = archive.len(),
                    "generation complete"
                );
                observer(generation, Progress::Front { members: front });
            } else {
                let champion = population.best(directions[0])?;
                let fitness = champion.fitness_or_err()?.scalar().ok_or_else(|| {
                    EvolveError::Evolution(
                        "single-objective run produced vector fitness".to_string(),
                    )
                })?;
                let improved = match &best {
                    Some(incumbent) => {
                        directions[0].orient(fitness) < directions[0].orient(incumbent.fitness)
                    }
                    None => true,
                };
                if improved {
                    best = Some(BestIndividual {
                        chromosome: champion.chromosome().clone(),
                        fitness,
                        generation,
                    });
                }
                ledger.record_scalar(fitness);
                debug!(generation, best_fitness = fitness, "generation complete");
                observer(
                    generation,
                    Progress::Best {
                        fitness,
                        individual: champion,
                    },
                );
            }

            if self.config.termination().should_stop(&ledger) {
                info!(generation, "termination policy satisfied");
                break;
            }

            population = self.next_generation(&population, rng)?;
            ledger.advance();
        }

        if multi_objective {
            Ok(EvolutionOutcome::Pareto(archive.into_sorted()))
        } else {
            best.map(EvolutionOutcome::Best).ok_or_else(|| {
                EvolveError::Evolution("run terminated without a best individual".to_string())
            })
        }
    }

    /// Produces and evaluates the next generation: draw parent pairs from
    /// the mating pool, apply crossover then mutation, exactly
    /// `population_size` times.
    fn next_generation(
        &self,
        population: &Population<A>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<A>> {
        let directions = self.challenge.objectives();
        let pool = self.selection.mating_pool(population, directions)?;

        let mut children = Vec::with_capacity(self.config.population_size());
        for _ in 0..self.config.population_size() {
            let first = pool.draw(rng).clone();
            let second = pool.draw(rng);
            let child = first
                .crossover(second)?
                .mutate(self.config.mutation_rate(), self.encoding.alphabet(), rng)?;
            children.push(Individual::new(child));
        }

        let mut next = Population::new(population.generation() + 1, children);
        next.evaluate(&self.challenge, self.config.parallel_threshold())?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::{Direction, Fitness};
    use crate::selection::RouletteWheelSelection;

    struct OnesFraction;

    impl Challenge<u8> for OnesFraction {
        fn objectives(&self) -> &[Direction] {
            &[Direction::Maximize]
        }

        fn score(&self, chromosome: &Chromosome<u8>) -> Result<Fitness> {
            let ones = chromosome.genes().iter().filter(|&&g| g == 1).count();
            Ok(Fitness::Scalar(ones as f64 / chromosome.len() as f64))
        }
    }

    struct NoObjectives;

    impl Challenge<u8> for NoObjectives {
        fn objectives(&self) -> &[Direction] {
            &[]
        }

        fn score(&self, _: &Chromosome<u8>) -> Result<Fitness> {
            Ok(Fitness::Scalar(0.0))
        }
    }

    fn binary_encoding(length: usize) -> Encoding<u8> {
        Encoding::new(Alphabet::new(vec![0u8, 1u8]).unwrap(), length).unwrap()
    }

    #[test]
    fn test_zero_length_encoding_is_rejected() {
        let alphabet = Alphabet::new(vec![0u8]).unwrap();
        assert!(Encoding::new(alphabet, 0).is_err());
    }

    #[test]
    fn test_challenge_without_objectives_is_rejected() {
        let result = Engine::new(
            binary_encoding(4),
            NoObjectives,
            RouletteWheelSelection::new(4.0),
            EngineConfig::default(),
        );
        assert!(matches!(result, Err(EvolveError::Configuration(_))));
    }

    #[test]
    fn test_observer_sees_every_generation_once() {
        let config = EngineConfig::builder()
            .population_size(10)
            .mutation_rate(0.05)
            .termination(Termination::FixedGenerations(5))
            .build()
            .unwrap();
        let engine = Engine::new(
            binary_encoding(8),
            OnesFraction,
            RouletteWheelSelection::new(8.0),
            config,
        )
        .unwrap();

        let mut rng = RandomNumberGenerator::from_seed(13);
        let mut generations = Vec::new();
        engine
            .run_with_observer(&mut rng, |generation, _| generations.push(generation))
            .unwrap();

        assert_eq!(generations, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_single_objective_run_finds_all_ones() {
        let config = EngineConfig::builder()
            .population_size(40)
            .mutation_rate(0.05)
            .termination(Termination::FitnessThreshold(1.0))
            .build()
            .unwrap();
        let engine = Engine::new(
            binary_encoding(8),
            OnesFraction,
            RouletteWheelSelection::new(8.0),
            config,
        )
        .unwrap();

        let mut rng = RandomNumberGenerator::from_seed(21);
        match engine.run(&mut rng).unwrap() {
            EvolutionOutcome::Best(best) => {
                assert_eq!(best.fitness, 1.0);
                assert!(best.chromosome.genes().iter().all(|&g| g == 1));
            }
            EvolutionOutcome::Pareto(_) => panic!("scalar run returned a Pareto outcome"),
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = EngineConfig::builder()
            .population_size(10)
            .mutation_rate(0.1)
            .termination(Termination::FixedGenerations(10))
            .build()
            .unwrap();
        let engine = Engine::new(
            binary_encoding(6),
            OnesFraction,
            RouletteWheelSelection::new(6.0),
            config,
        )
        .unwrap();

        let run = |seed| {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            match engine.run(&mut rng).unwrap() {
                EvolutionOutcome::Best(best) => best,
                EvolutionOutcome::Pareto(_) => unreachable!(),
            }
        };

        assert_eq!(run(99), run(99));
    }
}
