//! # evogen
//!
//! A genetic algorithm engine for fixed-length encodings over finite
//! alphabets, supporting single-objective (fitness-proportional) and
//! multi-objective (non-dominated sorting with a Pareto archive) runs.
//!
//! A problem is described by three pieces: an [`Encoding`] (alphabet and
//! chromosome length), a [`Challenge`] (the fitness function and its
//! objective directions) and a [`SelectionStrategy`]. The [`Engine`] wires
//! them together with an [`EngineConfig`] and drives the generation loop to
//! a [`Termination`] condition.
//!
//! ## Example
//!
//! ```rust
//! use evogen::problems::TextMatch;
//! use evogen::{
//!     Encoding, Engine, EngineConfig, EvolutionOutcome, RandomNumberGenerator,
//!     RouletteWheelSelection, Termination,
//! };
//!
//! let challenge = TextMatch::new("monkeys").unwrap();
//! let encoding = Encoding::new(challenge.alphabet().clone(), challenge.target_len()).unwrap();
//! let config = EngineConfig::builder()
//!     .population_size(100)
//!     .mutation_rate(0.02)
//!     .termination(Termination::FixedGenerations(25))
//!     .build()
//!     .unwrap();
//! let selection = RouletteWheelSelection::new(challenge.target_len() as f64);
//! let engine = Engine::new(encoding, challenge, selection, config).unwrap();
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let outcome = engine.run(&mut rng).unwrap();
//! assert!(matches!(outcome, EvolutionOutcome::Best(_)));
//! ```

pub mod chromosome;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod pareto;
pub mod population;
pub mod problems;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use chromosome::{Allele, Alphabet, Chromosome};
pub use engine::{
    BestIndividual, Encoding, Engine, EngineConfig, EvolutionOutcome, Progress, Termination,
};
pub use error::{EvolveError, Result};
pub use fitness::{Challenge, Direction, Fitness};
pub use pareto::{ArchiveEntry, ParetoArchive};
pub use population::{Individual, Population};
pub use rng::RandomNumberGenerator;
pub use selection::{MatingPool, NonDominatedSelection, RouletteWheelSelection, SelectionStrategy};
