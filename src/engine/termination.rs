//! # Termination Policies
//!
//! Exactly one [`Termination`] policy governs a run. Policies are stateless
//! predicates over the [`RunLedger`], the bookkeeping the engine maintains
//! anyway: generation index, best scalar fitness so far, and the number of
//! consecutive generations without improvement.
//!
//! A policy that is never satisfied lets the engine run indefinitely; this
//! is accepted, not detected. Callers that need a hard cap choose
//! [`Termination::FixedGenerations`].

use crate::fitness::Direction;

/// Decides when the generation loop stops.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Stop once the generation counter reaches `n`.
    FixedGenerations(usize),
    /// Stop once the best scalar fitness is at least as good as the
    /// threshold under the declared direction. Never satisfied for
    /// multi-objective runs, which carry no scalar best.
    FitnessThreshold(f64),
    /// Stop once the best fitness (or, for multi-objective runs, the Pareto
    /// archive) has been unchanged for this many consecutive generations.
    SteadyState(usize),
}

impl Termination {
    /// Returns `true` if the run should stop given the current bookkeeping.
    pub fn should_stop(&self, ledger: &RunLedger) -> bool {
        match *self {
            Termination::FixedGenerations(n) => ledger.generation >= n,
            Termination::FitnessThreshold(threshold) => ledger.best.is_some_and(|best| {
                ledger.direction.orient(best) <= ledger.direction.orient(threshold)
            }),
            Termination::SteadyState(window) => ledger.stagnant >= window,
        }
    }
}

/// Per-run bookkeeping the termination policies predicate over.
#[derive(Debug, Clone)]
pub struct RunLedger {
    generation: usize,
    direction: Direction,
    best: Option<f64>,
    stagnant: usize,
}

impl RunLedger {
    /// Creates the ledger for a fresh run, before generation 0 is observed.
    pub fn new(direction: Direction) -> Self {
        Self {
            generation: 0,
            direction,
            best: None,
            stagnant: 0,
        }
    }

    /// Returns the current generation index.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the best scalar fitness observed so far, if any.
    pub fn best(&self) -> Option<f64> {
        self.best
    }

    /// Records the best scalar fitness of the current generation.
    ///
    /// An improvement (strictly better under the ledger's direction) resets
    /// the stagnation counter; anything else increments it.
    pub fn record_scalar(&mut self, value: f64) {
        match self.best {
            Some(best) if self.direction.orient(value) < self.direction.orient(best) => {
                self.best = Some(value);
                self.stagnant = 0;
            }
            Some(_) => self.stagnant += 1,
            None => self.best = Some(value),
        }
    }

    /// Records whether the current generation changed the Pareto archive.
    pub fn record_front(&mut self, changed: bool) {
        if changed {
            self.stagnant = 0;
        } else {
            self.stagnant += 1;
        }
    }

    /// Advances the generation counter after one variation step.
    pub fn advance(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_generations_stops_at_count() {
        let policy = Termination::FixedGenerations(3);
        let mut ledger = RunLedger::new(Direction::Maximize);

        for _ in 0..3 {
            assert!(!policy.should_stop(&ledger));
            ledger.advance();
        }
        assert!(policy.should_stop(&ledger));
    }

    #[test]
    fn test_fitness_threshold_respects_direction() {
        let policy = Termination::FitnessThreshold(1.0);

        let mut maximizing = RunLedger::new(Direction::Maximize);
        maximizing.record_scalar(0.9);
        assert!(!policy.should_stop(&maximizing));
        maximizing.record_scalar(1.0);
        assert!(policy.should_stop(&maximizing));

        let mut minimizing = RunLedger::new(Direction::Minimize);
        minimizing.record_scalar(2.0);
        assert!(!policy.should_stop(&minimizing));
        minimizing.record_scalar(0.5);
        assert!(policy.should_stop(&minimizing));
    }

    #[test]
    fn test_fitness_threshold_never_fires_without_scalar_best() {
        let policy = Termination::FitnessThreshold(0.0);
        let ledger = RunLedger::new(Direction::Maximize);
        assert!(!policy.should_stop(&ledger));
    }

    #[test]
    fn test_steady_state_triggers_exactly_at_window() {
        // Synthetic best-fitness sequence: improvement, then a plateau of
        // exactly three equal values.
        let policy = Termination::SteadyState(3);
        let mut ledger = RunLedger::new(Direction::Maximize);

        for value in [0.1, 0.2, 0.5] {
            ledger.record_scalar(value);
            assert!(!policy.should_stop(&ledger));
        }
        for _ in 0..2 {
            ledger.record_scalar(0.5);
            assert!(!policy.should_stop(&ledger));
        }
        ledger.record_scalar(0.5);
        assert!(policy.should_stop(&ledger));
    }

    #[test]
    fn test_steady_state_resets_on_improvement() {
        let policy = Termination::SteadyState(2);
        let mut ledger = RunLedger::new(Direction::Maximize);

        ledger.record_scalar(0.1);
        ledger.record_scalar(0.1);
        assert!(!policy.should_stop(&ledger));
        ledger.record_scalar(0.4);
        ledger.record_scalar(0.4);
        assert!(!policy.should_stop(&ledger));
        ledger.record_scalar(0.4);
        assert!(policy.should_stop(&ledger));
    }

    #[test]
    fn test_front_stagnation_counts_unchanged_archives() {
        let policy = Termination::SteadyState(2);
        let mut ledger = RunLedger::new(Direction::Minimize);

        ledger.record_front(true);
        ledger.record_front(false);
        assert!(!policy.should_stop(&ledger));
        ledger.record_front(false);
        assert!(policy.should_stop(&ledger));
    }
}
