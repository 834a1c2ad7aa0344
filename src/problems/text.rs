//! # TextMatch
//!
//! The "infinite monkeys" fitness: chromosomes are character sequences over
//! the 27-symbol alphabet (space plus `a..=z`), scored by the fraction of
//! positions matching a target string. The score lies in `[0, 1]` and is
//! maximized; a chromosome identical to the target scores exactly `1.0`.

use crate::chromosome::{Alphabet, Chromosome};
use crate::error::{EvolveError, Result};
use crate::fitness::{Challenge, Direction, Fitness};

/// Single-objective string-matching challenge.
#[derive(Debug, Clone)]
pub struct TextMatch {
    target: Vec<char>,
    alphabet: Alphabet<char>,
}

impl TextMatch {
    /// Creates a challenge for the given target string.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the target is empty or contains a
    /// character outside the space-plus-lowercase alphabet.
    pub fn new(target: &str) -> Result<Self> {
        let alphabet = Alphabet::lowercase_text();
        let target: Vec<char> = target.chars().collect();
        if target.is_empty() {
            return Err(EvolveError::Configuration(
                "target string must not be empty".to_string(),
            ));
        }
        if let Some(invalid) = target.iter().find(|c| !alphabet.contains(c)) {
            return Err(EvolveError::Configuration(format!(
                "target contains character {:?} outside the alphabet",
                invalid
            )));
        }
        Ok(Self { target, alphabet })
    }

    /// Returns the gene alphabet of this problem.
    pub fn alphabet(&self) -> &Alphabet<char> {
        &self.alphabet
    }

    /// Returns the target (and thus chromosome) length.
    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    /// Renders the phenotype: the spelled-out string.
    pub fn phenotype(chromosome: &Chromosome<char>) -> String {
        chromosome.genes().iter().collect()
    }
}

impl Challenge<char> for TextMatch {
    fn objectives(&self) -> &[Direction] {
        &[Direction::Maximize]
    }

    fn score(&self, chromosome: &Chromosome<char>) -> Result<Fitness> {
        if chromosome.len() != self.target.len() {
            return Err(EvolveError::FitnessCalculation(format!(
                "chromosome length {} does not match target length {}",
                chromosome.len(),
                self.target.len()
            )));
        }
        let matching = chromosome
            .genes()
            .iter()
            .zip(&self.target)
            .filter(|(gene, expected)| gene == expected)
            .count();
        Ok(Fitness::Scalar(matching as f64 / self.target.len() as f64))
    }
}
