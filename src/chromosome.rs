//! # Chromosome & Encoding
//!
//! The genotype representation: a [`Chromosome`] is a fixed-length ordered
//! sequence of genes drawn from a finite [`Alphabet`]. Chromosomes are
//! immutable once created; the variation operators ([`Chromosome::crossover`]
//! and [`Chromosome::mutate`]) always derive a new chromosome and leave the
//! parents untouched.
//!
//! ## Example
//!
//! ```rust
//! use evogen::chromosome::{Alphabet, Chromosome};
//! use evogen::rng::RandomNumberGenerator;
//!
//! let alphabet = Alphabet::lowercase_text();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let a = Chromosome::random(&alphabet, 18, &mut rng);
//! let b = Chromosome::random(&alphabet, 18, &mut rng);
//!
//! let child = a.crossover(&b).unwrap();
//! let mutated = child.mutate(0.01, &alphabet, &mut rng).unwrap();
//! assert_eq!(mutated.len(), 18);
//! ```

use std::fmt::Debug;

use crate::error::{EvolveError, Result};
use crate::rng::RandomNumberGenerator;

/// Trait for types that can serve as a gene value.
///
/// Implemented automatically for any type that is cloneable, comparable,
/// debuggable and safe to share across the evaluation worker pool.
pub trait Allele: Clone + Debug + PartialEq + Send + Sync {}

impl<T> Allele for T where T: Clone + Debug + PartialEq + Send + Sync {}

/// The finite set of admissible gene values for one encoding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alphabet<A: Allele> {
    symbols: Vec<A>,
}

impl<A: Allele> Alphabet<A> {
    /// Creates an alphabet from the given symbols.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `symbols` is empty.
    pub fn new(symbols: Vec<A>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(EvolveError::Configuration(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }
        Ok(Self { symbols })
    }

    /// Returns the number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols. Construction forbids
    /// this, so it only returns `true` for a default-less manual misuse.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbols of the alphabet.
    pub fn symbols(&self) -> &[A] {
        &self.symbols
    }

    /// Returns `true` if `value` is an admissible gene.
    pub fn contains(&self, value: &A) -> bool {
        self.symbols.contains(value)
    }

    /// Draws one symbol uniformly at random.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> A {
        self.symbols[rng.index(self.symbols.len())].clone()
    }
}

impl Alphabet<char> {
    /// The 27-symbol text alphabet: space followed by `a..=z`.
    pub fn lowercase_text() -> Self {
        let mut symbols = Vec::with_capacity(27);
        symbols.push(' ');
        symbols.extend('a'..='z');
        Self { symbols }
    }
}

impl Alphabet<usize> {
    /// The integer index alphabet `[0, bound)`, used for assignment
    /// encodings such as task-to-resource mappings.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `bound` is zero.
    pub fn index_range(bound: usize) -> Result<Self> {
        Self::new((0..bound).collect())
    }
}

/// A fixed-length ordered sequence of genes over a finite alphabet.
///
/// The length is fixed for the whole run; all chromosomes produced by the
/// variation operators have the same length as their parents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome<A: Allele> {
    genes: Vec<A>,
}

impl<A: Allele> Chromosome<A> {
    /// Creates a chromosome directly from a gene sequence.
    pub fn from_genes(genes: Vec<A>) -> Self {
        Self { genes }
    }

    /// Creates a random chromosome by drawing each gene independently and
    /// uniformly from the alphabet.
    pub fn random(alphabet: &Alphabet<A>, length: usize, rng: &mut RandomNumberGenerator) -> Self {
        let genes = (0..length).map(|_| alphabet.sample(rng)).collect();
        Self { genes }
    }

    /// Returns the genes of this chromosome.
    pub fn genes(&self) -> &[A] {
        &self.genes
    }

    /// Returns the chromosome length.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Produces a child via single-point crossover at the fixed midpoint.
    ///
    /// The child's genes `[0, L/2)` come from `self` and genes `[L/2, L)`
    /// come from `other`; for odd `L` the midpoint is the integer floor, so
    /// `other` contributes the extra gene.
    ///
    /// # Errors
    ///
    /// Returns a `LengthMismatch` error if the two chromosomes differ in
    /// length.
    pub fn crossover(&self, other: &Self) -> Result<Self> {
        if self.len() != other.len() {
            return Err(EvolveError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let midpoint = self.len() / 2;
        let mut genes = Vec::with_capacity(self.len());
        genes.extend_from_slice(&self.genes[..midpoint]);
        genes.extend_from_slice(&other.genes[midpoint..]);
        Ok(Self { genes })
    }

    /// Produces a mutated copy of this chromosome.
    ///
    /// Every gene position undergoes one independent Bernoulli trial with
    /// probability `rate`: on success the gene is replaced by a fresh uniform
    /// draw from the alphabet, otherwise it is kept. The redraw may coincide
    /// with the original gene, so `rate = 1` does not guarantee a different
    /// chromosome. `rate = 0` is the identity.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `rate` is outside `[0, 1]`.
    pub fn mutate(
        &self,
        rate: f64,
        alphabet: &Alphabet<A>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(EvolveError::Configuration(format!(
                "mutation rate must be in [0, 1], got {}",
                rate
            )));
        }
        let genes = self
            .genes
            .iter()
            .map(|gene| {
                if rng.bernoulli(rate) {
                    alphabet.sample(rng)
                } else {
                    gene.clone()
                }
            })
            .collect();
        Ok(Self { genes })
    }
}
