//! # Pareto Archive
//!
//! Accumulates the genotype/objective-vector pairs that are non-dominated
//! across an entire multi-objective run, not merely within the last
//! generation. Each generation's front is merged in; members that a
//! newcomer dominates are pruned, duplicate genotypes are discarded, and the
//! merge is idempotent. The archive survives every generation of one run and
//! is the final result of a multi-objective run.

use crate::chromosome::{Allele, Chromosome};
use crate::fitness::Direction;
use crate::selection::nsga;

/// One archived non-dominated solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchiveEntry<A: Allele> {
    /// The genotype.
    pub chromosome: Chromosome<A>,
    /// Raw objective values, in declaration order.
    pub objectives: Vec<f64>,
}

/// The append/prune-only archive of non-dominated solutions.
#[derive(Debug, Clone)]
pub struct ParetoArchive<A: Allele> {
    directions: Vec<Direction>,
    entries: Vec<ArchiveEntry<A>>,
}

impl<A: Allele> ParetoArchive<A> {
    /// Creates an empty archive for the given objective directions.
    pub fn new(directions: Vec<Direction>) -> Self {
        Self {
            directions,
            entries: Vec::new(),
        }
    }

    /// Returns the archived entries in insertion order.
    pub fn entries(&self) -> &[ArchiveEntry<A>] {
        &self.entries
    }

    /// Returns the number of archived solutions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been archived yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges one generation's front into the archive.
    ///
    /// Each candidate is skipped if its genotype is already archived or if an
    /// archived member dominates it; otherwise it is inserted and every
    /// archived member it dominates is pruned. Feeding the same front twice
    /// leaves the archive unchanged.
    ///
    /// Returns `true` if the merge changed the archive.
    pub fn merge<I>(&mut self, front: I) -> bool
    where
        I: IntoIterator<Item = ArchiveEntry<A>>,
    {
        let mut changed = false;
        for candidate in front {
            changed |= self.insert(candidate);
        }
        changed
    }

    fn insert(&mut self, candidate: ArchiveEntry<A>) -> bool {
        let oriented = self.orient(&candidate.objectives);

        if self
            .entries
            .iter()
            .any(|entry| entry.chromosome == candidate.chromosome)
        {
            return false;
        }
        if self
            .entries
            .iter()
            .any(|entry| nsga::dominates(&self.orient(&entry.objectives), &oriented))
        {
            return false;
        }

        let directions = std::mem::take(&mut self.directions);
        self.entries.retain(|entry| {
            let entry_oriented: Vec<f64> = entry
                .objectives
                .iter()
                .zip(&directions)
                .map(|(&value, direction)| direction.orient(value))
                .collect();
            !nsga::dominates(&oriented, &entry_oriented)
        });
        self.directions = directions;

        self.entries.push(candidate);
        true
    }

    fn orient(&self, objectives: &[f64]) -> Vec<f64> {
        objectives
            .iter()
            .zip(&self.directions)
            .map(|(&value, direction)| direction.orient(value))
            .collect()
    }

    /// Consumes the archive and returns its entries sorted by the first
    /// objective, ascending. This is the final result shape of a
    /// multi-objective run.
    pub fn into_sorted(mut self) -> Vec<ArchiveEntry<A>> {
        self.entries.sort_by(|a, b| {
            a.objectives[0]
                .partial_cmp(&b.objectives[0])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.entries
    }
}
