//! # Non-Dominated Selection
//!
//! Multi-objective selection in the NSGA-II style (Deb et al., 2002): the
//! population is partitioned into successive non-dominated fronts, crowding
//! distances preserve diversity within a front, and a parent quota is filled
//! by whole fronts in rank order with the split front truncated by
//! descending crowding distance.
//!
//! The free functions [`non_dominated_sort`] and [`crowding_distance`]
//! operate on objective matrices that have already been oriented so that
//! smaller is better in every column; orientation is the caller's job (see
//! [`crate::fitness::Direction::orient`]).

use std::cmp::Ordering;

use crate::chromosome::Allele;
use crate::error::{EvolveError, Result};
use crate::fitness::Direction;
use crate::population::Population;
use crate::selection::{MatingPool, SelectionStrategy};

/// Returns `true` if `a` dominates `b`.
///
/// With all objectives oriented to smaller-is-better, `a` dominates `b` iff
/// `a` is no worse in every objective and strictly better in at least one.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    let mut strictly_better = false;
    for (&va, &vb) in a.iter().zip(b) {
        if va > vb {
            return false;
        }
        if va < vb {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Partitions a population's oriented objective vectors into successive
/// non-dominated fronts.
///
/// `fronts[0]` holds the indices of individuals dominated by no one;
/// `fronts[1]` the non-dominated set once front 0 is removed, and so on until
/// every index is placed. The result is never empty for non-empty input.
pub fn non_dominated_sort(objectives: &[Vec<f64>]) -> Vec<Vec<usize>> {
    let n = objectives.len();
    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut first_front = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(&objectives[i], &objectives[j]) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if dominates(&objectives[j], &objectives[i]) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
        if domination_count[i] == 0 {
            first_front.push(i);
        }
    }

    let mut fronts = vec![first_front];
    loop {
        let mut next_front = Vec::new();
        for &i in fronts.last().into_iter().flatten() {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next_front.push(j);
                }
            }
        }
        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }
    fronts
}

/// Computes the crowding distance of each member of one front.
///
/// For every objective the front is sorted by that objective; boundary
/// members receive infinite distance, interior members accumulate the
/// normalized gap between their two nearest neighbors. Fronts of one or two
/// members are all boundary.
pub fn crowding_distance(objectives: &[Vec<f64>]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let num_objectives = objectives[0].len();
    let mut distances = vec![0.0f64; n];

    for objective in 0..num_objectives {
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            objectives[a][objective]
                .partial_cmp(&objectives[b][objective])
                .unwrap_or(Ordering::Equal)
        });

        distances[order[0]] = f64::INFINITY;
        distances[order[n - 1]] = f64::INFINITY;

        let range = objectives[order[n - 1]][objective] - objectives[order[0]][objective];
        if range > 0.0 {
            for i in 1..(n - 1) {
                let gap =
                    objectives[order[i + 1]][objective] - objectives[order[i - 1]][objective];
                distances[order[i]] += gap / range;
            }
        }
    }
    distances
}

/// A selection strategy that ranks a population by non-dominated front and
/// crowding distance, then uses the top-ranked quota as the mating pool.
///
/// The quota is filled with whole fronts in increasing front-index order;
/// when a front must be split to meet the quota exactly, the members with
/// the largest crowding distance are kept first. Parents are then drawn
/// uniformly from the selected set.
#[derive(Debug, Clone)]
pub struct NonDominatedSelection {
    /// Number of individuals admitted to the mating pool; `None` admits half
    /// the population (at least one).
    quota: Option<usize>,
}

impl NonDominatedSelection {
    /// Creates a non-dominated selection with the default quota of half the
    /// population.
    pub fn new() -> Self {
        Self { quota: None }
    }

    /// Creates a non-dominated selection with an explicit parent quota.
    pub fn with_quota(quota: usize) -> Self {
        Self { quota: Some(quota) }
    }

    fn quota_for(&self, population_size: usize) -> usize {
        match self.quota {
            Some(quota) => quota.min(population_size),
            None => (population_size / 2).max(1),
        }
    }
}

impl Default for NonDominatedSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> SelectionStrategy<A> for NonDominatedSelection
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
        if directions.is_empty() {
            return Err(EvolveError::Selection(
                "at least one objective is required".to_string(),
            ));
        }

        let oriented = population.oriented_objectives(directions)?;
        let fronts = non_dominated_sort(&oriented);
        let quota = self.quota_for(population.len());

        let mut selected: Vec<usize> = Vec::with_capacity(quota);
        for front in &fronts {
            let remaining = quota - selected.len();
            if remaining == 0 {
                break;
            }
            if front.len() <= remaining {
                selected.extend_from_slice(front);
            } else {
                // Split front: keep the most isolated members first.
                let front_objectives: Vec<Vec<f64>> =
                    front.iter().map(|&i| oriented[i].clone()).collect();
                let distances = crowding_distance(&front_objectives);
                let mut ranked: Vec<usize> = (0..front.len()).collect();
                ranked.sort_by(|&a, &b| {
                    distances[b]
                        .partial_cmp(&distances[a])
                        .unwrap_or(Ordering::Equal)
                });
                selected.extend(ranked[..remaining].iter().map(|&i| front[i]));
            }
        }

        let pool = selected
            .into_iter()
            .map(|i| population.members()[i].chromosome().clone())
            .collect();
        MatingPool::new(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use crate::fitness::{Challenge, Fitness};
    use crate::population::{Individual, Population};

    #[test]
    fn test_dominates_requires_strict_improvement() {
        assert!(dominates(&[1.0, 2.0], &[1.0, 3.0]));
        assert!(dominates(&[1.0, 2.0], &[2.0, 3.0]));
        assert!(!dominates(&[1.0, 2.0], &[1.0, 2.0]));
        assert!(!dominates(&[1.0, 3.0], &[2.0, 2.0]));
    }

    #[test]
    fn test_sort_places_non_dominated_in_first_front() {
        let objectives = vec![
            vec![1.0, 5.0],
            vec![3.0, 3.0],
            vec![5.0, 1.0],
            vec![4.0, 4.0], // dominated by (3, 3)
            vec![6.0, 6.0], // dominated by (4, 4)
        ];
        let fronts = non_dominated_sort(&objectives);

        assert_eq!(fronts.len(), 3);
        assert_eq!(fronts[0], vec![0, 1, 2]);
        assert_eq!(fronts[1], vec![3]);
        assert_eq!(fronts[2], vec![4]);
    }

    #[test]
    fn test_no_member_of_a_front_dominates_another() {
        let objectives = vec![
            vec![2.0, 9.0],
            vec![4.0, 4.0],
            vec![9.0, 2.0],
            vec![5.0, 5.0],
            vec![3.0, 8.0],
            vec![8.0, 3.0],
            vec![7.0, 7.0],
        ];
        let fronts = non_dominated_sort(&objectives);

        for front in &fronts {
            for &i in front {
                for &j in front {
                    assert!(
                        !dominates(&objectives[i], &objectives[j]),
                        "{} dominates {} within one front",
                        i,
                        j
                    );
                }
            }
        }
    }

    #[test]
    fn test_identical_points_share_a_front() {
        let objectives = vec![vec![2.0, 2.0], vec![2.0, 2.0], vec![2.0, 2.0]];
        let fronts = non_dominated_sort(&objectives);
        assert_eq!(fronts.len(), 1);
        assert_eq!(fronts[0].len(), 3);
    }

    #[test]
    fn test_crowding_boundaries_are_infinite() {
        let objectives = vec![vec![1.0, 5.0], vec![3.0, 3.0], vec![5.0, 1.0]];
        let distances = crowding_distance(&objectives);

        assert!(distances[0].is_infinite());
        assert!(distances[2].is_infinite());
        assert!(distances[1].is_finite());
        assert!(distances[1] > 0.0);
    }

    #[test]
    fn test_crowding_small_fronts_are_all_boundary() {
        assert!(crowding_distance(&[vec![1.0, 2.0]])[0].is_infinite());
        let two = crowding_distance(&[vec![1.0, 3.0], vec![3.0, 1.0]]);
        assert!(two.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_crowding_zero_range_objective_contributes_nothing() {
        let objectives = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]];
        let distances = crowding_distance(&objectives);
        assert!(distances[1].is_finite());
    }

    struct PointValue;

    impl Challenge<u8> for PointValue {
        fn objectives(&self) -> &[Direction] {
            &[Direction::Minimize, Direction::Minimize]
        }

        fn score(&self, chromosome: &Chromosome<u8>) -> crate::error::Result<Fitness> {
            let genes = chromosome.genes();
            Ok(Fitness::Vector(vec![genes[0] as f64, genes[1] as f64]))
        }
    }

    fn evaluated(points: Vec<(u8, u8)>) -> Population<u8> {
        let members = points
            .into_iter()
            .map(|(x, y)| Individual::new(Chromosome::from_genes(vec![x, y])))
            .collect();
        let mut population = Population::new(0, members);
        population.evaluate(&PointValue, usize::MAX).unwrap();
        population
    }

    #[test]
    fn test_quota_takes_whole_fronts_first() {
        // Front 0: (1,5), (5,1); front 1: (6,6)
        let population = evaluated(vec![(1, 5), (6, 6), (5, 1)]);
        let selection = NonDominatedSelection::with_quota(2);
        let directions = [Direction::Minimize, Direction::Minimize];

        let pool = selection.mating_pool(&population, &directions).unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_split_front_prefers_isolated_members() {
        // Single front of four points; quota 3 must drop one of the two
        // crowded interior points, never a boundary point.
        let population = evaluated(vec![(1, 9), (4, 5), (5, 4), (9, 1)]);
        let selection = NonDominatedSelection::with_quota(3);
        let directions = [Direction::Minimize, Direction::Minimize];

        let pool = selection.mating_pool(&population, &directions).unwrap();
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_default_quota_is_half_the_population() {
        let population = evaluated(vec![(1, 9), (4, 5), (5, 4), (9, 1)]);
        let selection = NonDominatedSelection::new();
        let directions = [Direction::Minimize, Direction::Minimize];

        let pool = selection.mating_pool(&population, &directions).unwrap();
        assert_eq!(pool.len(), 2);
    }
}
