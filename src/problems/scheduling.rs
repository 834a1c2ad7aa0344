//! # Resource Planning
//!
//! Task-to-resource assignment. A chromosome of length `task_count` over the
//! integer alphabet `[0, resource_count)` maps task `i` to the resource at
//! gene `i`. Each task occupies its resource for `workload / items_per_minute`
//! minutes and costs that time multiplied by the resource's per-minute cost.
//!
//! Two comparator policies over the same domain are provided as alternative
//! engine configurations: [`ScalarScheduleChallenge`] maximizes the negated
//! sum of total time and total cost, and [`ParetoScheduleChallenge`] treats
//! time and cost as separate minimization objectives for Pareto-front runs.

use crate::chromosome::{Alphabet, Chromosome};
use crate::error::{EvolveError, Result};
use crate::fitness::{Challenge, Direction, Fitness};

/// One resource in the pool.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    /// Throughput in workload items per minute.
    pub items_per_minute: f64,
    /// Cost per minute of occupancy.
    pub costs_per_minute: f64,
}

/// One task to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    /// Number of workload items the task comprises.
    pub workload: f64,
}

/// The read-only problem tables shared by both comparator policies.
#[derive(Debug, Clone)]
pub struct SchedulingProblem {
    resources: Vec<Resource>,
    tasks: Vec<Task>,
}

impl SchedulingProblem {
    /// Creates a problem from resource and task tables.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if either table is empty or a
    /// resource has non-positive throughput.
    pub fn new(resources: Vec<Resource>, tasks: Vec<Task>) -> Result<Self> {
        if resources.is_empty() || tasks.is_empty() {
            return Err(EvolveError::Configuration(
                "scheduling requires at least one resource and one task".to_string(),
            ));
        }
        if resources.iter().any(|r| r.items_per_minute <= 0.0) {
            return Err(EvolveError::Configuration(
                "resource throughput must be positive".to_string(),
            ));
        }
        Ok(Self { resources, tasks })
    }

    /// The demo resource pool: 20 machines with throughputs from 10 to 250
    /// items per minute and costs growing slightly faster than linearly.
    pub fn demo_resources() -> Vec<Resource> {
        [
            10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 25.0, 25.0, 25.0, 25.0, 30.0, 30.0, 30.0, 50.0,
            50.0, 50.0, 50.0, 100.0, 100.0, 250.0,
        ]
        .iter()
        .map(|&items_per_minute: &f64| Resource {
            items_per_minute,
            costs_per_minute: items_per_minute.powf(1.1),
        })
        .collect()
    }

    /// The demo task table for scalarized runs: 100 tasks with workloads
    /// 250, 1000 and 2500 mixed 4:2:2.
    pub fn demo_tasks() -> Vec<Task> {
        (0..100)
            .map(|i| {
                let workload = match i % 8 {
                    0..=3 => 250.0,
                    4 | 5 => 1000.0,
                    _ => 2500.0,
                };
                Task { workload }
            })
            .collect()
    }

    /// Returns the resource table.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Returns the task table.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the gene alphabet: resource indices `[0, resource_count)`.
    pub fn alphabet(&self) -> Alphabet<usize> {
        // Resource table is non-empty by construction.
        Alphabet::index_range(self.resources.len())
            .unwrap_or_else(|_| unreachable!("resource table is non-empty"))
    }

    /// Returns the chromosome length: one gene per task.
    pub fn chromosome_length(&self) -> usize {
        self.tasks.len()
    }

    /// Total completion time of an assignment, in minutes.
    pub fn total_time(&self, assignment: &Chromosome<usize>) -> Result<f64> {
        self.fold_assignment(assignment, |time, _| time)
    }

    /// Total cost of an assignment.
    pub fn total_cost(&self, assignment: &Chromosome<usize>) -> Result<f64> {
        self.fold_assignment(assignment, |time, resource| time * resource.costs_per_minute)
    }

    fn fold_assignment<F>(&self, assignment: &Chromosome<usize>, per_task: F) -> Result<f64>
    where
        F: Fn(f64, &Resource) -> f64,
    {
        if assignment.len() != self.tasks.len() {
            return Err(EvolveError::FitnessCalculation(format!(
                "assignment length {} does not match {} tasks",
                assignment.len(),
                self.tasks.len()
            )));
        }
        let mut accumulated = 0.0;
        for (task, &resource_index) in self.tasks.iter().zip(assignment.genes()) {
            let resource = self.resources.get(resource_index).ok_or_else(|| {
                EvolveError::FitnessCalculation(format!(
                    "gene {} exceeds resource count {}",
                    resource_index,
                    self.resources.len()
                ))
            })?;
            let time = task.workload / resource.items_per_minute;
            accumulated += per_task(time, resource);
        }
        Ok(accumulated)
    }
}

/// Scalarized scheduling fitness: maximize `-(total time + total cost)`,
/// which is equivalent to minimizing the sum.
#[derive(Debug, Clone)]
pub struct ScalarScheduleChallenge {
    problem: SchedulingProblem,
}

impl ScalarScheduleChallenge {
    /// Wraps a scheduling problem in the scalarized comparator policy.
    pub fn new(problem: SchedulingProblem) -> Self {
        Self { problem }
    }

    /// Returns the underlying problem tables.
    pub fn problem(&self) -> &SchedulingProblem {
        &self.problem
    }
}

impl Challenge<usize> for ScalarScheduleChallenge {
    fn objectives(&self) -> &[Direction] {
        &[Direction::Maximize]
    }

    fn score(&self, chromosome: &Chromosome<usize>) -> Result<Fitness> {
        let time = self.problem.total_time(chromosome)?;
        let cost = self.problem.total_cost(chromosome)?;
        Ok(Fitness::Scalar(-time - cost))
    }
}

/// Multi-objective scheduling fitness: `(total time, total cost)`, both
/// minimized, for Pareto-front runs.
#[derive(Debug, Clone)]
pub struct ParetoScheduleChallenge {
    problem: SchedulingProblem,
}

impl ParetoScheduleChallenge {
    /// Wraps a scheduling problem in the Pareto comparator policy.
    pub fn new(problem: SchedulingProblem) -> Self {
        Self { problem }
    }

    /// Returns the underlying problem tables.
    pub fn problem(&self) -> &SchedulingProblem {
        &self.problem
    }
}

impl Challenge<usize> for ParetoScheduleChallenge {
    fn objectives(&self) -> &[Direction] {
        &[Direction::Minimize, Direction::Minimize]
    }

    fn score(&self, chromosome: &Chromosome<usize>) -> Result<Fitness> {
        let time = self.problem.total_time(chromosome)?;
        let cost = self.problem.total_cost(chromosome)?;
        Ok(Fitness::Vector(vec![time, cost]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> SchedulingProblem {
        SchedulingProblem::new(
            vec![
                Resource {
                    items_per_minute: 10.0,
                    costs_per_minute: 1.0,
                },
                Resource {
                    items_per_minute: 100.0,
                    costs_per_minute: 5.0,
                },
            ],
            vec![Task { workload: 100.0 }, Task { workload: 1000.0 }],
        )
        .unwrap()
    }

    #[test]
    fn test_all_four_assignments_match_hand_computed_values() {
        let problem = two_by_two();
        // (genes, expected time, expected cost)
        let cases = [
            (vec![0, 0], 110.0, 110.0),
            (vec![0, 1], 20.0, 60.0),
            (vec![1, 0], 101.0, 105.0),
            (vec![1, 1], 11.0, 55.0),
        ];

        for (genes, time, cost) in cases {
            let assignment = Chromosome::from_genes(genes.clone());
            assert_eq!(
                problem.total_time(&assignment).unwrap(),
                time,
                "time for {:?}",
                genes
            );
            assert_eq!(
                problem.total_cost(&assignment).unwrap(),
                cost,
                "cost for {:?}",
                genes
            );
        }
    }

    #[test]
    fn test_scalar_challenge_negates_the_sum() {
        let challenge = ScalarScheduleChallenge::new(two_by_two());
        let assignment = Chromosome::from_genes(vec![0, 0]);

        let fitness = challenge.score(&assignment).unwrap();
        assert_eq!(fitness.scalar(), Some(-220.0));
    }

    #[test]
    fn test_pareto_challenge_scores_both_objectives() {
        let challenge = ParetoScheduleChallenge::new(two_by_two());
        let assignment = Chromosome::from_genes(vec![1, 1]);

        let fitness = challenge.score(&assignment).unwrap();
        assert_eq!(fitness.objectives(), &[11.0, 55.0]);
        assert_eq!(
            challenge.objectives(),
            &[Direction::Minimize, Direction::Minimize]
        );
    }

    #[test]
    fn test_encoding_matches_tables() {
        let problem = two_by_two();
        assert_eq!(problem.alphabet().symbols(), &[0, 1]);
        assert_eq!(problem.chromosome_length(), 2);
    }

    #[test]
    fn test_out_of_range_gene_is_a_fitness_error() {
        let problem = two_by_two();
        let assignment = Chromosome::from_genes(vec![0, 7]);
        assert!(matches!(
            problem.total_time(&assignment),
            Err(EvolveError::FitnessCalculation(_))
        ));
    }

    #[test]
    fn test_empty_tables_are_rejected() {
        assert!(SchedulingProblem::new(vec![], vec![Task { workload: 1.0 }]).is_err());
        assert!(SchedulingProblem::new(SchedulingProblem::demo_resources(), vec![]).is_err());
    }

    #[test]
    fn test_demo_tables_have_original_shapes() {
        let resources = SchedulingProblem::demo_resources();
        let tasks = SchedulingProblem::demo_tasks();
        assert_eq!(resources.len(), 20);
        assert_eq!(tasks.len(), 100);
        assert_eq!(resources[19].items_per_minute, 250.0);
        assert_eq!(tasks[0].workload, 250.0);
        assert_eq!(tasks[4].workload, 1000.0);
        assert_eq!(tasks[6].workload, 2500.0);
    }
}
