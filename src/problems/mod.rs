//! # Demo Problems
//!
//! Fitness plug-ins for the two toy problems the engine ships with:
//! recovering a target character string ([`text`]) and assigning tasks to
//! resources to minimize completion time and cost ([`scheduling`]). Both
//! supply only the fitness contract and structured decoding; rendering and
//! entry points are left to external collaborators.

pub mod scheduling;
pub mod text;

pub use scheduling::{ParetoScheduleChallenge, Resource, ScalarScheduleChallenge, SchedulingProblem, Task};
pub use text::TextMatch;
