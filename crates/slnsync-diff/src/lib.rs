//! Difference engine for slnsync.
//!
//! Computes what two solution models disagree on. Each dimension is a
//! symmetric difference: a value shows up iff exactly one side has it.
//!
//! # Key Types
//!
//! - [`Presence`] -- a one-sided value with its `in_a`/`in_b` flags
//! - [`Difference`] / [`Dimension`] -- a platform, build type, or item difference
//! - [`SolutionDiff`] -- all differences between two models, in reconciliation order

pub mod solution_diff;
pub mod symmetric;

pub use solution_diff::{diff_solutions, Difference, Dimension, SolutionDiff};
pub use symmetric::{symmetric_difference, symmetric_difference_by_key, Presence};
