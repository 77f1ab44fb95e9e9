//! goalgraph-seed: Seeds the goal-tracking graph and reports on it.
//!
//! Wipes a Neo4j database, writes the fixed goal-tracking dataset, and
//! prints every user goal with its deadline.

pub mod config;
pub mod error;
pub mod report;
pub mod seeder;
pub mod target;
pub mod verify;

#[cfg(test)]
pub(crate) mod testing;
