//! goalgraph-graph: Neo4j client for the goal-tracking graph.
//!
//! Every read and write the seeder performs flows through [`GraphClient`].
//! Values are always bound as query parameters; only labels, property keys
//! and relationship types from the closed enums in `goalgraph-core` are
//! formatted into Cypher text.

pub mod client;
pub mod mutations;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use queries::{Direction, GoalDeadline};
