//! goalgraph-core: Domain types and seed data for the goal-tracking graph.
//!
//! This crate provides the types shared by the graph client and the seeder:
//! - Node types (User, Goal, SubGoal, Reminder, WorkSession)
//! - Relationship types (HAS_GOAL, HAS_SUBGOAL, REMINDER_FOR, SESSION_FOR)
//! - The date source used to stamp seeded records
//! - The fixed seed dataset
//! - Common error types

pub mod dataset;
pub mod dates;
pub mod error;
pub mod types;

pub use dataset::SeedDataset;
pub use dates::{DateSource, DateSourceKind, RelativeDay};
pub use error::CoreError;
pub use types::{
    Goal, GraphCounts, Node, NodeKey, NodeLabel, RelType, Relationship, Reminder, Status, SubGoal,
    User, WorkSession,
};
