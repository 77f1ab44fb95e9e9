//! Post-seed checks: does the live graph hold exactly the seeded dataset?

use serde::Serialize;

use goalgraph_core::{GraphCounts, NodeLabel, RelType};
use goalgraph_graph::Direction;

use crate::error::{Result, SeedError};
use crate::seeder::Seeder;
use crate::target::SeedTarget;

/// Outcome of comparing the graph with the dataset.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Verification {
    pub expected: GraphCounts,
    pub actual: GraphCounts,
    pub total_nodes: i64,
    pub total_relationships: i64,
    pub problems: Vec<String>,
}

impl Verification {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }

    /// Turn a failed verification into an error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(SeedError::VerificationFailed {
                problems: self.problems,
            })
        }
    }
}

impl<T: SeedTarget> Seeder<'_, T> {
    /// Compare node/relationship counts and sub-goal wiring with the dataset.
    pub async fn verify(&self) -> Result<Verification> {
        let expected = self.dataset().expected_counts();
        let actual = self.target().graph_counts().await?;
        let (total_nodes, total_relationships) = self.target().totals().await?;

        let mut problems = Vec::new();

        for label in NodeLabel::ALL {
            let (want, got) = (expected.nodes_with(label), actual.nodes_with(label));
            if want != got {
                problems.push(format!("expected {want} {label} nodes, found {got}"));
            }
        }
        for rel_type in RelType::ALL {
            let (want, got) = (
                expected.relationships_of(rel_type),
                actual.relationships_of(rel_type),
            );
            if want != got {
                problems.push(format!("expected {want} {rel_type} relationships, found {got}"));
            }
        }

        let untyped_nodes = total_nodes - actual.total_nodes();
        if untyped_nodes != 0 {
            problems.push(format!("{untyped_nodes} nodes outside the goal schema"));
        }
        let untyped_rels = total_relationships - actual.total_relationships();
        if untyped_rels != 0 {
            problems.push(format!("{untyped_rels} relationships outside the goal schema"));
        }

        // Every sub-goal hangs off exactly one goal; no goal owns two sub-goals.
        let parents = self
            .target()
            .relationship_degrees(NodeLabel::SubGoal, RelType::HasSubgoal, Direction::Incoming)
            .await?;
        for (id, cnt) in parents.iter().filter(|(_, cnt)| *cnt != 1) {
            problems.push(format!("SubGoal {id} has {cnt} incoming HAS_SUBGOAL"));
        }
        let children = self
            .target()
            .relationship_degrees(NodeLabel::Goal, RelType::HasSubgoal, Direction::Outgoing)
            .await?;
        for (id, cnt) in children.iter().filter(|(_, cnt)| *cnt > 1) {
            problems.push(format!("Goal {id} has {cnt} outgoing HAS_SUBGOAL"));
        }

        let verification = Verification {
            expected,
            actual,
            total_nodes,
            total_relationships,
            problems,
        };

        if verification.is_ok() {
            tracing::info!(
                nodes = total_nodes,
                relationships = total_relationships,
                "Graph matches seed dataset"
            );
        } else {
            tracing::warn!(
                problems = verification.problems.len(),
                "Graph does not match seed dataset"
            );
        }

        Ok(verification)
    }
}
