//! The graph operations the seeder depends on.
//!
//! [`GraphClient`] is the production implementation. Tests swap in an
//! in-memory graph.

use goalgraph_core::{GraphCounts, Node, NodeLabel, RelType, Relationship};
use goalgraph_graph::{Direction, GoalDeadline, GraphClient, GraphError};

/// Trait for backends the seeder can write to and read from.
#[allow(async_fn_in_trait)]
pub trait SeedTarget {
    /// Delete every node and relationship.
    async fn delete_all(&self) -> Result<(), GraphError>;

    /// Create one node.
    async fn create_node(&self, node: &Node) -> Result<(), GraphError>;

    /// Create one relationship; returns how many were created (0 when an
    /// endpoint does not exist).
    async fn create_relationship(&self, rel: &Relationship) -> Result<i64, GraphError>;

    /// The user/goal/deadline report rows, ordered by goal id.
    async fn user_goal_deadlines(&self) -> Result<Vec<GoalDeadline>, GraphError>;

    /// Per-label and per-type counts.
    async fn graph_counts(&self) -> Result<GraphCounts, GraphError>;

    /// Total (nodes, relationships), including ones outside the schema.
    async fn totals(&self) -> Result<(i64, i64), GraphError>;

    /// Per-node relationship counts, see
    /// [`GraphClient::relationship_degrees`].
    async fn relationship_degrees(
        &self,
        label: NodeLabel,
        rel_type: RelType,
        direction: Direction,
    ) -> Result<Vec<(String, i64)>, GraphError>;
}

impl SeedTarget for GraphClient {
    async fn delete_all(&self) -> Result<(), GraphError> {
        GraphClient::delete_all(self).await
    }

    async fn create_node(&self, node: &Node) -> Result<(), GraphError> {
        GraphClient::create_node(self, node).await
    }

    async fn create_relationship(&self, rel: &Relationship) -> Result<i64, GraphError> {
        GraphClient::create_relationship(self, rel).await
    }

    async fn user_goal_deadlines(&self) -> Result<Vec<GoalDeadline>, GraphError> {
        GraphClient::user_goal_deadlines(self).await
    }

    async fn graph_counts(&self) -> Result<GraphCounts, GraphError> {
        GraphClient::graph_counts(self).await
    }

    async fn totals(&self) -> Result<(i64, i64), GraphError> {
        let nodes = self.count_all_nodes().await?;
        let relationships = self.count_all_relationships().await?;
        Ok((nodes, relationships))
    }

    async fn relationship_degrees(
        &self,
        label: NodeLabel,
        rel_type: RelType,
        direction: Direction,
    ) -> Result<Vec<(String, i64)>, GraphError> {
        GraphClient::relationship_degrees(self, label, rel_type, direction).await
    }
}
