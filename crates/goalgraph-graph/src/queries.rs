//! Read operations for the goal-tracking graph.

use neo4rs::query;
use serde::{Deserialize, Serialize};

use goalgraph_core::{GraphCounts, NodeLabel, RelType};

use crate::client::{GraphClient, GraphError};

/// One row of the user/goal/deadline report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDeadline {
    pub user: String,
    pub goal: String,
    pub deadline: String,
}

/// Which end of a relationship to count from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl GraphClient {
    // ── Report ───────────────────────────────────────────────────

    /// Every goal paired with the name of the user who owns it.
    ///
    /// Rows are ordered by goal id so repeated runs print identically.
    pub async fn user_goal_deadlines(&self) -> Result<Vec<GoalDeadline>, GraphError> {
        let q = query(
            "MATCH (u:User)-[:HAS_GOAL]->(g:Goal)
             RETURN u.name AS user, g.title AS goal, g.deadline AS deadline
             ORDER BY g.goalId",
        );

        let rows = self.query_rows(q).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let user: String = row.get("user").map_err(|e| {
                GraphError::Deserialization(format!("Failed to read user name: {e}"))
            })?;
            let goal: String = row.get("goal").map_err(|e| {
                GraphError::Deserialization(format!("Failed to read goal title: {e}"))
            })?;
            let deadline: String = row.get("deadline").map_err(|e| {
                GraphError::Deserialization(format!("Failed to read goal deadline: {e}"))
            })?;
            results.push(GoalDeadline {
                user,
                goal,
                deadline,
            });
        }
        Ok(results)
    }

    // ── Counts ───────────────────────────────────────────────────

    /// Count all nodes, whatever their label.
    pub async fn count_all_nodes(&self) -> Result<i64, GraphError> {
        self.query_count(query("MATCH (n) RETURN count(n) AS cnt")).await
    }

    /// Count all relationships, whatever their type.
    pub async fn count_all_relationships(&self) -> Result<i64, GraphError> {
        self.query_count(query("MATCH ()-[r]->() RETURN count(r) AS cnt")).await
    }

    /// Count nodes with a given label.
    pub async fn count_nodes(&self, label: NodeLabel) -> Result<i64, GraphError> {
        let cypher = format!("MATCH (n:{label}) RETURN count(n) AS cnt");
        self.query_count(query(&cypher)).await
    }

    /// Count relationships of a given type.
    pub async fn count_relationships(&self, rel_type: RelType) -> Result<i64, GraphError> {
        let cypher = format!("MATCH ()-[r:{rel_type}]->() RETURN count(r) AS cnt");
        self.query_count(query(&cypher)).await
    }

    /// Per-label and per-type counts for the goal-tracking schema.
    pub async fn graph_counts(&self) -> Result<GraphCounts, GraphError> {
        let mut counts = GraphCounts::default();

        for label in NodeLabel::ALL {
            let n = self.count_nodes(label).await?;
            if n > 0 {
                counts.nodes.insert(label, n);
            }
        }

        for rel_type in RelType::ALL {
            let n = self.count_relationships(rel_type).await?;
            if n > 0 {
                counts.relationships.insert(rel_type, n);
            }
        }

        Ok(counts)
    }

    /// For every node with `label`, the number of `rel_type` relationships
    /// attached in `direction`, keyed by the node's id property.
    ///
    /// Nodes with no such relationship are included with a count of 0.
    pub async fn relationship_degrees(
        &self,
        label: NodeLabel,
        rel_type: RelType,
        direction: Direction,
    ) -> Result<Vec<(String, i64)>, GraphError> {
        let pattern = match direction {
            Direction::Incoming => format!("(n)<-[r:{rel_type}]-()"),
            Direction::Outgoing => format!("(n)-[r:{rel_type}]->()"),
        };
        let cypher = format!(
            "MATCH (n:{label})
             OPTIONAL MATCH {pattern}
             RETURN n.{id_prop} AS id, count(r) AS cnt
             ORDER BY id",
            id_prop = label.id_property(),
        );

        let rows = self.query_rows(query(&cypher)).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.get("id").unwrap_or_default();
            let cnt: i64 = row.get("cnt").unwrap_or(0);
            results.push((id, cnt));
        }
        Ok(results)
    }
}
