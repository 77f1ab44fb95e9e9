//! The seeder: reset, seed, and report against a [`SeedTarget`].
//!
//! Steps run strictly one after another. Seeding is not transactional: if a
//! write fails midway the error is returned and the graph keeps whatever was
//! written before it.

use serde::Serialize;

use goalgraph_core::{DateSource, Relationship, SeedDataset};
use goalgraph_graph::GoalDeadline;

use crate::error::Result;
use crate::target::SeedTarget;

/// What a seeding run wrote.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SeedSummary {
    pub nodes_created: usize,
    pub relationships_created: i64,
    /// Relationships skipped because an endpoint did not exist.
    pub missing: Vec<Relationship>,
}

/// Seeds one dataset into one target.
pub struct Seeder<'a, T> {
    target: &'a T,
    dataset: SeedDataset,
}

impl<'a, T: SeedTarget> Seeder<'a, T> {
    /// Seeder for the standard dataset with dates from `dates`.
    pub fn new(target: &'a T, dates: &DateSource) -> Self {
        Self::with_dataset(target, SeedDataset::build(dates))
    }

    pub fn with_dataset(target: &'a T, dataset: SeedDataset) -> Self {
        Self { target, dataset }
    }

    pub fn dataset(&self) -> &SeedDataset {
        &self.dataset
    }

    pub(crate) fn target(&self) -> &'a T {
        self.target
    }

    /// Delete every node and relationship in the target.
    pub async fn reset(&self) -> Result<()> {
        self.target.delete_all().await?;
        tracing::info!("Graph reset");
        Ok(())
    }

    /// Reset, then write every node followed by every relationship.
    pub async fn seed(&self) -> Result<SeedSummary> {
        self.reset().await?;

        let mut summary = SeedSummary::default();

        for node in self.dataset.nodes() {
            self.target.create_node(&node).await?;
            tracing::debug!(label = %node.label(), id = node.id(), "Node created");
            summary.nodes_created += 1;
        }

        for rel in &self.dataset.relationships {
            let created = self.target.create_relationship(rel).await?;
            if created == 0 {
                tracing::warn!(
                    rel_type = %rel.rel_type,
                    from = %rel.from,
                    to = %rel.to,
                    "Relationship endpoint missing, nothing created"
                );
                summary.missing.push(rel.clone());
            } else {
                tracing::debug!(
                    rel_type = %rel.rel_type,
                    from = %rel.from,
                    to = %rel.to,
                    "Relationship created"
                );
            }
            summary.relationships_created += created;
        }

        tracing::info!(
            nodes = summary.nodes_created,
            relationships = summary.relationships_created,
            missing = summary.missing.len(),
            "Seed complete"
        );

        Ok(summary)
    }

    /// Every user goal with its deadline.
    pub async fn report(&self) -> Result<Vec<GoalDeadline>> {
        let rows = self.target.user_goal_deadlines().await?;
        tracing::info!(rows = rows.len(), "Report fetched");
        Ok(rows)
    }

    /// Seed (which resets first), then report.
    pub async fn run(&self) -> Result<Vec<GoalDeadline>> {
        self.seed().await?;
        self.report().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};

    use goalgraph_core::{NodeLabel, RelType};

    use super::*;
    use crate::error::SeedError;
    use crate::testing::MemoryGraph;

    #[tokio::test]
    async fn test_reset_empties_graph() {
        let graph = MemoryGraph::new();
        let seeder = Seeder::new(&graph, &DateSource::Fixed);
        seeder.seed().await.unwrap();
        assert!(graph.node_count() > 0);

        seeder.reset().await.unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.relationship_count(), 0);
    }

    #[tokio::test]
    async fn test_seed_creates_fixed_graph() {
        let graph = MemoryGraph::new();
        let summary = Seeder::new(&graph, &DateSource::Fixed).seed().await.unwrap();

        assert_eq!(summary.nodes_created, 12);
        assert_eq!(summary.relationships_created, 11);
        assert!(summary.missing.is_empty());

        let counts = graph.graph_counts().await.unwrap();
        assert_eq!(counts.nodes_with(NodeLabel::User), 1);
        assert_eq!(counts.nodes_with(NodeLabel::Goal), 4);
        assert_eq!(counts.nodes_with(NodeLabel::SubGoal), 3);
        assert_eq!(counts.nodes_with(NodeLabel::Reminder), 2);
        assert_eq!(counts.nodes_with(NodeLabel::WorkSession), 2);
    }

    #[tokio::test]
    async fn test_seed_clears_existing_data() {
        let graph = MemoryGraph::new();
        let stray = SeedDataset::build(&DateSource::Fixed).nodes().remove(1);
        graph.insert(stray);

        Seeder::new(&graph, &DateSource::Fixed).seed().await.unwrap();
        assert_eq!(graph.node_count(), 12);
    }

    #[tokio::test]
    async fn test_seed_twice_matches_seed_once() {
        let graph = MemoryGraph::new();
        let seeder = Seeder::new(&graph, &DateSource::Fixed);

        seeder.seed().await.unwrap();
        let once = graph.graph_counts().await.unwrap();
        seeder.seed().await.unwrap();
        let twice = graph.graph_counts().await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice, seeder.dataset().expected_counts());
    }

    #[tokio::test]
    async fn test_each_sub_goal_has_one_parent() {
        let graph = MemoryGraph::new();
        Seeder::new(&graph, &DateSource::Fixed).seed().await.unwrap();

        let incoming = graph
            .relationship_degrees(
                NodeLabel::SubGoal,
                RelType::HasSubgoal,
                goalgraph_graph::Direction::Incoming,
            )
            .await
            .unwrap();
        assert_eq!(incoming.len(), 3);
        assert!(incoming.iter().all(|(_, cnt)| *cnt == 1));
    }

    #[tokio::test]
    async fn test_report_after_seed_has_one_row_per_goal() {
        let graph = MemoryGraph::new();
        let rows = Seeder::new(&graph, &DateSource::Fixed).run().await.unwrap();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.user == "Alex Johnson"));
        let titles: Vec<&str> = rows.iter().map(|r| r.goal.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Research FAANG Companies",
                "Tailor Resume for Each FAANG Company",
                "Apply to FAANG Jobs",
                "Prepare for Coding Interviews",
            ]
        );
        assert_eq!(rows[0].deadline, "2023-02-28");
    }

    #[tokio::test]
    async fn test_relative_report_shows_today_as_deadline() {
        let graph = MemoryGraph::new();
        let today = Local::now().date_naive();
        let dates = DateSource::Relative { today };
        let rows = Seeder::new(&graph, &dates).run().await.unwrap();

        let row = rows
            .iter()
            .find(|r| r.goal == "Tailor Resume for Each FAANG Company")
            .unwrap();
        let today = today.format("%Y-%m-%d").to_string();
        assert_eq!(row.user, "Alex Johnson");
        assert_eq!(row.deadline, today);

        let line = crate::report::format_row(row);
        assert!(line.contains("Alex Johnson"));
        assert!(line.contains("Tailor Resume for Each FAANG Company"));
        assert!(line.contains(&today));
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_skipped_not_fatal() {
        let graph = MemoryGraph::new();
        let mut dataset = SeedDataset::build(&DateSource::Relative {
            today: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        });
        dataset.sub_goals.pop();

        let summary = Seeder::with_dataset(&graph, dataset).seed().await.unwrap();
        assert_eq!(summary.nodes_created, 11);
        assert_eq!(summary.relationships_created, 10);
        assert_eq!(
            summary.missing,
            vec![Relationship::new(RelType::HasSubgoal, "goal3", "subgoal3")]
        );
    }

    #[tokio::test]
    async fn test_failure_midway_leaves_partial_graph() {
        let graph = MemoryGraph::failing_on_node_write(5);
        let err = Seeder::new(&graph, &DateSource::Fixed)
            .seed()
            .await
            .unwrap_err();

        assert!(matches!(err, SeedError::Graph(_)));
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.relationship_count(), 0);
    }
}
