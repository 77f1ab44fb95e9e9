//! In-memory [`SeedTarget`] used by unit tests.

use std::sync::Mutex;

use goalgraph_core::{GraphCounts, Node, NodeKey, NodeLabel, RelType, Relationship};
use goalgraph_graph::{Direction, GoalDeadline, GraphError};

use crate::target::SeedTarget;

#[derive(Default)]
struct State {
    nodes: Vec<Node>,
    relationships: Vec<Relationship>,
    node_writes: usize,
}

/// A graph held in memory, with optional write failure injection.
#[derive(Default)]
pub struct MemoryGraph {
    state: Mutex<State>,
    fail_on_node_write: Option<usize>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `n`th node write (0-based) with a connection error.
    pub fn failing_on_node_write(n: usize) -> Self {
        Self {
            fail_on_node_write: Some(n),
            ..Self::default()
        }
    }

    pub fn node_count(&self) -> usize {
        self.state.lock().unwrap().nodes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.state.lock().unwrap().relationships.len()
    }

    /// Insert a node directly, bypassing failure injection.
    pub fn insert(&self, node: Node) {
        self.state.lock().unwrap().nodes.push(node);
    }

    pub fn link(&self, rel: Relationship) {
        self.state.lock().unwrap().relationships.push(rel);
    }
}

impl State {
    fn find(&self, key: &NodeKey) -> Option<&Node> {
        self.nodes.iter().find(|n| n.key() == *key)
    }
}

impl SeedTarget for MemoryGraph {
    async fn delete_all(&self) -> Result<(), GraphError> {
        let mut state = self.state.lock().unwrap();
        state.nodes.clear();
        state.relationships.clear();
        Ok(())
    }

    async fn create_node(&self, node: &Node) -> Result<(), GraphError> {
        let mut state = self.state.lock().unwrap();
        let write = state.node_writes;
        state.node_writes += 1;
        if self.fail_on_node_write == Some(write) {
            return Err(GraphError::Connection("connection reset".to_string()));
        }
        state.nodes.push(node.clone());
        Ok(())
    }

    async fn create_relationship(&self, rel: &Relationship) -> Result<i64, GraphError> {
        let mut state = self.state.lock().unwrap();
        let sources = state.nodes.iter().filter(|n| n.key() == rel.from).count();
        let targets = state.nodes.iter().filter(|n| n.key() == rel.to).count();
        let created = sources * targets;
        for _ in 0..created {
            state.relationships.push(rel.clone());
        }
        Ok(created as i64)
    }

    async fn user_goal_deadlines(&self) -> Result<Vec<GoalDeadline>, GraphError> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<(String, GoalDeadline)> = Vec::new();
        for rel in state.relationships.iter().filter(|r| r.rel_type == RelType::HasGoal) {
            let (Some(Node::User(user)), Some(Node::Goal(goal))) =
                (state.find(&rel.from), state.find(&rel.to))
            else {
                continue;
            };
            rows.push((
                goal.goal_id.clone(),
                GoalDeadline {
                    user: user.name.clone(),
                    goal: goal.title.clone(),
                    deadline: goal.deadline.clone(),
                },
            ));
        }
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(rows.into_iter().map(|(_, row)| row).collect())
    }

    async fn graph_counts(&self) -> Result<GraphCounts, GraphError> {
        let state = self.state.lock().unwrap();
        let mut counts = GraphCounts::default();
        for node in &state.nodes {
            *counts.nodes.entry(node.label()).or_insert(0) += 1;
        }
        for rel in &state.relationships {
            *counts.relationships.entry(rel.rel_type).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn totals(&self) -> Result<(i64, i64), GraphError> {
        let state = self.state.lock().unwrap();
        Ok((state.nodes.len() as i64, state.relationships.len() as i64))
    }

    async fn relationship_degrees(
        &self,
        label: NodeLabel,
        rel_type: RelType,
        direction: Direction,
    ) -> Result<Vec<(String, i64)>, GraphError> {
        let state = self.state.lock().unwrap();
        let mut degrees: Vec<(String, i64)> = state
            .nodes
            .iter()
            .filter(|n| n.label() == label)
            .map(|n| {
                let key = n.key();
                let cnt = state
                    .relationships
                    .iter()
                    .filter(|r| r.rel_type == rel_type)
                    .filter(|r| match direction {
                        Direction::Incoming => r.to == key,
                        Direction::Outgoing => r.from == key,
                    })
                    .count();
                (n.id().to_string(), cnt as i64)
            })
            .collect();
        degrees.sort();
        Ok(degrees)
    }
}
