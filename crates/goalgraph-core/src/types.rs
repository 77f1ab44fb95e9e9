//! Core domain types for the goal-tracking graph.
//!
//! Field names serialize to the camelCase property names stored on the
//! Neo4j nodes, so a record's JSON form and its graph form line up.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ── Node Types ────────────────────────────────────────────────────

/// The person whose goals are tracked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub total_progress: i64,
    pub account_created_on: String,
}

/// A top-level goal owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub goal_id: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub deadline: String,
    pub estimated_completion: String,
    pub current_progress: i64,
    pub status: Status,
}

/// A step towards a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubGoal {
    pub sub_goal_id: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub deadline: String,
    pub estimated_completion: String,
    pub progress_percentage: i64,
    pub status: Status,
}

/// A dated nudge attached to a sub-goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub reminder_id: String,
    pub title: String,
    pub reminder_due_date: String,
    pub message: String,
}

/// A block of time spent on a sub-goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkSession {
    pub work_session_id: String,
    pub start_time: String,
    pub end_time: String,
    pub session_duration_hours: i64,
    pub description: String,
}

/// Completion status of goals and sub-goals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl Status {
    /// The property value stored on the node.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
        }
    }
}

/// Union of all node types in the graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "label")]
pub enum Node {
    User(User),
    Goal(Goal),
    SubGoal(SubGoal),
    Reminder(Reminder),
    WorkSession(WorkSession),
}

impl Node {
    pub fn label(&self) -> NodeLabel {
        match self {
            Self::User(_) => NodeLabel::User,
            Self::Goal(_) => NodeLabel::Goal,
            Self::SubGoal(_) => NodeLabel::SubGoal,
            Self::Reminder(_) => NodeLabel::Reminder,
            Self::WorkSession(_) => NodeLabel::WorkSession,
        }
    }

    /// The value of the node's identifying property.
    pub fn id(&self) -> &str {
        match self {
            Self::User(n) => &n.user_id,
            Self::Goal(n) => &n.goal_id,
            Self::SubGoal(n) => &n.sub_goal_id,
            Self::Reminder(n) => &n.reminder_id,
            Self::WorkSession(n) => &n.work_session_id,
        }
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::new(self.label(), self.id())
    }
}

// ── Labels and Keys ───────────────────────────────────────────────

/// Neo4j node label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeLabel {
    User,
    Goal,
    SubGoal,
    Reminder,
    WorkSession,
}

impl NodeLabel {
    pub const ALL: [NodeLabel; 5] = [
        Self::User,
        Self::Goal,
        Self::SubGoal,
        Self::Reminder,
        Self::WorkSession,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Goal => "Goal",
            Self::SubGoal => "SubGoal",
            Self::Reminder => "Reminder",
            Self::WorkSession => "WorkSession",
        }
    }

    /// Name of the property that identifies nodes with this label.
    pub fn id_property(&self) -> &'static str {
        match self {
            Self::User => "userId",
            Self::Goal => "goalId",
            Self::SubGoal => "subGoalId",
            Self::Reminder => "reminderId",
            Self::WorkSession => "workSessionId",
        }
    }

    /// Parse a label as returned by `labels(n)`.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one node: its label plus the value of its id property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub label: NodeLabel,
    pub id: String,
}

impl NodeKey {
    pub fn new(label: NodeLabel, id: impl Into<String>) -> Self {
        Self {
            label,
            id: id.into(),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label, self.id)
    }
}

// ── Relationships ─────────────────────────────────────────────────

/// Directed relationship types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelType {
    /// User → Goal
    HasGoal,
    /// Goal → SubGoal
    HasSubgoal,
    /// Reminder → SubGoal
    ReminderFor,
    /// WorkSession → SubGoal
    SessionFor,
}

impl RelType {
    pub const ALL: [RelType; 4] = [
        Self::HasGoal,
        Self::HasSubgoal,
        Self::ReminderFor,
        Self::SessionFor,
    ];

    /// The Cypher relationship type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HasGoal => "HAS_GOAL",
            Self::HasSubgoal => "HAS_SUBGOAL",
            Self::ReminderFor => "REMINDER_FOR",
            Self::SessionFor => "SESSION_FOR",
        }
    }

    /// The (source, target) labels this relationship connects.
    pub fn endpoints(&self) -> (NodeLabel, NodeLabel) {
        match self {
            Self::HasGoal => (NodeLabel::User, NodeLabel::Goal),
            Self::HasSubgoal => (NodeLabel::Goal, NodeLabel::SubGoal),
            Self::ReminderFor => (NodeLabel::Reminder, NodeLabel::SubGoal),
            Self::SessionFor => (NodeLabel::WorkSession, NodeLabel::SubGoal),
        }
    }

    /// Parse a relationship type as returned by `type(r)`.
    pub fn from_cypher(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for RelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed relationship between two existing nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relationship {
    pub rel_type: RelType,
    pub from: NodeKey,
    pub to: NodeKey,
}

impl Relationship {
    /// Build a relationship, taking endpoint labels from the type.
    pub fn new(rel_type: RelType, from_id: &str, to_id: &str) -> Self {
        let (from_label, to_label) = rel_type.endpoints();
        Self {
            rel_type,
            from: NodeKey::new(from_label, from_id),
            to: NodeKey::new(to_label, to_id),
        }
    }
}

// ── Counts ────────────────────────────────────────────────────────

/// Node and relationship counts, keyed by label and type.
///
/// Labels or types with zero instances are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphCounts {
    pub nodes: BTreeMap<NodeLabel, i64>,
    pub relationships: BTreeMap<RelType, i64>,
}

impl GraphCounts {
    pub fn total_nodes(&self) -> i64 {
        self.nodes.values().sum()
    }

    pub fn total_relationships(&self) -> i64 {
        self.relationships.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_nodes() == 0 && self.total_relationships() == 0
    }

    pub fn nodes_with(&self, label: NodeLabel) -> i64 {
        self.nodes.get(&label).copied().unwrap_or(0)
    }

    pub fn relationships_of(&self, rel_type: RelType) -> i64 {
        self.relationships.get(&rel_type).copied().unwrap_or(0)
    }
}
