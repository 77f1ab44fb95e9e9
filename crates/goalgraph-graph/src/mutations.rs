//! Write operations for the goal-tracking graph.
//!
//! Nodes are written with plain CREATE: the seeder wipes the graph first,
//! so there is nothing to merge with. Nodes are identified by their label
//! plus the label's id property (`goalId`, `subGoalId`, ...).

use neo4rs::query;

use goalgraph_core::{Goal, Node, Relationship, Reminder, SubGoal, User, WorkSession};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    // ── Reset ────────────────────────────────────────────────────

    /// Delete every node and relationship in the database.
    pub async fn delete_all(&self) -> Result<(), GraphError> {
        self.run(query("MATCH (n) DETACH DELETE n")).await
    }

    // ── Node Creation ────────────────────────────────────────────

    /// Create any node type.
    pub async fn create_node(&self, node: &Node) -> Result<(), GraphError> {
        match node {
            Node::User(u) => self.create_user(u).await,
            Node::Goal(g) => self.create_goal(g).await,
            Node::SubGoal(sg) => self.create_sub_goal(sg).await,
            Node::Reminder(r) => self.create_reminder(r).await,
            Node::WorkSession(ws) => self.create_work_session(ws).await,
        }
    }

    pub async fn create_user(&self, user: &User) -> Result<(), GraphError> {
        let q = query(
            "CREATE (n:User {
               userId: $userId, name: $name, email: $email,
               totalProgress: $totalProgress, accountCreatedOn: $accountCreatedOn
             })",
        )
        .param("userId", user.user_id.clone())
        .param("name", user.name.clone())
        .param("email", user.email.clone())
        .param("totalProgress", user.total_progress)
        .param("accountCreatedOn", user.account_created_on.clone());

        self.run(q).await
    }

    pub async fn create_goal(&self, goal: &Goal) -> Result<(), GraphError> {
        let q = query(
            "CREATE (n:Goal {
               goalId: $goalId, title: $title, description: $description,
               startDate: $startDate, deadline: $deadline,
               estimatedCompletion: $estimatedCompletion,
               currentProgress: $currentProgress, status: $status
             })",
        )
        .param("goalId", goal.goal_id.clone())
        .param("title", goal.title.clone())
        .param("description", goal.description.clone())
        .param("startDate", goal.start_date.clone())
        .param("deadline", goal.deadline.clone())
        .param("estimatedCompletion", goal.estimated_completion.clone())
        .param("currentProgress", goal.current_progress)
        .param("status", goal.status.as_str());

        self.run(q).await
    }

    pub async fn create_sub_goal(&self, sub_goal: &SubGoal) -> Result<(), GraphError> {
        let q = query(
            "CREATE (n:SubGoal {
               subGoalId: $subGoalId, title: $title, description: $description,
               startDate: $startDate, deadline: $deadline,
               estimatedCompletion: $estimatedCompletion,
               progressPercentage: $progressPercentage, status: $status
             })",
        )
        .param("subGoalId", sub_goal.sub_goal_id.clone())
        .param("title", sub_goal.title.clone())
        .param("description", sub_goal.description.clone())
        .param("startDate", sub_goal.start_date.clone())
        .param("deadline", sub_goal.deadline.clone())
        .param("estimatedCompletion", sub_goal.estimated_completion.clone())
        .param("progressPercentage", sub_goal.progress_percentage)
        .param("status", sub_goal.status.as_str());

        self.run(q).await
    }

    pub async fn create_reminder(&self, reminder: &Reminder) -> Result<(), GraphError> {
        let q = query(
            "CREATE (n:Reminder {
               reminderId: $reminderId, title: $title,
               reminderDueDate: $reminderDueDate, message: $message
             })",
        )
        .param("reminderId", reminder.reminder_id.clone())
        .param("title", reminder.title.clone())
        .param("reminderDueDate", reminder.reminder_due_date.clone())
        .param("message", reminder.message.clone());

        self.run(q).await
    }

    pub async fn create_work_session(&self, session: &WorkSession) -> Result<(), GraphError> {
        let q = query(
            "CREATE (n:WorkSession {
               workSessionId: $workSessionId, startTime: $startTime, endTime: $endTime,
               sessionDurationHours: $sessionDurationHours, description: $description
             })",
        )
        .param("workSessionId", session.work_session_id.clone())
        .param("startTime", session.start_time.clone())
        .param("endTime", session.end_time.clone())
        .param("sessionDurationHours", session.session_duration_hours)
        .param("description", session.description.clone());

        self.run(q).await
    }

    // ── Relationship Creation ────────────────────────────────────

    /// Create a relationship between two existing nodes.
    ///
    /// Returns how many relationships were created. A missing endpoint
    /// matches nothing and yields 0 rather than an error.
    pub async fn create_relationship(&self, rel: &Relationship) -> Result<i64, GraphError> {
        let cypher = format!(
            "MATCH (a:{from_label} {{{from_prop}: $from_id}})
             MATCH (b:{to_label} {{{to_prop}: $to_id}})
             CREATE (a)-[r:{rel_type}]->(b)
             RETURN count(r) AS cnt",
            from_label = rel.from.label.as_str(),
            from_prop = rel.from.label.id_property(),
            to_label = rel.to.label.as_str(),
            to_prop = rel.to.label.id_property(),
            rel_type = rel.rel_type.as_str(),
        );

        let q = query(&cypher)
            .param("from_id", rel.from.id.clone())
            .param("to_id", rel.to.id.clone());

        self.query_count(q).await
    }
}
