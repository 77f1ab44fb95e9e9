//! The fixed goal-tracking dataset written by the seeder.
//!
//! One user working towards a FAANG job: four goals, three sub-goals,
//! two reminders and two work sessions, wired together by eleven
//! relationships. Only the dates vary, through the [`DateSource`].

use serde::Serialize;

use crate::dates::DateSource;
use crate::types::{
    Goal, GraphCounts, Node, RelType, Relationship, Reminder, Status, SubGoal, User, WorkSession,
};

use crate::dates::RelativeDay::{Today, WeekAgo, Yesterday};

/// Every record and relationship of one seeding run, in creation order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SeedDataset {
    pub users: Vec<User>,
    pub goals: Vec<Goal>,
    pub sub_goals: Vec<SubGoal>,
    pub reminders: Vec<Reminder>,
    pub work_sessions: Vec<WorkSession>,
    pub relationships: Vec<Relationship>,
}

impl SeedDataset {
    /// Build the dataset, stamping dates from `dates`.
    pub fn build(dates: &DateSource) -> Self {
        Self {
            users: users(dates),
            goals: goals(dates),
            sub_goals: sub_goals(dates),
            reminders: reminders(dates),
            work_sessions: work_sessions(dates),
            relationships: relationships(),
        }
    }

    /// All nodes: users, goals, sub-goals, reminders, then work sessions.
    pub fn nodes(&self) -> Vec<Node> {
        let users = self.users.iter().cloned().map(Node::User);
        let goals = self.goals.iter().cloned().map(Node::Goal);
        let sub_goals = self.sub_goals.iter().cloned().map(Node::SubGoal);
        let reminders = self.reminders.iter().cloned().map(Node::Reminder);
        let sessions = self.work_sessions.iter().cloned().map(Node::WorkSession);

        users
            .chain(goals)
            .chain(sub_goals)
            .chain(reminders)
            .chain(sessions)
            .collect()
    }

    /// Counts the graph should hold right after this dataset is seeded.
    pub fn expected_counts(&self) -> GraphCounts {
        let mut counts = GraphCounts::default();
        for node in self.nodes() {
            *counts.nodes.entry(node.label()).or_insert(0) += 1;
        }
        for rel in &self.relationships {
            *counts.relationships.entry(rel.rel_type).or_insert(0) += 1;
        }
        counts
    }
}

fn users(dates: &DateSource) -> Vec<User> {
    vec![User {
        user_id: "user4".to_string(),
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@developer.com".to_string(),
        total_progress: 30,
        account_created_on: dates.date("2023-01-01", WeekAgo),
    }]
}

fn goal(
    dates: &DateSource,
    id: &str,
    title: &str,
    description: &str,
    (start, deadline, estimate): (&str, &str, &str),
    progress: i64,
    status: Status,
) -> Goal {
    Goal {
        goal_id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        start_date: dates.date(start, WeekAgo),
        deadline: dates.date(deadline, Today),
        estimated_completion: dates.date(estimate, Yesterday),
        current_progress: progress,
        status,
    }
}

fn goals(dates: &DateSource) -> Vec<Goal> {
    vec![
        goal(
            dates,
            "goal1",
            "Research FAANG Companies",
            "Study company cultures, job roles, and requirements for Meta, Amazon, Apple, Netflix, Google",
            ("2023-01-05", "2023-02-28", "2023-02-27"),
            100,
            Status::Completed,
        ),
        goal(
            dates,
            "goal2",
            "Tailor Resume for Each FAANG Company",
            "Update and tailor resume for each FAANG company application",
            ("2023-03-01", "2023-03-31", "2023-03-28"),
            90,
            Status::InProgress,
        ),
        goal(
            dates,
            "goal3",
            "Apply to FAANG Jobs",
            "Submit job applications to FAANG companies",
            ("2023-04-01", "2023-06-30", "2023-06-29"),
            80,
            Status::InProgress,
        ),
        goal(
            dates,
            "goal4",
            "Prepare for Coding Interviews",
            "Practice coding problems and algorithms for FAANG coding interviews",
            ("2023-07-01", "2023-09-30", "2023-09-28"),
            70,
            Status::InProgress,
        ),
    ]
}

fn sub_goal(
    dates: &DateSource,
    id: &str,
    title: &str,
    description: &str,
    (start, deadline, estimate): (&str, &str, &str),
    progress: i64,
    status: Status,
) -> SubGoal {
    SubGoal {
        sub_goal_id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        start_date: dates.date(start, WeekAgo),
        deadline: dates.date(deadline, Today),
        estimated_completion: dates.date(estimate, Yesterday),
        progress_percentage: progress,
        status,
    }
}

fn sub_goals(dates: &DateSource) -> Vec<SubGoal> {
    vec![
        sub_goal(
            dates,
            "subgoal1",
            "Research Meta Software Engineering Roles",
            "Study job descriptions and roles at Meta",
            ("2023-01-05", "2023-01-15", "2023-01-14"),
            100,
            Status::Completed,
        ),
        sub_goal(
            dates,
            "subgoal2",
            "Tailor Resume for Meta",
            "Update resume to match Meta job requirements",
            ("2023-03-01", "2023-03-10", "2023-03-09"),
            90,
            Status::InProgress,
        ),
        sub_goal(
            dates,
            "subgoal3",
            "Submit Application to Meta",
            "Submit the job application to Meta",
            ("2023-04-01", "2023-04-05", "2023-04-04"),
            80,
            Status::InProgress,
        ),
    ]
}

fn reminders(dates: &DateSource) -> Vec<Reminder> {
    vec![
        Reminder {
            reminder_id: "reminder1".to_string(),
            title: "Follow up with Meta Recruiter".to_string(),
            reminder_due_date: dates.date("2023-04-15", Today),
            message: "Send follow-up email to Meta recruiter".to_string(),
        },
        Reminder {
            reminder_id: "reminder2".to_string(),
            title: "Submit Resume for Amazon".to_string(),
            reminder_due_date: dates.date("2023-05-10", Today),
            message: "Submit resume for Amazon Software Engineer role".to_string(),
        },
    ]
}

fn work_sessions(dates: &DateSource) -> Vec<WorkSession> {
    vec![
        WorkSession {
            work_session_id: "worksession1".to_string(),
            start_time: dates.datetime("2023-01-10T14:00", Yesterday),
            end_time: dates.datetime("2023-01-10T16:00", Yesterday),
            session_duration_hours: 2,
            description: "Studied Meta job descriptions and requirements".to_string(),
        },
        WorkSession {
            work_session_id: "worksession2".to_string(),
            start_time: dates.datetime("2023-03-05T10:00", Yesterday),
            end_time: dates.datetime("2023-03-05T12:00", Yesterday),
            session_duration_hours: 2,
            description: "Updated resume to match Meta\u{2019}s job requirements".to_string(),
        },
    ]
}

/// Users→goals, goals→sub-goals, reminders→sub-goals, sessions→sub-goals.
fn relationships() -> Vec<Relationship> {
    let has_goal = ["goal1", "goal2", "goal3", "goal4"]
        .into_iter()
        .map(|g| Relationship::new(RelType::HasGoal, "user4", g));

    let has_subgoal = [
        ("goal1", "subgoal1"),
        ("goal2", "subgoal2"),
        ("goal3", "subgoal3"),
    ]
    .into_iter()
    .map(|(g, sg)| Relationship::new(RelType::HasSubgoal, g, sg));

    let reminder_for = [("reminder1", "subgoal1"), ("reminder2", "subgoal2")]
        .into_iter()
        .map(|(r, sg)| Relationship::new(RelType::ReminderFor, r, sg));

    let session_for = [("worksession1", "subgoal1"), ("worksession2", "subgoal2")]
        .into_iter()
        .map(|(ws, sg)| Relationship::new(RelType::SessionFor, ws, sg));

    has_goal
        .chain(has_subgoal)
        .chain(reminder_for)
        .chain(session_for)
        .collect()
}
