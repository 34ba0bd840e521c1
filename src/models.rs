//! Frontend Models
//!
//! Data structures for goals, tasks, notifications, and generated plans.

use serde::{Deserialize, Serialize};

/// Goal lifecycle state, derived from the backend `completed` flag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
        }
    }
}

/// Goal as rendered on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// 0-100
    pub progress_percentage: u8,
    pub duration_days: u32,
    pub status: GoalStatus,
    pub category: String,
    #[serde(default)]
    pub weekly_schedule: Vec<ScheduleDay>,
    #[serde(default)]
    pub resources: Vec<PlanResource>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// Goal as returned by `GET /goals/` (progress is a 0-1 fraction)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteGoal {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub progress: f64,
    pub duration_days: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub weekly_schedule: Vec<ScheduleDay>,
    #[serde(default)]
    pub resources: Vec<PlanResource>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl From<RemoteGoal> for Goal {
    fn from(remote: RemoteGoal) -> Self {
        Goal {
            id: remote.id,
            title: remote.title,
            description: remote.description,
            progress_percentage: (remote.progress * 100.0).round().clamp(0.0, 100.0) as u8,
            duration_days: remote.duration_days,
            status: if remote.completed {
                GoalStatus::Completed
            } else {
                GoalStatus::Active
            },
            category: "AI Generated".to_string(),
            weekly_schedule: remote.weekly_schedule,
            resources: remote.resources,
            milestones: remote.milestones,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Dashboard task. Prerequisites are part of the task itself, so completion
/// gating is a traversal over the task list rather than a lookup in a side
/// table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    /// Free-text label ("Today", "Tomorrow"), not a date
    pub due_date: String,
    pub completed: bool,
    pub priority: Priority,
    #[serde(default)]
    pub prerequisites: Vec<u32>,
}

/// One day of the AI-generated weekly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub day: String,
    pub topics: Vec<String>,
    pub duration: String,
}

/// A learning resource suggested by the planner. `valid` is computed once,
/// at generation time, from URL parseability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub title: String,
    pub duration: String,
    pub url: String,
    #[serde(default)]
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub week: u32,
    pub goal: String,
    pub completed: bool,
}

/// Schedule, resources, and milestones produced by the planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub weekly_schedule: Vec<ScheduleDay>,
    pub resources: Vec<PlanResource>,
    pub milestones: Vec<Milestone>,
}

/// Header notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub created_at: String,
    pub is_read: bool,
}

/// Submission payload assembled from a finished wizard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub duration_days: u32,
    pub start_date: String,
    pub end_date: String,
    pub difficulty: String,
    pub study_schedule: String,
    pub weekly_hours: String,
    pub learning_style: String,
    pub resources: Vec<PlanResource>,
    pub milestones: Vec<Milestone>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(progress: f64, completed: bool) -> RemoteGoal {
        RemoteGoal {
            id: 7,
            title: "Learn React Fundamentals".to_string(),
            description: "Master React components, hooks, and state management".to_string(),
            progress,
            duration_days: 60,
            completed,
            weekly_schedule: Vec::new(),
            resources: Vec::new(),
            milestones: Vec::new(),
        }
    }

    #[test]
    fn test_remote_goal_maps_progress_fraction_to_percentage() {
        let goal = Goal::from(remote(0.35, false));
        assert_eq!(goal.progress_percentage, 35);
        assert_eq!(goal.status, GoalStatus::Active);
        assert_eq!(goal.category, "AI Generated");
    }

    #[test]
    fn test_remote_goal_completed_flag_becomes_status() {
        let goal = Goal::from(remote(1.0, true));
        assert_eq!(goal.progress_percentage, 100);
        assert_eq!(goal.status, GoalStatus::Completed);
    }

    #[test]
    fn test_remote_goal_progress_is_clamped() {
        assert_eq!(Goal::from(remote(1.2, false)).progress_percentage, 100);
        assert_eq!(Goal::from(remote(-0.1, false)).progress_percentage, 0);
    }

    #[test]
    fn test_remote_goal_tolerates_missing_optional_fields() {
        let goal: RemoteGoal = serde_json::from_str(
            r#"{"id": 1, "title": "t", "description": "d", "duration_days": 30}"#,
        )
        .unwrap();
        assert_eq!(goal.progress, 0.0);
        assert!(!goal.completed);
        assert!(goal.resources.is_empty());
    }
}
