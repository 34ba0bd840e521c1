//! AI Plan Builder
//!
//! Deterministic stand-in for the external plan generator. The api layer
//! wraps this in a fallible async call so swapping in the real backend does
//! not change any caller.

use crate::models::{GeneratedPlan, Milestone, PlanResource, ScheduleDay};

/// Produce the fixed demo plan, with every resource URL checked once
pub fn build_plan() -> GeneratedPlan {
    let resources = [
        (
            "Course",
            "React Official Tutorial",
            "4 hours",
            "https://reactjs.org/tutorial/tutorial.html",
        ),
        ("Video", "React Hooks Deep Dive", "2 hours", "invalid-url"),
        ("Project", "Build Todo App", "3 hours", "https://example.com/todo-app"),
    ]
    .into_iter()
    .map(|(resource_type, title, duration, url)| PlanResource {
        resource_type: resource_type.to_string(),
        title: title.to_string(),
        duration: duration.to_string(),
        url: url.to_string(),
        valid: resource_url_is_valid(url),
    })
    .collect();

    GeneratedPlan {
        weekly_schedule: vec![
            schedule_day("Monday", &["React Components", "JSX Syntax"], "2h"),
            schedule_day("Wednesday", &["State Management", "Hooks"], "2h"),
            schedule_day("Saturday", &["Project Practice", "Review"], "3h"),
        ],
        resources,
        milestones: vec![
            milestone(1, "Understand React Basics"),
            milestone(2, "Build First Component"),
            milestone(3, "Master State Management"),
            milestone(4, "Complete Final Project"),
        ],
    }
}

fn schedule_day(day: &str, topics: &[&str], duration: &str) -> ScheduleDay {
    ScheduleDay {
        day: day.to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        duration: duration.to_string(),
    }
}

fn milestone(week: u32, goal: &str) -> Milestone {
    Milestone {
        week,
        goal: goal.to_string(),
        completed: false,
    }
}

/// Absolute-URL check matching the browser `URL` constructor: a valid
/// scheme followed by `:` and a non-empty remainder.
pub fn resource_url_is_valid(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_alpha
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_scheme_is_invalid() {
        assert!(!resource_url_is_valid("invalid-url"));
        assert!(!resource_url_is_valid(""));
        assert!(!resource_url_is_valid("://missing-scheme"));
        assert!(!resource_url_is_valid("1http://digit-first"));
    }

    #[test]
    fn test_absolute_url_is_valid() {
        assert!(resource_url_is_valid("https://example.com/todo-app"));
        assert!(resource_url_is_valid("https://reactjs.org/tutorial/tutorial.html"));
        assert!(resource_url_is_valid("mailto:someone@example.com"));
    }

    #[test]
    fn test_built_plan_flags_resource_validity() {
        let plan = build_plan();
        let flags: Vec<bool> = plan.resources.iter().map(|r| r.valid).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_built_plan_shape() {
        let plan = build_plan();
        assert_eq!(plan.weekly_schedule.len(), 3);
        assert_eq!(plan.milestones.len(), 4);
        assert!(plan.milestones.iter().all(|m| !m.completed));
        assert_eq!(plan.milestones[3].week, 4);
    }
}
