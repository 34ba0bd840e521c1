//! Goal Creation Wizard
//!
//! The three-step state machine and its field validation, kept out of the
//! view code so the transition and validation rules are testable on their
//! own.

use chrono::NaiveDate;
use reactive_stores::Store;

use crate::models::{Milestone, PlanResource};

pub const TITLE_MAX: usize = 100;
pub const TITLE_WARN: usize = 80;
pub const DESCRIPTION_MAX: usize = 500;
pub const DESCRIPTION_WARN: usize = 450;

/// Select options: (value, label)
pub const DURATION_PRESETS: &[(&str, &str)] = &[
    ("7", "1 Week"),
    ("14", "2 Weeks"),
    ("30", "1 Month"),
    ("60", "2 Months"),
    ("90", "3 Months"),
    ("custom", "Custom duration..."),
];

pub const DIFFICULTIES: &[(&str, &str)] = &[
    ("beginner", "🚀 Beginner"),
    ("intermediate", "⚡ Intermediate"),
    ("advanced", "🔥 Advanced"),
];

pub const STUDY_SCHEDULES: &[(&str, &str)] = &[
    ("flexible", "Flexible (Self-paced)"),
    ("regular", "Regular (2-3 times/week)"),
    ("intensive", "Intensive (Daily)"),
];

pub const WEEKLY_HOURS: &[(&str, &str)] = &[
    ("2", "2-3 hours"),
    ("5", "5-7 hours"),
    ("10", "10+ hours"),
];

pub const LEARNING_STYLES: &[(&str, &str)] = &[
    ("visual", "👀 Visual (Videos, Diagrams)"),
    ("reading", "📖 Reading (Articles, Docs)"),
    ("hands-on", "🛠️ Hands-on (Projects, Exercises)"),
    ("mixed", "🌈 Mixed (All of the above)"),
];

/// Goals already on the dashboard, used for the duplicate-title check
pub const EXISTING_GOAL_TITLES: &[&str] = &[
    "Learn React Fundamentals",
    "Master SQL Database",
    "Python for Data Science",
];

/// Wizard position. Transitions are linear: no skips, no jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Goal,
    Plan,
    Review,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Goal => 1,
            WizardStep::Plan => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Goal => "Goal",
            WizardStep::Plan => "Plan",
            WizardStep::Review => "Review",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            WizardStep::Goal => "Step 1: Define Your Goal",
            WizardStep::Plan => "Step 2: Create Your Plan",
            WizardStep::Review => "Step 3: Review & Create",
        }
    }

    /// Advance one step. Leaving the Goal step requires both required
    /// fields; Review has nowhere further to go (submission is a separate
    /// operation).
    pub fn forward(self, title: &str, description: &str) -> WizardStep {
        match self {
            WizardStep::Goal if goal_step_complete(title, description) => WizardStep::Plan,
            WizardStep::Goal => WizardStep::Goal,
            WizardStep::Plan => WizardStep::Review,
            WizardStep::Review => WizardStep::Review,
        }
    }

    /// Step back. Always permitted and never clears entered data.
    pub fn back(self) -> WizardStep {
        match self {
            WizardStep::Goal => WizardStep::Goal,
            WizardStep::Plan => WizardStep::Goal,
            WizardStep::Review => WizardStep::Plan,
        }
    }
}

/// Form data accumulated across the three steps. Created empty at wizard
/// mount, mutated field by field, discarded after submission navigates
/// away.
#[derive(Clone, Debug, Store)]
pub struct WizardForm {
    pub title: String,
    pub description: String,
    /// One of the DURATION_PRESETS values
    pub duration_days: String,
    pub custom_days: String,
    pub start_date: String,
    pub end_date: String,
    pub difficulty: String,
    pub study_schedule: String,
    pub weekly_hours: String,
    pub learning_style: String,
    pub resources: Vec<PlanResource>,
    pub milestones: Vec<Milestone>,
}

impl WizardForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            duration_days: "30".to_string(),
            custom_days: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            difficulty: "beginner".to_string(),
            study_schedule: "flexible".to_string(),
            weekly_hours: "5".to_string(),
            learning_style: "visual".to_string(),
            resources: Vec::new(),
            milestones: Vec::new(),
        }
    }
}

impl Default for WizardForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Step 1 gate: both required fields filled in
pub fn goal_step_complete(title: &str, description: &str) -> bool {
    !title.is_empty() && !description.is_empty()
}

/// Soft limit warning: Some(remaining) once the length crosses the warning
/// threshold
pub fn chars_remaining(len: usize, max: usize, warn: usize) -> Option<usize> {
    (len > warn).then(|| max.saturating_sub(len))
}

/// Case-insensitive duplicate check against the existing goal titles.
/// Advisory only: the wizard shows the error but still allows advancing.
pub fn is_duplicate_title(title: &str, existing: &[&str]) -> bool {
    let trimmed = title.trim();
    !trimmed.is_empty()
        && existing
            .iter()
            .any(|goal| goal.to_lowercase() == trimmed.to_lowercase())
}

/// Problems found in the schedule dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateIssue {
    /// Hard error: the target date must be strictly after the start date
    EndNotAfterStart,
    /// Non-blocking warning: the date span disagrees with the selected
    /// duration preset
    DurationMismatch { range_days: i64, selected_days: i64 },
}

/// Validate the start/target dates against each other and the selected
/// duration preset. Returns nothing until both dates parse as YYYY-MM-DD.
pub fn check_dates(start: &str, end: &str, duration_preset: &str) -> Vec<DateIssue> {
    let (Some(start), Some(end)) = (parse_date(start), parse_date(end)) else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    if end <= start {
        issues.push(DateIssue::EndNotAfterStart);
    }
    if let Ok(selected_days) = duration_preset.parse::<i64>() {
        let range_days = (end - start).num_days().abs();
        if range_days != selected_days {
            issues.push(DateIssue::DurationMismatch {
                range_days,
                selected_days,
            });
        }
    }
    issues
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Resolve the preset (or the custom day count) into a number of days,
/// falling back to 30 on anything unparseable
pub fn effective_duration_days(duration_days: &str, custom_days: &str) -> u32 {
    let raw = if duration_days == "custom" {
        custom_days
    } else {
        duration_days
    };
    raw.trim().parse().unwrap_or(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_step_blocks_forward_until_fields_filled() {
        let step = WizardStep::Goal;
        assert_eq!(step.forward("", ""), WizardStep::Goal);
        assert_eq!(step.forward("Learn Rust", ""), WizardStep::Goal);
        assert_eq!(step.forward("", "Ownership and borrowing"), WizardStep::Goal);
        assert_eq!(
            step.forward("Learn Rust", "Ownership and borrowing"),
            WizardStep::Plan
        );
    }

    #[test]
    fn test_plan_step_advances_unconditionally() {
        assert_eq!(WizardStep::Plan.forward("", ""), WizardStep::Review);
        assert_eq!(WizardStep::Review.forward("", ""), WizardStep::Review);
    }

    #[test]
    fn test_back_is_always_permitted() {
        assert_eq!(WizardStep::Review.back(), WizardStep::Plan);
        assert_eq!(WizardStep::Plan.back(), WizardStep::Goal);
        assert_eq!(WizardStep::Goal.back(), WizardStep::Goal);
    }

    #[test]
    fn test_duplicate_title_is_case_insensitive_and_trimmed() {
        assert!(is_duplicate_title(
            "learn react fundamentals",
            EXISTING_GOAL_TITLES
        ));
        assert!(is_duplicate_title(
            "  Learn React Fundamentals  ",
            EXISTING_GOAL_TITLES
        ));
        assert!(!is_duplicate_title("Learn React", EXISTING_GOAL_TITLES));
        assert!(!is_duplicate_title("", EXISTING_GOAL_TITLES));
    }

    #[test]
    fn test_duplicate_title_is_advisory_only() {
        // A duplicate title still satisfies the step gate: the check warns
        // but does not block.
        let title = "Learn React Fundamentals";
        assert!(is_duplicate_title(title, EXISTING_GOAL_TITLES));
        assert_eq!(
            WizardStep::Goal.forward(title, "brush up on hooks"),
            WizardStep::Plan
        );
    }

    #[test]
    fn test_chars_remaining_warns_past_threshold() {
        assert_eq!(chars_remaining(80, TITLE_MAX, TITLE_WARN), None);
        assert_eq!(chars_remaining(81, TITLE_MAX, TITLE_WARN), Some(19));
        assert_eq!(chars_remaining(100, TITLE_MAX, TITLE_WARN), Some(0));
        assert_eq!(
            chars_remaining(451, DESCRIPTION_MAX, DESCRIPTION_WARN),
            Some(49)
        );
    }

    #[test]
    fn test_equal_dates_are_an_error() {
        let issues = check_dates("2025-01-01", "2025-01-01", "custom");
        assert_eq!(issues, vec![DateIssue::EndNotAfterStart]);
    }

    #[test]
    fn test_end_before_start_is_an_error() {
        let issues = check_dates("2025-02-01", "2025-01-01", "custom");
        assert!(issues.contains(&DateIssue::EndNotAfterStart));
    }

    #[test]
    fn test_duration_mismatch_is_a_warning() {
        let issues = check_dates("2025-01-01", "2025-01-31", "60");
        assert_eq!(
            issues,
            vec![DateIssue::DurationMismatch {
                range_days: 30,
                selected_days: 60,
            }]
        );
    }

    #[test]
    fn test_matching_range_produces_no_issues() {
        assert!(check_dates("2025-01-01", "2025-01-31", "30").is_empty());
    }

    #[test]
    fn test_unparseable_dates_produce_no_issues() {
        assert!(check_dates("", "", "30").is_empty());
        assert!(check_dates("2025-01-01", "", "30").is_empty());
        assert!(check_dates("not-a-date", "2025-01-31", "30").is_empty());
    }

    #[test]
    fn test_effective_duration_resolves_presets_and_custom() {
        assert_eq!(effective_duration_days("60", ""), 60);
        assert_eq!(effective_duration_days("custom", "45"), 45);
        assert_eq!(effective_duration_days("custom", ""), 30);
        assert_eq!(effective_duration_days("custom", "lots"), 30);
    }

    #[test]
    fn test_new_form_defaults_match_the_selects() {
        let form = WizardForm::new();
        assert_eq!(form.duration_days, "30");
        assert_eq!(form.difficulty, "beginner");
        assert_eq!(form.study_schedule, "flexible");
        assert_eq!(form.weekly_hours, "5");
        assert_eq!(form.learning_style, "visual");
        assert!(form.resources.is_empty());
    }
}
