//! Task Dependency Gating
//!
//! Each task owns its prerequisite ids; the completion check is a graph
//! traversal over the task list.

use crate::models::{Priority, Task};

/// Mock tasks shown on the dashboard. Task 2 depends on 1; task 3 on 1 and 2.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Learn React Conditional Rendering".to_string(),
            due_date: "Today".to_string(),
            completed: false,
            priority: Priority::High,
            prerequisites: Vec::new(),
        },
        Task {
            id: 2,
            title: "Practice SQL JOINs and Indexes".to_string(),
            due_date: "Tomorrow".to_string(),
            completed: false,
            priority: Priority::Medium,
            prerequisites: vec![1],
        },
        Task {
            id: 3,
            title: "Complete Pandas Data Analysis Project".to_string(),
            due_date: "In 2 days".to_string(),
            completed: false,
            priority: Priority::Medium,
            prerequisites: vec![1, 2],
        },
    ]
}

/// Incomplete prerequisites of `id`, transitively, deduplicated, in
/// first-encounter order
pub fn incomplete_prerequisites(tasks: &[Task], id: u32) -> Vec<u32> {
    let mut blockers = Vec::new();
    let mut visited = vec![id];
    let mut stack: Vec<u32> = tasks
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.prerequisites.clone())
        .unwrap_or_default();
    stack.reverse();

    while let Some(dep_id) = stack.pop() {
        if visited.contains(&dep_id) {
            continue;
        }
        visited.push(dep_id);
        if let Some(dep) = tasks.iter().find(|t| t.id == dep_id) {
            if !dep.completed {
                blockers.push(dep_id);
            }
            for next in dep.prerequisites.iter().rev() {
                stack.push(*next);
            }
        }
    }
    blockers
}

/// A task can be completed only once every prerequisite is complete
pub fn can_complete(tasks: &[Task], id: u32) -> bool {
    incomplete_prerequisites(tasks, id).is_empty()
}

/// Titles for a list of task ids; unknown ids fall back to "Task {id}"
pub fn prerequisite_titles(tasks: &[Task], ids: &[u32]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            tasks
                .iter()
                .find(|t| t.id == *id)
                .map(|t| t.title.clone())
                .unwrap_or_else(|| format!("Task {}", id))
        })
        .collect()
}

pub fn blocking_message(titles: &[String]) -> String {
    format!("Complete these tasks first: {}", titles.join(", "))
}

/// Flip a task's completion. Un-completing always succeeds; completing a
/// gated task returns the incomplete prerequisite ids instead.
pub fn toggle(tasks: &mut [Task], id: u32) -> Result<(), Vec<u32>> {
    let completed = match tasks.iter().find(|t| t.id == id) {
        Some(task) => task.completed,
        None => return Ok(()),
    };
    if !completed {
        let blockers = incomplete_prerequisites(tasks, id);
        if !blockers.is_empty() {
            return Err(blockers);
        }
    }
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.completed = !task.completed;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_without_prerequisites_always_succeeds() {
        let mut tasks = seed_tasks();
        assert!(toggle(&mut tasks, 1).is_ok());
        assert!(tasks[0].completed);
    }

    #[test]
    fn test_toggle_gated_task_is_rejected_naming_the_blocker() {
        let mut tasks = seed_tasks();
        let blockers = toggle(&mut tasks, 2).unwrap_err();
        assert_eq!(blockers, vec![1]);

        let titles = prerequisite_titles(&tasks, &blockers);
        let message = blocking_message(&titles);
        assert!(message.contains("Learn React Conditional Rendering"));
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_toggle_succeeds_once_prerequisites_complete() {
        let mut tasks = seed_tasks();
        toggle(&mut tasks, 1).unwrap();
        assert!(toggle(&mut tasks, 2).is_ok());
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_completion_requires_all_transitive_prerequisites() {
        let mut tasks = seed_tasks();
        assert_eq!(toggle(&mut tasks, 3).unwrap_err(), vec![1, 2]);

        toggle(&mut tasks, 1).unwrap();
        assert_eq!(toggle(&mut tasks, 3).unwrap_err(), vec![2]);

        toggle(&mut tasks, 2).unwrap();
        assert!(toggle(&mut tasks, 3).is_ok());
    }

    #[test]
    fn test_traversal_follows_indirect_prerequisites() {
        // 3 only names 2, but 2 names 1: completing 3 still surfaces 1.
        let mut tasks = seed_tasks();
        tasks[2].prerequisites = vec![2];
        assert_eq!(toggle(&mut tasks, 3).unwrap_err(), vec![2, 1]);
    }

    #[test]
    fn test_uncompleting_is_never_gated() {
        let mut tasks = seed_tasks();
        toggle(&mut tasks, 1).unwrap();
        toggle(&mut tasks, 2).unwrap();
        // Un-complete 1; 2 stays complete, and un-completing 2 is still fine.
        assert!(toggle(&mut tasks, 1).is_ok());
        assert!(toggle(&mut tasks, 2).is_ok());
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_unknown_prerequisite_renders_fallback_title() {
        let titles = prerequisite_titles(&seed_tasks(), &[99]);
        assert_eq!(titles, vec!["Task 99".to_string()]);
    }

    #[test]
    fn test_cyclic_prerequisites_terminate() {
        let mut tasks = seed_tasks();
        tasks[0].prerequisites = vec![2];
        // 1 <-> 2 cycle: traversal must not loop forever.
        let blockers = incomplete_prerequisites(&tasks, 2);
        assert_eq!(blockers, vec![1]);
    }
}
