//! Status filter and search over the fetched task snapshot

use std::fmt;
use std::str::FromStr;

use tm_core::task::{Task, TaskStatus};

/// Which statuses the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [Self::All, Self::Pending, Self::InProgress, Self::Completed];

    /// The status a task must have, `None` for `All`
    pub fn status(&self) -> Option<TaskStatus> {
        match self {
            Self::All => None,
            Self::Pending => Some(TaskStatus::Pending),
            Self::InProgress => Some(TaskStatus::InProgress),
            Self::Completed => Some(TaskStatus::Completed),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.status().map_or(true, |status| task.status == status)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Human label, as shown on the filter bar
    pub fn label(&self) -> &'static str {
        match self.status() {
            Some(status) => status.as_str(),
            None => "All",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| {
                format!("unknown filter `{s}`, expected one of all, pending, in-progress, completed")
            })
    }
}

fn matches_search(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle)
        || task.description_text().to_lowercase().contains(needle)
}

/// Filter `tasks` by status, then by case-insensitive search text.
///
/// Search applies only when the text is non-blank; the untrimmed text is
/// what gets matched. Order is preserved and tasks are never modified.
pub fn visible_tasks(tasks: &[Task], filter: StatusFilter, search: &str) -> Vec<Task> {
    let needle = (!search.trim().is_empty()).then(|| search.to_lowercase());

    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .filter(|task| needle.as_deref().map_or(true, |n| matches_search(task, n)))
        .cloned()
        .collect()
}

/// Per-status totals over the whole snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn of(tasks: &[Task]) -> Self {
        tasks.iter().fold(
            Self {
                all: tasks.len(),
                ..Default::default()
            },
            |mut counts, task| {
                match task.status {
                    TaskStatus::Pending => counts.pending += 1,
                    TaskStatus::InProgress => counts.in_progress += 1,
                    TaskStatus::Completed => counts.completed += 1,
                }
                counts
            },
        )
    }

    pub fn get(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Pending => self.pending,
            StatusFilter::InProgress => self.in_progress,
            StatusFilter::Completed => self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn task(title: &str, description: &str, status: TaskStatus) -> Task {
        Task::new(title).with_description(description).with_status(status)
    }

    #[test]
    fn completed_filter_keeps_only_completed() {
        let tasks = vec![
            task("a", "", TaskStatus::Pending),
            task("b", "", TaskStatus::Completed),
            task("c", "", TaskStatus::InProgress),
        ];

        let visible = visible_tasks(&tasks, StatusFilter::Completed, "");
        assert_eq!(visible, vec![tasks[1].clone()]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let tasks = vec![task("Buy milk", "2%", TaskStatus::Pending)];
        assert_eq!(visible_tasks(&tasks, StatusFilter::All, "MILK").len(), 1);
    }

    #[test]
    fn search_covers_description_and_missing_description() {
        let tasks = vec![
            task("Groceries", "oat MILK", TaskStatus::Pending),
            Task::new("No description"),
        ];

        let visible = visible_tasks(&tasks, StatusFilter::All, "milk");
        assert_eq!(visible, vec![tasks[0].clone()]);
    }

    #[test]
    fn blank_search_is_ignored() {
        let tasks = vec![task("a", "b", TaskStatus::Pending), task("c", "d", TaskStatus::Completed)];
        assert_eq!(visible_tasks(&tasks, StatusFilter::All, "   "), tasks);
    }

    #[test]
    fn filter_names_round_trip() {
        for filter in StatusFilter::ALL {
            assert_eq!(filter.as_str().parse::<StatusFilter>(), Ok(filter));
        }
        assert!("done".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::InProgress.label(), "In Progress");
    }

    #[test]
    fn counts_per_status() {
        let tasks = vec![
            task("a", "", TaskStatus::Pending),
            task("b", "", TaskStatus::Pending),
            task("c", "", TaskStatus::Completed),
        ];
        let counts = StatusCounts::of(&tasks);
        assert_eq!(
            counts,
            StatusCounts {
                all: 3,
                pending: 2,
                in_progress: 0,
                completed: 1
            }
        );
        assert_eq!(counts.get(StatusFilter::Completed), 1);
    }

    fn arb_status() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            Just(TaskStatus::Pending),
            Just(TaskStatus::InProgress),
            Just(TaskStatus::Completed),
        ]
    }

    fn arb_filter() -> impl Strategy<Value = StatusFilter> {
        prop::sample::select(StatusFilter::ALL.to_vec())
    }

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        prop::collection::vec(("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}", arb_status()), 0..12).prop_map(
            |rows| {
                rows.into_iter()
                    .map(|(title, description, status)| task(&title, &description, status))
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn visible_is_a_matching_subset(tasks in arb_tasks(), filter in arb_filter(), search in "[a-zA-Z]{0,3}") {
            let visible = visible_tasks(&tasks, filter, &search);
            let needle = search.to_lowercase();

            for task in &visible {
                prop_assert!(tasks.contains(task));
                prop_assert!(filter.matches(task));
                if !needle.is_empty() {
                    prop_assert!(
                        task.title.to_lowercase().contains(&needle)
                            || task.description_text().to_lowercase().contains(&needle)
                    );
                }
            }
        }

        #[test]
        fn filtering_is_idempotent(tasks in arb_tasks(), filter in arb_filter(), search in "[a-zA-Z ]{0,3}") {
            let once = visible_tasks(&tasks, filter, &search);
            let twice = visible_tasks(&once, filter, &search);
            prop_assert_eq!(once, twice);
        }
    }
}
