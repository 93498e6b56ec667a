use crate::domain::task::Task;
use std::cmp::Ordering;
use std::str::FromStr;

/// Fields available for sorting the tasks of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Text,
    Created,
    Updated,
    SubtaskProgress,
    SubtaskCount,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(SortField::Text),
            "created" => Ok(SortField::Created),
            "updated" => Ok(SortField::Updated),
            "progress" => Ok(SortField::SubtaskProgress),
            "subtasks" => Ok(SortField::SubtaskCount),
            _ => Err(format!(
                "Invalid sort field '{}'. Valid fields: text, created, updated, progress, subtasks",
                s
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

/// Sorts tasks in place by the given field and order.
///
/// The sort is stable, so tasks that compare equal keep their relative
/// order. Only positions change; task content is untouched.
///
/// # Examples
/// ```
/// use taskboard_core::domain::sorting::{sort_tasks, SortField, SortOrder};
/// use taskboard_core::domain::task::Task;
///
/// let mut tasks = vec![
///     Task::new("Charlie").unwrap(),
///     Task::new("alpha").unwrap(),
///     Task::new("Bravo").unwrap(),
/// ];
///
/// sort_tasks(&mut tasks, SortField::Text, SortOrder::Ascending);
/// assert_eq!(tasks[0].text, "alpha");
/// ```
pub fn sort_tasks(tasks: &mut [Task], field: SortField, order: SortOrder) {
    tasks.sort_by(|a, b| {
        let cmp = match field {
            SortField::Text => a.text.to_lowercase().cmp(&b.text.to_lowercase()),
            SortField::Created => a.created_at.cmp(&b.created_at),
            SortField::Updated => a.updated_at.cmp(&b.updated_at),
            SortField::SubtaskProgress => compare_progress(a, b),
            SortField::SubtaskCount => a.subtasks.len().cmp(&b.subtasks.len()),
        };

        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

/// Compare by subtask completion ratio
///
/// Tasks with no subtasks count as 0% complete.
fn compare_progress(a: &Task, b: &Task) -> Ordering {
    fn ratio(t: &Task) -> f64 {
        match t.progress() {
            (_, 0) => 0.0,
            (done, total) => done as f64 / total as f64,
        }
    }

    ratio(a).partial_cmp(&ratio(b)).unwrap_or(Ordering::Equal)
}
