//! List reordering shared by explicit moves and drag-and-drop drops.

use crate::domain::{ids::TaskId, task::Task};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Moves the item at `from` so that it ends up at `to`.
///
/// Items between the two positions shift by one; nothing is added or
/// removed. `from == to` succeeds without touching the list.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    let len = items.len();
    if from >= len {
        return Err(BoardError::InvalidPosition {
            position: from,
            len,
        });
    }
    if to >= len {
        return Err(BoardError::InvalidPosition { position: to, len });
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}

/// A drop reported by a drag-and-drop collaborator: put `task_id` at `to`
/// within the same card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDrop {
    pub task_id: TaskId,
    pub to: usize,
}

impl TaskDrop {
    pub fn new(task_id: TaskId, to: usize) -> Self {
        Self { task_id, to }
    }

    /// Resolves the drop against the current list, returning (from, to)
    pub fn resolve(&self, tasks: &[Task]) -> Result<(usize, usize)> {
        let from = tasks
            .iter()
            .position(|t| t.id == self.task_id)
            .ok_or_else(|| BoardError::TaskNotFound(self.task_id.to_string()))?;
        if self.to >= tasks.len() {
            return Err(BoardError::InvalidPosition {
                position: self.to,
                len: tasks.len(),
            });
        }
        Ok((from, self.to))
    }
}
