pub mod board;
pub mod card;
pub mod ids;
pub mod reorder;
pub mod sorting;
pub mod subtask;
pub mod task;

pub use board::{Board, BoardConfig};
pub use card::Card;
pub use ids::{SubtaskId, TaskId};
pub use reorder::{move_item, TaskDrop};
pub use sorting::{sort_tasks, SortField, SortOrder};
pub use subtask::Subtask;
pub use task::Task;

use crate::error::{BoardError, Result};

/// Trims user-entered text, rejecting it when nothing is left
pub(crate) fn require_text(text: &str, field: &'static str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BoardError::EmptyText(field));
    }
    Ok(trimmed.to_string())
}
