//! # Taskboard Core
//!
//! State model and mutation protocol for a kanban board of cards, tasks
//! and subtasks.
//!
//! The crate holds no UI code. A presentation layer reads the board from a
//! [`BoardStore`], subscribes to its updates, and turns gestures into calls
//! on the store's mutator methods or on the editing helpers in [`editing`].

pub mod domain;
pub mod editing;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig},
    card::Card,
    ids::{SubtaskId, TaskId},
    reorder::TaskDrop,
    sorting::{SortField, SortOrder},
    subtask::Subtask,
    task::Task,
};
pub use editing::{AddCardFlow, AddCardStep, InlineEdit, TaskDraft, TaskOverlay};
pub use error::{BoardError, Result};
pub use storage::Storage;
pub use store::BoardStore;
