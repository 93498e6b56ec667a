//! Per-consumer editing state that sits on top of the store.
//!
//! None of these types hold board state of their own beyond what the user
//! is typing; they talk to the board only through [`crate::BoardStore`].

pub mod add_card;
pub mod inline;
pub mod overlay;

pub use add_card::{AddCardFlow, AddCardState, AddCardStep};
pub use inline::InlineEdit;
pub use overlay::{TaskDraft, TaskOverlay};
