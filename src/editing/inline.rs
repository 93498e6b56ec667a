use crate::domain::TaskId;
use crate::error::Result;
use crate::store::BoardStore;

/// Viewing/editing toggle for a single text field.
///
/// Committing always returns to `Viewing`. The edited text is only handed
/// back when it is non-empty after trimming; otherwise the edit is dropped
/// and the original text stays as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InlineEdit {
    #[default]
    Viewing,
    Editing {
        buffer: String,
    },
}

impl InlineEdit {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Enters edit mode seeded with the text currently shown
    pub fn begin(&mut self, current: &str) {
        *self = Self::Editing {
            buffer: current.to_string(),
        };
    }

    /// Replaces the buffer; ignored while viewing
    pub fn set_buffer(&mut self, text: &str) -> bool {
        match self {
            Self::Editing { buffer } => {
                *buffer = text.to_string();
                true
            }
            Self::Viewing => false,
        }
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::Editing { buffer } => Some(buffer),
            Self::Viewing => None,
        }
    }

    /// Leaves edit mode, yielding the trimmed text if there is any
    pub fn commit(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Editing { buffer } => {
                let trimmed = buffer.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Self::Viewing => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Viewing;
    }

    /// Commits a task-text edit straight to the store.
    ///
    /// Returns `Ok(false)` when the edit was discarded. Subtasks are left
    /// as they are.
    pub fn commit_task(
        &mut self,
        store: &BoardStore,
        card_index: usize,
        task_id: &TaskId,
    ) -> Result<bool> {
        match self.commit() {
            Some(text) => {
                store.rename_task(card_index, task_id, &text)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
