//! Task detail overlay.
//!
//! Opening the overlay copies the task's text and subtasks into a
//! [`TaskDraft`]. Every edit made while it is open touches only that copy.
//! [`TaskOverlay::save`] writes the draft back through the store in one
//! update; [`TaskOverlay::close`] throws it away and the board never sees
//! the edits.

use crate::domain::{Subtask, SubtaskId, TaskId};
use crate::editing::inline::InlineEdit;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use tracing::debug;

/// Local, uncommitted copy of a task's editable fields
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    card_index: usize,
    task_id: TaskId,
    text: String,
    subtasks: Vec<Subtask>,
    subtask_edit: Option<(SubtaskId, InlineEdit)>,
}

impl TaskDraft {
    pub fn card_index(&self) -> usize {
        self.card_index
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// Returns (completed, total) subtask counts of the draft
    pub fn progress(&self) -> (usize, usize) {
        let completed = self.subtasks.iter().filter(|st| st.completed).count();
        (completed, self.subtasks.len())
    }

    /// Sets the draft title; blank text is only refused on save
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn add_subtask(&mut self, text: &str) -> Result<SubtaskId> {
        let subtask = Subtask::new(text)?;
        let id = subtask.id;
        self.subtasks.push(subtask);
        Ok(id)
    }

    pub fn delete_subtask(&mut self, id: &SubtaskId) -> Result<Subtask> {
        let pos = self
            .subtasks
            .iter()
            .position(|st| &st.id == id)
            .ok_or_else(|| BoardError::SubtaskNotFound(id.to_string()))?;
        if self.editing_subtask() == Some(id) {
            self.subtask_edit = None;
        }
        Ok(self.subtasks.remove(pos))
    }

    /// Flips a subtask's completion and returns the new state
    pub fn toggle_subtask(&mut self, id: &SubtaskId) -> Result<bool> {
        let subtask = self.subtask_mut(id)?;
        subtask.toggle();
        Ok(subtask.completed)
    }

    pub fn edit_subtask(&mut self, id: &SubtaskId, text: &str) -> Result<()> {
        self.subtask_mut(id)?.set_text(text)
    }

    /// Puts one subtask into inline edit mode, ending any other edit
    pub fn begin_subtask_edit(&mut self, id: &SubtaskId) -> Result<()> {
        let current = self.subtask_mut(id)?.text.clone();
        let mut edit = InlineEdit::default();
        edit.begin(&current);
        self.subtask_edit = Some((*id, edit));
        Ok(())
    }

    pub fn editing_subtask(&self) -> Option<&SubtaskId> {
        self.subtask_edit.as_ref().map(|(id, _)| id)
    }

    pub fn set_subtask_buffer(&mut self, text: &str) -> bool {
        match &mut self.subtask_edit {
            Some((_, edit)) => edit.set_buffer(text),
            None => false,
        }
    }

    /// Ends the subtask edit; returns whether the subtask text changed
    pub fn commit_subtask_edit(&mut self) -> Result<bool> {
        let Some((id, mut edit)) = self.subtask_edit.take() else {
            return Ok(false);
        };
        match edit.commit() {
            Some(text) => {
                self.edit_subtask(&id, &text)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn cancel_subtask_edit(&mut self) {
        self.subtask_edit = None;
    }

    fn subtask_mut(&mut self, id: &SubtaskId) -> Result<&mut Subtask> {
        self.subtasks
            .iter_mut()
            .find(|st| &st.id == id)
            .ok_or_else(|| BoardError::SubtaskNotFound(id.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum TaskOverlay {
    #[default]
    Closed,
    Open(TaskDraft),
}

impl TaskOverlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Opens the overlay on a task, seeding the draft from the board.
    ///
    /// An overlay that is already open drops its current draft.
    pub fn open(&mut self, store: &BoardStore, card_index: usize, task_id: &TaskId) -> Result<()> {
        let board = store.snapshot();
        let card = board
            .card(card_index)
            .ok_or(BoardError::CardNotFound(card_index))?;
        let task = card
            .task(task_id)
            .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))?;

        debug!(card_index, task_id = %task_id, "task overlay opened");
        *self = Self::Open(TaskDraft {
            card_index,
            task_id: *task_id,
            text: task.text.clone(),
            subtasks: task.subtasks.clone(),
            subtask_edit: None,
        });
        Ok(())
    }

    pub fn draft(&self) -> Option<&TaskDraft> {
        match self {
            Self::Open(draft) => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Result<&mut TaskDraft> {
        match self {
            Self::Open(draft) => Ok(draft),
            Self::Closed => Err(BoardError::OverlayClosed),
        }
    }

    /// Closes without saving and hands back the discarded draft
    pub fn close(&mut self) -> Option<TaskDraft> {
        match std::mem::take(self) {
            Self::Open(draft) => {
                debug!(task_id = %draft.task_id, "task overlay closed without saving");
                Some(draft)
            }
            Self::Closed => None,
        }
    }

    /// Writes the draft's text and subtasks back and closes.
    ///
    /// A subtask still in inline edit mode is saved with its last committed
    /// text. If the store refuses the update the overlay stays open with the
    /// draft intact.
    pub fn save(&mut self, store: &BoardStore) -> Result<()> {
        let draft = self.draft().ok_or(BoardError::OverlayClosed)?;
        store.update_task(
            draft.card_index,
            &draft.task_id,
            &draft.text,
            Some(draft.subtasks.clone()),
        )?;

        debug!(task_id = %draft.task_id, "task overlay saved");
        *self = Self::Closed;
        Ok(())
    }
}
