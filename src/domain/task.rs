use crate::domain::{
    ids::{SubtaskId, TaskId},
    require_text,
    subtask::Subtask,
};
use crate::error::{BoardError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A unit of work inside a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with a fresh ID and no subtasks
    pub fn new(text: &str) -> Result<Self> {
        let text = require_text(text, "Task text")?;
        let now = Utc::now();
        Ok(Self {
            id: TaskId::new(),
            text,
            subtasks: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the whole subtask list, rejecting lists with repeated IDs
    /// or blank text
    pub fn replace_subtasks(&mut self, subtasks: Vec<Subtask>) -> Result<()> {
        self.subtasks = validate_subtasks(subtasks)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Applies a text change and an optional subtask replacement together.
    ///
    /// Both inputs are validated before anything is written, so a rejected
    /// update leaves the task as it was. `None` keeps the current subtasks.
    pub fn update(&mut self, text: &str, subtasks: Option<Vec<Subtask>>) -> Result<()> {
        let text = require_text(text, "Task text")?;
        let subtasks = subtasks.map(validate_subtasks).transpose()?;

        self.text = text;
        if let Some(subtasks) = subtasks {
            self.subtasks = subtasks;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn subtask(&self, id: &SubtaskId) -> Option<&Subtask> {
        self.subtasks.iter().find(|st| &st.id == id)
    }

    /// Returns (completed, total) subtask counts
    pub fn progress(&self) -> (usize, usize) {
        let completed = self.subtasks.iter().filter(|st| st.completed).count();
        (completed, self.subtasks.len())
    }

    /// Checks if all subtasks are completed
    pub fn all_subtasks_completed(&self) -> bool {
        !self.subtasks.is_empty() && self.subtasks.iter().all(|st| st.completed)
    }
}

/// Checks a replacement subtask list and returns it with trimmed text
fn validate_subtasks(subtasks: Vec<Subtask>) -> Result<Vec<Subtask>> {
    let mut seen = HashSet::with_capacity(subtasks.len());
    subtasks
        .into_iter()
        .map(|mut subtask| {
            if !seen.insert(subtask.id) {
                return Err(BoardError::DuplicateSubtaskId(subtask.id.to_string()));
            }
            subtask.text = require_text(&subtask.text, "Subtask text")?;
            Ok(subtask)
        })
        .collect()
}
