use crate::domain::{ids::SubtaskId, require_text};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A checkable item belonging to one task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Subtask {
    /// Creates an incomplete subtask with a fresh ID
    pub fn new(text: &str) -> Result<Self> {
        Ok(Self {
            id: SubtaskId::new(),
            text: require_text(text, "Subtask text")?,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        })
    }

    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = require_text(text, "Subtask text")?;
        Ok(())
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now());
    }

    pub fn mark_incomplete(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }

    pub fn toggle(&mut self) {
        if self.completed {
            self.mark_incomplete();
        } else {
            self.mark_completed();
        }
    }
}
