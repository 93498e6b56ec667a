use crate::domain::{
    ids::TaskId,
    reorder::{move_item, TaskDrop},
    require_text,
    sorting::{sort_tasks, SortField, SortOrder},
    subtask::Subtask,
    task::Task,
};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// A titled column holding an ordered list of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Position hint assigned at creation; the card's real position is its
    /// place in the board's list.
    pub index: usize,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Card {
    pub fn new(index: usize, title: &str) -> Result<Self> {
        Ok(Self {
            index,
            title: require_text(title, "Card title")?,
            description: None,
            tasks: Vec::new(),
        })
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = require_text(title, "Card title")?;
        Ok(())
    }

    /// Sets the description; blank text clears it
    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
    }

    /// Appends a new task and returns its ID
    pub fn add_task(&mut self, text: &str) -> Result<TaskId> {
        let task = Task::new(text)?;
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn task_mut(&mut self, id: &TaskId) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| BoardError::TaskNotFound(id.to_string()))
    }

    /// Removes a task and returns it
    pub fn remove_task(&mut self, id: &TaskId) -> Result<Task> {
        let pos = self
            .position_of(id)
            .ok_or_else(|| BoardError::TaskNotFound(id.to_string()))?;
        Ok(self.tasks.remove(pos))
    }

    /// Updates a task in place; `None` subtasks leaves the existing ones alone
    pub fn update_task(
        &mut self,
        id: &TaskId,
        text: &str,
        subtasks: Option<Vec<Subtask>>,
    ) -> Result<()> {
        self.task_mut(id)?.update(text, subtasks)
    }

    pub fn move_task(&mut self, from: usize, to: usize) -> Result<()> {
        move_item(&mut self.tasks, from, to)
    }

    pub fn apply_drop(&mut self, task_drop: &TaskDrop) -> Result<()> {
        let (from, to) = task_drop.resolve(&self.tasks)?;
        self.move_task(from, to)
    }

    pub fn sort_tasks(&mut self, field: SortField, order: SortOrder) {
        sort_tasks(&mut self.tasks, field, order);
    }
}
