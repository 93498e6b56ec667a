use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("{0} must not be empty")]
    EmptyText(&'static str),

    #[error("Card not found at position {0}")]
    CardNotFound(usize),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Subtask not found: {0}")]
    SubtaskNotFound(String),

    #[error("Invalid position {position} for a list of {len} items")]
    InvalidPosition { position: usize, len: usize },

    #[error("Duplicate subtask ID: {0}")]
    DuplicateSubtaskId(String),

    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    #[error("Task overlay is not open")]
    OverlayClosed,

    #[error("Add-card flow is not awaiting a title")]
    NotAwaitingTitle,

    #[error("Board not initialized")]
    BoardNotInitialized,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Other(String),
}

impl BoardError {
    /// Returns true for validation failures that left the board untouched
    /// and that a UI should swallow silently.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::EmptyText(_)
                | Self::CardNotFound(_)
                | Self::TaskNotFound(_)
                | Self::SubtaskNotFound(_)
                | Self::InvalidPosition { .. }
                | Self::DuplicateSubtaskId(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_distinguished_from_storage_faults() {
        assert!(BoardError::EmptyText("Task text").is_rejection());
        assert!(BoardError::CardNotFound(3).is_rejection());
        assert!(BoardError::InvalidPosition { position: 5, len: 2 }.is_rejection());

        assert!(!BoardError::BoardNotInitialized.is_rejection());
        assert!(!BoardError::OverlayClosed.is_rejection());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BoardError::EmptyText("Card title").to_string(),
            "Card title must not be empty"
        );
        assert_eq!(
            BoardError::InvalidPosition { position: 4, len: 2 }.to_string(),
            "Invalid position 4 for a list of 2 items"
        );
    }
}
