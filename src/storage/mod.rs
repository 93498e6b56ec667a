use crate::{
    domain::{Board, BoardConfig},
    error::Result,
};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;

/// Storage trait for board snapshots and configuration
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Saves the board state
    async fn save_board(&self, board: &Board) -> Result<()>;

    /// Loads the board state
    async fn load_board(&self) -> Result<Board>;

    /// Loads the board configuration, falling back to defaults when none is stored
    async fn load_config(&self) -> Result<BoardConfig>;

    /// Checks if the storage has been initialized
    async fn is_initialized(&self) -> bool;
}
