//! The board's single source of truth.
//!
//! [`BoardStore`] is a cloneable handle handed to every consumer. Reads go
//! through [`BoardStore::snapshot`] or a [`BoardStore::subscribe`] receiver;
//! writes go through the mutator methods below and nowhere else.
//!
//! Every mutator clones the current board, applies its change to the clone
//! and publishes the clone only if the change succeeded. A rejected change
//! returns an error, leaves the published board untouched and wakes no
//! subscriber.

use crate::domain::{
    Board, BoardConfig, Card, SortField, SortOrder, Subtask, Task, TaskDrop, TaskId,
};
use crate::error::{BoardError, Result};
use crate::storage::Storage;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BoardStore {
    sender: Arc<watch::Sender<Arc<Board>>>,
}

impl BoardStore {
    /// Creates a store holding an empty board
    pub fn new(config: BoardConfig) -> Self {
        Self::from_board(Board::new(config))
    }

    pub fn from_board(board: Board) -> Self {
        let (sender, _receiver) = watch::channel(Arc::new(board));
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Builds a store from the board saved in `storage`
    pub async fn load(storage: &dyn Storage) -> Result<Self> {
        let board = storage.load_board().await?;
        debug!(cards = board.cards.len(), "board loaded into store");
        Ok(Self::from_board(board))
    }

    /// Writes the current board to `storage`
    pub async fn save(&self, storage: &dyn Storage) -> Result<()> {
        let board = self.snapshot();
        storage.save_board(&board).await
    }

    /// The board as of now
    pub fn snapshot(&self) -> Arc<Board> {
        self.sender.borrow().clone()
    }

    /// Returns a receiver that observes every published board.
    ///
    /// Drop any `borrow()` guard from the receiver before calling a mutator
    /// on the same thread; mutators take the channel's write lock and would
    /// deadlock. Clone the `Arc<Board>` out, or use [`BoardStore::snapshot`].
    pub fn subscribe(&self) -> watch::Receiver<Arc<Board>> {
        self.sender.subscribe()
    }

    pub fn card_titles(&self) -> Vec<String> {
        self.snapshot().card_titles()
    }

    /// Clones one task out of the current board
    pub fn task(&self, card_index: usize, task_id: &TaskId) -> Option<Task> {
        self.snapshot()
            .card(card_index)
            .and_then(|card| card.task(task_id))
            .cloned()
    }

    pub fn add_card(&self, title: Option<&str>) -> Result<usize> {
        self.commit("add_card", |board| board.add_card(title))
    }

    pub fn delete_card(&self, index: usize) -> Result<Card> {
        self.commit("delete_card", |board| board.remove_card(index))
    }

    pub fn update_title(&self, card_index: usize, title: &str) -> Result<()> {
        self.commit("update_title", |board| {
            board.card_mut(card_index)?.set_title(title)
        })
    }

    pub fn update_description(&self, card_index: usize, description: Option<&str>) -> Result<()> {
        self.commit("update_description", |board| {
            board.card_mut(card_index)?.set_description(description);
            Ok(())
        })
    }

    pub fn add_task(&self, card_index: usize, text: &str) -> Result<TaskId> {
        self.commit("add_task", |board| board.card_mut(card_index)?.add_task(text))
    }

    pub fn delete_task(&self, card_index: usize, task_id: &TaskId) -> Result<Task> {
        self.commit("delete_task", |board| {
            board.card_mut(card_index)?.remove_task(task_id)
        })
    }

    /// Replaces a task's text, and its subtasks when `subtasks` is `Some`.
    ///
    /// Passing `None` keeps the subtasks the task already has.
    pub fn update_task(
        &self,
        card_index: usize,
        task_id: &TaskId,
        text: &str,
        subtasks: Option<Vec<Subtask>>,
    ) -> Result<()> {
        self.commit("update_task", |board| {
            board
                .card_mut(card_index)?
                .update_task(task_id, text, subtasks)
        })
    }

    pub fn rename_task(&self, card_index: usize, task_id: &TaskId, text: &str) -> Result<()> {
        self.update_task(card_index, task_id, text, None)
    }

    pub fn reorder_tasks(&self, card_index: usize, from: usize, to: usize) -> Result<()> {
        self.commit("reorder_tasks", |board| {
            board.card_mut(card_index)?.move_task(from, to)
        })
    }

    /// Applies a drop reported by the drag-and-drop layer
    pub fn apply_task_drop(&self, card_index: usize, task_drop: TaskDrop) -> Result<()> {
        self.commit("apply_task_drop", |board| {
            board.card_mut(card_index)?.apply_drop(&task_drop)
        })
    }

    pub fn sort_tasks(&self, card_index: usize, field: SortField, order: SortOrder) -> Result<()> {
        self.commit("sort_tasks", |board| {
            board.card_mut(card_index)?.sort_tasks(field, order);
            Ok(())
        })
    }

    fn commit<T>(
        &self,
        op: &'static str,
        apply: impl FnOnce(&mut Board) -> Result<T>,
    ) -> Result<T> {
        let mut outcome = None;
        self.sender.send_if_modified(|current| {
            let mut next = (**current).clone();
            let result = apply(&mut next);
            let modified = result.is_ok();
            if modified {
                *current = Arc::new(next);
            }
            outcome = Some(result);
            modified
        });

        match outcome {
            Some(Ok(value)) => {
                debug!(op, "board updated");
                Ok(value)
            }
            Some(Err(err)) => {
                debug!(op, error = %err, "board update rejected");
                Err(err)
            }
            None => Err(BoardError::Other(format!("{} was never applied", op))),
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{AddCardFlow, AddCardStep};

    fn store_with_cards(titles: &[&str]) -> BoardStore {
        let store = BoardStore::default();
        for title in titles {
            store.add_card(Some(title)).unwrap();
        }
        store
    }

    fn texts(store: &BoardStore, card_index: usize) -> Vec<String> {
        store.snapshot().cards[card_index]
            .tasks
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn test_concrete_scenario() {
        let store = BoardStore::default();
        let mut flow = AddCardFlow::new();
        for (position, title) in ["Backlog", "Doing"].into_iter().enumerate() {
            assert_eq!(flow.trigger(&store).unwrap(), AddCardStep::Prompted);
            flow.set_input(title).unwrap();
            assert_eq!(flow.confirm(&store).unwrap(), AddCardStep::Added(position));
        }

        let board = store.snapshot();
        assert_eq!(board.card_titles(), vec!["Backlog", "Doing"]);
        assert!(board.cards.iter().all(|c| c.tasks.is_empty()));

        let id = store.add_task(0, "write spec").unwrap();
        let task = store.task(0, &id).unwrap();
        assert_eq!(task.text, "write spec");
        assert!(task.subtasks.is_empty());

        store.delete_card(0).unwrap();
        let board = store.snapshot();
        assert_eq!(board.cards.len(), 1);
        assert_eq!(board.cards[0].title, "Doing");
        assert!(store.task(0, &id).is_none());
    }

    #[test]
    fn test_blank_text_is_a_no_op() {
        let store = store_with_cards(&["Todo"]);
        let id = store.add_task(0, "real").unwrap();
        let before = store.snapshot();
        let rx = store.subscribe();

        assert!(store.add_card(Some("   ")).is_err());
        assert!(store.add_task(0, "").is_err());
        assert!(store.add_task(0, " \n ").is_err());
        assert!(store.update_title(0, "  ").is_err());
        assert!(store.update_task(0, &id, "", Some(Vec::new())).is_err());
        assert!(store.rename_task(0, &id, "\t").is_err());

        assert_eq!(*store.snapshot(), *before);
        assert!(Arc::ptr_eq(&store.snapshot(), &before));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_blank_replacement_subtask_is_a_no_op() {
        let store = store_with_cards(&["Todo"]);
        let id = store.add_task(0, "t").unwrap();
        let before = store.snapshot();
        let rx = store.subscribe();

        let mut blank = Subtask::new("blank").unwrap();
        blank.text = "   ".to_string();
        let mut padded = Subtask::new("padded").unwrap();
        padded.text = "  padded  ".to_string();

        assert!(matches!(
            store.update_task(0, &id, "t", Some(vec![blank, padded.clone()])),
            Err(BoardError::EmptyText(_))
        ));
        assert!(Arc::ptr_eq(&store.snapshot(), &before));
        assert!(!rx.has_changed().unwrap());

        store.update_task(0, &id, "t", Some(vec![padded])).unwrap();
        let task = store.task(0, &id).unwrap();
        assert_eq!(task.subtasks[0].text, "padded");
    }

    #[test]
    fn test_missing_targets_are_no_ops() {
        let store = store_with_cards(&["Todo"]);
        let before = store.snapshot();

        assert!(matches!(
            store.delete_card(7),
            Err(BoardError::CardNotFound(7))
        ));
        assert!(store.add_task(3, "task").is_err());
        assert!(matches!(
            store.delete_task(0, &TaskId::new()),
            Err(BoardError::TaskNotFound(_))
        ));
        assert!(store.rename_task(0, &TaskId::new(), "x").is_err());
        assert!(store.reorder_tasks(0, 0, 1).is_err());

        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_order_preservation() {
        let store = BoardStore::default();
        let n = 6;
        for i in 0..n {
            store.add_card(Some(&format!("card {}", i))).unwrap();
        }
        for i in 0..n {
            store.add_task(n - 1, &format!("task {}", i)).unwrap();
        }

        let board = store.snapshot();
        for (i, card) in board.cards.iter().enumerate() {
            assert_eq!(card.title, format!("card {}", i));
            assert_eq!(card.index, i);
        }
        let expected: Vec<String> = (0..n).map(|i| format!("task {}", i)).collect();
        assert_eq!(texts(&store, n - 1), expected);
    }

    #[test]
    fn test_deletion_cascade() {
        let store = store_with_cards(&["a", "b", "c"]);
        for card in 0..3 {
            let id = store.add_task(card, "task").unwrap();
            store
                .update_task(card, &id, "task", Some(vec![Subtask::new("sub").unwrap()]))
                .unwrap();
        }
        let before = store.snapshot();

        let removed = store.delete_card(1).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(removed.tasks.len(), 1);

        let after = store.snapshot();
        assert_eq!(after.cards.len(), 2);
        assert_eq!(after.cards[0], before.cards[0]);
        assert_eq!(after.cards[1], before.cards[2]);
        assert_eq!(after.task_count(), 2);
    }

    #[test]
    fn test_update_task_preserves_subtasks_unless_replaced() {
        let store = store_with_cards(&["Todo"]);
        let id = store.add_task(0, "task").unwrap();
        let subtasks = vec![Subtask::new("one").unwrap(), Subtask::new("two").unwrap()];
        store
            .update_task(0, &id, "task", Some(subtasks.clone()))
            .unwrap();

        store.rename_task(0, &id, "renamed").unwrap();
        let task = store.task(0, &id).unwrap();
        assert_eq!(task.text, "renamed");
        assert_eq!(task.subtasks, subtasks);

        store.update_task(0, &id, "renamed", Some(Vec::new())).unwrap();
        assert!(store.task(0, &id).unwrap().subtasks.is_empty());
    }

    #[test]
    fn test_reorder_preserves_membership() {
        let store = store_with_cards(&["Todo"]);
        for text in ["a", "b", "c", "d"] {
            store.add_task(0, text).unwrap();
        }
        let before = store.snapshot().cards[0].tasks.clone();

        store.reorder_tasks(0, 0, 3).unwrap();
        assert_eq!(texts(&store, 0), vec!["b", "c", "d", "a"]);

        let after = store.snapshot().cards[0].tasks.clone();
        assert_eq!(after.len(), before.len());
        for task in &before {
            assert!(after.contains(task));
        }
    }

    #[test]
    fn test_apply_task_drop() {
        let store = store_with_cards(&["Todo"]);
        store.add_task(0, "a").unwrap();
        let b = store.add_task(0, "b").unwrap();

        store.apply_task_drop(0, TaskDrop::new(b, 0)).unwrap();
        assert_eq!(texts(&store, 0), vec!["b", "a"]);

        store.delete_task(0, &b).unwrap();
        assert!(store.apply_task_drop(0, TaskDrop::new(b, 0)).is_err());
        assert_eq!(texts(&store, 0), vec!["a"]);
    }

    #[test]
    fn test_sort_tasks() {
        let store = store_with_cards(&["Todo"]);
        for text in ["pear", "Apple", "fig"] {
            store.add_task(0, text).unwrap();
        }

        store
            .sort_tasks(0, SortField::Text, SortOrder::Ascending)
            .unwrap();
        assert_eq!(texts(&store, 0), vec!["Apple", "fig", "pear"]);
        assert!(store
            .sort_tasks(1, SortField::Text, SortOrder::Ascending)
            .is_err());
    }

    #[test]
    fn test_card_defaults_and_description() {
        let store = BoardStore::default();
        store.add_card(None).unwrap();
        assert_eq!(store.card_titles(), vec!["New Card"]);

        store.update_description(0, Some("Things in flight")).unwrap();
        assert_eq!(
            store.snapshot().cards[0].description.as_deref(),
            Some("Things in flight")
        );

        store.update_description(0, None).unwrap();
        assert!(store.snapshot().cards[0].description.is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = BoardStore::default();
        let handle = store.clone();

        handle.add_card(Some("Shared")).unwrap();

        assert_eq!(store.card_titles(), vec!["Shared"]);
    }

    #[test]
    fn test_old_snapshots_are_not_mutated() {
        let store = store_with_cards(&["Todo"]);
        let old = store.snapshot();

        store.add_task(0, "new").unwrap();

        assert!(old.cards[0].tasks.is_empty());
        assert_eq!(store.snapshot().cards[0].tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_subscribers_see_each_commit() {
        let store = BoardStore::default();
        let mut rx = store.subscribe();

        store.add_card(Some("Todo")).unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().cards.len(), 1);
        assert!(!rx.has_changed().unwrap());

        assert!(store.add_task(0, " ").is_err());
        assert!(!rx.has_changed().unwrap());

        store.add_task(0, "task").unwrap();
        assert!(rx.has_changed().unwrap());
    }
}
