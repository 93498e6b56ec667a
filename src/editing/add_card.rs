use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use tracing::debug;

/// State of the two-step "add card" prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AddCardState {
    #[default]
    Idle,
    AwaitingTitle {
        input: String,
    },
}

/// What a trigger or confirmation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddCardStep {
    /// The title prompt is now showing
    Prompted,
    /// A card was added at this position
    Added(usize),
    /// The title was blank; the prompt stays open with its text
    Rejected,
}

#[derive(Debug, Clone, Default)]
pub struct AddCardFlow {
    state: AddCardState,
}

impl AddCardFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AddCardState {
        &self.state
    }

    /// The "add card" button: opens the prompt, or confirms it if open
    pub fn trigger(&mut self, store: &BoardStore) -> Result<AddCardStep> {
        match self.state {
            AddCardState::Idle => {
                self.state = AddCardState::AwaitingTitle {
                    input: String::new(),
                };
                Ok(AddCardStep::Prompted)
            }
            AddCardState::AwaitingTitle { .. } => self.confirm(store),
        }
    }

    pub fn set_input(&mut self, text: &str) -> Result<()> {
        match &mut self.state {
            AddCardState::AwaitingTitle { input } => {
                *input = text.to_string();
                Ok(())
            }
            AddCardState::Idle => Err(BoardError::NotAwaitingTitle),
        }
    }

    /// Commits the pending title (second trigger or Enter)
    pub fn confirm(&mut self, store: &BoardStore) -> Result<AddCardStep> {
        let AddCardState::AwaitingTitle { input } = &self.state else {
            return Err(BoardError::NotAwaitingTitle);
        };

        match store.add_card(Some(input.as_str())) {
            Ok(position) => {
                self.state = AddCardState::Idle;
                Ok(AddCardStep::Added(position))
            }
            Err(BoardError::EmptyText(_)) => {
                debug!("blank card title, prompt kept open");
                Ok(AddCardStep::Rejected)
            }
            Err(err) => Err(err),
        }
    }

    pub fn cancel(&mut self) {
        self.state = AddCardState::Idle;
    }
}
