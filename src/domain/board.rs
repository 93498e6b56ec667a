use crate::domain::card::Card;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    /// Title given to cards added without one
    pub default_card_title: String,
    pub default_card_description: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            default_card_title: "New Card".to_string(),
            default_card_description: Some("This is a new card".to_string()),
        }
    }
}

/// Kanban board state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub config: BoardConfig,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
        }
    }

    /// Appends a card and returns its position.
    ///
    /// `None` falls back to the configured default title and description.
    pub fn add_card(&mut self, title: Option<&str>) -> Result<usize> {
        let index = self.cards.len();
        let card = match title {
            Some(title) => Card::new(index, title)?,
            None => Card::new(index, &self.config.default_card_title)?
                .with_description(self.config.default_card_description.clone()),
        };
        self.cards.push(card);
        Ok(index)
    }

    /// Removes the card at `index` together with everything it holds
    pub fn remove_card(&mut self, index: usize) -> Result<Card> {
        if index >= self.cards.len() {
            return Err(BoardError::CardNotFound(index));
        }
        Ok(self.cards.remove(index))
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn card_mut(&mut self, index: usize) -> Result<&mut Card> {
        self.cards
            .get_mut(index)
            .ok_or(BoardError::CardNotFound(index))
    }

    /// Titles of all cards in board order
    pub fn card_titles(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.title.clone()).collect()
    }

    pub fn task_count(&self) -> usize {
        self.cards.iter().map(|c| c.tasks.len()).sum()
    }
}
