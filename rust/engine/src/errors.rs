use thiserror::Error;

use crate::cards::{Card, CardParseError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card: {0}")]
    InvalidCard(#[from] CardParseError),
    #[error("Card {0} is duplicated")]
    DuplicateCard(Card),
    #[error("Card {0} is not in the tree")]
    CardNotFound(Card),
    #[error("Card {0} cannot be removed because it is a parent node")]
    ParentCard(Card),
    #[error("Card {0} is not worth 13 and cannot be removed alone")]
    NotKing(Card),
    #[error("Cards {0} and {1} cannot be removed because they do not add up to 13")]
    SumMismatch(Card, Card),
    #[error("Invalid level: {level}, levels run from 1 to {max}")]
    InvalidLevel { level: usize, max: usize },
    #[error("No game in progress")]
    NoGame,
}
