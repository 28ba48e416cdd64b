use std::io;

use thiserror::Error;

use crate::data::LoadError;
use crate::models::Difficulty;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Bad user input; the screen stays where it is.
    #[error("{0}")]
    Validation(&'static str),
    /// The chosen pool has nothing to draw from.
    #[error("No questions found for {0} difficulty!")]
    NoQuestions(Difficulty),
    #[error("no question is waiting for an answer")]
    NoActiveQuestion,
    #[error("the round still has questions left")]
    RoundInProgress,
    #[error("no player is logged in")]
    NotLoggedIn,
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
