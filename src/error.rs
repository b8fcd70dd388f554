use crate::game_state::Phase;
use std::io;
use thiserror::Error;

/// Every way a hangman operation can fail.
///
/// The first three are player mistakes: the interface shows them and prompts
/// again. The rest end the game loop.
#[derive(Error, Debug)]
pub enum HangmanError {
    #[error("Please enter a single letter. ('{0}' is not valid)")]
    InvalidInput(String),

    #[error("You already guessed '{0}'.")]
    DuplicateGuess(char),

    #[error("Please enter your name.")]
    EmptyName,

    #[error("No word available: {0}")]
    DataUnavailable(String),

    #[error("Cannot {operation} while the game is in the {phase:?} phase")]
    WrongPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HangmanError {
    /// Whether the player can fix this by entering something else.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::DuplicateGuess(_) | Self::EmptyName
        )
    }
}

pub type Result<T> = std::result::Result<T, HangmanError>;
