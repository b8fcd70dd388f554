// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod gallows;
pub mod game_state;
pub mod lexicon;
pub mod logging;
pub mod selector;
pub mod tui;

// Re-export commonly used items for easier testing
pub use error::{HangmanError, Result};
pub use game_state::{
    GameInterface, GuessOutcome, Phase, Session, UserAction, game_loop, mask, title_case,
};
pub use lexicon::{Dictionary, EMBEDDED_LEXICON, Lexicon, resolve_lexicon};
pub use selector::{MIN_WORD_LENGTH, NO_DEFINITION, SecretWord, candidate_words, select_word};
