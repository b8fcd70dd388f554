use crate::debug_log;
use crate::error::{HangmanError, Result};
use crate::lexicon::Lexicon;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

pub const MIN_WORD_LENGTH: usize = 4;
pub const NO_DEFINITION: &str = "No definition found.";

/// The word for one session and the hint shown about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    pub word: String,
    pub hint: String,
}

impl SecretWord {
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
        }
    }
}

fn is_candidate(token: &str) -> bool {
    token.len() >= MIN_WORD_LENGTH && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// Lowercased lexicon tokens that can be played.
pub fn candidate_words(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| is_candidate(token))
        .map(|token| token.to_ascii_lowercase())
        .collect()
}

/// Choose a secret word with its primary definition.
///
/// Candidates are visited in shuffled order and the first one with a
/// recorded sense wins. When none has a sense, a random candidate is paired
/// with [`NO_DEFINITION`].
pub fn select_word<L, R>(lexicon: &L, rng: &mut R) -> Result<SecretWord>
where
    L: Lexicon + ?Sized,
    R: Rng + ?Sized,
{
    let mut candidates = candidate_words(lexicon.words());
    if candidates.is_empty() {
        return Err(HangmanError::DataUnavailable(
            "lexicon has no alphabetic words of four or more letters".to_string(),
        ));
    }
    candidates.shuffle(rng);

    for word in &candidates {
        if let Some(definition) = lexicon.definitions(word).first() {
            debug_log!("Selected '{}' from {} candidates", word, candidates.len());
            return Ok(SecretWord::new(word.clone(), definition.clone()));
        }
    }

    debug_log!("No candidate has a definition, falling back to a random pick");
    let word = candidates
        .choose(rng)
        .cloned()
        .ok_or_else(|| HangmanError::DataUnavailable("no candidate words".to_string()))?;
    Ok(SecretWord::new(word, NO_DEFINITION))
}
