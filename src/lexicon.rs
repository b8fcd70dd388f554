//! Word and definition supply for the selector.
//!
//! A lexicon file holds one entry per line, either a bare `word` or
//! `word<TAB>definition | another definition`. Blank lines and `#` comments
//! are skipped. The word list is kept as written; filtering happens in the
//! selector.

use crate::error::{HangmanError, Result};
use crate::info_log;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const EMBEDDED_LEXICON: &str = include_str!("resources/lexicon.txt");

const SENSE_SEPARATOR: char = '|';

/// Source of candidate words and their recorded senses.
pub trait Lexicon {
    /// Every token in the lexicon, unfiltered.
    fn words(&self) -> &[String];

    /// Definitions recorded for `word`, primary sense first. Lookup is
    /// case-insensitive; unknown words have none.
    fn definitions(&self, word: &str) -> &[String];
}

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    senses: HashMap<String, Vec<String>>,
}

impl Dictionary {
    pub fn parse(data: &str) -> Self {
        let mut words = Vec::new();
        let mut senses: HashMap<String, Vec<String>> = HashMap::new();

        for line in data.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, definitions) = match line.split_once('\t') {
                Some((word, rest)) => (word.trim(), rest),
                None => (line, ""),
            };
            if word.is_empty() {
                continue;
            }
            words.push(word.to_string());

            let parsed: Vec<String> = definitions
                .split(SENSE_SEPARATOR)
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect();
            if !parsed.is_empty() {
                senses
                    .entry(word.to_lowercase())
                    .or_default()
                    .extend(parsed);
            }
        }

        Self { words, senses }
    }

    /// The corpus compiled into the binary.
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_LEXICON)
    }

    /// Load a lexicon file. An unreadable file leaves no word to play, so
    /// it is reported as [`HangmanError::DataUnavailable`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            HangmanError::DataUnavailable(format!("cannot read {}: {e}", path.display()))
        })?;
        let dictionary = Self::parse(&data);
        info_log!(
            "Loaded {} lexicon entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for Dictionary {
    fn words(&self) -> &[String] {
        &self.words
    }

    fn definitions(&self, word: &str) -> &[String] {
        self.senses
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Per-user lexicon location, e.g. `~/.local/share/hangman/lexicon.txt`.
pub fn get_user_lexicon_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("hangman").join("lexicon.txt"))
}

/// Pick the lexicon to play with: an explicit path wins, then the per-user
/// file if one exists, then the embedded corpus.
pub fn resolve_lexicon(explicit: Option<&Path>) -> Result<Dictionary> {
    if let Some(path) = explicit {
        return Dictionary::load_from_file(path);
    }
    if let Some(path) = get_user_lexicon_path()
        && path.is_file()
    {
        return Dictionary::load_from_file(path);
    }
    info_log!("Using embedded lexicon");
    Ok(Dictionary::embedded())
}
