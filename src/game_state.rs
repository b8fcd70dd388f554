//! Hangman session state machine and the loop that drives it.
//!
//! `Intro` → `Playing` → `Won` | `Lost` → `Intro`
//!
//! A [`Session`] is a value: every transition returns a new one and leaves
//! the old one untouched.

use crate::error::{HangmanError, Result};
use crate::lexicon::Lexicon;
use crate::selector::{SecretWord, select_word};
use crate::{debug_log, info_log};
use rand::Rng;
use std::collections::BTreeSet;

pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect { hint_revealed: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    player_name: String,
    word: String,
    hint: String,
    guessed: BTreeSet<char>,
    initial_budget: usize,
    budget: usize,
    hint_revealed: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session waiting for the player's name.
    pub fn new() -> Self {
        Self {
            phase: Phase::Intro,
            player_name: String::new(),
            word: String::new(),
            hint: String::new(),
            guessed: BTreeSet::new(),
            initial_budget: 0,
            budget: 0,
            hint_revealed: false,
        }
    }

    /// Begin playing. The name is checked before `select` runs, so an empty
    /// name never costs a word selection.
    pub fn start<F>(&self, name: &str, select: F) -> Result<Self>
    where
        F: FnOnce() -> Result<SecretWord>,
    {
        self.expect_phase(Phase::Intro, "start a game")?;
        let player_name = title_case(name.trim());
        if player_name.is_empty() {
            return Err(HangmanError::EmptyName);
        }
        let SecretWord { word, hint } = select()?;
        let budget = word.chars().count();
        info_log!("Session started for {} with a {}-letter word", player_name, budget);

        Ok(Self {
            phase: Phase::Playing,
            player_name,
            word,
            hint,
            guessed: BTreeSet::new(),
            initial_budget: budget,
            budget,
            hint_revealed: false,
        })
    }

    /// Record one guess. Rejected guesses leave `self` as it was.
    pub fn submit_guess(&self, input: &str) -> Result<(Self, GuessOutcome)> {
        self.expect_phase(Phase::Playing, "guess")?;
        let letter = parse_letter(input)?;
        if self.guessed.contains(&letter) {
            return Err(HangmanError::DuplicateGuess(letter));
        }

        let mut next = self.clone();
        next.guessed.insert(letter);

        if next.word.contains(letter) {
            if next.is_word_revealed() {
                next.phase = Phase::Won;
            }
            debug_log!("Guess '{}' correct, phase {:?}", letter, next.phase);
            return Ok((next, GuessOutcome::Correct));
        }

        next.budget = next.budget.saturating_sub(1);
        let mut revealed_now = false;
        if !next.hint_revealed && next.budget <= next.initial_budget / 2 {
            next.hint_revealed = true;
            revealed_now = true;
        }
        if next.budget == 0 {
            next.phase = Phase::Lost;
        }
        debug_log!(
            "Guess '{}' wrong, {} attempts left, phase {:?}",
            letter,
            next.budget,
            next.phase
        );
        Ok((
            next,
            GuessOutcome::Incorrect {
                hint_revealed: revealed_now,
            },
        ))
    }

    /// Close a finished game and return to the intro.
    pub fn acknowledge(&self) -> Result<Self> {
        if !self.phase.is_terminal() {
            return Err(HangmanError::WrongPhase {
                operation: "acknowledge a result",
                phase: self.phase,
            });
        }
        Ok(Self::new())
    }

    fn expect_phase(&self, expected: Phase, operation: &'static str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(HangmanError::WrongPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn is_word_revealed(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn attempts_left(&self) -> usize {
        self.budget
    }

    pub fn initial_attempts(&self) -> usize {
        self.initial_budget
    }

    pub fn hint_revealed(&self) -> bool {
        self.hint_revealed
    }

    pub fn wrong_guesses(&self) -> usize {
        self.initial_budget - self.budget
    }

    pub fn correct_guesses(&self) -> usize {
        self.guessed.len() - self.wrong_guesses()
    }

    pub fn masked_word(&self) -> String {
        mask(&self.word, &self.guessed)
    }

    /// Letters tried so far in alphabetical order, space separated.
    pub fn tried_letters(&self) -> String {
        self.guessed
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Share of accepted guesses that hit, in percent. 100 before any guess.
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        if self.guessed.is_empty() {
            return 100.0;
        }
        self.correct_guesses() as f64 / self.guessed.len() as f64 * 100.0
    }

    pub fn greeting(&self) -> String {
        format!("Hello {}! Guess the word:", self.player_name)
    }

    /// End-of-game text; `None` while the game is not over.
    pub fn result_message(&self) -> Option<String> {
        let headline = match self.phase {
            Phase::Won => "Congratulations!",
            Phase::Lost => "Game Over!",
            Phase::Intro | Phase::Playing => return None,
        };
        Some(format!(
            "{headline}\n\nThe word was: {}\nMeaning: {}",
            self.word, self.hint
        ))
    }
}

/// Each letter of `word` if guessed, otherwise [`PLACEHOLDER`], separated by
/// spaces.
pub fn mask(word: &str, guessed: &BTreeSet<char>) -> String {
    word.chars()
        .map(|c| if guessed.contains(&c) { c } else { PLACEHOLDER })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_letter(input: &str) -> Result<char> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
        _ => Err(HangmanError::InvalidInput(trimmed.to_string())),
    }
}

/// Capitalize the first letter of every word, lowercase the rest.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// What the player asked for at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Name(String),
    Guess(String),
    Continue,
    Exit,
}

/// Presentation layer driven by [`game_loop`].
///
/// `read_*` methods return `None` when the input was ignored and the prompt
/// should simply be repeated.
pub trait GameInterface {
    fn read_name(&mut self) -> Option<UserAction>;
    fn read_guess(&mut self, session: &Session) -> Option<UserAction>;
    fn display_session(&mut self, session: &Session, outcome: Option<GuessOutcome>);
    fn display_notice(&mut self, error: &HangmanError);
    /// Show the result of a finished game and wait for it to be acknowledged.
    fn display_result(&mut self, session: &Session) -> Option<UserAction>;
    fn display_exit_message(&mut self);
}

/// Run sessions until the player exits. Only unrecoverable errors are
/// returned; player mistakes are shown through the interface.
pub fn game_loop<L, R, I>(lexicon: &L, rng: &mut R, interface: &mut I) -> Result<()>
where
    L: Lexicon + ?Sized,
    R: Rng + ?Sized,
    I: GameInterface + ?Sized,
{
    let mut session = Session::new();

    loop {
        match session.phase() {
            Phase::Intro => match interface.read_name() {
                Some(UserAction::Exit) => break,
                Some(UserAction::Name(name)) => {
                    match session.start(&name, || select_word(lexicon, &mut *rng)) {
                        Ok(started) => {
                            session = started;
                            interface.display_session(&session, None);
                        }
                        Err(e) if e.is_recoverable() => interface.display_notice(&e),
                        Err(e) => return Err(e),
                    }
                }
                _ => {}
            },
            Phase::Playing => match interface.read_guess(&session) {
                Some(UserAction::Exit) => break,
                Some(UserAction::Guess(guess)) => match session.submit_guess(&guess) {
                    Ok((next, outcome)) => {
                        session = next;
                        interface.display_session(&session, Some(outcome));
                    }
                    Err(e) if e.is_recoverable() => interface.display_notice(&e),
                    Err(e) => return Err(e),
                },
                _ => {}
            },
            Phase::Won | Phase::Lost => {
                info_log!("Game finished: {:?} ({})", session.phase(), session.word());
                if let Some(UserAction::Exit) = interface.display_result(&session) {
                    break;
                }
                session = session.acknowledge()?;
            }
        }
    }

    interface.display_exit_message();
    Ok(())
}
