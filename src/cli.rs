use crate::debug_log;
use crate::error::HangmanError;
use crate::gallows;
use crate::game_state::{GameInterface, GuessOutcome, Session, UserAction};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Hangman in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a lexicon file (`word<TAB>definition | definition` per line)
    #[arg(short = 'l', long = "lexicon", env = "HANGMAN_LEXICON")]
    pub lexicon_path: Option<PathBuf>,

    /// Use plain line prompts instead of the full-screen interface
    #[arg(short = 's', long)]
    pub simple: bool,

    /// Seed for word selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of the default location
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const EXIT_COMMAND: &str = "exit";

/// Read one line; end of input or a read error count as `exit`.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            debug_log!("read_line() - {}", e);
            None
        }
    }
}

pub fn read_name<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> io::Result<UserAction> {
    writeln!(out, "\nEnter your name to begin (or 'exit' to quit):")?;
    Ok(match read_line(reader) {
        None => UserAction::Exit,
        Some(input) if input.eq_ignore_ascii_case(EXIT_COMMAND) => UserAction::Exit,
        Some(input) => UserAction::Name(input),
    })
}

pub fn read_guess<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> io::Result<UserAction> {
    writeln!(out, "Enter a letter (or 'exit' to quit):")?;
    Ok(match read_line(reader) {
        None => UserAction::Exit,
        Some(input) if input.eq_ignore_ascii_case(EXIT_COMMAND) => UserAction::Exit,
        Some(input) => UserAction::Guess(input),
    })
}

pub fn display_session<W: Write>(
    out: &mut W,
    session: &Session,
    outcome: Option<GuessOutcome>,
) -> io::Result<()> {
    match outcome {
        None => writeln!(out, "\n{}", session.greeting())?,
        Some(GuessOutcome::Correct) => writeln!(out, "Correct!")?,
        Some(GuessOutcome::Incorrect { .. }) => writeln!(out, "Wrong!")?,
    }
    writeln!(
        out,
        "{}",
        gallows::figure(session.wrong_guesses(), session.initial_attempts())
    )?;
    writeln!(out, "\n    {}\n", session.masked_word())?;
    writeln!(out, "Attempts Left: {}", session.attempts_left())?;
    if !session.guessed().is_empty() {
        writeln!(out, "Guessed: {}", session.tried_letters())?;
    }
    if session.hint_revealed() {
        writeln!(out, "Hint: {}", session.hint())?;
    }
    Ok(())
}

pub fn display_result<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    if let Some(message) = session.result_message() {
        writeln!(out, "\n{message}")?;
    }
    writeln!(out, "Accuracy: {:.0}%", session.accuracy())
}

/// Line-oriented `GameInterface` over any reader and writer.
pub struct CliInterface<R: BufRead, W: Write = io::Stdout> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            writer: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn report(result: io::Result<()>) {
        if let Err(e) = result {
            debug_log!("Write error: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_name(&mut self) -> Option<UserAction> {
        Some(read_name(&mut self.reader, &mut self.writer).unwrap_or(UserAction::Exit))
    }

    fn read_guess(&mut self, _session: &Session) -> Option<UserAction> {
        Some(read_guess(&mut self.reader, &mut self.writer).unwrap_or(UserAction::Exit))
    }

    fn display_session(&mut self, session: &Session, outcome: Option<GuessOutcome>) {
        Self::report(display_session(&mut self.writer, session, outcome));
    }

    fn display_notice(&mut self, error: &HangmanError) {
        Self::report(writeln!(self.writer, "{error}"));
    }

    fn display_result(&mut self, session: &Session) -> Option<UserAction> {
        Self::report(display_result(&mut self.writer, session));
        Self::report(writeln!(
            self.writer,
            "Press ENTER to play again (or 'exit' to quit):"
        ));
        match read_line(&mut self.reader) {
            Some(input) if !input.eq_ignore_ascii_case(EXIT_COMMAND) => Some(UserAction::Continue),
            _ => Some(UserAction::Exit),
        }
    }

    fn display_exit_message(&mut self) {
        Self::report(writeln!(self.writer, "Goodbye!"));
    }
}
