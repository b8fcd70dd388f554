//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows the session phases:
//! - `EnteringName` → `EnteringGuess` → `ShowingResult` → back to `EnteringName`
//!
//! Notices (invalid letter, repeated letter, missing name) are shown in the
//! message panel and never change the UI state.

use crate::error::HangmanError;
use crate::gallows;
use crate::game_state::{GameInterface, GuessOutcome, Phase, Session, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::{Duration, Instant};

const MAX_INPUT_LENGTH: usize = 24;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const FLASH_DURATION: Duration = Duration::from_millis(1000);
const GALLOWS_WIDTH: u16 = 15;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const FAILURE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const WORD_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringName,
    EnteringGuess,
    ShowingResult,
}

/// Brief colour change of the word panel after a guess.
#[derive(Debug, Clone, Copy)]
struct Flash {
    color: Color,
    started: Instant,
}

impl Flash {
    fn for_outcome(outcome: GuessOutcome) -> Self {
        let color = match outcome {
            GuessOutcome::Correct => Color::Green,
            GuessOutcome::Incorrect { .. } => Color::Red,
        };
        Self {
            color,
            started: Instant::now(),
        }
    }

    fn active_color(&self) -> Option<Color> {
        (self.started.elapsed() < FLASH_DURATION).then_some(self.color)
    }
}

/// What a submitted input line stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Prompt {
    Name,
    Guess,
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Apply one key to the input line. ENTER submits and clears it, ESC quits.
fn edit_line(input: &mut String, prompt: Prompt, key: KeyEvent) -> Option<UserAction> {
    match key.code {
        KeyCode::Esc => return Some(UserAction::Exit),
        KeyCode::Enter => {
            let text = std::mem::take(input);
            return Some(match prompt {
                Prompt::Name => UserAction::Name(text),
                Prompt::Guess => UserAction::Guess(text),
            });
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(c) if !has_modifier_keys(&key) => {
            if input.chars().count() < MAX_INPUT_LENGTH {
                input.push(c);
            }
        }
        _ => {
            debug_log!("edit_line() - Ignoring key: {:?}", key.code);
        }
    }
    None
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    state: TuiState,
    session: &'a Session,
    input: &'a str,
    flash: Option<Color>,
    message: &'a str,
    error_message: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and session display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    session: Session,
    input: String,
    flash: Option<Flash>,
    message: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            state: TuiState::EnteringName,
            session: Session::new(),
            input: String::new(),
            flash: None,
            message: String::new(),
            error_message: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            session: &self.session,
            input: &self.input,
            flash: self.flash.and_then(|f| f.active_color()),
            message: &self.message,
            error_message: &self.error_message,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(11),    // Gallows + word
                Constraint::Length(3),  // Input
                Constraint::Length(4),  // Messages
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_body(f, chunks[1], ctx);
        Self::render_input(f, chunks[2], ctx.state, ctx.input);
        Self::render_messages(f, chunks[3], ctx.message, ctx.error_message);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_body(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_WIDTH), Constraint::Min(20)])
            .split(area);

        let session = ctx.session;
        let art = match ctx.state {
            // Intro shows the finished figure, like a title picture.
            TuiState::EnteringName => gallows::figure(1, 1),
            TuiState::EnteringGuess | TuiState::ShowingResult => {
                gallows::figure(session.wrong_guesses(), session.initial_attempts())
            }
        };
        let gallows_widget = Paragraph::new(art).block(Block::default().borders(Borders::ALL));
        f.render_widget(gallows_widget, columns[0]);

        let lines = match ctx.state {
            TuiState::EnteringName => Self::intro_lines(),
            TuiState::EnteringGuess => Self::playing_lines(session),
            TuiState::ShowingResult => Self::result_lines(session),
        };
        let border_style = ctx
            .flash
            .map_or_else(Style::default, |color| Style::default().fg(color));
        let panel = Paragraph::new(lines)
            .block(
                Block::default()
                    .title("Word")
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(panel, columns[1]);
    }

    fn intro_lines() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled("Welcome to Hangman", HEADER_STYLE)),
            Line::from(""),
            Line::from("Enter your name to begin:"),
        ]
    }

    fn playing_lines(session: &Session) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(session.greeting()),
            Line::from(""),
            Line::from(Span::styled(session.masked_word(), WORD_STYLE)),
            Line::from(""),
            Line::from(format!("Attempts Left: {}", session.attempts_left())),
        ];
        if !session.guessed().is_empty() {
            lines.push(Line::from(format!("Guessed: {}", session.tried_letters())));
        }
        if session.hint_revealed() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Hint: {}", session.hint()),
                INFO_STYLE,
            )));
        }
        lines
    }

    fn result_lines(session: &Session) -> Vec<Line<'_>> {
        let style = if session.phase() == Phase::Won {
            SUCCESS_STYLE
        } else {
            FAILURE_STYLE
        };
        let mut lines: Vec<Line> = session
            .result_message()
            .unwrap_or_default()
            .lines()
            .enumerate()
            .map(|(i, text)| {
                if i == 0 {
                    Line::from(Span::styled(text.to_string(), style))
                } else {
                    Line::from(text.to_string())
                }
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Accuracy: {:.0}%", session.accuracy())));
        lines
    }

    fn render_input(f: &mut Frame, area: Rect, state: TuiState, input: &str) {
        let title = match state {
            TuiState::EnteringName => "Your name",
            TuiState::EnteringGuess => "Your guess",
            TuiState::ShowingResult => "",
        };
        let text = if state == TuiState::ShowingResult {
            String::new()
        } else {
            format!("{input}_")
        };
        let paragraph =
            Paragraph::new(text).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_messages(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringName => "Type your name | ENTER: Start game | ESC: Quit",
            TuiState::EnteringGuess => "Type a letter | ENTER: Guess | ESC: Quit",
            TuiState::ShowingResult => "ENTER: Play again | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Wait up to one poll interval for a key press. Non-key events and
    /// garbage characters from terminal escape sequences are dropped.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("next_key() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }
                debug_log!(
                    "next_key() - code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(Some(key))
            }
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    /// Loop on input until a line is submitted or the player quits.
    fn read_line_action(&mut self, prompt: Prompt) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_line_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = edit_line(&mut self.input, prompt, key) {
                        self.error_message.clear();
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_line_action() - Input error: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_name(&mut self) -> Option<UserAction> {
        if self.state != TuiState::EnteringName {
            self.state = TuiState::EnteringName;
            self.session = Session::new();
            self.flash = None;
            self.message.clear();
        }
        self.read_line_action(Prompt::Name)
    }

    fn read_guess(&mut self, session: &Session) -> Option<UserAction> {
        self.state = TuiState::EnteringGuess;
        self.session.clone_from(session);
        self.read_line_action(Prompt::Guess)
    }

    fn display_session(&mut self, session: &Session, outcome: Option<GuessOutcome>) {
        self.session.clone_from(session);
        self.state = TuiState::EnteringGuess;
        self.error_message.clear();
        self.flash = outcome.map(Flash::for_outcome);
        self.message = match outcome {
            None => "Good luck!".to_string(),
            Some(GuessOutcome::Correct) => "Correct!".to_string(),
            Some(GuessOutcome::Incorrect {
                hint_revealed: true,
            }) => "Wrong! A hint has been revealed.".to_string(),
            Some(GuessOutcome::Incorrect { .. }) => "Wrong!".to_string(),
        };
        self.draw_or_log();
    }

    fn display_notice(&mut self, error: &HangmanError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_result(&mut self, session: &Session) -> Option<UserAction> {
        self.session.clone_from(session);
        self.state = TuiState::ShowingResult;
        self.input.clear();
        self.message = "Game over".to_string();
        loop {
            if self.draw().is_err() {
                return Some(UserAction::Exit);
            }
            match self.next_key() {
                Ok(Some(key)) => match key.code {
                    KeyCode::Esc => return Some(UserAction::Exit),
                    KeyCode::Enter => {
                        self.message.clear();
                        return Some(UserAction::Continue);
                    }
                    _ => {}
                },
                Ok(None) => {}
                Err(e) => {
                    debug_log!("display_result() - Input error: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
