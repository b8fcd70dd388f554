// Integration tests for the hangman application
// These tests verify that all modules work together correctly

use hangman::cli::CliInterface;
use hangman::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::io::Cursor;

/// Scripted interface that records everything the game loop shows.
#[derive(Default)]
struct RecordingInterface {
    actions: VecDeque<UserAction>,
    sessions: Vec<(Session, Option<GuessOutcome>)>,
    notices: Vec<String>,
    results: Vec<Session>,
    exited: bool,
}

impl RecordingInterface {
    fn new(actions: impl IntoIterator<Item = UserAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }

    fn next_action(&mut self) -> Option<UserAction> {
        Some(self.actions.pop_front().unwrap_or(UserAction::Exit))
    }
}

impl GameInterface for RecordingInterface {
    fn read_name(&mut self) -> Option<UserAction> {
        self.next_action()
    }

    fn read_guess(&mut self, _session: &Session) -> Option<UserAction> {
        self.next_action()
    }

    fn display_session(&mut self, session: &Session, outcome: Option<GuessOutcome>) {
        self.sessions.push((session.clone(), outcome));
    }

    fn display_notice(&mut self, error: &HangmanError) {
        self.notices.push(error.to_string());
    }

    fn display_result(&mut self, session: &Session) -> Option<UserAction> {
        self.results.push(session.clone());
        self.next_action()
    }

    fn display_exit_message(&mut self) {
        self.exited = true;
    }
}

fn name(s: &str) -> UserAction {
    UserAction::Name(s.to_string())
}

fn guess(s: &str) -> UserAction {
    UserAction::Guess(s.to_string())
}

fn bear_lexicon() -> Dictionary {
    Dictionary::parse("bear\ta large mammal\nox\tan animal\n")
}

#[test]
fn test_bear_scenario_through_game_loop() {
    let lexicon = bear_lexicon();
    let mut rng = StdRng::seed_from_u64(1);
    let mut interface = RecordingInterface::new([
        name("ann"),
        guess("b"),
        guess("x"),
        guess("z"),
        guess("q"),
        guess("w"),
        UserAction::Exit,
    ]);

    game_loop(&lexicon, &mut rng, &mut interface).unwrap();

    let budgets: Vec<usize> = interface
        .sessions
        .iter()
        .map(|(s, _)| s.attempts_left())
        .collect();
    assert_eq!(budgets, vec![4, 4, 3, 2, 1, 0]);
    assert_eq!(interface.sessions[1].0.masked_word(), "b _ _ _");

    let reveals: Vec<bool> = interface
        .sessions
        .iter()
        .map(|(s, _)| s.hint_revealed())
        .collect();
    assert_eq!(reveals, vec![false, false, false, true, true, true]);

    assert_eq!(interface.results.len(), 1);
    let result = &interface.results[0];
    assert_eq!(result.phase(), Phase::Lost);
    assert_eq!(result.word(), "bear");
    assert_eq!(result.hint(), "a large mammal");
    assert!(interface.exited);
}

#[test]
fn test_empty_name_then_valid_name() {
    let lexicon = bear_lexicon();
    let mut rng = StdRng::seed_from_u64(2);
    let mut interface = RecordingInterface::new([name("   "), name("bo"), UserAction::Exit]);

    game_loop(&lexicon, &mut rng, &mut interface).unwrap();

    assert_eq!(interface.notices, vec!["Please enter your name.".to_string()]);
    assert_eq!(interface.sessions.len(), 1);
    assert_eq!(interface.sessions[0].0.phase(), Phase::Playing);
    assert_eq!(interface.sessions[0].0.player_name(), "Bo");
}

#[test]
fn test_invalid_and_duplicate_guesses_leave_state() {
    let lexicon = bear_lexicon();
    let mut rng = StdRng::seed_from_u64(3);
    let mut interface = RecordingInterface::new([
        name("ann"),
        guess("x"),
        guess("x"),
        guess("xy"),
        guess("7"),
        UserAction::Exit,
    ]);

    game_loop(&lexicon, &mut rng, &mut interface).unwrap();

    assert_eq!(interface.sessions.len(), 2);
    assert_eq!(interface.sessions[1].0.attempts_left(), 3);
    assert_eq!(interface.notices.len(), 3);
    assert!(interface.notices[0].contains("already guessed"));
    assert!(interface.notices[1].contains("single letter"));
}

#[test]
fn test_win_then_new_game() {
    let lexicon = bear_lexicon();
    let mut rng = StdRng::seed_from_u64(4);
    let mut interface = RecordingInterface::new([
        name("ann"),
        guess("b"),
        guess("e"),
        guess("a"),
        guess("r"),
        UserAction::Continue,
        name("ann"),
        UserAction::Exit,
    ]);

    game_loop(&lexicon, &mut rng, &mut interface).unwrap();

    assert_eq!(interface.results.len(), 1);
    assert_eq!(interface.results[0].phase(), Phase::Won);
    assert_eq!(interface.results[0].attempts_left(), 4);
    // second session started fresh
    let last = &interface.sessions.last().unwrap().0;
    assert_eq!(last.phase(), Phase::Playing);
    assert!(last.guessed().is_empty());
}

#[test]
fn test_empty_lexicon_is_fatal() {
    let lexicon = Dictionary::parse("ox\ncat\n");
    let mut rng = StdRng::seed_from_u64(5);
    let mut interface = RecordingInterface::new([name("ann")]);

    let result = game_loop(&lexicon, &mut rng, &mut interface);
    assert!(matches!(result, Err(HangmanError::DataUnavailable(_))));
    assert!(interface.sessions.is_empty());
    assert!(!interface.exited);
}

#[test]
fn test_end_to_end_cli_session() {
    let lexicon = bear_lexicon();
    let mut rng = StdRng::seed_from_u64(6);
    let input = "\nann\nB\nb\nhello\ne\na\nr\n\nexit\n";
    let mut interface = CliInterface::with_writer(Cursor::new(input), Vec::new());

    game_loop(&lexicon, &mut rng, &mut interface).unwrap();

    let output = String::from_utf8(interface.into_writer()).unwrap();
    assert!(output.contains("Please enter your name."));
    assert!(output.contains("Hello Ann! Guess the word:"));
    assert!(output.contains("b _ _ _"));
    assert!(output.contains("You already guessed 'b'."));
    assert!(output.contains("Please enter a single letter."));
    assert!(output.contains("Congratulations!"));
    assert!(output.contains("The word was: bear"));
    assert!(output.contains("Meaning: a large mammal"));
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_cli_end_of_input_exits_cleanly() {
    let lexicon = bear_lexicon();
    let mut rng = StdRng::seed_from_u64(7);
    let mut interface = CliInterface::with_writer(Cursor::new("ann\nq\n"), Vec::new());

    game_loop(&lexicon, &mut rng, &mut interface).unwrap();

    let output = String::from_utf8(interface.into_writer()).unwrap();
    assert!(output.contains("Attempts Left: 3"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_custom_lexicon_file_to_game() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# test words").unwrap();
    writeln!(file, "kiwi\tfuzzy brown fruit").unwrap();
    writeln!(file, "fig").unwrap();

    let lexicon = resolve_lexicon(Some(file.path())).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let secret = select_word(&lexicon, &mut rng).unwrap();
    assert_eq!(secret, SecretWord::new("kiwi", "fuzzy brown fruit"));

    let mut interface = RecordingInterface::new([
        name("ann"),
        guess("k"),
        guess("i"),
        guess("w"),
        UserAction::Exit,
    ]);
    game_loop(&lexicon, &mut rng, &mut interface).unwrap();
    assert_eq!(interface.results[0].phase(), Phase::Won);
    assert_eq!(interface.results[0].masked_word(), "k i w i");
}

#[test]
fn test_embedded_lexicon_games_are_well_formed() {
    let lexicon = Dictionary::embedded();
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let secret = select_word(&lexicon, &mut rng).unwrap();
        assert!(secret.word.len() >= MIN_WORD_LENGTH);
        assert!(secret.word.chars().all(|c| c.is_ascii_lowercase()));
        assert!(!secret.hint.is_empty());

        let session = Session::new().start("x", || Ok(secret.clone())).unwrap();
        assert_eq!(session.attempts_left(), secret.word.len());
        assert_eq!(session.masked_word(), mask(&secret.word, session.guessed()));
    }
}
