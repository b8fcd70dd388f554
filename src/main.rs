use hangman::cli::{Cli, CliInterface, parse_cli};
use hangman::logging::{default_log_path, init_logger};
use hangman::tui::TuiInterface;
use hangman::{Dictionary, HangmanError, game_loop, resolve_lexicon};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    // The TUI owns the terminal, so its logs go to a file by default.
    let log_target = cli
        .log_file
        .clone()
        .or_else(|| (!cli.simple).then(default_log_path));
    if let Err(e) = init_logger(log_target.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let lexicon = match resolve_lexicon(cli.lexicon_path.as_deref()) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Lexicon ready with {} entries", lexicon.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match run(&cli, &lexicon, &mut rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, lexicon: &Dictionary, rng: &mut StdRng) -> Result<(), HangmanError> {
    if cli.simple {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        return game_loop(lexicon, rng, &mut interface);
    }

    // Dropped before main prints any error, which restores the terminal.
    let mut interface = TuiInterface::new()?;
    game_loop(lexicon, rng, &mut interface)
}
