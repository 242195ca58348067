use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_guess::cli::{CliInterface, parse_cli};
use word_guess::game_state::{GameOptions, SessionEnd, game_loop};
use word_guess::logging::init_logging;
use word_guess::tui::TuiInterface;
use word_guess::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
use word_guess::{GameError, WordBank};

fn run(
    use_tui: bool,
    wordbank: &WordBank,
    rng: &mut StdRng,
    options: &GameOptions,
) -> Result<SessionEnd, GameError> {
    if use_tui {
        match TuiInterface::new() {
            Ok(mut interface) => return game_loop(wordbank, &mut interface, rng, options),
            Err(e) => {
                log::warn!("Falling back to console, TUI unavailable: {e}");
                eprintln!("Failed to start terminal UI ({e}); using console prompts.");
            }
        }
    }
    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    game_loop(wordbank, &mut interface, rng, options)
}

fn main() -> ExitCode {
    let cli = parse_cli();
    if let Some(path) = init_logging(!cli.tui) {
        log::info!("Logging to {}", path.display());
    }

    let loaded = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path),
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    let wordbank = match loaded {
        Ok(bank) => bank,
        Err(e) => {
            let source = cli.wordbank_path.as_deref().unwrap_or("embedded word list");
            log::error!("Failed to load word bank from '{source}': {e}");
            eprintln!("Failed to load word bank from '{source}': {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} words.", wordbank.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let options = GameOptions {
        difficulty: cli.difficulty,
        reveal_secret: cli.debug,
    };

    match run(cli.tui, &wordbank, &mut rng, &options) {
        Ok(end) => {
            log::info!("Session ended: {end:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
