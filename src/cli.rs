use crate::engine::{GuessView, Letter, Outcome, TurnReport};
use crate::game_state::{GameInterface, UserAction};
use crate::wordbank::Difficulty;
use clap::Parser;
use std::io::BufRead;

/// Word Guess CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a CSV word list (rows of: e|m|h, word, word, ...)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Difficulty to play (e, m, h); prompts when omitted
    #[arg(short = 'd', long = "difficulty")]
    pub difficulty: Option<Difficulty>,

    /// Use the terminal UI instead of line prompts
    #[arg(long)]
    pub tui: bool,

    /// Print the secret word when the game starts
    #[arg(long)]
    pub debug: bool,

    /// Seed for reproducible word selection
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Reads one trimmed, lowercased line. `None` on EOF or a read error.
fn read_input<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            None
        }
    }
}

pub fn read_difficulty<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nThis can be (e)asy, (m)edium or really (h)ard. The choice is yours:");
    let Some(input) = read_input(reader) else {
        return Some(UserAction::Exit);
    };

    match input.as_str() {
        "e" | "m" | "h" => input.parse().ok().map(UserAction::Choose),
        _ => None,
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nPlease guess a letter! (a..z):");
    let Some(input) = read_input(reader) else {
        return Some(UserAction::Exit);
    };

    input.parse::<Letter>().ok().map(UserAction::Guess)
}

#[must_use]
pub fn format_guessed_letters(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(|l| l.as_char().to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_secret(secret: &str) {
    println!("Your word is {secret}.");
}

pub fn display_intro(view: &GuessView) {
    println!("You have {} guesses.", view.remaining_guesses);
    println!("Guess the word: {}", view.revealed);
}

pub fn display_turn(turn: &TurnReport) {
    println!(
        "Previous guesses: {}",
        format_guessed_letters(&turn.view.guessed_letters)
    );
    println!(
        "You guessed {}. The word is now {}.",
        turn.letter, turn.view.revealed
    );
    println!("You have {} guesses left.", turn.view.remaining_guesses);
}

pub fn display_outcome(outcome: Outcome, secret: &str) {
    match outcome {
        Outcome::Won => println!("You win the game! The word was {secret}."),
        Outcome::Lost => println!("Out of guesses. The word was {secret}. Next time!"),
    }
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_difficulty(&mut self) -> Option<UserAction> {
        read_difficulty(&mut self.reader)
    }

    fn display_secret(&mut self, secret: &str) {
        display_secret(secret);
    }

    fn display_intro(&mut self, _difficulty: Difficulty, view: &GuessView) {
        display_intro(view);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        read_guess(&mut self.reader)
    }

    fn display_turn(&mut self, turn: &TurnReport) {
        display_turn(turn);
    }

    fn display_outcome(&mut self, outcome: Outcome, secret: &str) {
        display_outcome(outcome, secret);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn letter(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::try_parse_from(["word-guess"]).unwrap();
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.difficulty, None);
        assert!(!cli.tui);
        assert!(!cli.debug);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_parse_cli_all_options() {
        let cli = Cli::try_parse_from([
            "word-guess",
            "-i",
            "words.csv",
            "-d",
            "hard",
            "--tui",
            "--debug",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(cli.wordbank_path.as_deref(), Some("words.csv"));
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert!(cli.tui);
        assert!(cli.debug);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_parse_cli_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["word-guess", "-d", "extreme"]).is_err());
    }

    #[test]
    fn test_read_difficulty_tags() {
        let mut reader = Cursor::new("e\n M \nh\n");
        assert_eq!(
            read_difficulty(&mut reader),
            Some(UserAction::Choose(Difficulty::Easy))
        );
        assert_eq!(
            read_difficulty(&mut reader),
            Some(UserAction::Choose(Difficulty::Medium))
        );
        assert_eq!(
            read_difficulty(&mut reader),
            Some(UserAction::Choose(Difficulty::Hard))
        );
    }

    #[test]
    fn test_read_difficulty_invalid() {
        let mut reader = Cursor::new("easy\nx\n\n");
        assert_eq!(read_difficulty(&mut reader), None);
        assert_eq!(read_difficulty(&mut reader), None);
        assert_eq!(read_difficulty(&mut reader), None);
    }

    #[test]
    fn test_read_difficulty_eof_exits() {
        let mut reader = Cursor::new("");
        assert_eq!(read_difficulty(&mut reader), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_guess_valid_letter() {
        let mut reader = Cursor::new("q\n");
        assert_eq!(read_guess(&mut reader), Some(UserAction::Guess(letter('q'))));
    }

    #[test]
    fn test_read_guess_uppercase_converted() {
        let mut reader = Cursor::new("  Q  \n");
        assert_eq!(read_guess(&mut reader), Some(UserAction::Guess(letter('q'))));
    }

    #[test]
    fn test_read_guess_invalid() {
        let mut reader = Cursor::new("ab\n3\n\n?\n");
        for _ in 0..4 {
            assert_eq!(read_guess(&mut reader), None);
        }
        assert_eq!(read_guess(&mut reader), Some(UserAction::Exit));
    }

    #[test]
    fn test_format_guessed_letters() {
        assert_eq!(format_guessed_letters(&[]), "");
        assert_eq!(
            format_guessed_letters(&[letter('c'), letter('a'), letter('z')]),
            "C A Z"
        );
    }
}
