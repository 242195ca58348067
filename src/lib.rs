// Library interface for word-guess
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{GameEngine, GameStatus, GuessView, Letter, Outcome, PLACEHOLDER, TurnReport};
pub use error::{ContractViolation, DataError, EmptyPoolError, GameError};
pub use game_state::{GameInterface, GameOptions, SessionEnd, UserAction, game_loop};
pub use wordbank::{Difficulty, WordBank, load_wordbank_from_file, load_wordbank_from_str};
