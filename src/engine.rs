//! Turn state machine for a single game.
//!
//! The engine never performs I/O. A front end validates raw input into a
//! [`Letter`], feeds it to [`GameEngine::submit_guess`], and renders the
//! returned [`GuessView`] until the game reaches a terminal state.
//!
//! # State Machine
//! - `InProgress` → `Won` when every position of the secret is revealed
//! - `InProgress` → `Lost` when the guess budget reaches zero
//! - `Won` and `Lost` are terminal; further guesses are rejected

use crate::debug_log;
use crate::error::ContractViolation;
use std::fmt;
use std::str::FromStr;

/// Stands in for a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '•';

/// A single guessable letter, always lowercase `a..=z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = ContractViolation;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_lowercase() {
            Ok(Self(c))
        } else {
            Err(ContractViolation::InvalidLetter(c.to_string()))
        }
    }
}

impl FromStr for Letter {
    type Err = ContractViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(ContractViolation::InvalidLetter(s.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Public snapshot of the game after a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessView {
    pub revealed: String,
    pub remaining_guesses: u32,
    /// Distinct letters in the order they were first guessed.
    pub guessed_letters: Vec<Letter>,
    pub status: GameStatus,
}

/// What a single guess did, along with the resulting view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub letter: Letter,
    pub hit: bool,
    pub repeated: bool,
    pub view: GuessView,
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    secret: Vec<char>,
    revealed: Vec<char>,
    remaining_guesses: u32,
    guessed_letters: Vec<Letter>,
    status: GameStatus,
}

impl GameEngine {
    pub fn new(secret: &str, budget: u32) -> Result<Self, ContractViolation> {
        if secret.is_empty() || !secret.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ContractViolation::InvalidSecret(secret.to_string()));
        }
        if budget == 0 {
            return Err(ContractViolation::ZeroBudget);
        }

        let secret: Vec<char> = secret.chars().collect();
        let revealed = vec![PLACEHOLDER; secret.len()];
        debug_log!("New game: {} letters, {} guesses", secret.len(), budget);

        Ok(Self {
            secret,
            revealed,
            remaining_guesses: budget,
            guessed_letters: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Process one guessed letter.
    ///
    /// A wrong letter costs one guess the first time it is submitted and
    /// nothing afterwards. Completing the word wins even when the same turn
    /// would otherwise have exhausted the budget.
    ///
    /// Returns [`ContractViolation::GameOver`] once the game has ended; the
    /// state is left untouched in that case.
    pub fn submit_guess(&mut self, letter: Letter) -> Result<TurnReport, ContractViolation> {
        if self.is_terminal() {
            return Err(ContractViolation::GameOver);
        }

        let c = letter.as_char();
        let hit = self.secret.contains(&c);
        let repeated = self.guessed_letters.contains(&letter);

        if hit {
            for (slot, &s) in self.revealed.iter_mut().zip(&self.secret) {
                if s == c {
                    *slot = c;
                }
            }
        } else if !repeated {
            self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
        }

        if !repeated {
            self.guessed_letters.push(letter);
        }

        self.status = if self.is_solved() {
            GameStatus::Won
        } else if self.remaining_guesses == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        debug_log!(
            "Guess '{}': hit={} repeated={} remaining={} status={:?}",
            c,
            hit,
            repeated,
            self.remaining_guesses,
            self.status
        );

        Ok(TurnReport {
            letter,
            hit,
            repeated,
            view: self.view(),
        })
    }

    #[must_use]
    pub fn view(&self) -> GuessView {
        GuessView {
            revealed: self.revealed(),
            remaining_guesses: self.remaining_guesses,
            guessed_letters: self.guessed_letters.clone(),
            status: self.status,
        }
    }

    #[must_use]
    pub fn secret(&self) -> String {
        self.secret.iter().collect()
    }

    #[must_use]
    pub fn revealed(&self) -> String {
        self.revealed.iter().collect()
    }

    #[must_use]
    pub const fn remaining_guesses(&self) -> u32 {
        self.remaining_guesses
    }

    #[must_use]
    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed_letters
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn outcome(&self) -> Result<Outcome, ContractViolation> {
        match self.status {
            GameStatus::Won => Ok(Outcome::Won),
            GameStatus::Lost => Ok(Outcome::Lost),
            GameStatus::InProgress => Err(ContractViolation::NotFinished),
        }
    }

    fn is_solved(&self) -> bool {
        self.revealed == self.secret
    }
}
