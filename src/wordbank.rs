use crate::debug_log;
use crate::error::{DataError, EmptyPoolError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.csv");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of wrong, non-repeated guesses allowed before the game is lost.
    #[must_use]
    pub const fn guess_budget(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 6,
            Self::Hard => 4,
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Easy => "e",
            Self::Medium => "m",
            Self::Hard => "h",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty '{}' (expected e, m or h)", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "easy" => Ok(Self::Easy),
            "m" | "medium" => Ok(Self::Medium),
            "h" | "hard" => Ok(Self::Hard),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

/// Candidate secret words, one pool per difficulty. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    pools: [Vec<String>; 3],
}

impl WordBank {
    #[must_use]
    pub fn pool(&self, difficulty: Difficulty) -> &[String] {
        &self.pools[difficulty.index()]
    }

    /// Choose one word uniformly at random from the pool for `difficulty`.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<&str, EmptyPoolError> {
        self.pool(difficulty)
            .choose(rng)
            .map(String::as_str)
            .ok_or(EmptyPoolError(difficulty))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A later row for a tier replaces the earlier one.
    fn set_pool(&mut self, difficulty: Difficulty, words: Vec<String>) {
        let pool = &mut self.pools[difficulty.index()];
        if !pool.is_empty() {
            log::warn!("Duplicate row for {difficulty} difficulty replaces {} words", pool.len());
        }
        *pool = words;
    }
}

fn parse_word(field: &str, line: usize) -> Result<Option<String>, DataError> {
    let word = field.trim().trim_matches('"').trim();
    if word.is_empty() {
        return Ok(None);
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DataError::Malformed {
            line,
            reason: format!("'{word}' is not a word of letters a-z"),
        });
    }
    Ok(Some(word.to_ascii_lowercase()))
}

fn parse_row(bank: &mut WordBank, line: usize, row: &str) -> Result<(), DataError> {
    let row = row.trim();
    if row.is_empty() {
        return Ok(());
    }
    let mut fields = row.split(',');
    let tag = fields.next().unwrap_or_default().trim().trim_matches('"');
    let Ok(difficulty) = tag.parse::<Difficulty>() else {
        debug_log!("Skipping row {} with unrecognized tag '{}'", line, tag);
        return Ok(());
    };

    let mut words = Vec::new();
    for field in fields {
        if let Some(word) = parse_word(field, line)? {
            words.push(word);
        }
    }
    debug_log!("Loaded {} {} words from row {}", words.len(), difficulty, line);
    bank.set_pool(difficulty, words);
    Ok(())
}

pub fn load_wordbank_from_str(data: &str) -> Result<WordBank, DataError> {
    let mut bank = WordBank::default();
    for (i, row) in data.lines().enumerate() {
        parse_row(&mut bank, i + 1, row)?;
    }
    Ok(bank)
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, DataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut bank = WordBank::default();
    for (i, row) in reader.lines().enumerate() {
        parse_row(&mut bank, i + 1, &row?)?;
    }
    Ok(bank)
}
