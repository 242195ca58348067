use crate::engine::{GameEngine, GuessView, Letter, Outcome, TurnReport};
use crate::error::GameError;
use crate::wordbank::{Difficulty, WordBank};
use crate::{debug_log, info_log};
use rand::Rng;

/// Input collected by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Choose(Difficulty),
    Guess(Letter),
    Exit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Outcome),
    Exited,
}

#[derive(Debug, Clone, Default)]
pub struct GameOptions {
    /// Skip the difficulty prompt.
    pub difficulty: Option<Difficulty>,
    /// Show the secret word at the start of the game.
    pub reveal_secret: bool,
}

/// Front end used by [`game_loop`]. Implementations perform all I/O.
///
/// `read_difficulty` and `read_guess` return `None` for input that should
/// be asked for again.
pub trait GameInterface {
    fn read_difficulty(&mut self) -> Option<UserAction>;
    fn display_secret(&mut self, secret: &str);
    fn display_intro(&mut self, difficulty: Difficulty, view: &GuessView);
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_turn(&mut self, turn: &TurnReport);
    fn display_outcome(&mut self, outcome: Outcome, secret: &str);
    fn display_exit_message(&mut self);
}

/// Run one game from difficulty selection to a terminal state.
///
/// Fails only on an empty pool for the chosen difficulty or on an engine
/// contract violation; wrong and repeated guesses are ordinary turns.
pub fn game_loop<I, R>(
    wordbank: &WordBank,
    interface: &mut I,
    rng: &mut R,
    options: &GameOptions,
) -> Result<SessionEnd, GameError>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let difficulty = match options.difficulty {
        Some(d) => d,
        None => match select_difficulty(interface) {
            Some(d) => d,
            None => {
                interface.display_exit_message();
                return Ok(SessionEnd::Exited);
            }
        },
    };
    info_log!("Difficulty selected: {}", difficulty);

    let secret = wordbank.pick(difficulty, rng)?;
    let mut engine = GameEngine::new(secret, difficulty.guess_budget())?;

    if options.reveal_secret {
        interface.display_secret(secret);
    }
    interface.display_intro(difficulty, &engine.view());

    while !engine.is_terminal() {
        let letter = match interface.read_guess() {
            Some(UserAction::Guess(letter)) => letter,
            Some(UserAction::Exit) => {
                info_log!("Player quit with {} guesses left", engine.remaining_guesses());
                interface.display_exit_message();
                return Ok(SessionEnd::Exited);
            }
            Some(UserAction::Choose(_)) | None => continue,
        };

        let turn = engine.submit_guess(letter)?;
        interface.display_turn(&turn);
    }

    let outcome = engine.outcome()?;
    info_log!("Game over: {:?}", outcome);
    interface.display_outcome(outcome, secret);
    Ok(SessionEnd::Finished(outcome))
}

fn select_difficulty<I: GameInterface + ?Sized>(interface: &mut I) -> Option<Difficulty> {
    loop {
        match interface.read_difficulty() {
            Some(UserAction::Choose(d)) => return Some(d),
            Some(UserAction::Exit) => return None,
            other => {
                debug_log!("Ignoring difficulty input: {:?}", other);
            }
        }
    }
}
