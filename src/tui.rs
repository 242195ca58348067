//! TUI (Terminal User Interface) module for Word Guess
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `ChoosingDifficulty` → `EnteringGuess` → `GameOver`
//! - ESC exits from any state

use crate::cli::format_guessed_letters;
use crate::engine::{GameStatus, GuessView, Letter, Outcome, TurnReport};
use crate::game_state::{GameInterface, UserAction};
use crate::wordbank::Difficulty;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    ChoosingDifficulty,
    EnteringGuess,
    /// Game has ended - message stored in interface.message
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    state: TuiState,
    difficulty: Option<Difficulty>,
    view: Option<&'a GuessView>,
    budget: u32,
    message: &'a str,
    error_message: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    difficulty: Option<Difficulty>,
    view: Option<GuessView>,
    budget: u32,
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
            state: TuiState::ChoosingDifficulty,
            difficulty: None,
            view: None,
            budget: 0,
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

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            difficulty: self.difficulty,
            view: self.view.as_ref(),
            budget: self.budget,
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
                Constraint::Length(3), // Title
                Constraint::Length(5), // Word
                Constraint::Length(3), // Guesses left
                Constraint::Min(5),    // Info panel
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.difficulty);
        Self::render_word(f, chunks[1], ctx.view);
        Self::render_budget(f, chunks[2], ctx.view, ctx.budget);
        Self::render_info(f, chunks[3], ctx.view, ctx.message, ctx.error_message);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, difficulty: Option<Difficulty>) {
        let text = match difficulty {
            Some(d) => format!("WORD GUESS - {}", d.to_string().to_uppercase()),
            None => "WORD GUESS".to_string(),
        };
        let title = Paragraph::new(text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_word(f: &mut Frame, area: Rect, view: Option<&GuessView>) {
        let block = Block::default().title("Word").borders(Borders::ALL);
        let Some(view) = view else {
            f.render_widget(block, area);
            return;
        };

        let style = match view.status {
            GameStatus::Won => SUCCESS_STYLE,
            GameStatus::Lost => ERROR_STYLE,
            GameStatus::InProgress => Style::default().fg(Color::White),
        };
        let spaced: Vec<Span> = view
            .revealed
            .chars()
            .map(|c| Span::styled(format!(" {} ", c.to_ascii_uppercase()), style))
            .collect();
        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spaced)]).block(block);
        f.render_widget(paragraph, area);
    }

    fn render_budget(f: &mut Frame, area: Rect, view: Option<&GuessView>, budget: u32) {
        let remaining = view.map_or(0, |v| v.remaining_guesses);
        let ratio = if budget == 0 {
            0.0
        } else {
            f64::from(remaining) / f64::from(budget)
        };
        let color = if ratio > 0.5 {
            Color::Green
        } else if ratio > 0.25 {
            Color::Yellow
        } else {
            Color::Red
        };
        let gauge = Gauge::default()
            .block(Block::default().title("Guesses left").borders(Borders::ALL))
            .gauge_style(Style::default().fg(color))
            .ratio(ratio)
            .label(format!("{remaining}/{budget}"));
        f.render_widget(gauge, area);
    }

    fn render_info(
        f: &mut Frame,
        area: Rect,
        view: Option<&GuessView>,
        message: &str,
        error_message: &str,
    ) {
        let mut lines = Vec::new();

        if let Some(view) = view
            && !view.guessed_letters.is_empty()
        {
            lines.push(Line::from(vec![Span::styled("Previous guesses:", INFO_STYLE)]));
            lines.push(Line::from(format!(
                "  {}",
                format_guessed_letters(&view.guessed_letters)
            )));
            lines.push(Line::from(""));
        }

        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }

        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::ChoosingDifficulty => "E: Easy | M: Medium | H: Hard | ESC: Quit",
            TuiState::EnteringGuess => "Type a letter a-z to guess | ESC: Quit",
            TuiState::GameOver => "Press any key to exit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Poll for a single key press. `Ok(None)` when nothing relevant arrived.
    fn next_key() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                if Self::has_modifier_keys(&key) {
                    debug_log!("next_key() - Ignoring key with modifier: {:?}", key.modifiers);
                    return Ok(None);
                }
                Ok(Some(key))
            }
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    /// Map a key to a difficulty choice. `Err` carries a message for the player.
    fn difficulty_key_action(key: KeyEvent) -> Result<Option<UserAction>, String> {
        match key.code {
            KeyCode::Esc => Ok(Some(UserAction::Exit)),
            KeyCode::Char(c) => c
                .to_string()
                .parse::<Difficulty>()
                .map(|d| Some(UserAction::Choose(d)))
                .map_err(|_| format!("'{c}' is not a difficulty. Use E, M or H.")),
            _ => Ok(None),
        }
    }

    fn guess_key_action(key: KeyEvent) -> Result<Option<UserAction>, String> {
        match key.code {
            KeyCode::Esc => Ok(Some(UserAction::Exit)),
            KeyCode::Char(c) => Letter::try_from(c.to_ascii_lowercase())
                .map(|letter| Some(UserAction::Guess(letter)))
                .map_err(|_| format!("Only letters a-z are allowed! ('{c}' is not a letter)")),
            _ => Ok(None),
        }
    }

    /// Block until the current state's handler produces an action.
    fn read_action(&mut self) -> Option<UserAction> {
        self.draw_or_log();
        loop {
            let key = match Self::next_key() {
                Ok(Some(key)) => key,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("Input error, exiting: {e}");
                    return Some(UserAction::Exit);
                }
            };

            let result = match self.state {
                TuiState::ChoosingDifficulty => Self::difficulty_key_action(key),
                TuiState::EnteringGuess => Self::guess_key_action(key),
                TuiState::GameOver => Ok(Some(UserAction::Exit)),
            };
            match result {
                Ok(Some(action)) => {
                    self.error_message.clear();
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(message) => self.error_message = message,
            }
            self.draw_or_log();
        }
    }

    fn wait_for_any_key(&mut self) {
        self.draw_or_log();
        loop {
            match Self::next_key() {
                Ok(Some(_)) | Err(_) => return,
                Ok(None) => {}
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_difficulty(&mut self) -> Option<UserAction> {
        self.state = TuiState::ChoosingDifficulty;
        self.message = "Choose (e)asy, (m)edium or really (h)ard.".to_string();
        self.read_action()
    }

    fn display_secret(&mut self, secret: &str) {
        self.message = format!("Your word is {secret}.");
    }

    fn display_intro(&mut self, difficulty: Difficulty, view: &GuessView) {
        self.difficulty = Some(difficulty);
        self.budget = view.remaining_guesses;
        self.view = Some(view.clone());
        self.state = TuiState::EnteringGuess;
        let intro = format!("You have {} guesses.", view.remaining_guesses);
        if self.message.starts_with("Your word is") {
            self.message = format!("{} {intro}", self.message);
        } else {
            self.message = intro;
        }
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        self.read_action()
    }

    fn display_turn(&mut self, turn: &TurnReport) {
        self.view = Some(turn.view.clone());
        let letter = turn.letter.as_char().to_ascii_uppercase();
        self.message = match (turn.hit, turn.repeated) {
            (_, true) => format!("You already guessed {letter}."),
            (true, false) => format!("Good guess! {letter} is in the word."),
            (false, false) => format!("Sorry, {letter} is not in the word."),
        };
        self.draw_or_log();
    }

    fn display_outcome(&mut self, outcome: Outcome, secret: &str) {
        self.state = TuiState::GameOver;
        self.message = match outcome {
            Outcome::Won => format!("You win the game! The word was {secret}."),
            Outcome::Lost => format!("Out of guesses. The word was {secret}."),
        };
        self.wait_for_any_key();
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
