//! GameSession: one game's leaderboard, phrases, current board and turn state.

use crate::config::{ConfigError, GameConfig, MissPenalty, PointsTable};
use crate::models::board::{BoardShape, PhraseBoard};
use crate::models::leaderboard::Leaderboard;
use crate::models::phrase::PhraseBook;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Unique identifier for a game session.
pub type SessionId = Uuid;

/// Errors from game actions. These are adapter-level warnings; the
/// leaderboard itself never fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// No phrase is on the board.
    NoActivePhrase,
    /// Nobody has been picked to play.
    NoCurrentPlayer,
    /// No player with this name on the leaderboard.
    UnknownPlayer(String),
    /// Only A-Z can be guessed.
    InvalidLetter(char),
    /// This letter was already tried on the current phrase.
    AlreadyGuessed(char),
    /// Guessing after the phrase was solved.
    PhraseSolved,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::NoActivePhrase => write!(f, "No phrase loaded. Start the game or load the next phrase"),
            GameError::NoCurrentPlayer => write!(f, "Select a player first from the leaderboard"),
            GameError::UnknownPlayer(name) => write!(f, "No player named {}", name),
            GameError::InvalidLetter(c) => write!(f, "{:?} is not a letter", c),
            GameError::AlreadyGuessed(c) => write!(f, "Letter {} was already guessed", c),
            GameError::PhraseSolved => write!(f, "Phrase already solved. Load the next phrase"),
        }
    }
}

impl std::error::Error for GameError {}

/// Where the game is.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Adding players; no phrase loaded yet.
    #[default]
    Lobby,
    /// A phrase is on the board and letters can be guessed.
    InPlay,
    /// Current phrase fully revealed; waiting for the next one.
    Solved,
    /// Every phrase has been used.
    OutOfPhrases,
}

/// Result of one letter guess.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub letter: char,
    pub occurrences: usize,
    /// Points applied to the current player (negative on a miss).
    pub points: i64,
    /// The guess completed the phrase.
    pub solved: bool,
}

/// All state of one running game.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub id: SessionId,
    pub leaderboard: Leaderboard,
    pub phrases: PhraseBook,
    pub points: PointsTable,
    pub miss_penalty: MissPenalty,
    pub shape: BoardShape,
    pub time_limit: u32,
    pub shuffle_phrases: bool,
    pub state: GameState,
    /// Board for the phrase being played.
    pub board: Option<PhraseBoard>,
    /// Category of the phrase being played.
    pub category: Option<String>,
    /// Letters tried on the current phrase, hits and misses.
    pub guessed: BTreeSet<char>,
    pub current_player: Option<String>,
    /// When the current turn runs out; `None` while no turn is running.
    pub turn_deadline: Option<DateTime<Utc>>,
}

impl GameSession {
    /// New session in the lobby, with no players.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            leaderboard: Leaderboard::new(),
            phrases: PhraseBook::from_config(&config.phrases, &config.board)?,
            points: config.points.clone(),
            miss_penalty: config.miss_penalty,
            shape: config.board.clone(),
            time_limit: config.time_limit,
            shuffle_phrases: config.shuffle_phrases,
            state: GameState::Lobby,
            board: None,
            category: None,
            guessed: BTreeSet::new(),
            current_player: None,
            turn_deadline: None,
        })
    }

    /// Add a player (silently ignored if blank or duplicate).
    pub fn add_player(&mut self, name: &str) {
        self.leaderboard.add_player(name);
    }

    /// Remove every player and forget the current one.
    pub fn reset_players(&mut self) {
        self.leaderboard.reset_players();
        self.current_player = None;
        self.turn_deadline = None;
    }

    /// Zero all scores. The current player stays current and keeps the highlight.
    pub fn reset_scores(&mut self) {
        self.leaderboard.reset_scores();
        if let Some(name) = &self.current_player {
            self.leaderboard.set_selected(name);
        }
    }

    /// Restart the turn clock from `now`.
    pub fn restart_timer(&mut self, now: DateTime<Utc>) {
        self.turn_deadline = Some(now + Duration::seconds(i64::from(self.time_limit)));
    }

    /// Whole seconds left in the turn at `now` (0 once expired or if no turn is running).
    pub fn time_remaining(&self, now: DateTime<Utc>) -> u32 {
        self.turn_deadline
            .map(|deadline| (deadline - now).num_seconds().clamp(0, i64::from(self.time_limit)))
            .map_or(0, |secs| secs as u32)
    }

    pub fn is_turn_expired(&self, now: DateTime<Utc>) -> bool {
        self.turn_deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Current phrase text, if a phrase is on the board.
    pub fn phrase(&self) -> Option<&str> {
        self.board.as_ref().map(PhraseBoard::phrase)
    }
}
