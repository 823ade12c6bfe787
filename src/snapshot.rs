//! Plain JSON view of a session for displays and for saving a game.

use crate::models::{DisplayCell, GameSession, GameState, PlayerRow, SessionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything a display needs. Hidden letters are never included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub state: GameState,
    pub players: Vec<PlayerRow>,
    pub current_player: Option<String>,
    pub category: Option<String>,
    /// `rows × width` display grid; empty when no phrase is loaded.
    pub grid: Vec<Vec<DisplayCell>>,
    /// Board rows as text (`_` for hidden letters).
    pub rows: Vec<String>,
    pub revealed_letters: BTreeSet<char>,
    pub guessed_letters: BTreeSet<char>,
    pub time_remaining: u32,
    pub phrases_remaining: usize,
}

impl SessionSnapshot {
    pub fn capture(session: &GameSession, now: DateTime<Utc>) -> Self {
        let board = session.board.as_ref();
        Self {
            id: session.id,
            state: session.state,
            players: session.leaderboard.players(),
            current_player: session.current_player.clone(),
            category: session.category.clone(),
            grid: board.map(|b| b.grid()).unwrap_or_default(),
            rows: board.map(|b| b.render_rows()).unwrap_or_default(),
            revealed_letters: board.map(|b| b.revealed_letters()).unwrap_or_default(),
            guessed_letters: session.guessed.clone(),
            time_remaining: session.time_remaining(now),
            phrases_remaining: session.phrases.remaining(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
