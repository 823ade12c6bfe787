//! Player and PlayerRow data structures.

use serde::{Deserialize, Serialize};

/// Leaderboard row as handed to a display (table, HUD).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub rank: usize,
    pub name: String,
    pub score: i64,
    pub played: bool,
    pub selected: bool,
}

impl PlayerRow {
    pub fn from_player(p: &Player) -> Self {
        Self {
            rank: p.rank,
            name: p.name.clone(),
            score: p.score,
            played: p.played,
            selected: p.selected,
        }
    }
}

/// A player on the leaderboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Can go negative after miss penalties.
    pub score: i64,
    /// 1-based position after the last re-rank. Only the leaderboard writes it.
    pub rank: usize,
    /// Display highlight only; never affects ranking.
    pub selected: bool,
    /// Score adjusted since the last reset or new round.
    pub played: bool,
    /// Position in joining order, used for turn rotation.
    #[serde(default)]
    pub joined: usize,
}

impl Player {
    /// Create a new player with the given name. Other fields start at zero/false.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            rank: 0,
            selected: false,
            played: false,
            joined: 0,
        }
    }

    /// Snapshot row for display.
    pub fn row(&self) -> PlayerRow {
        PlayerRow::from_player(self)
    }

    /// Add `delta` points (may be negative) and mark the player as having played.
    pub fn add_points(&mut self, delta: i64) {
        self.score += delta;
        self.played = true;
    }

    /// Zero the score and clear the round flags.
    pub fn reset(&mut self) {
        self.score = 0;
        self.played = false;
        self.selected = false;
    }
}
