//! Leaderboard: ranked players, re-sorted after every mutation.
//!
//! Invalid requests (blank or duplicate names, unknown players) are silently
//! ignored. Deciding whether to warn the user is up to the caller.

use crate::models::player::{Player, PlayerRow};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// All players of a session, always kept in rank order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    players: Vec<Player>,
    /// Joining sequence number handed to the next new player.
    #[serde(default)]
    next_join: usize,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a leaderboard from names, skipping blank and duplicate ones.
    pub fn with_players<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut board = Self::new();
        for name in names {
            board.add_player(name.as_ref());
        }
        board
    }

    /// Add a player with score 0. Blank names and names already present
    /// (case-insensitive) are ignored.
    pub fn add_player(&mut self, name: &str) {
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return;
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.to_lowercase() == name_trimmed.to_lowercase());
        if is_duplicate {
            return;
        }
        let mut player = Player::new(name_trimmed);
        player.joined = self.next_join;
        self.next_join += 1;
        self.players.push(player);
        self.rerank();
    }

    /// Add `delta` to the named player's score and mark them as played.
    /// Unknown names are ignored.
    pub fn update_score(&mut self, name: &str, delta: i64) {
        let Some(p) = self.players.iter_mut().find(|p| p.name == name) else {
            return;
        };
        p.add_points(delta);
        self.rerank();
    }

    /// Highlight the named player and clear every other highlight.
    pub fn set_selected(&mut self, name: &str) {
        for p in &mut self.players {
            p.selected = p.name == name;
        }
    }

    /// Zero every score and clear played/selected. Players are kept.
    pub fn reset_scores(&mut self) {
        for p in &mut self.players {
            p.reset();
        }
        self.rerank();
    }

    /// Clear the played flags at the start of a new phrase. Scores are kept.
    pub fn new_round(&mut self) {
        for p in &mut self.players {
            p.played = false;
        }
    }

    /// Remove every player (full game restart).
    pub fn reset_players(&mut self) {
        self.players.clear();
        self.next_join = 0;
    }

    /// Players in rank order.
    pub fn players(&self) -> Vec<PlayerRow> {
        self.players.iter().map(Player::row).collect()
    }

    /// Player names in the order they joined. Unaffected by scores.
    pub fn turn_order(&self) -> Vec<String> {
        let mut joined: Vec<&Player> = self.players.iter().collect();
        joined.sort_by_key(|p| p.joined);
        joined.into_iter().map(|p| p.name.clone()).collect()
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Name of the highlighted player, if any.
    pub fn selected(&self) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.selected)
            .map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Sort by score (descending) then name (ascending) and renumber ranks from 1.
    fn rerank(&mut self) {
        self.players.sort_by(rank_order);
        for (i, p) in self.players.iter_mut().enumerate() {
            p.rank = i + 1;
        }
    }
}

fn rank_order(a: &Player, b: &Player) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name))
}
