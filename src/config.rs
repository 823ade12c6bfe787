//! Game configuration: phrases, letter points, timer and board shape, stored as JSON.

use crate::models::{BoardShape, LayoutError, PhraseBoard};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Points for a letter missing from the points table.
pub const DEFAULT_LETTER_POINTS: i64 = 5;

/// Errors loading or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// A phrase is longer than the whole board.
    PhraseTooLong { phrase: String, len: usize, max_len: usize },
    Board(LayoutError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config file error: {}", e),
            ConfigError::Json(e) => write!(f, "Config is not valid JSON: {}", e),
            ConfigError::PhraseTooLong { phrase, len, max_len } => {
                write!(f, "Phrase too long ({} > {}): {}", len, max_len, phrase)
            }
            ConfigError::Board(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Board(e) => Some(e),
            ConfigError::PhraseTooLong { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl From<LayoutError> for ConfigError {
    fn from(e: LayoutError) -> Self {
        ConfigError::Board(e)
    }
}

/// One phrase as written in the config file.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub phrase: String,
    #[serde(default)]
    pub category: String,
}

impl PhraseEntry {
    pub fn new(phrase: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            category: category.into(),
        }
    }
}

/// What a wrong letter costs the guessing player.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissPenalty {
    /// Wrong guesses are free.
    None,
    /// Lose the letter's configured points.
    #[default]
    LetterValue,
    /// Lose a fixed amount regardless of the letter.
    Fixed { points: i64 },
}

/// Letter → points. Keys are single upper-case letters.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsTable(BTreeMap<String, i64>);

impl PointsTable {
    /// Points for `letter` (case-insensitive), falling back to the default.
    pub fn points_for(&self, letter: char) -> i64 {
        let key = letter.to_ascii_uppercase().to_string();
        self.0.get(&key).copied().unwrap_or(DEFAULT_LETTER_POINTS)
    }

    pub fn set(&mut self, letter: char, points: i64) {
        self.0.insert(letter.to_ascii_uppercase().to_string(), points);
    }

    /// Cost of guessing `letter` wrongly under `policy` (as a positive number).
    pub fn miss_cost(&self, letter: char, policy: MissPenalty) -> i64 {
        match policy {
            MissPenalty::None => 0,
            MissPenalty::LetterValue => self.points_for(letter),
            MissPenalty::Fixed { points } => points,
        }
    }
}

impl Default for PointsTable {
    fn default() -> Self {
        Self(
            ('A'..='Z')
                .map(|c| (c.to_string(), DEFAULT_LETTER_POINTS))
                .collect(),
        )
    }
}

/// Whole game configuration. Every field has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_phrases")]
    pub phrases: Vec<PhraseEntry>,
    #[serde(default)]
    pub points: PointsTable,
    /// Seconds per turn.
    #[serde(default = "default_time_limit")]
    pub time_limit: u32,
    #[serde(default)]
    pub miss_penalty: MissPenalty,
    #[serde(default)]
    pub board: BoardShape,
    /// Shuffle phrase order on every new game.
    #[serde(default)]
    pub shuffle_phrases: bool,
}

fn default_phrases() -> Vec<PhraseEntry> {
    vec![
        PhraseEntry::new("A FUN FAMILY GAME", "EVENT"),
        PhraseEntry::new("GIVE THANKS", "HOLIDAY"),
    ]
}

fn default_time_limit() -> u32 {
    20
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            points: PointsTable::default(),
            time_limit: default_time_limit(),
            miss_penalty: MissPenalty::default(),
            board: BoardShape::default(),
            shuffle_phrases: false,
        }
    }
}

impl GameConfig {
    /// Load from `path`. A missing file is created with the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            log::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!(
            "Loaded {} phrase(s) from {}",
            config.phrases.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse and validate.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Check every phrase fits the board's total capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_len = PhraseBoard::max_phrase_len(&self.board);
        for entry in &self.phrases {
            let len = entry.phrase.trim().chars().count();
            if len > max_len {
                return Err(ConfigError::PhraseTooLong {
                    phrase: entry.phrase.clone(),
                    len,
                    max_len,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_cost_follows_policy() {
        let mut points = PointsTable::default();
        points.set('q', 10);
        assert_eq!(points.miss_cost('Q', MissPenalty::None), 0);
        assert_eq!(points.miss_cost('Q', MissPenalty::LetterValue), 10);
        assert_eq!(points.miss_cost('E', MissPenalty::LetterValue), 5);
        assert_eq!(points.miss_cost('Q', MissPenalty::Fixed { points: 3 }), 3);
    }

    #[test]
    fn unknown_letter_falls_back_to_default_points() {
        let points: PointsTable = serde_json::from_str(r#"{"A": 1}"#).unwrap();
        assert_eq!(points.points_for('a'), 1);
        assert_eq!(points.points_for('Z'), DEFAULT_LETTER_POINTS);
    }

    #[test]
    fn empty_object_gives_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn penalty_is_tagged_by_kind() {
        let config =
            GameConfig::from_json(r#"{"miss_penalty": {"kind": "fixed", "points": 2}}"#).unwrap();
        assert_eq!(config.miss_penalty, MissPenalty::Fixed { points: 2 });
    }

    #[test]
    fn invalid_board_shape_is_rejected() {
        assert!(matches!(
            GameConfig::from_json(r#"{"board": [14, 12, 12, 14]}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn overlong_phrase_is_rejected() {
        let json = r#"{"board": [5], "phrases": [{"phrase": "TOO LONG"}]}"#;
        assert!(matches!(
            GameConfig::from_json(json),
            Err(ConfigError::PhraseTooLong { len: 8, max_len: 5, .. })
        ));
    }
}
