//! Family phrase game: library with the leaderboard, phrase board and game flow.

pub mod config;
pub mod logic;
pub mod models;
pub mod snapshot;

pub use config::{ConfigError, GameConfig, MissPenalty, PhraseEntry, PointsTable};
pub use logic::{guess_letter, next_phrase, next_player, select_player, solve, start_game};
pub use models::{
    BoardShape, Cell, DisplayCell, GameError, GameSession, GameState, GuessOutcome, LayoutError,
    Leaderboard, Phrase, PhraseBoard, PhraseBook, Player, PlayerRow, SessionId,
};
pub use snapshot::SessionSnapshot;
