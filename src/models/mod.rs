//! Data structures for the phrase game: players, leaderboard, phrase board, session.

mod board;
mod game;
mod leaderboard;
mod phrase;
mod player;

pub use board::{BoardShape, Cell, DisplayCell, LayoutError, PhraseBoard, DEFAULT_ROW_CAPACITIES};
pub use game::{GameError, GameSession, GameState, GuessOutcome, SessionId};
pub use leaderboard::Leaderboard;
pub use phrase::{Phrase, PhraseBook};
pub use player::{Player, PlayerRow};
