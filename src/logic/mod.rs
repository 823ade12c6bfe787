//! Game logic: phrase layout, rounds and turns, letter guesses.

mod guess;
mod layout;
mod round;

pub use guess::{guess_letter, solve};
pub use layout::{center_rows, fill_rows};
pub use round::{next_phrase, next_player, select_player, start_game};
