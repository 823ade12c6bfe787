//! Phrase board: the letter grid for one phrase, with per-cell reveal state.

use crate::logic::{center_rows, fill_rows};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-row capacities used when none are configured.
pub const DEFAULT_ROW_CAPACITIES: [usize; 4] = [12, 14, 14, 12];

/// Errors raised while building a board. Nothing is built when one occurs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LayoutError {
    /// Laying the phrase out would need more rows than the board has.
    PhraseTooLong { rows_needed: usize, rows: usize },
    /// A single word is wider than the row it has to start on.
    WordTooLong { word: String, capacity: usize },
    /// Row capacities cannot hold a centered layout.
    InvalidShape(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::PhraseTooLong { rows_needed, rows } => {
                write!(f, "Phrase needs {} rows, board has {}", rows_needed, rows)
            }
            LayoutError::WordTooLong { word, capacity } => {
                write!(f, "Word {} does not fit in a row of {} cells", word, capacity)
            }
            LayoutError::InvalidShape(reason) => write!(f, "Invalid board shape: {}", reason),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Row capacities of a board, top to bottom.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct BoardShape {
    capacities: Vec<usize>,
}

impl BoardShape {
    /// Validate and build a shape.
    ///
    /// Rows are filled against `capacities[i]` and then shifted down to be
    /// vertically centered, so for every possible number of content rows the
    /// row a line lands on must be at least as wide as the one it was filled for.
    pub fn new(capacities: Vec<usize>) -> Result<Self, LayoutError> {
        if capacities.is_empty() {
            return Err(LayoutError::InvalidShape("board has no rows".into()));
        }
        if capacities.iter().any(|&c| c == 0) {
            return Err(LayoutError::InvalidShape("row capacity must be positive".into()));
        }
        let rows = capacities.len();
        for count in 1..=rows {
            let start = (rows - count) / 2;
            for i in 0..count {
                if capacities[start + i] < capacities[i] {
                    return Err(LayoutError::InvalidShape(format!(
                        "row {} ({} cells) is narrower than row {} ({} cells) when centering {} rows",
                        start + i,
                        capacities[start + i],
                        i,
                        capacities[i],
                        count
                    )));
                }
            }
        }
        Ok(Self { capacities })
    }

    pub fn capacities(&self) -> &[usize] {
        &self.capacities
    }

    pub fn rows(&self) -> usize {
        self.capacities.len()
    }

    /// Width of the widest row; every grid row has this many columns.
    pub fn width(&self) -> usize {
        self.capacities.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all row capacities.
    pub fn total_capacity(&self) -> usize {
        self.capacities.iter().sum()
    }
}

impl Default for BoardShape {
    fn default() -> Self {
        Self {
            capacities: DEFAULT_ROW_CAPACITIES.to_vec(),
        }
    }
}

impl TryFrom<Vec<usize>> for BoardShape {
    type Error = LayoutError;

    fn try_from(capacities: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(capacities)
    }
}

impl From<BoardShape> for Vec<usize> {
    fn from(shape: BoardShape) -> Self {
        shape.capacities
    }
}

/// One grid cell, including the hidden letter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    /// Past the end of a row that is narrower than the grid.
    Offboard,
    /// Background: padding or the gap between words.
    Blank,
    /// Letter not yet guessed.
    Hidden(char),
    Revealed(char),
    /// Punctuation and digits, shown from the start.
    Fixed(char),
}

impl Cell {
    fn from_char(ch: char) -> Self {
        if ch == ' ' {
            Cell::Blank
        } else if ch.is_ascii_alphabetic() {
            Cell::Hidden(ch.to_ascii_uppercase())
        } else {
            Cell::Fixed(ch)
        }
    }

    /// What a player may see of this cell.
    pub fn display(&self) -> DisplayCell {
        match *self {
            Cell::Offboard => DisplayCell::Offboard,
            Cell::Blank => DisplayCell::Blank,
            Cell::Hidden(_) => DisplayCell::Placeholder,
            Cell::Revealed(ch) | Cell::Fixed(ch) => DisplayCell::Letter(ch),
        }
    }
}

/// A cell as seen by a display. Hidden letters never leak through here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayCell {
    Offboard,
    Blank,
    Placeholder,
    Letter(char),
}

impl DisplayCell {
    /// Single-character rendering: `_` for placeholders, space for background.
    pub fn symbol(&self) -> char {
        match *self {
            DisplayCell::Offboard | DisplayCell::Blank => ' ',
            DisplayCell::Placeholder => '_',
            DisplayCell::Letter(ch) => ch,
        }
    }
}

/// Board for one phrase. Only the reveal state changes after construction.
#[derive(Clone, Debug)]
pub struct PhraseBoard {
    shape: BoardShape,
    phrase: String,
    content_rows: Vec<String>,
    start_row: usize,
    cells: Vec<Vec<Cell>>,
}

impl PhraseBoard {
    /// Lay `phrase` out on a board of the given shape.
    ///
    /// The phrase is upper-cased and split on whitespace. Words are packed
    /// greedily into rows without splitting, each row is centered in its
    /// capacity and the block of rows is centered vertically.
    pub fn construct(shape: &BoardShape, phrase: &str) -> Result<Self, LayoutError> {
        let upper = phrase.to_uppercase();
        let words: Vec<&str> = upper.split_whitespace().collect();
        let content_rows = fill_rows(shape, &words)?;
        let (start_row, placed) = center_rows(shape, &content_rows);
        let cells = placed
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|slot| match slot {
                        Some(ch) => Cell::from_char(ch),
                        None => Cell::Offboard,
                    })
                    .collect()
            })
            .collect();
        Ok(Self {
            shape: shape.clone(),
            phrase: words.join(" "),
            content_rows,
            start_row,
            cells,
        })
    }

    /// Longest phrase (in characters, spaces included) that can ever fit.
    pub fn max_phrase_len(shape: &BoardShape) -> usize {
        shape.total_capacity()
    }

    /// Reveal every hidden cell holding `letter` (case-insensitive).
    /// Returns how many cells changed; 0 when the letter is absent or already shown.
    pub fn reveal_letter(&mut self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        let mut revealed = 0;
        for cell in self.cells.iter_mut().flatten() {
            if *cell == Cell::Hidden(letter) {
                *cell = Cell::Revealed(letter);
                revealed += 1;
            }
        }
        revealed
    }

    /// Reveal everything that is still hidden. Returns the hidden letters
    /// that were uncovered, one entry per cell.
    pub fn reveal_all(&mut self) -> Vec<char> {
        let mut uncovered = Vec::new();
        for cell in self.cells.iter_mut().flatten() {
            if let Cell::Hidden(ch) = *cell {
                *cell = Cell::Revealed(ch);
                uncovered.push(ch);
            }
        }
        uncovered
    }

    /// Occurrences of `letter` in the phrase, revealed or not.
    pub fn count_letter(&self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, Cell::Hidden(ch) | Cell::Revealed(ch) if *ch == letter))
            .count()
    }

    pub fn is_fully_revealed(&self) -> bool {
        !self
            .cells
            .iter()
            .flatten()
            .any(|c| matches!(c, Cell::Hidden(_)))
    }

    /// Display copy of the grid: `rows × width` cells.
    pub fn grid(&self) -> Vec<Vec<DisplayCell>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Cell::display).collect())
            .collect()
    }

    /// Each board row rendered as text, cut to the row's capacity.
    pub fn render_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .zip(self.shape.capacities())
            .map(|(row, &cap)| row.iter().take(cap).map(|c| c.display().symbol()).collect())
            .collect()
    }

    /// Letters revealed so far, alphabetically.
    pub fn revealed_letters(&self) -> BTreeSet<char> {
        self.cells
            .iter()
            .flatten()
            .filter_map(|c| match c {
                Cell::Revealed(ch) => Some(*ch),
                _ => None,
            })
            .collect()
    }

    /// Normalized phrase: upper-case, single spaces.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn shape(&self) -> &BoardShape {
        &self.shape
    }

    /// Text of the rows that received words, top to bottom, before centering.
    pub fn content_rows(&self) -> &[String] {
        &self.content_rows
    }

    /// Board row index of the first content row.
    pub fn start_row(&self) -> usize {
        self.start_row
    }
}
