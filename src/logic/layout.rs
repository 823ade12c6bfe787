//! Phrase layout: greedy word packing into rows, then centering.

use crate::models::{BoardShape, LayoutError};

/// Pack words into rows without splitting any word.
///
/// Each word joins the current row if the row (with a separating space) still
/// fits the row's capacity; otherwise the row is closed and the word starts the
/// next one. Returns the non-empty rows, top to bottom.
pub fn fill_rows(shape: &BoardShape, words: &[&str]) -> Result<Vec<String>, LayoutError> {
    let caps = shape.capacities();
    let mut rows: Vec<String> = Vec::new();
    let mut row_index = 0;
    let mut current = String::new();

    for &word in words {
        let word_len = word.chars().count();
        let candidate_len = if current.is_empty() {
            word_len
        } else {
            current.chars().count() + 1 + word_len
        };
        if candidate_len <= caps[row_index] {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if current.is_empty() {
            // Nothing to close: the word alone is wider than this row.
            return Err(LayoutError::WordTooLong {
                word: word.to_string(),
                capacity: caps[row_index],
            });
        }
        rows.push(std::mem::take(&mut current));
        row_index += 1;
        if row_index >= caps.len() {
            return Err(LayoutError::PhraseTooLong {
                rows_needed: row_index + 1,
                rows: caps.len(),
            });
        }
        if word_len > caps[row_index] {
            return Err(LayoutError::WordTooLong {
                word: word.to_string(),
                capacity: caps[row_index],
            });
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        rows.push(current);
    }
    Ok(rows)
}

/// Place content rows on the grid, centered both ways.
///
/// Returns the first occupied board row and a `rows × width` grid where `None`
/// marks columns past a row's capacity and `Some(' ')` is background.
pub fn center_rows(shape: &BoardShape, content_rows: &[String]) -> (usize, Vec<Vec<Option<char>>>) {
    let caps = shape.capacities();
    let width = shape.width();
    let start_row = (caps.len() - content_rows.len().min(caps.len())) / 2;

    let mut grid: Vec<Vec<Option<char>>> = caps
        .iter()
        .map(|&cap| (0..width).map(|col| (col < cap).then_some(' ')).collect())
        .collect();

    for (offset, text) in content_rows.iter().enumerate() {
        let r = start_row + offset;
        let cap = caps[r];
        let len = text.chars().count();
        let padding = cap.saturating_sub(len) / 2;
        for (i, ch) in text.chars().enumerate() {
            grid[r][padding + i] = Some(ch);
        }
    }

    (start_row, grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> BoardShape {
        BoardShape::default()
    }

    #[test]
    fn fill_keeps_words_whole() {
        let rows = fill_rows(&shape(), &["A", "FUN", "FAMILY", "GAME"]).unwrap();
        assert_eq!(rows, vec!["A FUN FAMILY".to_string(), "GAME".to_string()]);
    }

    #[test]
    fn fill_rejects_oversized_first_word() {
        // 13 letters: wider than the 12-cell top row.
        let err = fill_rows(&shape(), &["THANKSGIVINGS"]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::WordTooLong {
                word: "THANKSGIVINGS".into(),
                capacity: 12
            }
        );
    }

    #[test]
    fn fill_of_no_words_is_empty() {
        assert!(fill_rows(&shape(), &[]).unwrap().is_empty());
    }

    #[test]
    fn center_pads_left_with_floor_of_half_the_slack() {
        let rows = vec!["GIVE THANKS".to_string()];
        let (start, grid) = center_rows(&shape(), &rows);
        assert_eq!(start, 1);
        // capacity 14, 11 chars: padding 1
        assert_eq!(grid[1][0], Some(' '));
        assert_eq!(grid[1][1], Some('G'));
        assert_eq!(grid[1][11], Some('S'));
        assert_eq!(grid[1][12], Some(' '));
        // top row is 12 wide in a 14 wide grid
        assert_eq!(grid[0][11], Some(' '));
        assert_eq!(grid[0][12], None);
    }
}
