//! Integration tests for phrase layout and letter reveals.

use phrase_party::{BoardShape, DisplayCell, LayoutError, PhraseBoard};

const PANGRAM: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

fn board(phrase: &str) -> PhraseBoard {
    PhraseBoard::construct(&BoardShape::default(), phrase).unwrap()
}

#[test]
fn short_phrase_splits_into_two_centered_rows() {
    let b = board("A FUN FAMILY GAME");
    assert_eq!(b.content_rows(), ["A FUN FAMILY", "GAME"]);
    assert_eq!(b.start_row(), 1);
    assert_eq!(
        b.render_rows(),
        vec![
            " ".repeat(12),
            " _ ___ ______ ".to_string(),
            "     ____     ".to_string(),
            " ".repeat(12),
        ]
    );
}

#[test]
fn rows_never_exceed_capacity_or_split_words() {
    let shape = BoardShape::default();
    let b = PhraseBoard::construct(&shape, PANGRAM).unwrap();
    assert_eq!(
        b.content_rows(),
        ["THE QUICK", "BROWN FOX", "JUMPS OVER THE", "LAZY DOG"]
    );
    assert_eq!(b.start_row(), 0);
    for (row, cap) in b.content_rows().iter().zip(shape.capacities()) {
        assert!(row.len() <= *cap);
    }
    let rejoined = b.content_rows().join(" ");
    assert_eq!(rejoined, PANGRAM);
}

#[test]
fn single_row_is_placed_on_row_one() {
    let b = board("give thanks");
    assert_eq!(b.phrase(), "GIVE THANKS");
    assert_eq!(b.start_row(), 1);
    let grid = b.grid();
    assert_eq!(grid.len(), 4);
    assert!(grid.iter().all(|row| row.len() == 14));
    assert_eq!(grid[1][0], DisplayCell::Blank);
    assert_eq!(grid[1][1], DisplayCell::Placeholder);
    assert_eq!(grid[1][5], DisplayCell::Blank);
    // Outer rows are 12 wide.
    assert_eq!(grid[0][12], DisplayCell::Offboard);
    assert_eq!(grid[3][13], DisplayCell::Offboard);
}

#[test]
fn word_longer_than_any_row_is_rejected() {
    let err = PhraseBoard::construct(&BoardShape::default(), "HAPPY THANKSGIVINGDAYS")
        .unwrap_err();
    assert!(matches!(err, LayoutError::WordTooLong { ref word, .. } if word == "THANKSGIVINGDAYS"));
}

#[test]
fn phrase_needing_a_fifth_row_is_rejected() {
    let err = PhraseBoard::construct(
        &BoardShape::default(),
        "ABCDEFGHIJK ABCDEFGHIJK ABCDEFGHIJK ABCDEFGHIJK ABCDEFGHIJK",
    )
    .unwrap_err();
    assert_eq!(err, LayoutError::PhraseTooLong { rows_needed: 5, rows: 4 });
}

#[test]
fn reveal_counts_every_occurrence() {
    let mut b = board(PANGRAM);
    let expected = PANGRAM.chars().filter(|&c| c == 'T').count();
    assert_eq!(expected, 2);
    assert_eq!(b.reveal_letter('T'), expected);
    assert_eq!(b.reveal_letter('t'), 0);
    assert_eq!(b.count_letter('T'), expected);
    assert!(!b.is_fully_revealed());
}

#[test]
fn absent_letter_reveals_nothing() {
    let mut b = board("GIVE THANKS");
    assert_eq!(b.reveal_letter('Z'), 0);
    assert!(b.revealed_letters().is_empty());
}

#[test]
fn fully_revealed_only_after_every_distinct_letter() {
    let mut b = board(PANGRAM);
    let mut letters: Vec<char> = PANGRAM.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    letters.sort_unstable();
    letters.dedup();
    let (last, rest) = letters.split_last().unwrap();
    for &c in rest {
        assert!(b.reveal_letter(c) > 0);
        assert!(!b.is_fully_revealed());
    }
    b.reveal_letter(*last);
    assert!(b.is_fully_revealed());
    assert_eq!(b.render_rows()[0], " THE QUICK  ");
}

#[test]
fn punctuation_is_shown_from_the_start() {
    let mut b = board("HI, MOM!");
    let rows = b.render_rows();
    assert_eq!(rows[1].trim(), "__, ___!");
    assert_eq!(b.reveal_all(), vec!['H', 'I', 'M', 'O', 'M']);
    assert!(b.is_fully_revealed());
    assert_eq!(b.render_rows()[1].trim(), "HI, MOM!");
}

#[test]
fn grid_never_leaks_hidden_letters() {
    let b = board("GIVE THANKS");
    let shown: Vec<char> = b
        .grid()
        .iter()
        .flatten()
        .filter_map(|c| match c {
            DisplayCell::Letter(ch) => Some(*ch),
            _ => None,
        })
        .collect();
    assert!(shown.is_empty());
}

#[test]
fn empty_phrase_gives_an_empty_solved_board() {
    let b = board("   ");
    assert!(b.content_rows().is_empty());
    assert!(b.is_fully_revealed());
}

#[test]
fn custom_shape_is_supported() {
    let shape = BoardShape::new(vec![5, 8, 5]).unwrap();
    let b = PhraseBoard::construct(&shape, "HI THERE").unwrap();
    assert_eq!(b.content_rows(), ["HI", "THERE"]);
    assert_eq!(b.start_row(), 0);
    assert_eq!(PhraseBoard::max_phrase_len(&shape), 18);
}

#[test]
fn shape_that_would_overflow_when_centered_is_rejected() {
    assert!(matches!(
        BoardShape::new(vec![14, 12, 12, 14]),
        Err(LayoutError::InvalidShape(_))
    ));
    assert!(BoardShape::new(vec![]).is_err());
    assert!(BoardShape::new(vec![4, 0]).is_err());
}
