//! Letter guesses and solving: reveal cells and score the current player.

use crate::models::{GameError, GameSession, GameState, GuessOutcome};
use chrono::{DateTime, Utc};

/// Guess one letter for the current player.
///
/// A hit reveals the letter and awards `occurrences × letter points`. A miss
/// costs the configured penalty. Completing the phrase marks it used.
pub fn guess_letter(
    session: &mut GameSession,
    letter: char,
    now: DateTime<Utc>,
) -> Result<GuessOutcome, GameError> {
    match session.state {
        GameState::InPlay => {}
        GameState::Solved => return Err(GameError::PhraseSolved),
        GameState::Lobby | GameState::OutOfPhrases => return Err(GameError::NoActivePhrase),
    }
    let player = session
        .current_player
        .clone()
        .ok_or(GameError::NoCurrentPlayer)?;
    if !letter.is_ascii_alphabetic() {
        return Err(GameError::InvalidLetter(letter));
    }
    let letter = letter.to_ascii_uppercase();
    if session.guessed.contains(&letter) {
        return Err(GameError::AlreadyGuessed(letter));
    }
    let board = session.board.as_mut().ok_or(GameError::NoActivePhrase)?;

    session.guessed.insert(letter);
    let occurrences = board.reveal_letter(letter);
    let points = if occurrences > 0 {
        session.points.points_for(letter) * occurrences as i64
    } else {
        -session.points.miss_cost(letter, session.miss_penalty)
    };
    session.leaderboard.update_score(&player, points);

    let solved = board.is_fully_revealed();
    if solved {
        let text = board.phrase().to_string();
        finish_phrase(session, &text);
    } else {
        session.restart_timer(now);
    }

    log::debug!(
        "Session {}: {} guessed {} ({} hit(s), {:+} points)",
        session.id,
        player,
        letter,
        occurrences,
        points
    );
    Ok(GuessOutcome {
        letter,
        occurrences,
        points,
        solved,
    })
}

/// Try to solve the whole phrase for the current player.
///
/// Comparison ignores case and extra whitespace. A correct attempt reveals
/// everything and awards the points of every letter cell that was still
/// hidden; returns the points awarded. A wrong attempt changes nothing.
pub fn solve(session: &mut GameSession, attempt: &str) -> Result<Option<i64>, GameError> {
    match session.state {
        GameState::InPlay => {}
        GameState::Solved => return Err(GameError::PhraseSolved),
        GameState::Lobby | GameState::OutOfPhrases => return Err(GameError::NoActivePhrase),
    }
    let player = session
        .current_player
        .clone()
        .ok_or(GameError::NoCurrentPlayer)?;
    let board = session.board.as_mut().ok_or(GameError::NoActivePhrase)?;

    let normalized = attempt
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();
    if normalized != board.phrase() {
        log::debug!("Session {}: wrong solve attempt by {}", session.id, player);
        return Ok(None);
    }

    let uncovered = board.reveal_all();
    let points: i64 = uncovered.iter().map(|&c| session.points.points_for(c)).sum();
    let text = board.phrase().to_string();
    session.guessed.extend(uncovered);
    session.leaderboard.update_score(&player, points);
    finish_phrase(session, &text);
    Ok(Some(points))
}

fn finish_phrase(session: &mut GameSession, text: &str) {
    session.phrases.mark_unavailable(text);
    session.state = GameState::Solved;
    session.turn_deadline = None;
    log::info!("Session {}: phrase solved ({} left)", session.id, session.phrases.remaining());
}
