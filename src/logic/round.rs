//! Game flow: starting a game, loading phrases and passing turns.

use crate::models::{GameError, GameSession, GameState, PhraseBoard};
use chrono::{DateTime, Utc};

/// Start (or restart) a game: scores to zero, every phrase available again,
/// then load the first phrase. Players are kept.
pub fn start_game(session: &mut GameSession, now: DateTime<Utc>) -> GameState {
    session.reset_scores();
    session.phrases.reset_availability();
    if session.shuffle_phrases {
        session.phrases.shuffle(&mut rand::thread_rng());
    }
    log::info!(
        "Session {}: game started with {} player(s), {} phrase(s)",
        session.id,
        session.leaderboard.len(),
        session.phrases.len()
    );
    next_phrase(session, now)
}

/// Load the next available phrase and begin a new round (played flags cleared).
///
/// Phrases that cannot be laid out on the board are marked used and skipped.
/// A phrase without letters loads as `Solved`. With no phrase left the state
/// becomes `OutOfPhrases`.
pub fn next_phrase(session: &mut GameSession, now: DateTime<Utc>) -> GameState {
    session.leaderboard.new_round();
    session.guessed.clear();
    session.board = None;
    session.category = None;

    loop {
        let Some(phrase) = session.phrases.next_available().cloned() else {
            log::info!("Session {}: no more phrases", session.id);
            session.turn_deadline = None;
            session.state = GameState::OutOfPhrases;
            return session.state;
        };
        match PhraseBoard::construct(&session.shape, &phrase.text) {
            Ok(board) => {
                log::debug!(
                    "Session {}: phrase laid out on rows {:?}",
                    session.id,
                    board.content_rows()
                );
                session.board = Some(board);
                session.category = Some(phrase.category);
                break;
            }
            Err(e) => {
                log::warn!("Session {}: skipping phrase {:?}: {}", session.id, phrase.text, e);
                session.phrases.mark_unavailable(&phrase.text);
            }
        }
    }

    // Nothing to guess (digits and punctuation only): shown as solved right away.
    if session.board.as_ref().is_some_and(PhraseBoard::is_fully_revealed) {
        if let Some(text) = session.phrase().map(str::to_string) {
            session.phrases.mark_unavailable(&text);
        }
        session.turn_deadline = None;
        session.state = GameState::Solved;
        return session.state;
    }

    session.state = GameState::InPlay;
    if session.current_player.is_some() {
        session.restart_timer(now);
    }
    session.state
}

/// Make `name` the current player and highlight them on the leaderboard.
pub fn select_player(
    session: &mut GameSession,
    name: &str,
    now: DateTime<Utc>,
) -> Result<(), GameError> {
    if session.leaderboard.player(name).is_none() {
        return Err(GameError::UnknownPlayer(name.to_string()));
    }
    session.leaderboard.set_selected(name);
    session.current_player = Some(name.to_string());
    session.restart_timer(now);
    Ok(())
}

/// Pass the turn to the next player in joining order, wrapping around.
/// With no current player the first player to join starts.
pub fn next_player(session: &mut GameSession, now: DateTime<Utc>) -> Result<String, GameError> {
    let order = session.leaderboard.turn_order();
    if order.is_empty() {
        return Err(GameError::NoCurrentPlayer);
    }
    let next_index = session
        .current_player
        .as_deref()
        .and_then(|current| order.iter().position(|name| name == current))
        .map_or(0, |i| (i + 1) % order.len());
    let name = order[next_index].clone();
    select_player(session, &name, now)?;
    Ok(name)
}
