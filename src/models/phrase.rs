//! Phrase and PhraseBook: the phrases a game plays through, in order.

use crate::config::{ConfigError, PhraseEntry};
use crate::models::board::{BoardShape, PhraseBoard};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A phrase to guess, with its category hint.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub text: String,
    pub category: String,
    /// False once the phrase has been solved (or skipped) this game.
    pub available: bool,
}

impl Phrase {
    /// Upper-cased phrase with words separated by single spaces, available.
    pub fn new(text: &str, category: &str) -> Self {
        Self {
            text: text
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_uppercase(),
            category: category.trim().to_uppercase(),
            available: true,
        }
    }
}

/// Ordered phrase list with availability tracking.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhraseBook {
    phrases: Vec<Phrase>,
}

impl PhraseBook {
    /// Build from config entries. Phrases longer than the board can ever hold are rejected.
    pub fn from_config(entries: &[PhraseEntry], shape: &BoardShape) -> Result<Self, ConfigError> {
        let max_len = PhraseBoard::max_phrase_len(shape);
        let mut phrases = Vec::with_capacity(entries.len());
        for entry in entries {
            let phrase = Phrase::new(&entry.phrase, &entry.category);
            let len = phrase.text.chars().count();
            if len > max_len {
                return Err(ConfigError::PhraseTooLong {
                    phrase: phrase.text,
                    len,
                    max_len,
                });
            }
            phrases.push(phrase);
        }
        Ok(Self { phrases })
    }

    pub fn all_phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// First phrase still available, in book order.
    pub fn next_available(&self) -> Option<&Phrase> {
        self.phrases.iter().find(|p| p.available)
    }

    /// Mark every phrase with this text as used.
    pub fn mark_unavailable(&mut self, text: &str) {
        for p in self.phrases.iter_mut().filter(|p| p.text == text) {
            p.available = false;
        }
    }

    /// Make every phrase available again (new game).
    pub fn reset_availability(&mut self) {
        for p in &mut self.phrases {
            p.available = true;
        }
    }

    /// Shuffle the play order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.phrases.shuffle(rng);
    }

    pub fn remaining(&self) -> usize {
        self.phrases.iter().filter(|p| p.available).count()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
