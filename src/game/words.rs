//! Word bank validation and scrambling
//!
//! The candidate word pool is validated once at startup so that
//! gameplay itself can never fail.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::ConfigError;

/// A fixed, ordered pool of candidate words for one game session.
///
/// Construction deduplicates the list and rejects words that cannot be
/// scrambled into something different from themselves.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a bank from raw words, preserving first-seen order.
    pub fn new(words: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for word in words {
            if !is_scramblable(&word) {
                return Err(ConfigError::Unscramblable(word));
            }
            if seen.insert(word.clone()) {
                out.push(word);
            }
        }
        Ok(Self { words: out })
    }

    /// Number of usable words in the bank.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in their original order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// A word can be scrambled when at least one permutation of its
/// characters differs from the original, i.e. it has two or more
/// distinct characters. Single-character and repeated-character words
/// would make the scramble loop spin forever.
fn is_scramblable(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        None => false,
        Some(first) => chars.any(|c| c != first),
    }
}

/// Produce a random permutation of `word` that differs from it
/// (case-sensitive full-string compare). Re-shuffles until the result
/// differs; terminates for any word the bank accepted.
pub(crate) fn scramble<R: Rng>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    loop {
        chars.shuffle(rng);
        let shuffled: String = chars.iter().collect();
        if shuffled != word {
            return shuffled;
        }
    }
}
