//! Round engine
//!
//! The round-progression state machine: word selection without repeats,
//! scramble validity, scoring, and round counting. The UI layer only
//! reads its getters and calls its operations; the engine knows nothing
//! about rendering.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, GameError};
use super::words::{scramble, WordBank};

/// Default number of rounds per game.
pub const DEFAULT_MAX_ROUNDS: u32 = 10;
/// Default points awarded per correct guess.
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Session tunables. Both must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Words presented per game
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
    /// Points per correct guess
    #[serde(default = "default_score_increase")]
    pub score_increase: u32,
}

fn default_max_rounds() -> u32 {
    DEFAULT_MAX_ROUNDS
}

fn default_score_increase() -> u32 {
    DEFAULT_SCORE_INCREASE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            score_increase: DEFAULT_SCORE_INCREASE,
        }
    }
}

/// The round-progression engine for one game session.
///
/// Single-threaded and synchronous; every operation completes in place.
/// One engine instance is exclusively owned per session.
#[derive(Debug)]
pub struct RoundEngine {
    bank: WordBank,
    config: GameConfig,
    rng: StdRng,
    score: u32,
    round_count: u32,
    current_word: String,
    scrambled_word: String,
    used_words: HashSet<String>,
}

impl RoundEngine {
    /// Create an engine and select the first word.
    ///
    /// Fails if a tunable is zero or the bank holds fewer usable words
    /// than `max_rounds` requires.
    pub fn new(bank: WordBank, config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(bank, config, StdRng::from_entropy())
    }

    /// Like [`RoundEngine::new`] but with a caller-supplied RNG, so
    /// tests can seed word selection.
    pub fn with_rng(bank: WordBank, config: GameConfig, rng: StdRng) -> Result<Self, GameError> {
        if config.max_rounds == 0 {
            return Err(ConfigError::ZeroTunable("max_rounds").into());
        }
        if config.score_increase == 0 {
            return Err(ConfigError::ZeroTunable("score_increase").into());
        }
        if (bank.len() as u32) < config.max_rounds {
            return Err(ConfigError::BankTooSmall {
                available: bank.len(),
                needed: config.max_rounds,
            }
            .into());
        }

        let mut engine = Self {
            bank,
            config,
            rng,
            score: 0,
            round_count: 0,
            current_word: String::new(),
            scrambled_word: String::new(),
            used_words: HashSet::new(),
        };
        engine.select_next_word()?;
        log::debug!(
            "round engine created: {} words in bank, {} rounds, {} points per word",
            engine.bank.len(),
            engine.config.max_rounds,
            engine.config.score_increase
        );
        Ok(engine)
    }

    /// Draw the next word and scramble it.
    ///
    /// Samples directly from the unused remainder of the bank (rather
    /// than drawing from the full bank and discarding repeats), so the
    /// draw stays uniform and bounded even for small banks.
    fn select_next_word(&mut self) -> Result<(), GameError> {
        let remaining: Vec<&String> = self
            .bank
            .words()
            .iter()
            .filter(|w| !self.used_words.contains(w.as_str()))
            .collect();
        let word = remaining
            .choose(&mut self.rng)
            .ok_or(GameError::ExhaustedWordBank)?
            .to_string();

        self.scrambled_word = scramble(&word, &mut self.rng);
        self.used_words.insert(word.clone());
        self.round_count += 1;
        log::debug!("round {} of {} selected", self.round_count, self.config.max_rounds);
        self.current_word = word;
        Ok(())
    }

    /// Check a guess against the current word, case-insensitively.
    ///
    /// A correct guess adds `score_increase` points and returns true;
    /// advancing to the next round is a separate, explicit step. A
    /// wrong guess changes nothing and returns false.
    pub fn submit_guess(&mut self, candidate: &str) -> bool {
        if candidate.to_lowercase() == self.current_word.to_lowercase() {
            self.score += self.config.score_increase;
            true
        } else {
            false
        }
    }

    /// Move to the next round if any remain.
    ///
    /// Returns true while the game continues; returns false with state
    /// untouched once all rounds have been played, at which point the
    /// caller reads [`RoundEngine::score`] for end-of-game reporting.
    pub fn advance_round(&mut self) -> Result<bool, GameError> {
        if self.round_count < self.config.max_rounds {
            self.select_next_word()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Reset score, round count, and word history, then select a fresh
    /// first word as at construction.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.score = 0;
        self.round_count = 0;
        self.used_words.clear();
        log::debug!("round engine restarted");
        self.select_next_word()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of words presented so far, starting at 1 for a fresh game.
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn max_rounds(&self) -> u32 {
        self.config.max_rounds
    }

    /// The unshuffled answer for the active round.
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// The scrambled form shown to the player. Always an anagram of the
    /// current word and never identical to it.
    pub fn scrambled_word(&self) -> &str {
        &self.scrambled_word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_bank(words: &[&str]) -> WordBank {
        WordBank::new(words.iter().map(|s| s.to_string())).unwrap()
    }

    fn test_engine(words: &[&str], max_rounds: u32, seed: u64) -> RoundEngine {
        let config = GameConfig {
            max_rounds,
            score_increase: DEFAULT_SCORE_INCREASE,
        };
        RoundEngine::with_rng(test_bank(words), config, StdRng::seed_from_u64(seed)).unwrap()
    }

    const WORDS: &[&str] = &["kotlin", "swift", "rust", "python", "haskell"];

    fn assert_anagram(a: &str, b: &str) {
        let mut x: Vec<char> = a.chars().collect();
        let mut y: Vec<char> = b.chars().collect();
        x.sort_unstable();
        y.sort_unstable();
        assert_eq!(x, y, "{:?} and {:?} are not anagrams", a, b);
    }

    #[test]
    fn test_first_word_selected_at_creation() {
        let engine = test_engine(WORDS, 5, 1);
        assert_eq!(engine.round_count(), 1);
        assert_eq!(engine.score(), 0);
        assert!(WORDS.contains(&engine.current_word()));
        assert_ne!(engine.scrambled_word(), engine.current_word());
        assert_anagram(engine.scrambled_word(), engine.current_word());
    }

    #[test]
    fn test_exactly_max_rounds_distinct_words() {
        let mut engine = test_engine(WORDS, 5, 2);
        let mut seen = vec![engine.current_word().to_string()];
        while engine.advance_round().unwrap() {
            assert_ne!(engine.scrambled_word(), engine.current_word());
            assert_anagram(engine.scrambled_word(), engine.current_word());
            seen.push(engine.current_word().to_string());
        }
        assert_eq!(seen.len(), 5);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 5, "a word was repeated within one game");
        // once finished, advancing again stays a no-op
        assert!(!engine.advance_round().unwrap());
        assert_eq!(engine.round_count(), 5);
    }

    #[test]
    fn test_submit_guess_is_case_insensitive() {
        let mut engine = test_engine(WORDS, 5, 3);
        let upper = engine.current_word().to_uppercase();
        assert!(engine.submit_guess(&upper));
        assert_eq!(engine.score(), DEFAULT_SCORE_INCREASE);
    }

    #[test]
    fn test_wrong_guess_changes_nothing() {
        let mut engine = test_engine(WORDS, 5, 4);
        let word = engine.current_word().to_string();
        let scrambled = engine.scrambled_word().to_string();

        assert!(!engine.submit_guess("definitely-wrong"));
        assert!(!engine.submit_guess("definitely-wrong"));

        assert_eq!(engine.score(), 0);
        assert_eq!(engine.round_count(), 1);
        assert_eq!(engine.current_word(), word);
        assert_eq!(engine.scrambled_word(), scrambled);
    }

    #[test]
    fn test_correct_guess_does_not_advance_round() {
        let mut engine = test_engine(WORDS, 5, 5);
        let word = engine.current_word().to_string();
        assert!(engine.submit_guess(&word));
        assert_eq!(engine.round_count(), 1);
        assert_eq!(engine.current_word(), word);
    }

    #[test]
    fn test_full_game_worked_example() {
        // bank of exactly max_rounds words must complete a full game
        let mut engine = test_engine(&["kotlin", "swift", "rust"], 3, 6);
        assert_eq!(engine.round_count(), 1);

        for round in 1..=3u32 {
            let answer = engine.current_word().to_string();
            assert!(engine.submit_guess(&answer));
            assert_eq!(engine.score(), round * 20);
            let advanced = engine.advance_round().unwrap();
            assert_eq!(advanced, round < 3);
        }
        assert_eq!(engine.score(), 60);
        assert_eq!(engine.round_count(), 3);
        assert!(!engine.advance_round().unwrap());
    }

    #[test]
    fn test_restart_resets_counters_and_history() {
        let mut engine = test_engine(WORDS, 5, 7);
        let answer = engine.current_word().to_string();
        engine.submit_guess(&answer);
        while engine.advance_round().unwrap() {}

        engine.restart().unwrap();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.round_count(), 1);
        assert_eq!(engine.used_words.len(), 1);
        assert_ne!(engine.scrambled_word(), engine.current_word());
        // the whole bank is available again
        let mut count = 1;
        while engine.advance_round().unwrap() {
            count += 1;
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn test_bank_smaller_than_rounds_is_rejected() {
        let config = GameConfig {
            max_rounds: 10,
            score_increase: 20,
        };
        let err = RoundEngine::new(test_bank(&["cat", "dog"]), config).unwrap_err();
        assert_eq!(
            err,
            GameError::Configuration(ConfigError::BankTooSmall {
                available: 2,
                needed: 10,
            })
        );
    }

    #[test]
    fn test_zero_tunables_are_rejected() {
        let zero_rounds = GameConfig {
            max_rounds: 0,
            score_increase: 20,
        };
        assert!(RoundEngine::new(test_bank(WORDS), zero_rounds).is_err());

        let zero_score = GameConfig {
            max_rounds: 5,
            score_increase: 0,
        };
        assert!(RoundEngine::new(test_bank(WORDS), zero_score).is_err());
    }

    #[test]
    fn test_round_count_tracks_used_words() {
        let mut engine = test_engine(WORDS, 5, 8);
        loop {
            assert_eq!(engine.round_count() as usize, engine.used_words.len());
            if !engine.advance_round().unwrap() {
                break;
            }
        }
    }
}
