//! Error types for the round engine
//!
//! Only two things can go fatally wrong, and both are caught before
//! gameplay starts: a word bank that cannot support the configured
//! number of rounds, and (defensively) running out of unused words.

use thiserror::Error;

/// Fatal engine errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A problem with the word bank or tunables, surfaced at startup.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// No unused words remain in the bank. Unreachable once the
    /// configuration has been validated; kept as an invariant check.
    #[error("word bank exhausted: no unused words remain")]
    ExhaustedWordBank,
}

/// Reasons a word bank or its tunables can be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("word bank has {available} usable words but {needed} rounds are configured")]
    BankTooSmall { available: usize, needed: u32 },

    /// Every permutation of this word equals the word itself, so the
    /// scramble loop could never terminate on it.
    #[error("word {0:?} cannot be scrambled (needs at least two distinct characters)")]
    Unscramblable(String),

    #[error("{0} must be a positive integer")]
    ZeroTunable(&'static str),
}
