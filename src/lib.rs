//! Unjumble - A terminal word-unscramble game
//!
//! A scrambled word is shown each round; guess the original word
//! to score points before the rounds run out.

pub mod game;
pub mod data;
pub mod ui;

// Re-export commonly used types
pub use game::{Game, GameState, RoundEngine, GameConfig, GameError};
pub use data::WordSource;
