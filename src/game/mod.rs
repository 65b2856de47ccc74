//! Game module - Round engine and session state management

mod engine;
mod error;
mod state;
mod words;

pub use engine::{RoundEngine, GameConfig, DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE};
pub use error::{ConfigError, GameError};
pub use state::{Game, GameState};
pub use words::WordBank;
