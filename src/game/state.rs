//! Session state machine
//!
//! Wraps the round engine with the outer phases the UI dispatches on:
//! playing, finished (final score available), and quit.

use super::engine::RoundEngine;
use super::error::GameError;

/// One game session: the round engine plus the current phase.
pub struct Game {
    state: GameState,
    engine: RoundEngine,
}

/// All possible session phases
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// A round is active and awaiting guesses
    Playing,
    /// All rounds played
    Finished { final_score: u32 },
    /// Exit the game
    Quit,
}

impl Game {
    pub fn new(engine: RoundEngine) -> Self {
        log::info!("game session started");
        Self {
            state: GameState::Playing,
            engine,
        }
    }

    /// Current session phase
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read access to the round engine, for rendering score, round
    /// count, and the scrambled word.
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Check the player's word; when correct, move straight to the next
    /// round (or to Finished if it was the last one). Returns whether
    /// the guess was right.
    pub fn submit_word(&mut self, guess: &str) -> Result<bool, GameError> {
        if self.engine.submit_guess(guess) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Skip the current word without scoring.
    pub fn skip_word(&mut self) -> Result<(), GameError> {
        self.advance()
    }

    fn advance(&mut self) -> Result<(), GameError> {
        if !self.engine.advance_round()? {
            let final_score = self.engine.score();
            log::info!("game over, final score {}", final_score);
            self.state = GameState::Finished { final_score };
        }
        Ok(())
    }

    /// Start a fresh game with the same bank and tunables.
    pub fn play_again(&mut self) -> Result<(), GameError> {
        self.engine.restart()?;
        self.state = GameState::Playing;
        Ok(())
    }

    /// Request session exit; the main loop stops on the next frame.
    pub fn quit(&mut self) {
        log::info!("quit requested");
        self.state = GameState::Quit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, WordBank};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_game(max_rounds: u32) -> Game {
        let bank = WordBank::new(
            ["kotlin", "swift", "rust", "python"]
                .iter()
                .map(|s| s.to_string()),
        )
        .unwrap();
        let config = GameConfig {
            max_rounds,
            score_increase: 20,
        };
        let engine = RoundEngine::with_rng(bank, config, StdRng::seed_from_u64(11)).unwrap();
        Game::new(engine)
    }

    #[test]
    fn test_correct_guesses_run_through_to_finished() {
        let mut game = test_game(3);
        assert_eq!(*game.state(), GameState::Playing);

        for _ in 0..3 {
            let answer = game.engine().current_word().to_string();
            assert!(game.submit_word(&answer).unwrap());
        }
        assert_eq!(*game.state(), GameState::Finished { final_score: 60 });
    }

    #[test]
    fn test_wrong_guess_keeps_playing() {
        let mut game = test_game(3);
        assert!(!game.submit_word("nope").unwrap());
        assert_eq!(*game.state(), GameState::Playing);
        assert_eq!(game.engine().score(), 0);
    }

    #[test]
    fn test_skipping_every_round_finishes_scoreless() {
        let mut game = test_game(3);
        game.skip_word().unwrap();
        game.skip_word().unwrap();
        assert_eq!(*game.state(), GameState::Playing);
        game.skip_word().unwrap();
        assert_eq!(*game.state(), GameState::Finished { final_score: 0 });
    }

    #[test]
    fn test_play_again_reenters_playing() {
        let mut game = test_game(3);
        for _ in 0..3 {
            game.skip_word().unwrap();
        }
        assert!(matches!(game.state(), GameState::Finished { .. }));

        game.play_again().unwrap();
        assert_eq!(*game.state(), GameState::Playing);
        assert_eq!(game.engine().score(), 0);
        assert_eq!(game.engine().round_count(), 1);
    }

    #[test]
    fn test_quit_sets_quit_state() {
        let mut game = test_game(3);
        game.quit();
        assert_eq!(*game.state(), GameState::Quit);
    }
}
