//! Game construction with custom content or rules.

use super::engine::Game;
use crate::board::{Board, CellIndex};
use crate::core::{GameConfig, GameRng, GameState, LapRule, RandomSource};
use crate::economy::Multiplier;
use crate::error::SetupError;
use crate::quiz::QuizBank;

/// Builder for [`Game`].
///
/// Starts from the standard board, the standard questions and the default
/// configuration. Everything is validated together in `build`.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    board: Board,
    quiz: QuizBank,
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn quiz_bank(mut self, quiz: QuizBank) -> Self {
        self.quiz = quiz;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn starting_coins(mut self, coins: u64) -> Self {
        self.config.starting_coins = coins;
        self
    }

    pub fn starting_hearts(mut self, hearts: u32) -> Self {
        self.config.starting_hearts = hearts;
        self
    }

    pub fn starting_multiplier(mut self, multiplier: Multiplier) -> Self {
        self.config.starting_multiplier = multiplier;
        self
    }

    pub fn start_position(mut self, cell: CellIndex) -> Self {
        self.config.start_position = cell;
        self
    }

    pub fn reset_position(mut self, cell: CellIndex) -> Self {
        self.config.reset_position = cell;
        self
    }

    pub fn lap_rule(mut self, rule: LapRule) -> Self {
        self.config.lap_rule = rule;
        self
    }

    pub fn lap_heart_bonus(mut self, hearts: u32) -> Self {
        self.config.lap_heart_bonus = hearts;
        self
    }

    pub fn center_return_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.center_return_delay_ms = delay_ms;
        self
    }

    /// Build a game driven by a seeded [`GameRng`].
    pub fn build(self, seed: u64) -> Result<Game<GameRng>, SetupError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build a game driven by any random source.
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> Result<Game<R>, SetupError> {
        self.board.validate()?;
        if self.quiz.is_empty() {
            return Err(SetupError::EmptyQuizBank);
        }
        self.config.validate(&self.board)?;

        let state = GameState::new(&self.config);
        Ok(Game::from_parts(self.board, self.quiz, self.config, state, rng))
    }
}
