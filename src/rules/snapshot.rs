//! Save and restore.
//!
//! A [`GameSnapshot`] captures everything needed to resume a game exactly:
//! content, rules, state (including a suspended turn) and the position in
//! the random stream. It is plain serde data; storing it is up to the
//! caller.

use serde::{Deserialize, Serialize};

use super::engine::Game;
use super::turn::TurnPhase;
use crate::board::Board;
use crate::core::{GameConfig, GameRng, GameRngState, GameState, PathState};
use crate::error::{GameError, GameResult};
use crate::quiz::QuizBank;

/// Serializable copy of a [`Game`] driven by [`GameRng`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub quiz: QuizBank,
    pub config: GameConfig,
    pub state: GameState,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Check that the snapshot describes a game that can continue.
    pub fn validate(&self) -> GameResult<()> {
        let invalid = GameError::Snapshot;

        self.board.validate().map_err(|e| invalid(e.to_string()))?;
        self.config.validate(&self.board).map_err(|e| invalid(e.to_string()))?;
        if self.quiz.is_empty() {
            return Err(invalid("quiz bank is empty".to_string()));
        }
        if !self.board.contains(self.state.position) {
            return Err(invalid(format!("{} is not on the board", self.state.position)));
        }
        if let PathState::Diagonal { branch, cursor } = self.state.path {
            let Some(route) = self.board.diagonal_path_for(branch) else {
                return Err(invalid(format!("{branch} is not a branch point")));
            };
            if cursor >= route.len() {
                return Err(invalid(format!(
                    "cursor {cursor} is past the diagonal from {branch}"
                )));
            }
        }
        if let TurnPhase::AwaitingQuizAnswer { question, .. } = &self.state.phase {
            if self.quiz.get(*question).is_none() {
                return Err(invalid(format!("question {} is not in the bank", question.index())));
            }
        }
        Ok(())
    }
}

impl Game<GameRng> {
    /// Capture the game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            quiz: self.quiz.clone(),
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Resume a captured game.
    pub fn restore(snapshot: GameSnapshot) -> GameResult<Self> {
        snapshot.validate()?;
        let rng = GameRng::from_state(&snapshot.rng);
        Ok(Game::from_parts(
            snapshot.board,
            snapshot.quiz,
            snapshot.config,
            snapshot.state,
            rng,
        ))
    }
}
