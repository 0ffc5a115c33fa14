//! Player inputs.
//!
//! Every inbound call on the engine has a `PlayerInput` counterpart, so a
//! front end can queue, log or replay inputs as plain data and feed them
//! through [`Game::handle`](crate::rules::Game::handle).

use serde::{Deserialize, Serialize};

use crate::board::PathMode;
use crate::economy::Multiplier;
use crate::rules::TurnProgress;

/// Something the player (or the renderer's timer) asks the engine to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerInput {
    /// Roll the dice.
    Roll,
    /// Select a bet multiplier by its numeric value.
    SelectBet(u32),
    /// Continue along the outer ring or take the diagonal.
    ChoosePath(PathMode),
    /// Answer the pending quiz question.
    AnswerQuiz(usize),
    /// The center-return delay elapsed.
    CompleteCenterReturn,
    /// Start over.
    Reset,
}

/// Result of a handled input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// A roll, path choice or quiz answer moved the turn forward.
    Turn(TurnProgress),
    /// The bet changed.
    BetSelected(Multiplier),
    /// Whether a pending center return was applied.
    CenterReturn(bool),
    /// The game was reset.
    Reset,
}
