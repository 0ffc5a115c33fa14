//! # dice-quiz
//!
//! Turn-resolution engine for a single-player board game of dice, quizzes
//! and bets.
//!
//! A piece travels counter-clockwise around a 20-cell ring, with two
//! diagonal shortcuts through a center cell. Each roll costs hearts
//! according to the active bet multiplier; the tile the piece lands on
//! pays out coins or hearts scaled by the same multiplier. Quiz tiles
//! suspend the turn until the player answers. The game ends when hearts
//! run out.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: One `Game` value owns every piece of state.
//!    There are no globals; inputs are methods taking `&mut self`.
//!
//! 2. **Explicit Turn Machine**: A turn is either idle, suspended for a
//!    path choice, suspended for a quiz answer, or over. Inputs that do
//!    not fit the current phase are rejected with a typed error.
//!
//! 3. **Injected Randomness**: Dice, quiz selection and tile draws all go
//!    through `RandomSource`. `GameRng` is seeded and resumable;
//!    `ScriptedRng` replays fixed values for tests.
//!
//! 4. **Passive Rendering**: The engine publishes `GameEvent`s to a sink
//!    and never waits on presentation.
//!
//! ## Modules
//!
//! - `board`: Cells, tile types, diagonal paths
//! - `core`: State, inputs, RNG, configuration
//! - `economy`: Coins, hearts, bet multipliers
//! - `effects`: Tile effect table and resolver
//! - `events`: Events and sinks for the renderer
//! - `quiz`: Question bank and answer evaluation
//! - `rules`: The turn engine, builder and snapshots

pub mod board;
pub mod core;
pub mod economy;
pub mod effects;
pub mod error;
pub mod events;
pub mod quiz;
pub mod rules;

// Re-export commonly used types
pub use crate::board::{Board, CellIndex, DiagonalPath, PathMode, TileType};

pub use crate::core::{
    GameConfig, GameRng, GameRngState, GameState, InputOutcome, LapRule, PathState,
    PlayerInput, RandomSource, ScriptedRng,
};

pub use crate::economy::{BalanceDelta, Multiplier, Wallet};

pub use crate::effects::{FollowUp, TileEffect, TileOutcome, TileResolver};

pub use crate::error::{GameError, GameResult, InputKind, SetupError};

pub use crate::events::{EventSink, FnSink, GameEvent, NullSink};

pub use crate::quiz::{QuestionId, QuizBank, QuizQuestion, QuizVerdict};

pub use crate::rules::{
    DiceRoll, Game, GameBuilder, GameSnapshot, TurnPhase, TurnProgress, TurnResult,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::board::{Board, CellIndex, PathMode, TileType};
    pub use crate::core::{GameConfig, GameRng, LapRule, PlayerInput, RandomSource, ScriptedRng};
    pub use crate::economy::Multiplier;
    pub use crate::error::{GameError, GameResult};
    pub use crate::events::{EventSink, GameEvent};
    pub use crate::rules::{Game, GameBuilder, TurnPhase, TurnProgress, TurnResult};
}
