//! Turn resolution.
//!
//! ## Key Types
//!
//! - `Game`: Owns the board, questions, rules, state and RNG; accepts inputs
//! - `GameBuilder`: Validated construction with custom content or rules
//! - `TurnPhase`: Where a turn is suspended, if anywhere
//! - `TurnResult`: Record of a completed turn
//! - `GameSnapshot`: Binary save and restore
//!
//! Movement is split out into [`movement`] as pure functions over the
//! board so it can be tested without a game.

pub mod builder;
pub mod engine;
pub mod movement;
pub mod snapshot;
pub mod turn;

pub use builder::GameBuilder;
pub use engine::Game;
pub use snapshot::GameSnapshot;
pub use turn::{DiceRoll, PendingTurn, TurnPhase, TurnProgress, TurnResult};
