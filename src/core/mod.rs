//! Core engine types: state, inputs, RNG, configuration.
//!
//! This module contains the building blocks every other component shares.
//! Nothing here knows how a turn is resolved; that lives in `rules`.

pub mod action;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{InputOutcome, PlayerInput};
pub use config::{GameConfig, LapRule};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng, DIE_FACES};
pub use state::{GameState, PathState};
