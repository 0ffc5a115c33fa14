//! Game state: the single owned context every component works on.
//!
//! ## GameState
//!
//! - Piece position and the active path (outer ring or a diagonal)
//! - Wallet: coins, hearts, bet multiplier, laps
//! - Turn phase, which doubles as the one-turn-at-a-time guard
//! - Pending center return
//! - History of completed turns
//!
//! The history uses `im::Vector`, so cloning a state for a snapshot or a
//! forked game is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use crate::board::{CellIndex, PathMode};
use crate::economy::Wallet;
use crate::rules::{TurnPhase, TurnResult};

/// Where on the board the piece is travelling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathState {
    /// On the outer ring.
    #[default]
    Outer,
    /// On the diagonal path that leaves from `branch`, at `cursor`.
    /// Cursor 0 is the branch cell itself.
    Diagonal { branch: CellIndex, cursor: usize },
}

impl PathState {
    /// Movement rule currently in force.
    #[must_use]
    pub fn mode(&self) -> PathMode {
        match self {
            Self::Outer => PathMode::Outer,
            Self::Diagonal { .. } => PathMode::Diagonal,
        }
    }
}

/// Complete mutable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current cell.
    pub position: CellIndex,

    /// Active path.
    pub path: PathState,

    /// Coins, hearts, multiplier and laps.
    pub wallet: Wallet,

    /// Where the current turn is, if any.
    pub phase: TurnPhase,

    /// A center tile scheduled a return to start that has not happened yet.
    pub pending_center_return: bool,

    /// Number of rolls accepted so far.
    pub turn_number: u32,

    /// Completed turns, oldest first.
    pub history: Vector<TurnResult>,
}

impl GameState {
    /// State for a brand-new game.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::at(config, config.start_position)
    }

    /// State after an explicit reset.
    ///
    /// Identical to [`GameState::new`] except for the starting cell.
    #[must_use]
    pub fn after_reset(config: &GameConfig) -> Self {
        Self::at(config, config.reset_position)
    }

    fn at(config: &GameConfig, position: CellIndex) -> Self {
        Self {
            position,
            path: PathState::Outer,
            wallet: Wallet::new(
                config.starting_coins,
                config.starting_hearts,
                config.starting_multiplier,
            ),
            phase: TurnPhase::Idle,
            pending_center_return: false,
            turn_number: 0,
            history: Vector::new(),
        }
    }

    /// Movement rule currently in force.
    #[must_use]
    pub fn path_mode(&self) -> PathMode {
        self.path.mode()
    }

    /// True while a roll has been accepted but not fully resolved.
    #[must_use]
    pub fn is_turn_in_progress(&self) -> bool {
        self.phase.is_in_progress()
    }

    /// True once hearts ran out.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver)
    }

    /// Most recently completed turn.
    #[must_use]
    pub fn last_turn(&self) -> Option<&TurnResult> {
        self.history.last()
    }
}
