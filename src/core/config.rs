//! Game configuration.
//!
//! `GameConfig` holds the tunable rules: starting balances, where the
//! piece starts and restarts, lap bookkeeping and the center-return delay.
//! Tile rewards and bet costs are fixed content and live with their types.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CellIndex};
use crate::economy::Multiplier;
use crate::error::SetupError;

/// When a step on the outer ring counts as a completed lap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LapRule {
    /// The step increased the cell index and arrived on the start cell.
    ///
    /// Outer movement decreases the index by one per step, so on the
    /// standard board the only increasing step is the 0 → 19 wrap. This
    /// keeps the historical per-step check exactly.
    #[default]
    IncreasingOntoStart,

    /// Any outer-ring step that arrives on the start cell from another cell.
    ArriveAtStart,
}

impl LapRule {
    /// Check one step from `previous` to `current`.
    #[must_use]
    pub fn is_lap(self, previous: CellIndex, current: CellIndex, start: CellIndex) -> bool {
        match self {
            Self::IncreasingOntoStart => previous < current && current == start,
            Self::ArriveAtStart => previous != current && current == start,
        }
    }
}

/// Tunable game rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Coins at game start and after reset.
    pub starting_coins: u64,

    /// Hearts at game start and after reset.
    pub starting_hearts: u32,

    /// Active bet at game start and after reset.
    pub starting_multiplier: Multiplier,

    /// Where a new game places the piece.
    pub start_position: CellIndex,

    /// Where a reset game places the piece.
    pub reset_position: CellIndex,

    /// Hearts awarded for each completed lap.
    pub lap_heart_bonus: u32,

    /// How laps are detected.
    pub lap_rule: LapRule,

    /// Delay the renderer should wait before completing a center return.
    pub center_return_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_coins: 100,
            starting_hearts: 50,
            starting_multiplier: Multiplier::X5,
            start_position: CellIndex::new(10),
            reset_position: CellIndex::new(0),
            lap_heart_bonus: 5,
            lap_rule: LapRule::IncreasingOntoStart,
            center_return_delay_ms: 2000,
        }
    }
}

impl GameConfig {
    /// Check the configuration against a board.
    pub fn validate(&self, board: &Board) -> Result<(), SetupError> {
        if self.starting_hearts == 0 {
            return Err(SetupError::InvalidConfig(
                "starting hearts must be positive".to_string(),
            ));
        }
        for (name, cell) in [
            ("start position", self.start_position),
            ("reset position", self.reset_position),
        ] {
            if !board.is_outer(cell) {
                return Err(SetupError::InvalidConfig(format!(
                    "{name} {cell} is not on the outer ring"
                )));
            }
        }
        Ok(())
    }
}
