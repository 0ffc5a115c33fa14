//! Events published to the renderer.
//!
//! Each inbound call publishes its events in the order they happen. A roll
//! that runs to completion produces, for example:
//!
//! ```text
//! StatsChanged        (heart cost charged)
//! DiceRolled
//! HeartsRefunded      (doubles only)
//! StepMoved × total
//! LapCompleted        (at most once)
//! TileResolved
//! StatsChanged
//! TurnCompleted
//! GameOver            (hearts exhausted)
//! ```
//!
//! Turns that hit a branch point or a quiz tile stop after
//! `PathChoiceRequired` / `QuizRequested` and continue on the next input.

use serde::{Deserialize, Serialize};

use crate::board::{CellIndex, PathMode, TileType};
use crate::economy::Multiplier;
use crate::effects::TileOutcome;
use crate::quiz::{QuestionId, QuizQuestion};
use crate::rules::TurnResult;

/// Something the renderer may want to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new bet multiplier is active.
    BetSelected { multiplier: Multiplier, heart_cost: u32 },

    /// Both dice landed.
    DiceRolled { d1: u8, d2: u8, is_double: bool },

    /// Doubles returned the roll's heart cost.
    HeartsRefunded { amount: u32 },

    /// The turn waits for an outer/diagonal choice.
    PathChoiceRequired { at: CellIndex },

    /// The player picked a path.
    PathChosen { mode: PathMode },

    /// The piece moved one cell.
    StepMoved { position: CellIndex, mode: PathMode },

    /// A lap around the ring finished.
    LapCompleted { lap_count: u32, heart_bonus: u32 },

    /// The landing tile's effect was applied.
    TileResolved(TileOutcome),

    /// The turn waits for a quiz answer.
    QuizRequested { id: QuestionId, question: QuizQuestion },

    /// The quiz was answered.
    QuizResolved { correct: bool, coins: i64, hearts: i64 },

    /// The forced return to start will happen after `delay_ms`.
    CenterReturnScheduled { delay_ms: u64 },

    /// The piece was put back on the start cell.
    CenterReturned { position: CellIndex },

    /// Balances changed.
    StatsChanged { coins: u64, hearts: u32 },

    /// A turn finished.
    TurnCompleted(TurnResult),

    /// Hearts ran out.
    GameOver { final_coins: u64, final_tile: TileType },

    /// The game was reinitialized.
    GameReset,
}

impl GameEvent {
    /// Short name of the event kind, for logs and filtering.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BetSelected { .. } => "bet_selected",
            Self::DiceRolled { .. } => "dice_rolled",
            Self::HeartsRefunded { .. } => "hearts_refunded",
            Self::PathChoiceRequired { .. } => "path_choice_required",
            Self::PathChosen { .. } => "path_chosen",
            Self::StepMoved { .. } => "step_moved",
            Self::LapCompleted { .. } => "lap_completed",
            Self::TileResolved(_) => "tile_resolved",
            Self::QuizRequested { .. } => "quiz_requested",
            Self::QuizResolved { .. } => "quiz_resolved",
            Self::CenterReturnScheduled { .. } => "center_return_scheduled",
            Self::CenterReturned { .. } => "center_returned",
            Self::StatsChanged { .. } => "stats_changed",
            Self::TurnCompleted(_) => "turn_completed",
            Self::GameOver { .. } => "game_over",
            Self::GameReset => "game_reset",
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DiceRolled { d1, d2, is_double } => {
                write!(f, "rolled [{d1}] + [{d2}] = {}", d1 + d2)?;
                if *is_double {
                    write!(f, " (double)")?;
                }
                Ok(())
            }
            Self::StepMoved { position, mode } => write!(f, "moved to {position} ({mode})"),
            Self::TileResolved(outcome) => write!(f, "{}", outcome.message),
            Self::LapCompleted { lap_count, heart_bonus } => {
                write!(f, "lap {lap_count} complete, +{heart_bonus} hearts")
            }
            Self::GameOver { final_coins, final_tile } => {
                write!(f, "game over on {final_tile} with {final_coins} coins")
            }
            other => f.write_str(other.kind()),
        }
    }
}
