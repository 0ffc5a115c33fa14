//! Turn state machine types.
//!
//! A turn runs synchronously from the roll to the end of tile resolution,
//! except at two suspension points that wait for the player:
//!
//! ```text
//! Idle ──roll──▶ (charge, dice) ──branch point?──▶ AwaitingPathChoice
//!                      │                                  │ choose_path
//!                      ▼                                  ▼
//!                   moving ◀──────────────────────────────┘
//!                      │
//!                      ▼
//!                resolving tile ──quiz tile──▶ AwaitingQuizAnswer
//!                      │                              │ answer_quiz
//!                      ▼                              ▼
//!          hearts == 0 ? GameOver : Idle ◀────────────┘
//! ```
//!
//! Every suspended phase carries the [`PendingTurn`] it belongs to, so the
//! whole machine serializes with the rest of the state.

use serde::{Deserialize, Serialize};

use crate::board::CellIndex;
use crate::effects::TileOutcome;
use crate::quiz::{QuestionId, QuizQuestion, QuizVerdict};

/// Values of the two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub d1: u8,
    pub d2: u8,
}

impl DiceRoll {
    #[must_use]
    pub const fn new(d1: u8, d2: u8) -> Self {
        Self { d1, d2 }
    }

    /// Number of steps to move.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.d1 as u32 + self.d2 as u32
    }

    /// Both dice show the same face.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.d1 == self.d2
    }
}

/// Bookkeeping for a turn that has been accepted but not finished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTurn {
    /// 1-based turn number.
    pub number: u32,
    pub dice: DiceRoll,
    /// Hearts charged when the roll was accepted.
    pub heart_cost: u32,
    /// Hearts returned because of doubles.
    pub refunded: u32,
    /// A lap was recorded during movement.
    pub lap_completed: bool,
}

/// Where the turn engine is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Ready for a roll.
    #[default]
    Idle,

    /// Rolled on a branch point; waiting for outer or diagonal.
    AwaitingPathChoice { turn: PendingTurn },

    /// Landed on a quiz tile; waiting for an answer.
    AwaitingQuizAnswer {
        turn: PendingTurn,
        tile: TileOutcome,
        question: QuestionId,
    },

    /// Hearts ran out. Only a reset leaves this phase.
    GameOver,
}

impl TurnPhase {
    /// True between an accepted roll and the end of tile resolution.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            Self::AwaitingPathChoice { .. } | Self::AwaitingQuizAnswer { .. }
        )
    }

    /// Short description for messages.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingPathChoice { .. } => "waiting for a path choice",
            Self::AwaitingQuizAnswer { .. } => "waiting for a quiz answer",
            Self::GameOver => "over",
        }
    }
}

/// Record of one completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub number: u32,
    pub final_position: CellIndex,
    pub dice: DiceRoll,
    pub was_double: bool,
    /// Net hearts paid for the roll after any refund.
    pub heart_cost: u32,
    pub tile: TileOutcome,
    /// Present when the turn ended on a quiz tile.
    pub quiz: Option<QuizVerdict>,
    pub lap_completed: bool,
    pub game_over: bool,
}

/// What an input did to the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnProgress {
    /// The turn finished.
    Completed(TurnResult),
    /// The turn is suspended until `choose_path`.
    AwaitingPathChoice { at: CellIndex },
    /// The turn is suspended until `answer_quiz`.
    AwaitingQuizAnswer { id: QuestionId, question: QuizQuestion },
}

impl TurnProgress {
    /// The finished turn, if this input completed one.
    #[must_use]
    pub fn completed(&self) -> Option<&TurnResult> {
        match self {
            Self::Completed(result) => Some(result),
            _ => None,
        }
    }
}
