//! Error types.
//!
//! [`GameError`] covers everything a player input can be refused for. Every
//! variant is recoverable: the call that returned it left the game exactly as
//! it was, and the `Display` text is suitable for showing to the player.
//!
//! [`SetupError`] is returned only while building a game (board topology,
//! quiz bank, configuration). A game that built successfully never sees one.

use crate::board::CellIndex;
use crate::quiz::QuestionId;

/// Input that only a suspended turn accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InputKind {
    /// A choice between the outer ring and a diagonal path.
    PathChoice,
    /// An answer to the current quiz question.
    QuizAnswer,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PathChoice => write!(f, "a path choice"),
            Self::QuizAnswer => write!(f, "a quiz answer"),
        }
    }
}

/// Errors returned by player inputs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Not enough hearts to select or roll with a multiplier.
    #[error("not enough hearts: need {required}, have {available}")]
    InsufficientHearts { required: u32, available: u32 },

    /// A roll was requested while a turn is still being resolved.
    #[error("a turn is already in progress")]
    ReentrantTurn,

    /// Bet multiplier outside the fixed set {1, 2, 3, 5, 10}.
    #[error("invalid bet multiplier: {0}")]
    InvalidMultiplier(u32),

    /// The game has ended; only a reset is accepted.
    #[error("the game is over")]
    GameOver,

    /// An input arrived that the current phase is not waiting for.
    #[error("received {received}, but the game is {phase}")]
    UnexpectedInput { received: InputKind, phase: String },

    /// Quiz answer index outside the question's options.
    #[error("answer {index} is not one of the {options} options")]
    InvalidQuizOption { index: usize, options: usize },

    /// A pending question is not in the quiz bank.
    #[error("question {} is not in the quiz bank", .0.index())]
    UnknownQuestion(QuestionId),

    /// A snapshot does not describe a game that can continue.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

/// Errors raised while building a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The board has no outer ring or fewer cells than the ring needs.
    #[error("board needs at least {outer} cells, got {cells}")]
    BoardTooSmall { outer: usize, cells: usize },

    /// The start cell is not on the outer ring.
    #[error("start cell {0} is not on the outer ring")]
    StartOffRing(CellIndex),

    /// A diagonal path is malformed.
    #[error("diagonal path from {branch}: {reason}")]
    InvalidDiagonal { branch: CellIndex, reason: String },

    /// Two diagonal paths share a branch point.
    #[error("duplicate diagonal path from {0}")]
    DuplicateBranch(CellIndex),

    /// The quiz bank is empty.
    #[error("quiz bank has no questions")]
    EmptyQuizBank,

    /// A quiz question is malformed.
    #[error("quiz question {index}: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for player inputs.
pub type GameResult<T> = Result<T, GameError>;
