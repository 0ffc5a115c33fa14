//! Bet multipliers and their heart costs.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A legal bet multiplier.
///
/// Higher multipliers scale most rewards but cost more hearts per roll.
///
/// | Multiplier | Hearts per roll |
/// |---|---|
/// | 1 | 1 |
/// | 2 | 3 |
/// | 3 | 5 |
/// | 5 | 10 |
/// | 10 | 25 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Multiplier {
    X1,
    X2,
    X3,
    #[default]
    X5,
    X10,
}

impl Multiplier {
    /// Every legal multiplier, ascending.
    pub const ALL: [Multiplier; 5] = [
        Multiplier::X1,
        Multiplier::X2,
        Multiplier::X3,
        Multiplier::X5,
        Multiplier::X10,
    ];

    /// Numeric factor applied to rewards.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X3 => 3,
            Self::X5 => 5,
            Self::X10 => 10,
        }
    }

    /// Hearts charged for each roll made with this multiplier.
    #[must_use]
    pub const fn heart_cost(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X2 => 3,
            Self::X3 => 5,
            Self::X5 => 10,
            Self::X10 => 25,
        }
    }

    /// Scale a base reward by this multiplier.
    #[must_use]
    pub const fn scale(self, base: i64) -> i64 {
        base * self.value() as i64
    }
}

impl TryFrom<u32> for Multiplier {
    type Error = GameError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::X1),
            2 => Ok(Self::X2),
            3 => Ok(Self::X3),
            5 => Ok(Self::X5),
            10 => Ok(Self::X10),
            other => Err(GameError::InvalidMultiplier(other)),
        }
    }
}

impl From<Multiplier> for u32 {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.value()
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x", self.value())
    }
}
