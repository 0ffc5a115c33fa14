//! Tile effect definitions.
//!
//! Every tile type maps to exactly one [`TileEffect`]. Amounts are base
//! values; the resolver scales them by the active multiplier except where a
//! variant says otherwise.

use serde::{Deserialize, Serialize};

use crate::board::TileType;

/// Rule applied when a turn ends on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileEffect {
    /// Fixed reward, both amounts scaled by the multiplier.
    Reward { coins: i64, hearts: i64 },

    /// Uniform base coin amount in `low..=high`, scaled by the multiplier.
    RandomCoins { low: u32, high: u32 },

    /// One entry of [`RandomEvent`], equal probability.
    RandomEvent,

    /// Trade a fixed number of hearts for scaled coins, if affordable.
    /// `hearts` is not scaled.
    Exchange { hearts: i64, coins: i64 },

    /// One-in-`odds` chance of a scaled coin jackpot.
    Slot { odds: u32, coins: i64 },

    /// Scaled reward, then a forced return to the start cell.
    Center { coins: i64, hearts: i64 },

    /// Hand over to the quiz engine.
    Quiz,
}

impl TileEffect {
    /// Effect for a tile type.
    #[must_use]
    pub const fn for_tile(tile: TileType) -> Self {
        match tile {
            TileType::Start => Self::Reward { coins: 50, hearts: 0 },
            TileType::Quiz => Self::Quiz,
            TileType::Coin => Self::RandomCoins { low: 10, high: 39 },
            TileType::Heart => Self::Reward { coins: 0, hearts: 1 },
            TileType::Random => Self::RandomEvent,
            TileType::Special => Self::Reward { coins: 300, hearts: 10 },
            TileType::Attack => Self::Reward { coins: 150, hearts: 7 },
            TileType::Steal => Self::Reward { coins: 250, hearts: 6 },
            TileType::Event => Self::Reward { coins: 200, hearts: 8 },
            TileType::Bonus => Self::Reward { coins: 100, hearts: 0 },
            TileType::Target => Self::Reward { coins: 80, hearts: 3 },
            TileType::Exchange => Self::Exchange { hearts: 5, coins: 50 },
            TileType::Magic => Self::Reward { coins: 120, hearts: 5 },
            TileType::Gift => Self::Reward { coins: 90, hearts: 0 },
            // 100 doubled
            TileType::Lucky => Self::Reward { coins: 200, hearts: 0 },
            TileType::Slot => Self::Slot { odds: 3, coins: 200 },
            TileType::Center => Self::Center { coins: 500, hearts: 15 },
            TileType::Champion => Self::Reward { coins: 300, hearts: 10 },
        }
    }
}

/// Outcomes of the random-event tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomEvent {
    /// +50 coins per multiplier step.
    Windfall,
    /// -20 coins, unscaled, floored at zero.
    Misfortune,
    /// +1 heart per multiplier step.
    Recovery,
    /// Nothing happens.
    Nothing,
}

impl RandomEvent {
    pub const ALL: [RandomEvent; 4] = [
        RandomEvent::Windfall,
        RandomEvent::Misfortune,
        RandomEvent::Recovery,
        RandomEvent::Nothing,
    ];
}
