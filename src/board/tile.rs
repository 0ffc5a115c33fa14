//! Tile categories.

use serde::{Deserialize, Serialize};

/// What happens when a turn ends on a cell.
///
/// The first group appears on the outer ring, the second only on the
/// diagonal paths, and `Center` is the shared middle cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    // === Outer ring ===
    Start,
    Quiz,
    Coin,
    Heart,
    Random,
    Special,
    Attack,
    Steal,
    Event,

    // === Diagonal paths ===
    Bonus,
    Target,
    Exchange,
    Magic,
    Gift,
    Lucky,
    Slot,
    Champion,

    // === Middle ===
    Center,
}

impl TileType {
    /// Every tile type, in declaration order.
    pub const ALL: [TileType; 18] = [
        TileType::Start,
        TileType::Quiz,
        TileType::Coin,
        TileType::Heart,
        TileType::Random,
        TileType::Special,
        TileType::Attack,
        TileType::Steal,
        TileType::Event,
        TileType::Bonus,
        TileType::Target,
        TileType::Exchange,
        TileType::Magic,
        TileType::Gift,
        TileType::Lucky,
        TileType::Slot,
        TileType::Champion,
        TileType::Center,
    ];

    /// Human-readable tile name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Quiz => "Quiz",
            Self::Coin => "Coin",
            Self::Heart => "Heart",
            Self::Random => "Random",
            Self::Special => "Special",
            Self::Attack => "Attack",
            Self::Steal => "Steal",
            Self::Event => "Event",
            Self::Bonus => "Bonus",
            Self::Target => "Target",
            Self::Exchange => "Exchange",
            Self::Magic => "Magic",
            Self::Gift => "Gift",
            Self::Lucky => "Lucky",
            Self::Slot => "Slot",
            Self::Champion => "Champion",
            Self::Center => "Center",
        }
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
