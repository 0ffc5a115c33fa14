//! Tile effect resolution - applying a tile's rule to the wallet.

use serde::{Deserialize, Serialize};

use super::effect::{RandomEvent, TileEffect};
use crate::board::TileType;
use crate::core::RandomSource;
use crate::economy::{BalanceDelta, Wallet};

/// Coins lost to the misfortune event, never scaled.
pub const MISFORTUNE_COINS: i64 = 20;

/// What the turn engine must do after a tile resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowUp {
    /// The tile is fully resolved.
    None,
    /// Suspend for a quiz answer.
    Quiz,
    /// Schedule the forced return to the start cell.
    ReturnToStart,
}

/// Result of resolving one tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileOutcome {
    pub tile: TileType,
    /// Change applied to the balances, after clamping.
    pub delta: BalanceDelta,
    /// Player-facing description.
    pub message: String,
    pub follow_up: FollowUp,
}

impl TileOutcome {
    fn new(tile: TileType, delta: BalanceDelta, message: impl Into<String>) -> Self {
        Self {
            tile,
            delta,
            message: message.into(),
            follow_up: FollowUp::None,
        }
    }

    fn then(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = follow_up;
        self
    }
}

/// Resolves tile effects against a wallet.
pub struct TileResolver;

impl TileResolver {
    /// Apply the effect of `tile` at the wallet's current multiplier.
    pub fn resolve(tile: TileType, wallet: &mut Wallet, rng: &mut impl RandomSource) -> TileOutcome {
        let m = wallet.multiplier();

        match TileEffect::for_tile(tile) {
            TileEffect::Reward { coins, hearts } => {
                let delta = wallet.apply_delta(m.scale(coins), m.scale(hearts));
                TileOutcome::new(tile, delta, reward_message(tile, delta))
            }

            TileEffect::RandomCoins { low, high } => {
                let base = rng.range_inclusive(low, high);
                let delta = wallet.apply_delta(m.scale(i64::from(base)), 0);
                let message = format!("Coins! +{} (base {base} x {})", delta.coins, m.value());
                TileOutcome::new(tile, delta, message)
            }

            TileEffect::RandomEvent => {
                let event = RandomEvent::ALL[rng.pick_index(RandomEvent::ALL.len())];
                let (delta, message) = match event {
                    RandomEvent::Windfall => {
                        let delta = wallet.apply_delta(m.scale(50), 0);
                        (delta, format!("Lucky break! +{} coins", delta.coins))
                    }
                    RandomEvent::Misfortune => {
                        let delta = wallet.apply_delta(-MISFORTUNE_COINS, 0);
                        (delta, format!("Bad luck! {} coins", delta.coins))
                    }
                    RandomEvent::Recovery => {
                        let delta = wallet.apply_delta(0, m.scale(1));
                        (delta, format!("Recovery! +{} hearts", delta.hearts))
                    }
                    RandomEvent::Nothing => (BalanceDelta::NONE, "Nothing happened".to_string()),
                };
                TileOutcome::new(tile, delta, message)
            }

            TileEffect::Exchange { hearts, coins } => {
                if i64::from(wallet.hearts()) >= hearts {
                    let delta = wallet.apply_delta(m.scale(coins), -hearts);
                    let message = format!("Exchange! -{hearts} hearts, +{} coins", delta.coins);
                    TileOutcome::new(tile, delta, message)
                } else {
                    TileOutcome::new(tile, BalanceDelta::NONE, "Exchange failed: not enough hearts")
                }
            }

            TileEffect::Slot { odds, coins } => {
                if rng.pick_index(odds as usize) == 0 {
                    let delta = wallet.apply_delta(m.scale(coins), 0);
                    TileOutcome::new(tile, delta, format!("Jackpot! +{} coins", delta.coins))
                } else {
                    TileOutcome::new(tile, BalanceDelta::NONE, "No luck this time")
                }
            }

            TileEffect::Center { coins, hearts } => {
                let delta = wallet.apply_delta(m.scale(coins), m.scale(hearts));
                TileOutcome::new(tile, delta, reward_message(tile, delta)).then(FollowUp::ReturnToStart)
            }

            TileEffect::Quiz => {
                TileOutcome::new(tile, BalanceDelta::NONE, "Quiz time!").then(FollowUp::Quiz)
            }
        }
    }
}

fn reward_message(tile: TileType, delta: BalanceDelta) -> String {
    match (delta.coins, delta.hearts) {
        (0, hearts) => format!("{tile}! +{hearts} hearts"),
        (coins, 0) => format!("{tile}! +{coins} coins"),
        (coins, hearts) => format!("{tile}! +{coins} coins, +{hearts} hearts"),
    }
}
