//! Coin and heart balances.

use serde::{Deserialize, Serialize};

use super::multiplier::Multiplier;
use crate::error::{GameError, GameResult};

/// Change actually applied to the balances, after clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceDelta {
    pub coins: i64,
    pub hearts: i64,
}

impl BalanceDelta {
    /// A delta that changes nothing.
    pub const NONE: BalanceDelta = BalanceDelta { coins: 0, hearts: 0 };

    /// Create a delta.
    #[must_use]
    pub const fn new(coins: i64, hearts: i64) -> Self {
        Self { coins, hearts }
    }

    /// True if neither balance changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.coins == 0 && self.hearts == 0
    }
}

impl std::ops::Add for BalanceDelta {
    type Output = BalanceDelta;

    fn add(self, rhs: Self) -> Self::Output {
        BalanceDelta::new(self.coins + rhs.coins, self.hearts + rhs.hearts)
    }
}

/// Player economy: coins, hearts, the active bet and completed laps.
///
/// Both balances are floored at zero. The multiplier can only be set to a
/// value whose per-roll cost the player can currently afford; the cost
/// itself is charged when a roll is made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    coins: u64,
    hearts: u32,
    multiplier: Multiplier,
    lap_count: u32,
}

impl Wallet {
    /// Create a wallet with starting balances.
    #[must_use]
    pub fn new(coins: u64, hearts: u32, multiplier: Multiplier) -> Self {
        Self {
            coins,
            hearts,
            multiplier,
            lap_count: 0,
        }
    }

    #[must_use]
    pub fn coins(&self) -> u64 {
        self.coins
    }

    #[must_use]
    pub fn hearts(&self) -> u32 {
        self.hearts
    }

    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    #[must_use]
    pub fn lap_count(&self) -> u32 {
        self.lap_count
    }

    /// Add to both balances, flooring each at zero.
    ///
    /// Returns the change that was actually applied.
    pub fn apply_delta(&mut self, coins_delta: i64, hearts_delta: i64) -> BalanceDelta {
        let coins_before = self.coins;
        let hearts_before = self.hearts;

        self.coins = clamp_add(self.coins as i128, coins_delta, u64::MAX as i128) as u64;
        self.hearts = clamp_add(self.hearts as i128, hearts_delta, u32::MAX as i128) as u32;

        BalanceDelta::new(
            self.coins as i64 - coins_before as i64,
            i64::from(self.hearts) - i64::from(hearts_before),
        )
    }

    /// True if the player holds enough hearts for one roll at `multiplier`.
    #[must_use]
    pub fn can_afford(&self, multiplier: Multiplier) -> bool {
        self.hearts >= multiplier.heart_cost()
    }

    /// Make `multiplier` the active bet.
    ///
    /// Nothing is charged here; fails if one roll at this multiplier is
    /// already unaffordable.
    pub fn set_multiplier(&mut self, multiplier: Multiplier) -> GameResult<()> {
        if !self.can_afford(multiplier) {
            return Err(self.insufficient(multiplier));
        }
        self.multiplier = multiplier;
        Ok(())
    }

    /// Deduct the active multiplier's heart cost for a roll.
    pub fn charge_roll_cost(&mut self) -> GameResult<u32> {
        let cost = self.multiplier.heart_cost();
        if self.hearts < cost {
            return Err(self.insufficient(self.multiplier));
        }
        self.hearts -= cost;
        Ok(cost)
    }

    /// Give back hearts charged for a roll.
    pub fn refund(&mut self, cost: u32) {
        self.hearts = self.hearts.saturating_add(cost);
    }

    /// Count a completed lap and pay its heart bonus.
    ///
    /// Returns the new lap count.
    pub fn record_lap(&mut self, heart_bonus: u32) -> u32 {
        self.lap_count += 1;
        self.hearts = self.hearts.saturating_add(heart_bonus);
        self.lap_count
    }

    /// True once every heart is spent.
    #[must_use]
    pub fn is_broke(&self) -> bool {
        self.hearts == 0
    }

    fn insufficient(&self, multiplier: Multiplier) -> GameError {
        GameError::InsufficientHearts {
            required: multiplier.heart_cost(),
            available: self.hearts,
        }
    }
}

fn clamp_add(current: i128, delta: i64, max: i128) -> i128 {
    (current + i128::from(delta)).clamp(0, max)
}
