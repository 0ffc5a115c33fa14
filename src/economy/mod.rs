//! Economy: coins, hearts, bet multipliers and laps.

pub mod multiplier;
pub mod wallet;

pub use multiplier::Multiplier;
pub use wallet::{BalanceDelta, Wallet};
