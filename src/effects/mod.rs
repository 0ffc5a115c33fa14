//! Tile effects: what each tile does and how it is applied.
//!
//! - `TileEffect`: the rule attached to a tile type
//! - `TileResolver`: applies a rule to the wallet, drawing randomness
//!   from the injected source

pub mod effect;
pub mod resolver;

pub use effect::{RandomEvent, TileEffect};
pub use resolver::{FollowUp, TileOutcome, TileResolver, MISFORTUNE_COINS};
