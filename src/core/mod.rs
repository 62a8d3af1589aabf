//! Core combat types: combatant ids, RNG, configuration.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::CombatantId;
pub use rng::{GameRng, GameRngState};
pub use config::{BlockExpiry, CombatConfig};
