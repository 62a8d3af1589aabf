//! Turn engine: phase transitions, the enemy phase, and combat end.
//!
//! ## Round structure
//!
//! 1. Player turn: cards are played until the controller calls `end_turn`
//! 2. Turn end: player statuses decay, the hand is discarded, player
//!    block is cleared (unless `BlockExpiry::OwnerTurnStart` defers it)
//! 3. Enemy turn: each living enemy clears its block, ticks its statuses,
//!    executes its declared intent, then decays its statuses
//! 4. Next player turn: statuses tick, energy refills, the turn number
//!    increments, enemies declare new intents, and a new hand is drawn
//!
//! Combat end is checked after every card and every enemy action. Once
//! reached it is terminal.

mod events;
mod state;
mod turn;

pub use events::CombatEvent;
pub use state::{CombatResult, TurnState};
pub use turn::TurnEngine;
