//! Status effects: stacking buffs and debuffs owned by a combatant.
//!
//! - [`StatusKind`]: the fixed set of statuses, each with a polarity and
//!   a decay rule
//! - [`StatusTable`]: stack storage plus the damage and block modifier math

mod kind;
mod table;

pub use kind::{Decay, Polarity, StatusKind};
pub use table::{StatusTable, StatusTick, MAX_STACKS};
