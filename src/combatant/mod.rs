//! Combatants: the player and the enemies.
//!
//! Both variants share [`Vitals`] (health, block, statuses) and expose
//! them through the [`Combatant`] trait, which is what the effect
//! resolver works against. Variant-specific state lives on [`Player`]
//! (energy, card piles) and [`Enemy`] (intent planner, declared intent).

mod enemy;
mod player;
mod roster;
mod vitals;

pub use enemy::{ActionOutcome, Enemy, EnemyActionReport};
pub use player::Player;
pub use roster::Roster;
pub use vitals::{DamageReport, TickOutcome, Vitals};

use smallvec::SmallVec;

use crate::status::{StatusKind, StatusTable};

/// Shared capability of everything that can be targeted in combat.
///
/// Implementors only provide access to their [`Vitals`]; every mutator
/// has a default that delegates to it.
pub trait Combatant {
    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    fn name(&self) -> &str {
        self.vitals().name()
    }

    fn health(&self) -> i32 {
        self.vitals().health()
    }

    fn max_health(&self) -> i32 {
        self.vitals().max_health()
    }

    fn block(&self) -> i32 {
        self.vitals().block()
    }

    fn statuses(&self) -> &StatusTable {
        self.vitals().statuses()
    }

    fn statuses_mut(&mut self) -> &mut StatusTable {
        self.vitals_mut().statuses_mut()
    }

    fn is_dead(&self) -> bool {
        self.vitals().is_dead()
    }

    /// Incoming modifiers, then block, then health.
    fn take_damage(&mut self, amount: i32) -> DamageReport {
        self.vitals_mut().take_damage(amount)
    }

    fn lose_health(&mut self, amount: i32) -> i32 {
        self.vitals_mut().lose_health(amount)
    }

    fn heal(&mut self, amount: i32) -> i32 {
        self.vitals_mut().heal(amount)
    }

    /// Adds block without status modifiers.
    fn add_block(&mut self, amount: i32) -> i32 {
        self.vitals_mut().add_block(amount)
    }

    fn reset_block(&mut self) {
        self.vitals_mut().reset_block();
    }

    fn process_turn_start(&mut self) -> SmallVec<[TickOutcome; 2]> {
        self.vitals_mut().process_turn_start()
    }

    fn process_turn_end(&mut self) -> SmallVec<[StatusKind; 4]> {
        self.vitals_mut().process_turn_end()
    }
}
