//! Health, block and statuses shared by every combatant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::status::{StatusKind, StatusTable, StatusTick};

/// Outcome of a single damage instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Damage after the target's incoming modifiers.
    pub amount: i32,
    /// Portion absorbed by block.
    pub blocked: i32,
    /// Health actually removed.
    pub health_lost: i32,
    /// This hit took the target from alive to dead.
    pub killed: bool,
}

/// A turn-start status tick after it was applied to its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub tick: StatusTick,
    /// Health lost (Poison) or restored (Regen).
    pub applied: i32,
}

/// Health pool, block and status table.
///
/// Invariants: `0 <= health <= max_health`, `block >= 0`. Health at zero
/// means dead, and nothing brings a dead combatant back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    name: String,
    max_health: i32,
    health: i32,
    block: i32,
    statuses: StatusTable,
}

impl Vitals {
    /// Create vitals at full health. `max_health` is raised to at least 1.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: i32) -> Self {
        let max_health = max_health.max(1);
        Self {
            name: name.into(),
            max_health,
            health: max_health,
            block: 0,
            statuses: StatusTable::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    #[must_use]
    pub fn block(&self) -> i32 {
        self.block
    }

    #[must_use]
    pub fn statuses(&self) -> &StatusTable {
        &self.statuses
    }

    pub fn statuses_mut(&mut self) -> &mut StatusTable {
        &mut self.statuses
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Take a hit: incoming modifiers first, then block absorbs, then health.
    pub fn take_damage(&mut self, amount: i32) -> DamageReport {
        let amount = self.statuses.modify_incoming_damage(amount);
        let was_alive = !self.is_dead();

        let report = if self.block >= amount {
            self.block -= amount;
            DamageReport { amount, blocked: amount, ..DamageReport::default() }
        } else {
            let blocked = self.block;
            let excess = amount - blocked;
            self.block = 0;
            let health_lost = self.remove_health(excess);
            DamageReport { amount, blocked, health_lost, killed: false }
        };

        let report = DamageReport { killed: was_alive && self.is_dead(), ..report };
        trace!(
            target: "combat::vitals",
            name = %self.name,
            amount = report.amount,
            blocked = report.blocked,
            health_lost = report.health_lost,
            health = self.health,
            "take_damage"
        );
        report
    }

    /// Lose health directly, ignoring block and incoming modifiers.
    ///
    /// Returns the health actually removed.
    pub fn lose_health(&mut self, amount: i32) -> i32 {
        let lost = self.remove_health(amount.max(0));
        trace!(target: "combat::vitals", name = %self.name, lost, health = self.health, "lose_health");
        lost
    }

    /// Heal, capped at max health. Returns the health actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if self.is_dead() {
            return 0;
        }
        let before = self.health;
        self.health = self.health.saturating_add(amount.max(0)).min(self.max_health);
        let healed = self.health - before;
        trace!(target: "combat::vitals", name = %self.name, healed, health = self.health, "heal");
        healed
    }

    /// Add block as given; callers apply `modify_block` where it belongs.
    /// Returns the new block total.
    pub fn add_block(&mut self, amount: i32) -> i32 {
        self.block = self.block.saturating_add(amount.max(0));
        trace!(target: "combat::vitals", name = %self.name, block = self.block, "add_block");
        self.block
    }

    pub fn reset_block(&mut self) {
        self.block = 0;
    }

    /// Fire periodic statuses: Poison drains health, Regen heals.
    pub fn process_turn_start(&mut self) -> SmallVec<[TickOutcome; 2]> {
        let ticks = self.statuses.process_turn_start();
        ticks
            .into_iter()
            .map(|tick| {
                let applied = match tick.kind {
                    StatusKind::Poison => self.lose_health(tick.amount),
                    StatusKind::Regen => self.heal(tick.amount),
                    _ => 0,
                };
                TickOutcome { tick, applied }
            })
            .collect()
    }

    /// Decay temporary statuses. Returns the kinds that expired.
    pub fn process_turn_end(&mut self) -> SmallVec<[StatusKind; 4]> {
        self.statuses.process_turn_end()
    }

    fn remove_health(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount).max(0);
        before - self.health
    }
}
