//! Per-combatant status storage and modifier math.
//!
//! ## Modifier order
//!
//! Additive modifiers are applied before multiplicative ones:
//!
//! - outgoing damage: `+ Strength`, then Weak (`* 3 / 4`)
//! - block: `+ Dexterity`, then Frail (`* 3 / 4`)
//! - incoming damage: Vulnerable (`* 3 / 2`)
//!
//! All division truncates toward zero. Weak, Vulnerable and Frail are flat
//! while present; their stack count only controls how long they last.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::{Decay, StatusKind};

/// Upper bound on the stacks of a single status. Additions saturate here.
pub const MAX_STACKS: i32 = 9_999;

/// A periodic status effect that fired at turn start.
///
/// The table only reports the tick; the owner applies it to itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTick {
    pub kind: StatusKind,
    /// Stacks at the moment the tick fired.
    pub amount: i32,
}

/// Mapping of status kind to stack count.
///
/// Invariant: every stored count is in `1..=MAX_STACKS`. Entries are
/// removed as soon as their count reaches zero.
///
/// ```
/// use card_combat::status::{StatusKind, StatusTable};
///
/// let mut statuses = StatusTable::new();
/// statuses.apply(StatusKind::Weak, 1);
///
/// // 8 * 3 / 4
/// assert_eq!(statuses.modify_outgoing_damage(8), 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTable {
    entries: BTreeMap<StatusKind, i32>,
}

impl StatusTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add stacks of a status, creating the entry if needed.
    ///
    /// Negative input is clamped to zero. Applying zero stacks never
    /// creates an entry. Returns the resulting stack count.
    pub fn apply(&mut self, kind: StatusKind, stacks: i32) -> i32 {
        let stacks = stacks.max(0);
        if stacks == 0 {
            return self.get_stacks(kind);
        }

        let entry = self.entries.entry(kind).or_insert(0);
        *entry = entry.saturating_add(stacks).min(MAX_STACKS);
        *entry
    }

    /// Remove stacks of a status.
    ///
    /// `stacks == 0` removes the entry regardless of its count. A positive
    /// count is subtracted and the entry is deleted if it drops to zero or
    /// below. Negative input removes nothing.
    pub fn remove(&mut self, kind: StatusKind, stacks: i32) {
        if stacks < 0 {
            return;
        }
        if stacks == 0 {
            self.entries.remove(&kind);
            return;
        }

        if let Some(current) = self.entries.get_mut(&kind) {
            *current -= stacks;
            if *current <= 0 {
                self.entries.remove(&kind);
            }
        }
    }

    /// Remove every status.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn get_stacks(&self, kind: StatusKind) -> i32 {
        self.entries.get(&kind).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Iterate over present statuses in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusKind, i32)> + '_ {
        self.entries.iter().map(|(kind, stacks)| (*kind, *stacks))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // === Modifiers ===

    /// Outgoing damage: Strength, then Weak.
    #[must_use]
    pub fn modify_outgoing_damage(&self, base: i32) -> i32 {
        self.weaken(self.add_strength(base))
    }

    /// Add Strength stacks to a base damage value.
    #[must_use]
    pub fn add_strength(&self, base: i32) -> i32 {
        base.max(0).saturating_add(self.get_stacks(StatusKind::Strength))
    }

    /// Apply the Weak reduction, if present.
    #[must_use]
    pub fn weaken(&self, damage: i32) -> i32 {
        let damage = damage.max(0);
        if self.has_status(StatusKind::Weak) {
            three_quarters(damage)
        } else {
            damage
        }
    }

    /// Incoming damage: Vulnerable.
    #[must_use]
    pub fn modify_incoming_damage(&self, base: i32) -> i32 {
        let damage = base.max(0);
        if self.has_status(StatusKind::Vulnerable) {
            let raised = i64::from(damage) * 3 / 2;
            i32::try_from(raised).unwrap_or(i32::MAX)
        } else {
            damage
        }
    }

    /// Block gained: Dexterity, then Frail.
    #[must_use]
    pub fn modify_block(&self, base: i32) -> i32 {
        let block = base.max(0).saturating_add(self.get_stacks(StatusKind::Dexterity));
        if self.has_status(StatusKind::Frail) {
            three_quarters(block)
        } else {
            block
        }
    }

    /// Extra energy every card costs while Entangle is present.
    #[must_use]
    pub fn cost_penalty(&self) -> i32 {
        i32::from(self.has_status(StatusKind::Entangle))
    }

    // === Turn processing ===

    /// Fire periodic statuses at the owner's turn start.
    ///
    /// Each ticking status reports its current stacks, then loses one stack.
    /// The caller applies the returned ticks to the owner in order.
    pub fn process_turn_start(&mut self) -> SmallVec<[StatusTick; 2]> {
        let mut ticks = SmallVec::new();

        self.entries.retain(|kind, stacks| {
            if kind.decay() != Decay::OnTick {
                return true;
            }
            ticks.push(StatusTick { kind: *kind, amount: *stacks });
            *stacks -= 1;
            *stacks > 0
        });

        ticks
    }

    /// Decay temporary statuses at the owner's end of turn.
    ///
    /// Every temporary kind loses exactly one stack; entries reaching zero
    /// are removed in the same pass. Returns the kinds that expired.
    pub fn process_turn_end(&mut self) -> SmallVec<[StatusKind; 4]> {
        let mut expired = SmallVec::new();

        self.entries.retain(|kind, stacks| {
            if !kind.is_temporary() {
                return true;
            }
            *stacks -= 1;
            if *stacks <= 0 {
                expired.push(*kind);
                false
            } else {
                true
            }
        });

        expired
    }
}

/// `value * 3 / 4` with truncation and no intermediate overflow.
fn three_quarters(value: i32) -> i32 {
    // Result is never larger than the input, so the cast back cannot fail.
    (i64::from(value) * 3 / 4) as i32
}
