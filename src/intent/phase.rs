//! Two-phase planner that switches at a health threshold.

use tracing::debug;

use super::{EnemyIntent, IntentPlanner};
use crate::combatant::{Player, Vitals};
use crate::core::GameRng;

/// Two-phase strategy.
///
/// Delegates to `opening` until the enemy's health falls to or below
/// `threshold_percent` of its maximum, then to `enraged` for the rest of
/// the combat. The switch latches until [`IntentPlanner::reset_intent`].
#[derive(Clone, Debug)]
pub struct PhasePlanner {
    opening: Box<dyn IntentPlanner>,
    enraged: Box<dyn IntentPlanner>,
    threshold_percent: i32,
    switched: bool,
}

impl PhasePlanner {
    #[must_use]
    pub fn new(
        opening: impl IntentPlanner + 'static,
        enraged: impl IntentPlanner + 'static,
        threshold_percent: i32,
    ) -> Self {
        Self {
            opening: Box::new(opening),
            enraged: Box::new(enraged),
            threshold_percent: threshold_percent.clamp(0, 100),
            switched: false,
        }
    }

    /// Whether the second phase has started.
    #[must_use]
    pub fn is_switched(&self) -> bool {
        self.switched
    }

    fn below_threshold(&self, enemy: &Vitals) -> bool {
        i64::from(enemy.health()) * 100 <= i64::from(enemy.max_health()) * i64::from(self.threshold_percent)
    }
}

impl IntentPlanner for PhasePlanner {
    fn determine_next_action(
        &mut self,
        enemy: &Vitals,
        target: &Player,
        turn_number: u32,
        rng: &mut GameRng,
    ) -> EnemyIntent {
        if !self.switched && self.below_threshold(enemy) {
            self.switched = true;
            debug!(target: "combat::intent", enemy = enemy.name(), health = enemy.health(), "phase switch");
        }

        if self.switched {
            self.enraged.determine_next_action(enemy, target, turn_number, rng)
        } else {
            self.opening.determine_next_action(enemy, target, turn_number, rng)
        }
    }

    fn reset_intent(&mut self) {
        self.opening.reset_intent();
        self.enraged.reset_intent();
        self.switched = false;
    }

    fn clone_box(&self) -> Box<dyn IntentPlanner> {
        Box::new(self.clone())
    }
}
