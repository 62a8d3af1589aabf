//! Planner that rolls between attacking and defending.

use serde::{Deserialize, Serialize};

use super::{EnemyIntent, IntentPlanner};
use crate::combatant::{Player, Vitals};
use crate::core::GameRng;

/// Attack or defend based on a single probability roll.
///
/// The declared attack includes the enemy's Strength at decision time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedPlanner {
    pub attack_damage: i32,
    pub block_amount: i32,
    /// Probability in `[0, 1]` of declaring Attack.
    pub attack_chance: f64,
}

impl Default for WeightedPlanner {
    fn default() -> Self {
        Self { attack_damage: 6, block_amount: 4, attack_chance: 0.7 }
    }
}

impl WeightedPlanner {
    /// Create a planner. `attack_chance` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(attack_damage: i32, block_amount: i32, attack_chance: f64) -> Self {
        let attack_chance = if attack_chance.is_nan() { 0.0 } else { attack_chance.clamp(0.0, 1.0) };
        Self { attack_damage, block_amount, attack_chance }
    }

    /// Always attack.
    #[must_use]
    pub fn aggressive(attack_damage: i32) -> Self {
        Self::new(attack_damage, 0, 1.0)
    }

    /// Always defend.
    #[must_use]
    pub fn defensive(block_amount: i32) -> Self {
        Self::new(0, block_amount, 0.0)
    }
}

impl IntentPlanner for WeightedPlanner {
    fn determine_next_action(
        &mut self,
        enemy: &Vitals,
        _target: &Player,
        _turn_number: u32,
        rng: &mut GameRng,
    ) -> EnemyIntent {
        if rng.gen_unit() < self.attack_chance {
            EnemyIntent::attack(enemy.statuses().add_strength(self.attack_damage))
        } else {
            EnemyIntent::defend(self.block_amount)
        }
    }

    fn clone_box(&self) -> Box<dyn IntentPlanner> {
        Box::new(self.clone())
    }
}
