//! Planner that cycles through a fixed script of intents.

use super::{EnemyIntent, IntentKind, IntentPlanner};
use crate::combatant::{Player, Vitals};
use crate::core::GameRng;

/// Cycle through a fixed sequence of intents.
///
/// Attack steps add the enemy's Strength when declared. An empty pattern
/// declares a Special "Idle" action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternPlanner {
    steps: Vec<EnemyIntent>,
    cursor: usize,
}

impl PatternPlanner {
    #[must_use]
    pub fn new(steps: Vec<EnemyIntent>) -> Self {
        Self { steps, cursor: 0 }
    }

    /// Append a step (builder pattern).
    #[must_use]
    pub fn then(mut self, step: EnemyIntent) -> Self {
        self.steps.push(step);
        self
    }

    /// Index of the step the next decision will use.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl IntentPlanner for PatternPlanner {
    fn determine_next_action(
        &mut self,
        enemy: &Vitals,
        _target: &Player,
        _turn_number: u32,
        _rng: &mut GameRng,
    ) -> EnemyIntent {
        let Some(step) = self.steps.get(self.cursor) else {
            return EnemyIntent::special("Idle");
        };
        self.cursor = (self.cursor + 1) % self.steps.len();

        match step.kind {
            IntentKind::Attack => EnemyIntent::attack(enemy.statuses().add_strength(step.value)),
            _ => step.clone(),
        }
    }

    fn reset_intent(&mut self) {
        self.cursor = 0;
    }

    fn clone_box(&self) -> Box<dyn IntentPlanner> {
        Box::new(self.clone())
    }
}
