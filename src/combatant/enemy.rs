//! Enemies and the intent they declare and carry out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Combatant, DamageReport, Player, Vitals};
use crate::core::GameRng;
use crate::intent::{EnemyIntent, IntentKind, IntentPlanner};
use crate::status::StatusKind;

/// What executing an intent actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Attacked(DamageReport),
    Defended { block: i32 },
    Buffed { kind: StatusKind, stacks: i32 },
    Debuffed { kind: StatusKind, stacks: i32 },
    Special,
}

/// An executed intent and its outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyActionReport {
    pub intent: EnemyIntent,
    pub outcome: ActionOutcome,
}

/// An enemy: vitals, a planner, and the currently declared intent.
#[derive(Clone, Debug)]
pub struct Enemy {
    vitals: Vitals,
    planner: Box<dyn IntentPlanner>,
    intent: Option<EnemyIntent>,
}

impl Enemy {
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: i32, planner: impl IntentPlanner + 'static) -> Self {
        Self { vitals: Vitals::new(name, max_health), planner: Box::new(planner), intent: None }
    }

    /// The declared intent, if any.
    #[must_use]
    pub fn intent(&self) -> Option<&EnemyIntent> {
        self.intent.as_ref()
    }

    #[must_use]
    pub fn planner(&self) -> &dyn IntentPlanner {
        self.planner.as_ref()
    }

    /// Ask the planner for the next action and store it, replacing any
    /// previous declaration.
    pub fn determine_next_action(
        &mut self,
        target: &Player,
        turn_number: u32,
        rng: &mut GameRng,
    ) -> &EnemyIntent {
        let intent = self.planner.determine_next_action(&self.vitals, target, turn_number, rng);
        debug!(
            target: "combat::enemy",
            enemy = self.vitals.name(),
            turn = turn_number,
            intent = %intent,
            "intent declared"
        );
        self.intent.insert(intent)
    }

    /// Drop the declared intent and the planner's pattern state.
    pub fn reset_intent(&mut self) {
        self.intent = None;
        self.planner.reset_intent();
    }

    /// Execute the declared intent against the player, then clear it.
    ///
    /// Returns `None` without side effects if nothing is declared or the
    /// enemy is dead. The declared magnitude already contains Strength;
    /// attacks only apply Weak here.
    pub fn execute_action(&mut self, target: &mut Player) -> Option<EnemyActionReport> {
        if self.vitals.is_dead() {
            self.intent = None;
            return None;
        }
        let intent = self.intent.take()?;

        let outcome = match intent.kind {
            IntentKind::Attack => {
                let damage = self.vitals.statuses().weaken(intent.value);
                ActionOutcome::Attacked(target.take_damage(damage))
            }
            IntentKind::Defend => {
                let block = self.vitals.statuses().modify_block(intent.value);
                self.vitals.add_block(block);
                ActionOutcome::Defended { block }
            }
            IntentKind::Buff(kind) => {
                self.vitals.statuses_mut().apply(kind, intent.value);
                ActionOutcome::Buffed { kind, stacks: intent.value }
            }
            IntentKind::Debuff(kind) => {
                target.statuses_mut().apply(kind, intent.value);
                ActionOutcome::Debuffed { kind, stacks: intent.value }
            }
            IntentKind::Special => ActionOutcome::Special,
        };

        debug!(target: "combat::enemy", enemy = self.vitals.name(), ?outcome, "intent executed");
        Some(EnemyActionReport { intent, outcome })
    }
}

impl Combatant for Enemy {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}
