//! Declared enemy actions.

use serde::{Deserialize, Serialize};

use crate::status::StatusKind;

/// What an enemy is going to do on its next action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    /// Deal `value` damage to the player.
    Attack,
    /// Gain `value` block.
    Defend,
    /// Apply `value` stacks of a status to itself.
    Buff(StatusKind),
    /// Apply `value` stacks of a status to the player.
    Debuff(StatusKind),
    /// Marker action with no numeric effect.
    Special,
}

/// An enemy's declared next action.
///
/// The magnitude is fixed when declared; executing the intent never
/// re-reads the enemy's Strength.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyIntent {
    pub kind: IntentKind,
    pub value: i32,
    /// Text shown to the player, e.g. "Attack 6".
    pub description: String,
}

impl EnemyIntent {
    #[must_use]
    pub fn attack(damage: i32) -> Self {
        let damage = damage.max(0);
        Self { kind: IntentKind::Attack, value: damage, description: format!("Attack {}", damage) }
    }

    #[must_use]
    pub fn defend(block: i32) -> Self {
        let block = block.max(0);
        Self { kind: IntentKind::Defend, value: block, description: format!("Block {}", block) }
    }

    #[must_use]
    pub fn buff(kind: StatusKind, stacks: i32) -> Self {
        let stacks = stacks.max(0);
        Self {
            kind: IntentKind::Buff(kind),
            value: stacks,
            description: format!("Gain {} {}", stacks, kind),
        }
    }

    #[must_use]
    pub fn debuff(kind: StatusKind, stacks: i32) -> Self {
        let stacks = stacks.max(0);
        Self {
            kind: IntentKind::Debuff(kind),
            value: stacks,
            description: format!("Apply {} {}", stacks, kind),
        }
    }

    #[must_use]
    pub fn special(description: impl Into<String>) -> Self {
        Self { kind: IntentKind::Special, value: 0, description: description.into() }
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.kind == IntentKind::Attack
    }
}

impl std::fmt::Display for EnemyIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        assert_eq!(EnemyIntent::attack(6).to_string(), "Attack 6");
        assert_eq!(EnemyIntent::defend(4).to_string(), "Block 4");
        assert_eq!(EnemyIntent::buff(StatusKind::Strength, 2).to_string(), "Gain 2 Strength");
        assert_eq!(EnemyIntent::debuff(StatusKind::Weak, 1).to_string(), "Apply 1 Weak");
    }

    #[test]
    fn test_negative_magnitude_clamped() {
        assert_eq!(EnemyIntent::attack(-3).value, 0);
        assert_eq!(EnemyIntent::defend(-1).value, 0);
    }

    #[test]
    fn test_special_has_no_value() {
        let intent = EnemyIntent::special("Idle");
        assert_eq!(intent.kind, IntentKind::Special);
        assert_eq!(intent.value, 0);
        assert!(!intent.is_attack());
    }
}
