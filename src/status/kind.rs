//! Status kinds and their fixed properties.

use serde::{Deserialize, Serialize};

/// Whether a status helps or hurts its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Buff,
    Debuff,
}

/// How a status loses stacks on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decay {
    /// Never decays; only removed explicitly.
    Permanent,
    /// Loses one stack at its owner's end of turn.
    EndOfTurn,
    /// Acts at its owner's turn start, then loses one stack.
    OnTick,
}

/// Every status a combatant can carry.
///
/// The declaration order is the processing order for turn-start and
/// turn-end passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusKind {
    /// Adds its stacks to outgoing damage.
    Strength,
    /// Adds its stacks to block gained from cards and actions.
    Dexterity,
    /// Outgoing damage is reduced by 25%.
    Weak,
    /// Incoming damage is increased by 50%.
    Vulnerable,
    /// Lose health equal to stacks at turn start.
    Poison,
    /// Heal by stacks at turn start.
    Regen,
    /// Block gained is reduced by 25%.
    Frail,
    /// Cards cost 1 more energy.
    Entangle,
}

impl StatusKind {
    /// All kinds in processing order.
    pub const ALL: [StatusKind; 8] = [
        StatusKind::Strength,
        StatusKind::Dexterity,
        StatusKind::Weak,
        StatusKind::Vulnerable,
        StatusKind::Poison,
        StatusKind::Regen,
        StatusKind::Frail,
        StatusKind::Entangle,
    ];

    #[must_use]
    pub const fn polarity(self) -> Polarity {
        match self {
            StatusKind::Strength | StatusKind::Dexterity | StatusKind::Regen => Polarity::Buff,
            StatusKind::Weak
            | StatusKind::Vulnerable
            | StatusKind::Poison
            | StatusKind::Frail
            | StatusKind::Entangle => Polarity::Debuff,
        }
    }

    #[must_use]
    pub const fn decay(self) -> Decay {
        match self {
            StatusKind::Strength | StatusKind::Dexterity => Decay::Permanent,
            StatusKind::Weak | StatusKind::Vulnerable | StatusKind::Frail | StatusKind::Entangle => {
                Decay::EndOfTurn
            }
            StatusKind::Poison | StatusKind::Regen => Decay::OnTick,
        }
    }

    /// Temporary kinds lose a stack at their owner's end of turn.
    #[must_use]
    pub const fn is_temporary(self) -> bool {
        matches!(self.decay(), Decay::EndOfTurn)
    }

    #[must_use]
    pub const fn is_buff(self) -> bool {
        matches!(self.polarity(), Polarity::Buff)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatusKind::Strength => "Strength",
            StatusKind::Dexterity => "Dexterity",
            StatusKind::Weak => "Weak",
            StatusKind::Vulnerable => "Vulnerable",
            StatusKind::Poison => "Poison",
            StatusKind::Regen => "Regen",
            StatusKind::Frail => "Frail",
            StatusKind::Entangle => "Entangle",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporary_kinds() {
        let temporary: Vec<_> = StatusKind::ALL.into_iter().filter(|k| k.is_temporary()).collect();
        assert_eq!(
            temporary,
            vec![StatusKind::Weak, StatusKind::Vulnerable, StatusKind::Frail, StatusKind::Entangle]
        );
    }

    #[test]
    fn test_polarity() {
        assert!(StatusKind::Strength.is_buff());
        assert!(StatusKind::Regen.is_buff());
        assert!(!StatusKind::Poison.is_buff());
        assert_eq!(StatusKind::Vulnerable.polarity(), Polarity::Debuff);
    }

    #[test]
    fn test_decay_rules() {
        assert_eq!(StatusKind::Strength.decay(), Decay::Permanent);
        assert_eq!(StatusKind::Dexterity.decay(), Decay::Permanent);
        assert_eq!(StatusKind::Poison.decay(), Decay::OnTick);
        assert_eq!(StatusKind::Frail.decay(), Decay::EndOfTurn);
    }
}
