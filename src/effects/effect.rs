//! Effect definitions.
//!
//! Effects are declarative data on a card template. Each carries an
//! integer magnitude and is resolved against exactly one target per
//! invocation by the [`EffectResolver`](super::EffectResolver).

use serde::{Deserialize, Serialize};

use crate::status::StatusKind;

/// An atomic card effect.
///
/// ## Combatant Effects
///
/// Resolved against the chosen target (or the caster, for block):
/// - `Damage`: caster's outgoing modifiers, then the target's incoming ones
/// - `Block`: caster's block modifiers, always granted to the caster
/// - `Heal`: unmodified
/// - `ApplyStatus`: stacks added to the target's status table
///
/// ## Player Resource Effects
///
/// Routed to the caster's piles and energy pool; only the player owns these:
/// - `DrawCards`, `GainEnergy`, `Discard`
/// - `Exhaust`: `0` exhausts the card being played, `n > 0` exhausts the
///   first `n` cards of the hand
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    Damage(i32),
    Block(i32),
    Heal(i32),
    ApplyStatus { kind: StatusKind, stacks: i32 },
    DrawCards(i32),
    GainEnergy(i32),
    Discard(i32),
    Exhaust(i32),
}

impl Effect {
    /// Create an apply-status effect.
    pub fn status(kind: StatusKind, stacks: i32) -> Self {
        Self::ApplyStatus { kind, stacks }
    }

    /// Exhaust the card carrying this effect.
    pub fn exhaust_self() -> Self {
        Self::Exhaust(0)
    }

    /// The effect's magnitude.
    #[must_use]
    pub fn value(&self) -> i32 {
        match self {
            Effect::Damage(v)
            | Effect::Block(v)
            | Effect::Heal(v)
            | Effect::DrawCards(v)
            | Effect::GainEnergy(v)
            | Effect::Discard(v)
            | Effect::Exhaust(v) => *v,
            Effect::ApplyStatus { stacks, .. } => *stacks,
        }
    }

    /// Whether this effect touches the player's piles or energy.
    #[must_use]
    pub fn is_player_resource(&self) -> bool {
        matches!(
            self,
            Effect::DrawCards(_) | Effect::GainEnergy(_) | Effect::Discard(_) | Effect::Exhaust(_)
        )
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Damage(v) => write!(f, "Deal {} damage", v),
            Effect::Block(v) => write!(f, "Gain {} block", v),
            Effect::Heal(v) => write!(f, "Heal {}", v),
            Effect::ApplyStatus { kind, stacks } => write!(f, "Apply {} {}", stacks, kind),
            Effect::DrawCards(v) => write!(f, "Draw {}", v),
            Effect::GainEnergy(v) => write!(f, "Gain {} energy", v),
            Effect::Discard(v) => write!(f, "Discard {}", v),
            Effect::Exhaust(0) => write!(f, "Exhaust"),
            Effect::Exhaust(v) => write!(f, "Exhaust {}", v),
        }
    }
}
