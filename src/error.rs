//! Error types for the combat core.
//!
//! Errors fall into two groups (see [`ErrorKind`]):
//!
//! - **Invalid operations** are ordinary gameplay refusals (not enough
//!   energy, wrong phase, dead target). State is never mutated.
//! - **Structural violations** mean the embedder is misusing the core
//!   (acting after combat ended, addressing a combatant that is not part
//!   of the encounter). They are hard failures that callers should treat
//!   as bugs.

use thiserror::Error;

use crate::core::CombatantId;
use crate::engine::TurnState;

/// Classification of a [`CombatError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Gameplay-level refusal; no state changed.
    InvalidOperation,
    /// Programming error in the caller.
    Structural,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CombatError {
    #[error("not enough energy: card costs {required}, {available} available")]
    NotEnoughEnergy { required: i32, available: i32 },

    #[error("operation requires the player turn, current state is {0}")]
    NotPlayerTurn(TurnState),

    #[error("combat has not been started")]
    NotStarted,

    #[error("combat was already started")]
    AlreadyStarted,

    #[error("no card at hand index {index} (hand size {hand_size})")]
    CardNotInHand { index: usize, hand_size: usize },

    #[error("target {0} is already dead")]
    TargetDead(CombatantId),

    #[error("card targets {rule}, got {target}")]
    InvalidTarget { rule: &'static str, target: CombatantId },

    #[error("combat is over")]
    CombatOver,

    #[error("{0} is not part of this encounter")]
    UnknownCombatant(CombatantId),

    #[error("{0} does not own {1}")]
    NoSuchResource(CombatantId, &'static str),
}

impl CombatError {
    /// Whether this error is a gameplay refusal or a caller bug.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CombatError::CombatOver
            | CombatError::UnknownCombatant(_)
            | CombatError::NoSuchResource(..) => ErrorKind::Structural,
            _ => ErrorKind::InvalidOperation,
        }
    }

    #[must_use]
    pub fn is_structural(&self) -> bool {
        self.kind() == ErrorKind::Structural
    }
}

pub type Result<T> = std::result::Result<T, CombatError>;
