//! Combatant identification.
//!
//! Every participant in an encounter is addressed by a `CombatantId`:
//! the single player, or an enemy by its position in the encounter.
//!
//! ## Usage
//!
//! ```
//! use card_combat::core::CombatantId;
//!
//! let player = CombatantId::Player;
//! let slime = CombatantId::Enemy(0);
//!
//! assert!(player.is_player());
//! assert_eq!(slime.as_enemy_index(), Some(0));
//! assert_eq!(player.as_enemy_index(), None);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for a participant in combat.
///
/// Enemy indices are fixed for the lifetime of an encounter: enemies are
/// never removed when they die, so an index always refers to the same enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CombatantId {
    /// The player.
    Player,
    /// An enemy, by encounter position (0-based).
    Enemy(usize),
}

impl CombatantId {
    /// Check if this id refers to the player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, CombatantId::Player)
    }

    /// Check if this id refers to an enemy.
    #[must_use]
    pub const fn is_enemy(self) -> bool {
        matches!(self, CombatantId::Enemy(_))
    }

    /// Convert to an enemy index if this is an enemy.
    #[must_use]
    pub const fn as_enemy_index(self) -> Option<usize> {
        match self {
            CombatantId::Enemy(index) => Some(index),
            CombatantId::Player => None,
        }
    }

    /// Iterate over enemy ids for an encounter with `enemy_count` enemies.
    pub fn enemies(enemy_count: usize) -> impl Iterator<Item = CombatantId> {
        (0..enemy_count).map(CombatantId::Enemy)
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatantId::Player => write!(f, "Player"),
            CombatantId::Enemy(index) => write!(f, "Enemy {}", index),
        }
    }
}
