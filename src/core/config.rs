//! Combat configuration.
//!
//! Numeric defaults are illustrative, not balancing data.

use serde::{Deserialize, Serialize};

/// When the player's block is cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockExpiry {
    /// Block is cleared as soon as the player ends their turn, before
    /// enemies act.
    #[default]
    PlayerTurnEnd,
    /// Block persists through the enemy phase and is cleared when the
    /// next player turn begins.
    OwnerTurnStart,
}

/// Combat configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Seed for shuffling and enemy decisions.
    /// Same seed and same inputs produce the same combat.
    pub seed: u64,

    /// Cards drawn for the opening hand and at each player turn start.
    pub draw_per_turn: usize,

    /// When the player's block is cleared.
    pub block_expiry: BlockExpiry,

    /// Move the remaining hand to the discard pile when the player ends
    /// their turn.
    pub discard_hand_at_turn_end: bool,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            draw_per_turn: 5,
            block_expiry: BlockExpiry::default(),
            discard_hand_at_turn_end: true,
        }
    }
}

impl CombatConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of cards drawn per turn.
    #[must_use]
    pub fn with_draw_per_turn(mut self, count: usize) -> Self {
        self.draw_per_turn = count;
        self
    }

    /// Set when player block expires.
    #[must_use]
    pub fn with_block_expiry(mut self, expiry: BlockExpiry) -> Self {
        self.block_expiry = expiry;
        self
    }

    /// Keep or discard the hand at end of turn.
    #[must_use]
    pub fn with_discard_hand(mut self, discard: bool) -> Self {
        self.discard_hand_at_turn_end = discard;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CombatConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.draw_per_turn, 5);
        assert_eq!(config.block_expiry, BlockExpiry::PlayerTurnEnd);
        assert!(config.discard_hand_at_turn_end);
    }

    #[test]
    fn test_builder() {
        let config = CombatConfig::default()
            .with_seed(7)
            .with_draw_per_turn(0)
            .with_block_expiry(BlockExpiry::OwnerTurnStart)
            .with_discard_hand(false);

        assert_eq!(config.seed, 7);
        assert_eq!(config.draw_per_turn, 0);
        assert_eq!(config.block_expiry, BlockExpiry::OwnerTurnStart);
        assert!(!config.discard_hand_at_turn_end);
    }

    #[test]
    fn test_config_serde() {
        let config = CombatConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CombatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
