//! Turn states and combat results.

use serde::{Deserialize, Serialize};

/// Phase of the combat state machine.
///
/// ```text
/// PlayerTurn --end_turn--> TurnEnd --> EnemyTurn --> PlayerTurn (turn += 1)
/// any --(player dead | all enemies dead)--> CombatEnd
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    PlayerTurn,
    /// Momentary: the player's end-of-turn processing.
    TurnEnd,
    /// Momentary: enemies are acting.
    EnemyTurn,
    /// Terminal.
    CombatEnd,
}

impl TurnState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == TurnState::CombatEnd
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnState::PlayerTurn => "player turn",
            TurnState::TurnEnd => "turn end",
            TurnState::EnemyTurn => "enemy turn",
            TurnState::CombatEnd => "combat end",
        };
        f.write_str(name)
    }
}

/// How a finished combat ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatResult {
    Victory,
    Defeat,
}
