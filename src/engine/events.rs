//! Combat notifications.
//!
//! Every state-changing step produces one `CombatEvent`. Mutating engine
//! calls return the events they produced in order, one per step (enemy
//! actions are reported individually, never batched). Observers such as
//! relic hooks or a UI consume these instead of registering callbacks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::state::{CombatResult, TurnState};
use crate::combatant::ActionOutcome;
use crate::core::CombatantId;
use crate::intent::EnemyIntent;
use crate::status::StatusKind;
use crate::zones::Pile;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    CombatStarted {
        enemies: usize,
    },
    StateChanged {
        from: TurnState,
        to: TurnState,
    },
    TurnStarted {
        turn: u32,
    },
    TurnEnded {
        turn: u32,
    },
    CardPlayed {
        card: String,
        cost: i32,
        target: Option<CombatantId>,
    },
    /// A played card finished resolving and left the hand.
    CardSettled {
        card: String,
        pile: Pile,
    },
    CardsDrawn {
        count: usize,
        reshuffled: bool,
    },
    CardsDiscarded {
        count: usize,
    },
    CardsExhausted {
        count: usize,
    },
    EnergyGained {
        amount: i32,
        energy: i32,
    },
    Damage {
        source: CombatantId,
        target: CombatantId,
        amount: i32,
        blocked: i32,
        health_lost: i32,
    },
    BlockGained {
        target: CombatantId,
        amount: i32,
        total: i32,
    },
    Healed {
        target: CombatantId,
        amount: i32,
    },
    StatusApplied {
        target: CombatantId,
        kind: StatusKind,
        stacks: i32,
        total: i32,
    },
    /// Poison or Regen fired at turn start.
    StatusTicked {
        target: CombatantId,
        kind: StatusKind,
        amount: i32,
    },
    StatusExpired {
        target: CombatantId,
        kind: StatusKind,
    },
    IntentDeclared {
        enemy: CombatantId,
        intent: EnemyIntent,
    },
    EnemyActed {
        enemy: CombatantId,
        intent: EnemyIntent,
        outcome: ActionOutcome,
    },
    Died {
        target: CombatantId,
    },
    CombatEnded {
        result: CombatResult,
    },
}

impl CombatEvent {
    /// Short name of the event, as used in the serialized tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CombatEvent::CombatStarted { .. } => "combat_started",
            CombatEvent::StateChanged { .. } => "state_changed",
            CombatEvent::TurnStarted { .. } => "turn_started",
            CombatEvent::TurnEnded { .. } => "turn_ended",
            CombatEvent::CardPlayed { .. } => "card_played",
            CombatEvent::CardSettled { .. } => "card_settled",
            CombatEvent::CardsDrawn { .. } => "cards_drawn",
            CombatEvent::CardsDiscarded { .. } => "cards_discarded",
            CombatEvent::CardsExhausted { .. } => "cards_exhausted",
            CombatEvent::EnergyGained { .. } => "energy_gained",
            CombatEvent::Damage { .. } => "damage",
            CombatEvent::BlockGained { .. } => "block_gained",
            CombatEvent::Healed { .. } => "healed",
            CombatEvent::StatusApplied { .. } => "status_applied",
            CombatEvent::StatusTicked { .. } => "status_ticked",
            CombatEvent::StatusExpired { .. } => "status_expired",
            CombatEvent::IntentDeclared { .. } => "intent_declared",
            CombatEvent::EnemyActed { .. } => "enemy_acted",
            CombatEvent::Died { .. } => "died",
            CombatEvent::CombatEnded { .. } => "combat_ended",
        }
    }

    /// Write the event to the `combat::engine` debug log.
    pub(crate) fn log(&self) {
        debug!(target: "combat::engine", event = self.name(), "{:?}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_serialization() {
        let event = CombatEvent::Damage {
            source: CombatantId::Player,
            target: CombatantId::Enemy(0),
            amount: 6,
            blocked: 0,
            health_lost: 6,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "damage");
        assert_eq!(json["amount"], 6);

        let back: CombatEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_name_matches_tag() {
        let events = [
            CombatEvent::TurnStarted { turn: 2 },
            CombatEvent::CombatEnded { result: CombatResult::Victory },
            CombatEvent::StateChanged { from: TurnState::PlayerTurn, to: TurnState::TurnEnd },
        ];
        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["event"], event.name());
        }
    }
}
