//! The player: energy, card piles and per-combat setup.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Combatant, Vitals};
use crate::cards::CardInstance;
use crate::core::GameRng;
use crate::zones::CardPiles;

/// The player: vitals plus an energy pool and card piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    vitals: Vitals,
    max_energy: i32,
    energy: i32,
    piles: CardPiles,
}

impl Player {
    /// Create a player at full health and full energy with no cards.
    #[must_use]
    pub fn new(max_health: i32, max_energy: i32) -> Self {
        let max_energy = max_energy.max(0);
        Self {
            vitals: Vitals::new("Player", max_health),
            max_energy,
            energy: max_energy,
            piles: CardPiles::new(),
        }
    }

    /// Rename the player. Intended for construction, it rebuilds vitals.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.vitals = Vitals::new(name, self.vitals.max_health());
        self
    }

    /// Add cards to the run-level deck (bottom of the draw pile).
    #[must_use]
    pub fn with_deck(mut self, cards: impl IntoIterator<Item = CardInstance>) -> Self {
        for card in cards {
            self.add_to_deck(card);
        }
        self
    }

    #[must_use]
    pub fn energy(&self) -> i32 {
        self.energy
    }

    #[must_use]
    pub fn max_energy(&self) -> i32 {
        self.max_energy
    }

    /// Refill energy to max. Called at the start of every player turn.
    pub fn reset_energy(&mut self) {
        self.energy = self.max_energy;
    }

    /// Spend energy if enough is available.
    ///
    /// This is the only gate on playing a card; on failure nothing changes.
    pub fn try_spend_energy(&mut self, cost: i32) -> bool {
        let cost = cost.max(0);
        if self.energy < cost {
            return false;
        }
        self.energy -= cost;
        trace!(target: "combat::player", cost, energy = self.energy, "spend energy");
        true
    }

    /// Gain energy. May exceed max until the next refill.
    /// Returns the new energy total.
    pub fn gain_energy(&mut self, amount: i32) -> i32 {
        self.energy = self.energy.saturating_add(amount.max(0));
        self.energy
    }

    /// What a card costs right now, including Entangle.
    #[must_use]
    pub fn effective_cost(&self, card: &CardInstance) -> i32 {
        card.cost().saturating_add(self.vitals.statuses().cost_penalty())
    }

    #[must_use]
    pub fn piles(&self) -> &CardPiles {
        &self.piles
    }

    pub fn piles_mut(&mut self) -> &mut CardPiles {
        &mut self.piles
    }

    pub fn add_to_deck(&mut self, card: CardInstance) {
        self.piles.add_to_draw(card);
    }

    /// Every card the player owns, wherever it currently is.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.piles.total()
    }

    /// Reset combat-scoped state before a new encounter.
    ///
    /// Health carries over. Block, statuses and energy are reset, every
    /// card returns to a freshly shuffled draw pile with its runtime state
    /// cleared.
    pub fn prepare_for_combat(&mut self, rng: &mut GameRng) {
        self.vitals.reset_block();
        self.vitals.statuses_mut().clear();
        self.reset_energy();
        self.piles.gather_all();
        self.piles.shuffle_draw(rng);
    }
}

impl Combatant for Player {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}
