//! Card instances - runtime card state.
//!
//! A `CardInstance` is one copy of a card in the player's deck. It shares
//! its template with every other copy and carries its own adjusted cost
//! and exhausted flag. Instances survive between combats; `reset`
//! restores them to template state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CardId, CardTemplate};
use crate::effects::TargetRule;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    template: Arc<CardTemplate>,
    current_cost: i32,
    is_modified: bool,
    exhausted: bool,
}

impl CardInstance {
    #[must_use]
    pub fn new(template: Arc<CardTemplate>) -> Self {
        let current_cost = template.cost;
        Self { template, current_cost, is_modified: false, exhausted: false }
    }

    #[must_use]
    pub fn template(&self) -> &CardTemplate {
        &self.template
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.template.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.template.name
    }

    #[must_use]
    pub fn target(&self) -> TargetRule {
        self.template.target
    }

    /// Current cost before status penalties.
    #[must_use]
    pub fn cost(&self) -> i32 {
        self.current_cost
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Override the cost. Marks the instance modified if the cost changed.
    pub fn set_cost(&mut self, cost: i32) {
        let cost = cost.max(0);
        if self.current_cost != cost {
            self.current_cost = cost;
            self.is_modified = true;
        }
    }

    /// Mark the card to go to the exhaust pile after it resolves.
    pub fn exhaust(&mut self) {
        self.exhausted = true;
    }

    /// Restore template cost and clear runtime flags.
    pub fn reset(&mut self) {
        self.current_cost = self.template.cost;
        self.is_modified = false;
        self.exhausted = false;
    }

    /// Whether two instances share the same template allocation.
    #[must_use]
    pub fn shares_template(&self, other: &CardInstance) -> bool {
        Arc::ptr_eq(&self.template, &other.template)
    }
}
