//! Enemy intent planning.
//!
//! Each enemy owns an [`IntentPlanner`] that reads the current combat
//! state and returns the enemy's next [`EnemyIntent`]. Planners never
//! mutate combatants; the enemy stores the returned intent and executes
//! it once during the enemy phase.
//!
//! ## Shipped strategies
//!
//! - [`WeightedPlanner`]: one uniform roll, Attack below a threshold,
//!   Defend otherwise
//! - [`PatternPlanner`]: a fixed cycle of intents
//! - [`PhasePlanner`]: switches strategy once health drops below a
//!   percentage

mod declared;
mod pattern;
mod phase;
mod weighted;

pub use declared::{EnemyIntent, IntentKind};
pub use pattern::PatternPlanner;
pub use phase::PhasePlanner;
pub use weighted::WeightedPlanner;

use crate::combatant::{Player, Vitals};
use crate::core::GameRng;

/// Strategy producing an enemy's next declared action.
pub trait IntentPlanner: std::fmt::Debug + Send {
    /// Decide the next action.
    ///
    /// `enemy` is the deciding enemy's own state, `target` the player.
    fn determine_next_action(
        &mut self,
        enemy: &Vitals,
        target: &Player,
        turn_number: u32,
        rng: &mut GameRng,
    ) -> EnemyIntent;

    /// Clear internal pattern state. Stateless planners do nothing.
    fn reset_intent(&mut self) {}

    /// Clone into a new boxed planner.
    fn clone_box(&self) -> Box<dyn IntentPlanner>;
}

impl Clone for Box<dyn IntentPlanner> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
