//! # card-combat
//!
//! A turn-based card combat core: a player and one or more enemies trade
//! actions across discrete turns, mediated by health, block, energy,
//! card effects and stacking statuses.
//!
//! ## Design Principles
//!
//! 1. **Integer-Exact**: All health, block, energy and stack values are
//!    integers. Modifier math truncates toward zero, and the order
//!    (additive before multiplicative) is fixed.
//!
//! 2. **Deterministic**: Shuffles and enemy rolls come from seeded
//!    ChaCha8 streams. The same seed and the same inputs replay the same
//!    combat.
//!
//! 3. **Synchronous, Event-Returning**: Every operation runs to completion
//!    on the calling thread and returns the ordered list of events it
//!    produced. There are no callbacks.
//!
//! ## Modules
//!
//! - `core`: Combatant ids, RNG, configuration
//! - `status`: Status kinds and the per-combatant status table
//! - `combatant`: Player and enemy state behind the `Combatant` trait
//! - `cards`: Card templates, instances and the registry
//! - `zones`: Draw pile, hand, discard and exhaust piles
//! - `effects`: Effect variants, targeting, and the resolver
//! - `intent`: Enemy intents and planning strategies
//! - `engine`: The turn state machine
//! - `error`: Error taxonomy

pub mod core;
pub mod status;
pub mod combatant;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod intent;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{BlockExpiry, CombatConfig, CombatantId, GameRng, GameRngState};

pub use crate::status::{Decay, Polarity, StatusKind, StatusTable, StatusTick, MAX_STACKS};

pub use crate::combatant::{
    ActionOutcome, Combatant, DamageReport, Enemy, EnemyActionReport, Player, Roster,
    TickOutcome, Vitals,
};

pub use crate::cards::{CardId, CardInstance, CardRarity, CardRegistry, CardTemplate, CardType};

pub use crate::zones::{CardPiles, DrawReport, Pile};

pub use crate::effects::{Effect, EffectResolver, ResolveResult, ResolverContext, TargetRule, Targets};

pub use crate::intent::{
    EnemyIntent, IntentKind, IntentPlanner, PatternPlanner, PhasePlanner, WeightedPlanner,
};

pub use crate::engine::{CombatEvent, CombatResult, TurnEngine, TurnState};

pub use crate::error::{CombatError, ErrorKind, Result};
