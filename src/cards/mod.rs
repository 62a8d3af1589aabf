//! Card system: templates, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card templates
//! - `CardTemplate`: Immutable card data (cost, target rule, effects)
//! - `CardInstance`: One copy in a deck (adjusted cost, exhausted flag)
//! - `CardRegistry`: Template lookup and instantiation

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardId, CardRarity, CardTemplate, CardType, EffectList};
pub use instance::CardInstance;
pub use registry::CardRegistry;
