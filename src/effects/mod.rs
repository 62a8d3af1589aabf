//! Effect system for card actions.
//!
//! - `Effect`: Tagged variant of every atomic card effect
//! - `TargetRule`: How a card picks the combatants its effects hit
//! - `EffectResolver`: Routes effects to the components that own them
//!
//! Effect dispatch is an exhaustive `match`, so adding an effect kind is
//! a compile-checked change to the resolver.

mod effect;
mod resolver;
mod targeting;

pub use effect::Effect;
pub use resolver::{EffectResolver, ResolveResult, ResolverContext};
pub use targeting::{TargetRule, Targets};
