//! Card piles: draw, hand, discard, exhaust.
//!
//! ## Key Types
//!
//! - `CardPiles`: The player's four piles and card movement between them
//! - `Pile`: Identifier for one pile
//! - `DrawReport`: How many cards a draw produced

pub mod piles;

pub use piles::{CardPiles, DrawReport, Pile};
