//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card: name, cost,
//! target rule and the ordered effect list. For example, "Strike" costs 1
//! and deals 6 damage to a single enemy.
//!
//! Runtime data (adjusted cost, exhausted flag) is stored separately in
//! `CardInstance`, and many instances share one template.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::{Effect, TargetRule};

/// Unique identifier for a card template.
///
/// This identifies the "type" of card (e.g., "Strike"), not a specific
/// copy in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    #[default]
    Attack,
    Skill,
    Power,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardRarity {
    #[default]
    Basic,
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Effect list of a template. Most cards carry one or two effects.
pub type EffectList = SmallVec<[Effect; 4]>;

/// Static card template.
///
/// An empty effect list is a legal card that does nothing when played.
///
/// ## Example
///
/// ```
/// use card_combat::cards::{CardId, CardTemplate, CardType};
/// use card_combat::effects::{Effect, TargetRule};
///
/// let bash = CardTemplate::new(CardId::new(3), "Bash", 2)
///     .with_type(CardType::Attack)
///     .with_target(TargetRule::SingleEnemy)
///     .with_effect(Effect::Damage(8))
///     .with_effect(Effect::status(card_combat::status::StatusKind::Vulnerable, 2));
///
/// assert_eq!(bash.effects.len(), 2);
/// assert_eq!(bash.cost, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub id: CardId,
    pub name: String,
    pub description: String,
    /// Base energy cost.
    pub cost: i32,
    pub card_type: CardType,
    pub rarity: CardRarity,
    pub target: TargetRule,
    /// Resolved in order when the card is played.
    pub effects: EffectList,
}

impl CardTemplate {
    /// Create a template with no effects that targets its player.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, cost: i32) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            cost: cost.max(0),
            card_type: CardType::default(),
            rarity: CardRarity::default(),
            target: TargetRule::default(),
            effects: EffectList::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, card_type: CardType) -> Self {
        self.card_type = card_type;
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: CardRarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetRule) -> Self {
        self.target = target;
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Text built from the effect list, for templates without a description.
    #[must_use]
    pub fn effect_text(&self) -> String {
        self.effects
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(". ")
    }
}
