//! Card registry for template lookup.
//!
//! The `CardRegistry` stores the card templates supplied by the embedder
//! and hands out shared references, so every instance of a card points
//! at the same template allocation.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardId, CardTemplate, CardType};
use super::instance::CardInstance;

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use card_combat::cards::{CardId, CardRegistry, CardTemplate};
/// use card_combat::effects::Effect;
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardTemplate::new(CardId::new(1), "Strike", 1).with_effect(Effect::Damage(6)));
///
/// let strike = registry.instantiate(CardId::new(1)).unwrap();
/// assert_eq!(strike.name(), "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardTemplate>>,
}

impl CardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template.
    ///
    /// Returns `false` and keeps the existing template if the ID is taken.
    pub fn register(&mut self, card: CardTemplate) -> bool {
        if self.cards.contains_key(&card.id) {
            return false;
        }
        self.cards.insert(card.id, Arc::new(card));
        true
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardTemplate>> {
        self.cards.get(&id)
    }

    /// Create a fresh instance of a registered card.
    #[must_use]
    pub fn instantiate(&self, id: CardId) -> Option<CardInstance> {
        self.get(id).map(|template| CardInstance::new(Arc::clone(template)))
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.cards.values().map(AsRef::as_ref)
    }

    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardTemplate> {
        self.iter().filter(move |c| c.card_type == card_type)
    }
}
