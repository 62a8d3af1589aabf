//! The player's card piles and movement between them.
//!
//! `CardPiles` tracks the four places a card can be during combat:
//! - draw pile, ordered; the top card is the last element
//! - hand, ordered by draw; indices are what the controller plays by
//! - discard pile, reshuffled into the draw pile when it runs out
//! - exhaust pile, removed from play until the combat ends
//!
//! Piles are `im::Vector`s, so cloning a player (or the whole engine)
//! shares structure instead of copying every card.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::CardInstance;
use crate::core::GameRng;

/// Identifies one of the player's piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Draw,
    Hand,
    Discard,
    Exhaust,
}

/// Result of a draw request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReport {
    /// Cards that reached the hand.
    pub drawn: usize,
    /// The discard pile was shuffled into the draw pile along the way.
    pub reshuffled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPiles {
    draw: Vector<CardInstance>,
    hand: Vector<CardInstance>,
    discard: Vector<CardInstance>,
    exhaust: Vector<CardInstance>,
}

impl CardPiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a pile by identifier.
    #[must_use]
    pub fn pile(&self, pile: Pile) -> &Vector<CardInstance> {
        match pile {
            Pile::Draw => &self.draw,
            Pile::Hand => &self.hand,
            Pile::Discard => &self.discard,
            Pile::Exhaust => &self.exhaust,
        }
    }

    #[must_use]
    pub fn draw_pile(&self) -> &Vector<CardInstance> {
        &self.draw
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<CardInstance> {
        &self.hand
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<CardInstance> {
        &self.discard
    }

    #[must_use]
    pub fn exhaust_pile(&self) -> &Vector<CardInstance> {
        &self.exhaust
    }

    #[must_use]
    pub fn hand_card(&self, index: usize) -> Option<&CardInstance> {
        self.hand.get(index)
    }

    /// Number of cards across all piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw.len() + self.hand.len() + self.discard.len() + self.exhaust.len()
    }

    /// Put a card at the bottom of the draw pile.
    pub fn add_to_draw(&mut self, card: CardInstance) {
        self.draw.push_front(card);
    }

    /// Put a card directly into the hand.
    pub fn add_to_hand(&mut self, card: CardInstance) {
        self.hand.push_back(card);
    }

    /// Draw up to `count` cards from the top of the draw pile.
    ///
    /// When the draw pile is empty the discard pile is shuffled into it.
    /// Stops early once both are empty.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> DrawReport {
        let mut report = DrawReport::default();

        for _ in 0..count {
            if self.draw.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.reshuffle_discard(rng);
                report.reshuffled = true;
            }
            match self.draw.pop_back() {
                Some(card) => {
                    self.hand.push_back(card);
                    report.drawn += 1;
                }
                None => break,
            }
        }

        trace!(target: "combat::zones", drawn = report.drawn, reshuffled = report.reshuffled, "draw");
        report
    }

    /// Shuffle the discard pile into the draw pile.
    pub fn reshuffle_discard(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<CardInstance> = self.discard.iter().cloned().collect();
        cards.extend(self.draw.iter().cloned());
        rng.shuffle(&mut cards);
        self.discard.clear();
        self.draw = cards.into_iter().collect();
    }

    pub fn shuffle_draw(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<CardInstance> = self.draw.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.draw = cards.into_iter().collect();
    }

    /// Remove a card from the hand by index.
    pub fn take_from_hand(&mut self, index: usize) -> Option<CardInstance> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    pub fn discard(&mut self, card: CardInstance) {
        self.discard.push_back(card);
    }

    pub fn exhaust(&mut self, mut card: CardInstance) {
        card.exhaust();
        self.exhaust.push_back(card);
    }

    /// Send a resolved card to the exhaust pile if it was exhausted,
    /// otherwise to the discard pile.
    pub fn settle_played(&mut self, card: CardInstance) -> Pile {
        if card.is_exhausted() {
            self.exhaust.push_back(card);
            Pile::Exhaust
        } else {
            self.discard.push_back(card);
            Pile::Discard
        }
    }

    /// Move the whole hand to the discard pile. Returns the count moved.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        let hand = std::mem::take(&mut self.hand);
        self.discard.append(hand);
        count
    }

    /// Discard the first `count` cards of the hand.
    pub fn discard_from_hand(&mut self, count: usize) -> usize {
        let count = count.min(self.hand.len());
        let rest = self.hand.split_off(count);
        let taken = std::mem::replace(&mut self.hand, rest);
        self.discard.append(taken);
        count
    }

    /// Exhaust the first `count` cards of the hand.
    pub fn exhaust_from_hand(&mut self, count: usize) -> usize {
        let count = count.min(self.hand.len());
        let rest = self.hand.split_off(count);
        let taken = std::mem::replace(&mut self.hand, rest);
        for mut card in taken {
            card.exhaust();
            self.exhaust.push_back(card);
        }
        count
    }

    /// Gather every card back into the draw pile and reset its runtime
    /// state, ready for a new combat. Order is deck order, unshuffled.
    pub fn gather_all(&mut self) {
        let piles = [
            std::mem::take(&mut self.draw),
            std::mem::take(&mut self.hand),
            std::mem::take(&mut self.discard),
            std::mem::take(&mut self.exhaust),
        ];
        for mut card in piles.into_iter().flatten() {
            card.reset();
            self.draw.push_back(card);
        }
    }
}
