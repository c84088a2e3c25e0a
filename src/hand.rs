//! Hand accounting with soft-ace handling.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The best total a hand can hold without busting.
pub const TWENTY_ONE: u8 = 21;

/// The cards held by one seat at the table.
///
/// The total is kept up to date on every [`Hand::add_card`]. Aces enter the
/// total at 11 and stay there until [`Hand::reduce_soft_ace`] revalues them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Running total.
    total: u8,
    /// Aces still counted as 11.
    soft_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card to the hand.
    ///
    /// The total is not reduced here; a hand can sit above 21 until
    /// [`Hand::reduce_soft_ace`] is called.
    pub fn add_card(&mut self, card: Card) {
        self.total = self.total.saturating_add(card.value());
        if card.is_ace() {
            self.soft_aces += 1;
        }
        self.cards.push(card);
    }

    /// Revalues soft aces from 11 to 1, one at a time, until the hand is at or
    /// below 21 or no soft aces remain. Returns the resulting total.
    ///
    /// ```
    /// use tablejack::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Ace));
    /// assert_eq!(hand.total(), 22);
    /// assert_eq!(hand.reduce_soft_ace(), 12);
    /// assert_eq!(hand.soft_ace_count(), 1);
    /// ```
    pub fn reduce_soft_ace(&mut self) -> u8 {
        while self.total > TWENTY_ONE && self.soft_aces > 0 {
            self.total -= 10;
            self.soft_aces -= 1;
        }
        self.total
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns how many aces are still counted as 11.
    #[must_use]
    pub const fn soft_ace_count(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand has gone over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > TWENTY_ONE
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
