//! Read-only views of the table handed to front-ends.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::Settlement;

use super::{Phase, Round, Stats};

/// A card as a player sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardView {
    /// The card is visible.
    FaceUp(Card),
    /// The dealer's hole card before the round is over.
    FaceDown,
}

impl CardView {
    /// Returns the card if it is face up.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::FaceUp(card) => Some(*card),
            Self::FaceDown => None,
        }
    }
}

/// One seat's hand as a player sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in deal order.
    pub cards: Vec<CardView>,
    /// Total of the visible cards.
    pub total: u8,
}

impl HandView {
    fn open(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(CardView::FaceUp).collect(),
            total: hand.total(),
        }
    }

    /// Hides the hole card and counts only the cards after it.
    fn hole_down(hand: &Hand) -> Self {
        let mut visible = Hand::new();
        let mut cards = Vec::with_capacity(hand.len());

        for (index, card) in hand.cards().iter().enumerate() {
            if index == 0 {
                cards.push(CardView::FaceDown);
            } else {
                visible.add_card(*card);
                cards.push(CardView::FaceUp(*card));
            }
        }

        Self {
            cards,
            total: visible.reduce_soft_ace(),
        }
    }
}

/// Everything a front-end needs to draw the table.
///
/// Until the round is over the dealer's hole card is face down, the dealer
/// total covers only the face-up cards, and `settlement` and `stats` are
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// The dealer's hand.
    pub dealer: HandView,
    /// The human player's hand.
    pub player: HandView,
    /// Bot 1's hand.
    pub bot1: HandView,
    /// Bot 2's hand.
    pub bot2: HandView,
    /// Cards left in the shoe.
    pub cards_remaining: usize,
    /// Round result, once the round is over.
    pub settlement: Option<Settlement>,
    /// Cumulative counters, once the round is over.
    pub stats: Option<Stats>,
}

impl Snapshot {
    pub(super) fn of(round: &Round, stats: Option<Stats>) -> Self {
        let over = round.phase == Phase::RoundOver;
        let dealer = if over {
            HandView::open(&round.dealer)
        } else {
            HandView::hole_down(&round.dealer)
        };

        Self {
            phase: round.phase,
            dealer,
            player: HandView::open(&round.player),
            bot1: HandView::open(&round.bot1),
            bot2: HandView::open(&round.bot2),
            cards_remaining: round.shoe.len(),
            settlement: if over { round.settlement.clone() } else { None },
            stats: if over { stats } else { None },
        }
    }
}
