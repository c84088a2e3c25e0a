//! Round settlement.
//!
//! Every hand is compared with the dealer on its own; hands never compare
//! against each other. The dealer's verdict is folded from the per-hand
//! verdicts so the two can never disagree.

extern crate alloc;

use alloc::string::String;

use crate::hand::TWENTY_ONE;

/// Result of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Hand stayed at or under 21 and beat the dealer, or the dealer busted.
    Win,
    /// Hand matched the dealer without busting.
    Tie,
    /// Hand busted or fell short of the dealer.
    Lose,
}

impl HandOutcome {
    /// Compares a hand total with the dealer total.
    ///
    /// A busted hand always loses, even when the dealer busts too.
    ///
    /// ```
    /// use tablejack::HandOutcome;
    ///
    /// assert_eq!(HandOutcome::against(20, 19), HandOutcome::Win);
    /// assert_eq!(HandOutcome::against(19, 22), HandOutcome::Win);
    /// assert_eq!(HandOutcome::against(22, 23), HandOutcome::Lose);
    /// assert_eq!(HandOutcome::against(18, 18), HandOutcome::Tie);
    /// ```
    #[must_use]
    pub const fn against(total: u8, dealer_total: u8) -> Self {
        if total > TWENTY_ONE {
            Self::Lose
        } else if total > dealer_total || dealer_total > TWENTY_ONE {
            Self::Win
        } else if total == dealer_total {
            Self::Tie
        } else {
            Self::Lose
        }
    }
}

/// The dealer's result against the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerOutcome {
    /// No hand won or tied.
    Wins,
    /// Every hand tied.
    TiedWithAll,
    /// At least one hand won or tied, but not every hand tied.
    Loses,
}

impl DealerOutcome {
    /// Folds the per-hand outcomes into the dealer's verdict.
    #[must_use]
    pub fn from_hands(outcomes: &[HandOutcome]) -> Self {
        if !outcomes.is_empty() && outcomes.iter().all(|o| *o == HandOutcome::Tie) {
            Self::TiedWithAll
        } else if outcomes.iter().all(|o| *o == HandOutcome::Lose) {
            Self::Wins
        } else {
            Self::Loses
        }
    }
}

/// Final totals and verdicts for a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// The dealer's final total.
    pub dealer_total: u8,
    /// The human player's final total.
    pub player_total: u8,
    /// Bot 1's final total.
    pub bot1_total: u8,
    /// Bot 2's final total.
    pub bot2_total: u8,
    /// The human player's outcome.
    pub player: HandOutcome,
    /// Bot 1's outcome.
    pub bot1: HandOutcome,
    /// Bot 2's outcome.
    pub bot2: HandOutcome,
    /// The dealer's outcome against the table.
    pub dealer: DealerOutcome,
    /// Human-readable summary, e.g. `"Alice wins. Bot 1 loses. ..."`.
    pub message: String,
}

impl Settlement {
    /// Settles a round from the final totals.
    #[must_use]
    pub fn settle(
        player_name: &str,
        dealer_total: u8,
        player_total: u8,
        bot1_total: u8,
        bot2_total: u8,
    ) -> Self {
        let player = HandOutcome::against(player_total, dealer_total);
        let bot1 = HandOutcome::against(bot1_total, dealer_total);
        let bot2 = HandOutcome::against(bot2_total, dealer_total);
        let dealer = DealerOutcome::from_hands(&[player, bot1, bot2]);

        let mut message = String::new();
        for (name, outcome) in [(player_name, player), ("Bot 1", bot1), ("Bot 2", bot2)] {
            let verb = match outcome {
                HandOutcome::Win => "wins",
                HandOutcome::Tie => "has tied with the dealer",
                HandOutcome::Lose => "loses",
            };
            message.push_str(name);
            message.push(' ');
            message.push_str(verb);
            message.push_str(". ");
        }
        message.push_str(match dealer {
            DealerOutcome::Wins => "Dealer wins.",
            DealerOutcome::TiedWithAll => "Dealer has tied with all players.",
            DealerOutcome::Loses => "Dealer loses.",
        });

        Self {
            dealer_total,
            player_total,
            bot1_total,
            bot2_total,
            player,
            bot1,
            bot2,
            dealer,
            message,
        }
    }
}
