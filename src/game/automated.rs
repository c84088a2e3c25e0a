use crate::error::EmptyShoeError;
use crate::result::{HandOutcome, Settlement};

use super::{Game, Phase, Round, Seat, Stats};

/// Automated seats draw while their total is below this and stand on it or above.
pub const AUTOMATED_STAND_TOTAL: u8 = 17;

impl Round {
    /// Plays the dealer, bot 1 and bot 2 in turn with the fixed drawing policy.
    ///
    /// The policy does not look at any other hand.
    pub(super) fn play_automated(&mut self) -> Result<(), EmptyShoeError> {
        self.phase = Phase::AutomatedTurns;

        for seat in Seat::AUTOMATED {
            while self.hand(seat).total() < AUTOMATED_STAND_TOTAL {
                self.deal_to(seat)?;
            }
            log::debug!("{seat:?} stands on {}", self.hand(seat).total());
        }

        Ok(())
    }

    /// Settles every hand against the dealer and ends the round.
    pub(super) fn settle(&mut self, player_name: &str) -> Settlement {
        let settlement = Settlement::settle(
            player_name,
            self.dealer.total(),
            self.player.total(),
            self.bot1.total(),
            self.bot2.total(),
        );
        self.phase = Phase::RoundOver;
        self.settlement = Some(settlement.clone());
        settlement
    }
}

impl Stats {
    /// Counts a finished round. Only the human player's outcome is tracked.
    const fn record(&mut self, player: HandOutcome) {
        self.rounds_played += 1;
        match player {
            HandOutcome::Win => self.rounds_won += 1,
            HandOutcome::Lose => self.rounds_lost += 1,
            HandOutcome::Tie => {}
        }
    }
}

impl Game {
    /// Runs the automated turns on `round` and settles it.
    ///
    /// `round` is a working copy; nothing is committed if the shoe runs dry.
    pub(super) fn finish_round(&self, round: &mut Round) -> Result<Settlement, EmptyShoeError> {
        round.play_automated()?;
        Ok(round.settle(&self.options.player_name))
    }

    /// Adds a committed settlement to the cumulative stats.
    ///
    /// Called with the round still locked so no reader sees a finished round
    /// before it is counted.
    pub(super) fn record(&self, settlement: &Settlement) {
        self.stats.lock().record(settlement.player);
        log::info!("round over: {}", settlement.message);
    }
}
