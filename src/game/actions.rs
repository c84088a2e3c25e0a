use crate::error::ActionError;
use crate::hand::TWENTY_ONE;

use super::{Action, Game, Seat, Snapshot};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// If the player reaches 21 or busts, the dealer and bots play out their
    /// hands and the round is settled before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the player's turn and
    /// [`ActionError::EmptyShoe`] if the shoe runs out. Either way the round is
    /// left as it was.
    pub fn player_hit(&self) -> Result<Snapshot, ActionError> {
        let mut round = self.round.lock();
        if let Err(err) = round.ensure_player_turn(Action::Hit) {
            log::warn!("rejected: {err}");
            return Err(err.into());
        }

        let mut next = round.clone();
        next.deal_to(Seat::Player)?;

        let settlement = if next.player.total() >= TWENTY_ONE {
            Some(self.finish_round(&mut next)?)
        } else {
            None
        };

        *round = next;
        if let Some(settlement) = &settlement {
            self.record(settlement);
        }
        let snapshot = self.snapshot_of(&round);
        drop(round);

        self.notify(&snapshot);
        Ok(snapshot)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer and bots play out their hands and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the player's turn and
    /// [`ActionError::EmptyShoe`] if an automated seat cannot draw. Either
    /// way the round is left as it was.
    pub fn player_stand(&self) -> Result<Snapshot, ActionError> {
        let mut round = self.round.lock();
        if let Err(err) = round.ensure_player_turn(Action::Stand) {
            log::warn!("rejected: {err}");
            return Err(err.into());
        }

        let mut next = round.clone();
        let settlement = self.finish_round(&mut next)?;

        *round = next;
        self.record(&settlement);
        let snapshot = self.snapshot_of(&round);
        drop(round);

        self.notify(&snapshot);
        Ok(snapshot)
    }
}
