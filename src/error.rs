//! Error types for game operations.

use thiserror::Error;

use crate::game::{Action, Phase};

/// A card was requested from an exhausted shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyShoeError;

/// An action was invoked outside the phase it is valid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {action} during {phase:?}")]
pub struct InvalidPhaseError {
    /// The rejected action.
    pub action: Action,
    /// The phase the game was in.
    pub phase: Phase,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game is not waiting for the player.
    #[error(transparent)]
    InvalidPhase(#[from] InvalidPhaseError),
    /// No cards left in the shoe.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
}
