//! A blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one dealer, one human player
//! and two automated hands from a shared multi-deck [`Shoe`]: the deal, the
//! player's hit/stand decisions, the automated turns and the settlement.
//! Front-ends read the table through [`Snapshot`] and can subscribe to be
//! told after every change.
//!
//! # Example
//!
//! ```
//! use tablejack::{Game, GameOptions, Phase};
//!
//! let game = Game::new(GameOptions::default().with_player_name("Alice"), 42);
//! game.start_round().unwrap();
//! let snapshot = game.player_stand().unwrap();
//! assert_eq!(snapshot.phase, Phase::RoundOver);
//! assert!(snapshot.settlement.unwrap().message.starts_with("Alice"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, EmptyShoeError, InvalidPhaseError};
pub use game::{
    AUTOMATED_STAND_TOTAL, Action, CardView, Game, HandView, Phase, Seat, Snapshot, Stats,
    SubscriptionId,
};
pub use hand::{Hand, TWENTY_ONE};
pub use options::GameOptions;
pub use result::{DealerOutcome, HandOutcome, Settlement};
pub use shoe::Shoe;
