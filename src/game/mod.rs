//! Game engine and state management.

use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::sync::Arc;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::{EmptyShoeError, InvalidPhaseError};
use crate::hand::{Hand, TWENTY_ONE};
use crate::options::GameOptions;
use crate::result::Settlement;
use crate::shoe::Shoe;

mod actions;
mod automated;
pub mod snapshot;
pub mod state;

pub use automated::AUTOMATED_STAND_TOTAL;
pub use snapshot::{CardView, HandView, Snapshot};
pub use state::{Action, Phase, Seat, Stats};

type Listener = Arc<dyn Fn(&Snapshot) + Send + Sync>;

/// Handle returned by [`Game::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Everything that belongs to a single round.
#[derive(Debug, Clone)]
struct Round {
    phase: Phase,
    shoe: Shoe,
    dealer: Hand,
    player: Hand,
    bot1: Hand,
    bot2: Hand,
    /// The dealer's first card, face down until the round is over.
    hole_card: Option<Card>,
    settlement: Option<Settlement>,
}

impl Round {
    fn new(shoe: Shoe) -> Self {
        Self {
            phase: Phase::Waiting,
            shoe,
            dealer: Hand::new(),
            player: Hand::new(),
            bot1: Hand::new(),
            bot2: Hand::new(),
            hole_card: None,
            settlement: None,
        }
    }

    const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Dealer => &self.dealer,
            Seat::Player => &self.player,
            Seat::Bot1 => &self.bot1,
            Seat::Bot2 => &self.bot2,
        }
    }

    const fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Dealer => &mut self.dealer,
            Seat::Player => &mut self.player,
            Seat::Bot1 => &mut self.bot1,
            Seat::Bot2 => &mut self.bot2,
        }
    }

    /// Puts the top card into `seat` as dealt, without revaluing aces.
    fn place(&mut self, seat: Seat) -> Result<Card, EmptyShoeError> {
        let card = self.shoe.draw()?;
        self.hand_mut(seat).add_card(card);
        Ok(card)
    }

    /// Draws one card into `seat`, revaluing soft aces if it went over 21.
    fn deal_to(&mut self, seat: Seat) -> Result<Card, EmptyShoeError> {
        let card = self.place(seat)?;
        let hand = self.hand_mut(seat);
        if hand.total() > TWENTY_ONE {
            hand.reduce_soft_ace();
        }
        log::debug!("{seat:?} draws {card}, total {}", hand.total());
        Ok(card)
    }

    /// Hole card and up card to the dealer, then two passes over the other seats.
    ///
    /// Dealt cards keep their face value: a pair of aces stays at 22 until
    /// the hand draws.
    fn deal_initial(&mut self) -> Result<(), EmptyShoeError> {
        self.phase = Phase::Dealing;

        let hole = self.place(Seat::Dealer)?;
        self.hole_card = Some(hole);
        self.place(Seat::Dealer)?;

        for _ in 0..2 {
            for seat in [Seat::Player, Seat::Bot1, Seat::Bot2] {
                self.place(seat)?;
            }
        }
        log::debug!(
            "dealt: dealer {}, player {}, bot 1 {}, bot 2 {}",
            self.dealer.total(),
            self.player.total(),
            self.bot1.total(),
            self.bot2.total()
        );

        self.phase = Phase::PlayerTurn;
        Ok(())
    }

    fn ensure_player_turn(&self, action: Action) -> Result<(), InvalidPhaseError> {
        if self.phase == Phase::PlayerTurn {
            Ok(())
        } else {
            Err(InvalidPhaseError {
                action,
                phase: self.phase,
            })
        }
    }
}

/// A blackjack table: one dealer, one human player and two automated hands.
///
/// The game owns the shoe, the four hands and the cumulative [`Stats`]. Each
/// round is dealt from a fresh shoe built according to [`GameOptions`].
///
/// Every mutating call works on a copy of the round and commits it only when
/// the whole action succeeded, so a failed call leaves the table as it was.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current round.
    round: Mutex<Round>,
    /// Counters that outlive individual rounds.
    stats: Mutex<Stats>,
    /// Change listeners.
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    /// Next subscription ID to assign.
    next_listener: AtomicUsize,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// No cards are dealt until [`Game::start_round`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Waiting);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            round: Mutex::new(Round::new(Shoe::default())),
            stats: Mutex::new(Stats::default()),
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicUsize::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Starts a new round from a freshly built and shuffled shoe.
    ///
    /// Valid in any phase. Cumulative stats are kept.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if the shoe runs out while dealing, which
    /// only happens when the game is configured with zero decks.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// let snapshot = game.start_round().unwrap();
    /// assert_eq!(snapshot.phase, Phase::PlayerTurn);
    /// assert_eq!(snapshot.player.cards.len(), 2);
    /// ```
    pub fn start_round(&self) -> Result<Snapshot, EmptyShoeError> {
        let shoe = Shoe::new(self.options.decks, &mut *self.rng.lock());
        self.start_round_with(shoe)
    }

    /// Starts a new round dealt from `shoe` instead of a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if `shoe` cannot cover the initial deal. The
    /// previous round is left in place.
    pub fn start_round_with(&self, shoe: Shoe) -> Result<Snapshot, EmptyShoeError> {
        let mut next = Round::new(shoe);
        if let Err(err) = next.deal_initial() {
            log::warn!("could not deal a new round: {err}");
            return Err(err);
        }

        log::info!(
            "round started: player {}, dealer shows {}",
            next.player.total(),
            next.dealer.cards().last().map_or(0, Card::value)
        );
        let mut round = self.round.lock();
        *round = next;
        let snapshot = self.snapshot_of(&round);
        drop(round);

        self.notify(&snapshot);
        Ok(snapshot)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.round.lock().phase
    }

    /// Returns a copy of the hand at `seat`, hole card included.
    ///
    /// Use [`Game::snapshot`] for the view a player is allowed to see.
    pub fn hand(&self, seat: Seat) -> Hand {
        self.round.lock().hand(seat).clone()
    }

    /// Returns the dealer's hole card for the current round.
    pub fn hole_card(&self) -> Option<Card> {
        self.round.lock().hole_card
    }

    /// Returns the settlement of the current round once it is over.
    pub fn settlement(&self) -> Option<Settlement> {
        self.round.lock().settlement.clone()
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.round.lock().shoe.len()
    }

    /// Replaces the cards left in the current round's shoe.
    pub fn set_shoe(&self, shoe: Shoe) {
        self.round.lock().shoe = shoe;
    }

    /// Returns the cumulative counters.
    pub fn stats(&self) -> Stats {
        *self.stats.lock()
    }

    /// Zeroes the cumulative counters, e.g. when a new player sits down.
    pub fn reset_stats(&self) {
        *self.stats.lock() = Stats::default();
    }

    /// Returns the view of the table a player is allowed to see.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_of(&self.round.lock())
    }

    /// Builds the snapshot of `round`, which the caller keeps locked.
    fn snapshot_of(&self, round: &Round) -> Snapshot {
        let stats = (round.phase == Phase::RoundOver).then(|| *self.stats.lock());
        Snapshot::of(round, stats)
    }

    /// Registers a listener called with a fresh [`Snapshot`] after every
    /// completed round start, hit or stand.
    ///
    /// Listeners run synchronously, in registration order, with no lock held,
    /// so a listener may call back into the game, including starting the next
    /// round. A listener added or removed during a notification takes effect
    /// from the next one.
    pub fn subscribe(
        &self,
        listener: impl Fn(&Snapshot) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_listener.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    /// Hands `snapshot` to every listener registered right now.
    fn notify(&self, snapshot: &Snapshot) {
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}
