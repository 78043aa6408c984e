//! Card representation shared by both games.
//!
//! - [`Card`]: a `(Rank, Suit)` value, freely copied
//! - [`Hand`]: an unordered set of distinct cards as a 64-bit bitmask
//! - [`Hole`]: two cards as dealt, duplicates allowed
//! - [`Deck`]: a shoe of one or more decks, dealt without replacement
pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
