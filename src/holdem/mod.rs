//! The Ultimate Texas Hold'em premium-hand side bet.
//!
//! Two hole cards and five community cards come off a single fresh deck each
//! trial. The bet pays fixed amounts on the best seven-card hands and a
//! progressive on the royal flush.
pub mod evaluator;
pub use evaluator::*;

pub mod premium;
pub use premium::*;

use crate::cards::Deck;
use crate::cards::DeckError;
use crate::payout::Progressive;
use crate::payout::Schedule;
use crate::simulation::Game;
use rand::Rng;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Holdem;

impl Game for Holdem {
    type C = Premium;
    fn deck(&self) -> Deck {
        Deck::new(1)
    }
    /// rebuild and shuffle the deck, then deal hole cards and board
    fn trial<R>(&self, deck: &mut Deck, rng: &mut R) -> Result<Option<Premium>, DeckError>
    where
        R: Rng + ?Sized,
    {
        deck.reset(rng);
        let hole = deck.hand(2)?;
        let board = deck.hand(5)?;
        Ok(Evaluator::from((hole, board)).find_premium())
    }
    fn schedule(&self) -> Schedule<Premium> {
        Schedule::new(crate::WAGER, Progressive::Single(Premium::RoyalFlush))
            .pays(Premium::CommunityRoyal, crate::COMMUNITY_ROYAL)
            .pays(Premium::StraightFlush, crate::STRAIGHT_FLUSH)
            .pays(Premium::FourOAK, crate::FOUR_OAK)
            .pays(Premium::FullHouse, crate::FULL_HOUSE)
    }
}
