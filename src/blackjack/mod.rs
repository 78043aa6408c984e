//! The blackjack A-J side bet.
//!
//! Player and dealer are dealt two cards each from a multi-deck shoe. The
//! bet pays on player blackjacks, with a larger fixed payout the closer the
//! hand is to a suited Ace-Jack, and two progressive tiers that need the
//! dealer to hold an Ace-Jack as well.
pub mod bonus;
pub use bonus::*;

pub mod evaluator;
pub use evaluator::*;

use crate::cards::Deck;
use crate::cards::DeckError;
use crate::cards::Hole;
use crate::payout::Progressive;
use crate::payout::Schedule;
use crate::simulation::ConfigError;
use crate::simulation::Game;
use rand::Rng;

/// The blackjack side bet dealt from a shoe of `decks` decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blackjack {
    decks: usize,
}

impl Blackjack {
    pub fn new(decks: usize) -> Result<Self, ConfigError> {
        match decks {
            0 => Err(ConfigError::Decks),
            decks => Ok(Self { decks }),
        }
    }
    pub fn decks(&self) -> usize {
        self.decks
    }
}

impl Default for Blackjack {
    fn default() -> Self {
        Self {
            decks: crate::DECKS,
        }
    }
}

impl Game for Blackjack {
    type C = Bonus;
    fn deck(&self) -> Deck {
        Deck::new(self.decks)
    }
    /// gather the shoe, shuffle, then deal around the table:
    /// player, dealer, player, dealer
    fn trial<R>(&self, deck: &mut Deck, rng: &mut R) -> Result<Option<Bonus>, DeckError>
    where
        R: Rng + ?Sized,
    {
        deck.reshuffle(rng);
        let p1 = deck.deal()?;
        let d1 = deck.deal()?;
        let p2 = deck.deal()?;
        let d2 = deck.deal()?;
        let player = Hole::from((p1, p2));
        let dealer = Hole::from((d1, d2));
        Ok(Evaluator::from((player, dealer)).find_bonus())
    }
    fn schedule(&self) -> Schedule<Bonus> {
        Schedule::new(
            crate::WAGER,
            Progressive::Dual {
                major: Bonus::MajorProgressive,
                minor: Bonus::MinorProgressive,
            },
        )
        .pays(Bonus::SuitedAceJack, crate::SUITED_ACE_JACK)
        .pays(Bonus::ColoredAceJack, crate::COLORED_ACE_JACK)
        .pays(Bonus::MixedAceJack, crate::MIXED_ACE_JACK)
        .pays(Bonus::OtherBlackjack, crate::OTHER_BLACKJACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Category;
    use crate::simulation::Tally;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn zero_decks_is_rejected() {
        assert_eq!(Blackjack::new(0), Err(ConfigError::Decks));
        assert_eq!(Blackjack::new(2).map(|g| g.decks()), Ok(2));
        assert_eq!(Blackjack::default().deck().size(), 6 * Deck::CARDS);
    }

    #[test]
    fn trial_deals_four_cards() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let game = Blackjack::default();
        let mut deck = game.deck();
        game.trial(&mut deck, rng).unwrap();
        assert_eq!(deck.remaining(), deck.size() - 4);
        game.trial(&mut deck, rng).unwrap();
        assert_eq!(deck.remaining(), deck.size() - 4);
    }

    #[test]
    fn schedule_covers_every_category() {
        let schedule = Blackjack::default().schedule();
        assert_eq!(schedule.validate(), Ok(()));
        for category in Bonus::all() {
            assert!(schedule.fixed(*category).is_some() ^ schedule.progressive.contains(*category));
        }
        assert_eq!(schedule.fixed(Bonus::SuitedAceJack), Some(350.));
        assert_eq!(schedule.fixed(Bonus::OtherBlackjack), Some(25.));
    }

    /// a player blackjack is 2 × (4/13) × (16/51) ≈ 4.8% of single-deck
    /// deals, and somewhat less in a 6-deck shoe
    #[test]
    fn blackjack_frequency_is_plausible() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let game = Blackjack::default();
        let mut deck = game.deck();
        let mut tally = Tally::new();
        for _ in 0..200_000 {
            tally.record(game.trial(&mut deck, rng).unwrap());
        }
        let frequency = tally.matched() as f64 / tally.trials() as f64;
        assert!(frequency > 0.040 && frequency < 0.050, "{}", frequency);
        assert!(tally.hits(Bonus::OtherBlackjack) > tally.hits(Bonus::MixedAceJack));
    }
}
