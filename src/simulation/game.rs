use super::category::Category;
use crate::cards::Deck;
use crate::cards::DeckError;
use crate::payout::Schedule;
use rand::Rng;

/// One side-bet game: how a trial is dealt and how it is classified.
///
/// The engine owns the [`Deck`] for the whole run and hands it to every
/// trial, so a game decides whether to rebuild or reshuffle it.
pub trait Game: Send + Sync {
    type C: Category;
    /// a fresh shoe for a run
    fn deck(&self) -> Deck;
    /// deal one trial's cards and classify them into at most one category
    fn trial<R>(&self, deck: &mut Deck, rng: &mut R) -> Result<Option<Self::C>, DeckError>
    where
        R: Rng + ?Sized;
    /// the house's fixed payouts, wager, and progressive tiers
    fn schedule(&self) -> Schedule<Self::C>;
}
