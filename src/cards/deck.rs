use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// dealing past the end of the shoe. the per-trial draw count is fixed,
    /// so reaching this means the game was configured with too few decks.
    #[error("deck exhausted after dealing all {0} cards")]
    Exhausted(usize),
}

/// A shoe of one or more physical 52-card decks.
///
/// Cards are dealt sequentially from a cursor, so the remaining size
/// drops by one per deal. [`Deck::reset`] rebuilds the shoe from scratch,
/// while [`Deck::reshuffle`] gathers every dealt card back and shuffles
/// in place. Both leave the shoe in a uniformly random order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
    decks: usize,
}

impl Deck {
    pub const CARDS: usize = 52;

    /// A full shoe in canonical order. Shuffle before dealing.
    pub fn new(decks: usize) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(Self::CARDS * decks),
            dealt: 0,
            decks,
        };
        deck.fill();
        deck
    }
    pub fn decks(&self) -> usize {
        self.decks
    }
    pub fn size(&self) -> usize {
        self.cards.len()
    }
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.dealt
    }

    /// regenerate the full multiset and shuffle it
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fill();
        self.shuffle(rng);
    }
    /// uniformly permute the undealt cards
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.dealt..].shuffle(rng);
    }
    /// return all dealt cards to the shoe and shuffle without rebuilding
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.dealt = 0;
        self.shuffle(rng);
    }

    pub fn deal(&mut self) -> Result<Card, DeckError> {
        match self.cards.get(self.dealt) {
            Some(card) => {
                self.dealt += 1;
                Ok(*card)
            }
            None => Err(DeckError::Exhausted(self.cards.len())),
        }
    }
    /// deal `n` cards as a set. only meaningful for single-deck games,
    /// since a set collapses duplicate cards.
    pub fn hand(&mut self, n: usize) -> Result<Hand, DeckError> {
        (0..n)
            .map(|_| self.deal().map(Hand::from))
            .try_fold(Hand::empty(), |hand, card| card.map(|c| Hand::add(hand, c)))
    }
    pub fn hole(&mut self) -> Result<Hole, DeckError> {
        let a = self.deal()?;
        let b = self.deal()?;
        Ok(Hole::from((a, b)))
    }

    fn fill(&mut self) {
        self.dealt = 0;
        self.cards.clear();
        for _ in 0..self.decks {
            for rank in Rank::all() {
                for suit in Suit::all() {
                    self.cards.push(Card::from((rank, suit)));
                }
            }
        }
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.deal().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashMap;

    #[test]
    fn single_deck_has_no_duplicates() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new(1);
        deck.reset(rng);
        let hand = deck.hand(52).unwrap();
        assert_eq!(hand.size(), 52);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn shoe_has_each_card_once_per_deck() {
        let deck = Deck::new(6);
        assert_eq!(deck.size(), 312);
        let mut counts = HashMap::new();
        for card in deck {
            *counts.entry(card).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&n| n == 6));
    }

    #[test]
    fn deal_shrinks_by_one() {
        let mut deck = Deck::new(1);
        for expected in (0..52).rev() {
            deck.deal().unwrap();
            assert_eq!(deck.remaining(), expected);
        }
    }

    #[test]
    fn exhaustion_is_an_error() {
        let mut deck = Deck::new(1);
        deck.hand(52).unwrap();
        assert_eq!(deck.deal(), Err(DeckError::Exhausted(52)));
    }

    #[test]
    fn reshuffle_restores_full_shoe() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::new(2);
        deck.reset(rng);
        deck.hole().unwrap();
        deck.hole().unwrap();
        assert_eq!(deck.remaining(), 100);
        deck.reshuffle(rng);
        assert_eq!(deck.remaining(), 104);
        let mut sorted = deck.clone().collect::<Vec<_>>();
        let mut fresh = Deck::new(2).collect::<Vec<_>>();
        sorted.sort();
        fresh.sort();
        assert_eq!(sorted, fresh);
    }

    #[test]
    fn seeded_shuffles_repeat() {
        let mut a = Deck::new(1);
        let mut b = Deck::new(1);
        a.reset(&mut SmallRng::seed_from_u64(42));
        b.reset(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a.hand(7), b.hand(7));
    }
}
