use super::category::Category;
use super::game::Game;
use super::tally::Tally;
use super::waits::LastHits;
use super::waits::WaitLog;
use crate::Trials;
use crate::cards::Deck;
use crate::cards::DeckError;
use rand::rngs::SmallRng;

/// Tally and wait gaps produced by one contiguous stretch of trials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial<C: Category> {
    pub tally: Tally<C>,
    pub waits: WaitLog<C>,
}

/// The run context: random source, shoe, last-hit indices, and the global
/// trial counter. It outlives any single chunk, so splitting a run into
/// chunks never changes which cards are dealt or how gaps are measured.
pub struct Engine<G: Game> {
    game: G,
    deck: Deck,
    rng: SmallRng,
    last: LastHits<G::C>,
    index: Trials,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G, rng: SmallRng) -> Self {
        Self {
            deck: game.deck(),
            last: LastHits::new(),
            index: 0,
            game,
            rng,
        }
    }
    /// pick up where an earlier stretch left off
    pub fn resume(game: G, rng: SmallRng, last: LastHits<G::C>, index: Trials) -> Self {
        Self {
            last,
            index,
            ..Self::new(game, rng)
        }
    }
    pub fn game(&self) -> &G {
        &self.game
    }
    /// trials completed so far, and the global index of the latest one
    pub fn index(&self) -> Trials {
        self.index
    }
    pub fn last(&self) -> &LastHits<G::C> {
        &self.last
    }

    /// Run `n` trials: deal, classify, count, measure the gap since the
    /// category's previous hit.
    ///
    /// Indices and last-hit state only advance if every trial succeeds,
    /// so a failed stretch can be retried from the same trial index. The
    /// random source and deck have moved on, so the retry deals new cards.
    pub fn run(&mut self, n: Trials) -> Result<Partial<G::C>, DeckError> {
        let mut last = self.last.clone();
        let mut tally = Tally::new();
        let mut waits = WaitLog::new();
        for index in (self.index + 1)..=(self.index + n) {
            let outcome = self.game.trial(&mut self.deck, &mut self.rng)?;
            tally.record(outcome);
            if let Some(category) = outcome {
                if let Some(gap) = last.hit(category, index) {
                    waits.push(category, gap);
                }
            }
        }
        self.index += n;
        self.last = last;
        Ok(Partial { tally, waits })
    }
}
