use super::*;
use crate::Trials;
use crate::blackjack::Blackjack;
use crate::cards::Deck;
use crate::cards::DeckError;
use crate::holdem::Holdem;
use crate::holdem::Premium;
use crate::payout::Schedule;
use rand::Rng;
use std::cell::Cell;

/// Deals five cards a trial from one deck it never gathers back, so the
/// eleventh trial on any deck runs dry. Every trial is a full house.
#[derive(Debug, Clone, Copy)]
struct Leaky;

impl Game for Leaky {
    type C = Premium;
    fn deck(&self) -> Deck {
        Deck::new(1)
    }
    fn trial<R>(&self, deck: &mut Deck, _: &mut R) -> Result<Option<Premium>, DeckError>
    where
        R: Rng + ?Sized,
    {
        deck.hand(5).map(|_| Some(Premium::FullHouse))
    }
    fn schedule(&self) -> Schedule<Premium> {
        Holdem.schedule()
    }
}

fn sequential<G: Game>(game: G, trials: Trials, chunk: Trials, seed: u64) -> Summary<G::C> {
    let config = Config::new(trials, chunk, game.schedule()).seeded(seed);
    let mut aggregator = Aggregator::new(game, config).unwrap();
    aggregator.run(|| false).unwrap();
    aggregator.into_summary()
}

fn parallel<G: Game + Clone>(game: G, trials: Trials, chunk: Trials, seed: u64) -> Summary<G::C> {
    let config = Config::new(trials, chunk, game.schedule()).seeded(seed);
    let mut aggregator = Aggregator::new(game, config).unwrap();
    aggregator.parallel(|| false).unwrap();
    aggregator.into_summary()
}

#[test]
fn chunking_never_changes_blackjack_results() {
    let whole = sequential(Blackjack::default(), 30_000, 30_000, 17);
    let split = sequential(Blackjack::default(), 30_000, 7_000, 17);
    assert_eq!(whole.tally, split.tally);
    assert_eq!(whole.waits, split.waits);
    assert_eq!(whole.chunks(), 1);
    assert_eq!(split.chunks(), 5);
    assert_eq!(split.snapshots.last().map(|s| s.tally().trials()), Some(2_000));
}

#[test]
fn chunking_never_changes_holdem_results() {
    let whole = sequential(Holdem, 20_000, 20_000, 23);
    let split = sequential(Holdem, 20_000, 1, 23);
    assert_eq!(whole.tally, split.tally);
    assert_eq!(whole.waits, split.waits);
    assert_eq!(split.chunks(), 20_000);
}

#[test]
fn snapshots_sum_to_the_tally() {
    let summary = sequential(Holdem, 25_000, 4_000, 29);
    let mut total = Tally::new();
    for snapshot in summary.snapshots.iter() {
        total.merge(snapshot.tally());
    }
    assert_eq!(total, summary.tally);
    let ordinals = summary.snapshots.iter().map(Snapshot::ordinal).collect::<Vec<_>>();
    assert_eq!(ordinals, (1..=7).collect::<Vec<_>>());
}

#[test]
fn waits_match_hits_sequentially() {
    let summary = sequential(Blackjack::default(), 50_000, 8_000, 31);
    for (category, hits) in summary.tally.iter() {
        let gaps = summary.waits.gaps(category);
        assert_eq!(gaps.len() as Trials, hits.saturating_sub(1));
        assert!(gaps.iter().all(|&g| g > 0 && g <= 50_000));
        assert_eq!(summary.severed(category), 0);
    }
}

#[test]
fn parallel_runs_account_for_every_gap() {
    let summary = parallel(Holdem, 40_000, 10_000, 37);
    assert_eq!(summary.trials(), 40_000);
    assert_eq!(summary.chunks(), 4);
    assert!(!summary.interrupted);
    for (category, hits) in summary.tally.iter() {
        let gaps = summary.waits.gaps(category).len() as Trials;
        assert_eq!(gaps + summary.severed(category), hits.saturating_sub(1));
    }
    assert!(summary.severed(Premium::FullHouse) == 3);
}

#[test]
fn parallel_after_sequential_measures_the_first_seam() {
    let config = Config::new(40_000, 10_000, Holdem.schedule()).seeded(53);
    let mut aggregator = Aggregator::new(Holdem, config).unwrap();
    assert!(matches!(aggregator.step(), Some(Chunk::Complete(_))));
    let summary = aggregator.parallel(|| false).unwrap();
    assert_eq!(summary.trials(), 40_000);
    assert_eq!(summary.severed(Premium::FullHouse), 2);
    for (category, hits) in summary.tally.iter() {
        let gaps = summary.waits.gaps(category).len() as Trials;
        assert_eq!(gaps + summary.severed(category), hits.saturating_sub(1));
    }
}

#[test]
fn parallel_seeded_runs_repeat() {
    let a = parallel(Blackjack::default(), 30_000, 5_000, 41);
    let b = parallel(Blackjack::default(), 30_000, 5_000, 41);
    assert_eq!(a, b);
}

#[test]
fn halting_keeps_merged_chunks() {
    let config = Config::new(10_000, 1_000, Holdem.schedule()).seeded(43);
    let mut aggregator = Aggregator::new(Holdem, config).unwrap();
    let calls = Cell::new(0);
    let halt = || {
        calls.set(calls.get() + 1);
        calls.get() >= 2
    };
    let summary = aggregator.run(halt).unwrap();
    assert!(summary.interrupted);
    assert_eq!(summary.chunks(), 2);
    assert_eq!(summary.trials(), 2_000);
    let summary = aggregator.run(|| false).unwrap();
    assert!(!summary.interrupted);
    assert_eq!(summary.trials(), 10_000);
    assert!(aggregator.is_done());
}

#[test]
fn halting_before_any_parallel_chunk() {
    let config = Config::new(10_000, 1_000, Holdem.schedule()).seeded(47);
    let mut aggregator = Aggregator::new(Holdem, config).unwrap();
    let summary = aggregator.parallel(|| true).unwrap();
    assert!(summary.interrupted);
    assert_eq!(summary.trials(), 0);
    let summary = aggregator.run(|| false).unwrap();
    assert_eq!(summary.trials(), 10_000);
}

#[test]
fn failed_chunk_keeps_earlier_chunks() {
    let config = Config::new(30, 4, Leaky.schedule());
    let mut aggregator = Aggregator::new(Leaky, config).unwrap();
    let failure = aggregator.run(|| false).unwrap_err();
    assert_eq!(failure.ordinal, 3);
    assert_eq!(failure.reason, DeckError::Exhausted(52));
    assert_eq!(failure.checkpoint.ordinal, 3);
    assert_eq!(failure.checkpoint.completed, 8);
    assert_eq!(failure.checkpoint.last.get(Premium::FullHouse), Some(8));
    assert_eq!(aggregator.summary().trials(), 8);
    assert_eq!(aggregator.summary().chunks(), 2);
    assert!(matches!(aggregator.step(), Some(Chunk::Failed(f)) if f.ordinal == 3));
    assert_eq!(aggregator.summary().trials(), 8);
}

#[test]
fn resume_picks_up_from_the_checkpoint() {
    let config = Config::new(30, 4, Leaky.schedule());
    let mut aggregator = Aggregator::new(Leaky, config).unwrap();
    let failure = aggregator.run(|| false).unwrap_err();
    let summary = aggregator.into_summary();
    let mut resumed = Aggregator::resume(Leaky, failure.checkpoint, summary).unwrap();
    let failure = resumed.run(|| false).unwrap_err();
    assert_eq!(failure.ordinal, 5);
    assert_eq!(failure.checkpoint.completed, 16);
    let summary = resumed.summary();
    assert_eq!(summary.tally.hits(Premium::FullHouse), 16);
    assert_eq!(summary.waits.gaps(Premium::FullHouse), &[1 as Trials; 15][..]);
}

#[test]
fn parallel_failure_stops_the_merge() {
    let config = Config::new(36, 12, Leaky.schedule());
    let mut aggregator = Aggregator::new(Leaky, config).unwrap();
    let failure = aggregator.parallel(|| false).unwrap_err();
    assert_eq!(failure.ordinal, 1);
    assert_eq!(failure.checkpoint.completed, 0);
    assert_eq!(aggregator.summary().chunks(), 0);
}

#[test]
fn invalid_configs_never_start() {
    let schedule = Holdem.schedule();
    assert_eq!(
        Aggregator::new(Holdem, Config::new(0, 10, schedule.clone())).err(),
        Some(ConfigError::Trials)
    );
    assert_eq!(
        Aggregator::new(Holdem, Config::new(10, 10, schedule.staking(0.))).err(),
        Some(ConfigError::Wager(0.))
    );
}
