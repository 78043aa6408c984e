use super::config::Config;
use super::config::ConfigError;
use super::engine::Engine;
use super::engine::Partial;
use super::failure::Checkpoint;
use super::failure::Chunk;
use super::failure::Failure;
use super::game::Game;
use super::snapshot::Snapshot;
use super::summary::Summary;
use super::waits::LastHits;
use crate::Trials;
use crate::cards::DeckError;

/// Drives a run chunk by chunk, merging each completed chunk into a
/// [`Summary`].
///
/// Chunks bound how much per-chunk state is alive at once; they are not
/// visible in the result. The engine's deck, random source, last-hit
/// indices and trial counter carry straight across chunk boundaries, so any
/// partition of N trials merges to exactly the tally and wait log of one
/// N-trial chunk.
pub struct Aggregator<G: Game> {
    config: Config<G::C>,
    engine: Engine<G>,
    summary: Summary<G::C>,
    ordinal: usize,
}

impl<G: Game> Aggregator<G> {
    pub fn new(game: G, config: Config<G::C>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            engine: Engine::new(game, config.rng()),
            summary: Summary::new(),
            ordinal: 1,
            config,
        })
    }

    /// Continue a run from the checkpoint of a failed or abandoned one,
    /// together with the summary it had merged. The run's random stream
    /// is gone, so the remaining chunks draw from a fresh per-chunk stream.
    pub fn resume(
        game: G,
        checkpoint: Checkpoint<G::C>,
        summary: Summary<G::C>,
    ) -> Result<Self, ConfigError> {
        checkpoint.config.validate()?;
        let rng = checkpoint.config.stream(checkpoint.ordinal);
        let engine = Engine::resume(game, rng, checkpoint.last, checkpoint.completed);
        Ok(Self {
            config: checkpoint.config,
            ordinal: checkpoint.ordinal,
            summary,
            engine,
        })
    }

    pub fn config(&self) -> &Config<G::C> {
        &self.config
    }
    pub fn summary(&self) -> &Summary<G::C> {
        &self.summary
    }
    pub fn into_summary(self) -> Summary<G::C> {
        self.summary
    }
    pub fn is_done(&self) -> bool {
        self.ordinal > self.config.chunks()
    }
    pub fn checkpoint(&self) -> Checkpoint<G::C> {
        Checkpoint {
            config: self.config.clone(),
            ordinal: self.ordinal,
            completed: self.engine.index(),
            last: self.engine.last().clone(),
        }
    }

    /// Run the next chunk. `None` once every chunk has been merged.
    ///
    /// A failed chunk merges nothing and does not advance, so calling
    /// `step` again retries it from the same trial index.
    pub fn step(&mut self) -> Option<Chunk<G::C>> {
        if self.is_done() {
            return None;
        }
        let ordinal = self.ordinal;
        match self.engine.run(self.config.size(ordinal)) {
            Ok(partial) => {
                self.ordinal += 1;
                let snapshot = self.summary.absorb(ordinal, partial).clone();
                self.report(&snapshot);
                Some(Chunk::Complete(snapshot))
            }
            Err(reason) => Some(Chunk::Failed(self.fail(ordinal, reason))),
        }
    }

    /// Run every remaining chunk in order.
    ///
    /// `halt` is polled between chunks; when it returns true the run stops
    /// with everything merged so far and the summary marked interrupted.
    pub fn run<F>(&mut self, halt: F) -> Result<&Summary<G::C>, Failure<G::C>>
    where
        F: Fn() -> bool,
    {
        log::info!(
            "running {} trials in {} chunks of {}",
            self.config.trials,
            self.config.chunks(),
            self.config.chunk
        );
        self.summary.interrupted = false;
        while let Some(chunk) = self.step() {
            match chunk {
                Chunk::Failed(failure) => return Err(failure),
                Chunk::Complete(_) if !self.is_done() && halt() => {
                    self.interrupt();
                    break;
                }
                Chunk::Complete(_) => continue,
            }
        }
        Ok(&self.summary)
    }

    /// Run every remaining chunk concurrently, each on its own random
    /// stream with a fresh deck, then merge them in order.
    ///
    /// Hit counts merge exactly. The first chunk starts from the last hits
    /// already merged, so its leading gaps are measured. After that, a
    /// category's gap from its last hit in one chunk to its first hit in the
    /// next cannot be measured across independent streams; each such seam is
    /// counted in [`Summary::severed`] instead of being written to the wait
    /// log.
    ///
    /// Merging stops at the first chunk that failed or was skipped because
    /// `halt` fired. Chunks after it are discarded, so the summary is still
    /// a contiguous prefix of the run.
    pub fn parallel<F>(&mut self, halt: F) -> Result<&Summary<G::C>, Failure<G::C>>
    where
        G: Clone,
        F: Fn() -> bool + Sync,
    {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        log::info!(
            "running {} trials in {} parallel chunks of {}",
            self.config.trials,
            self.config.chunks(),
            self.config.chunk
        );
        self.summary.interrupted = false;
        let game = self.engine.game().clone();
        let results = (self.ordinal..=self.config.chunks())
            .into_par_iter()
            .map(|ordinal| match halt() {
                true => None,
                false => Some(self.detached(game.clone(), ordinal)),
            })
            .collect::<Vec<_>>();
        let first = self.ordinal;
        let mut last = self.engine.last().clone();
        for result in results {
            let ordinal = self.ordinal;
            match result {
                Some(Ok((partial, seen))) => {
                    last.absorb(&seen);
                    self.ordinal += 1;
                    let snapshot = match ordinal == first {
                        true => self.summary.absorb(ordinal, partial).clone(),
                        false => self.summary.absorb_detached(ordinal, partial).clone(),
                    };
                    self.report(&snapshot);
                }
                Some(Err(reason)) => {
                    self.rewind(game, last);
                    return Err(self.fail(ordinal, reason));
                }
                None => {
                    self.interrupt();
                    break;
                }
            }
        }
        self.rewind(game, last);
        Ok(&self.summary)
    }

    /// simulate one chunk on its own stream, starting at its global offset.
    /// only the next chunk in sequence knows the merged last hits.
    fn detached(
        &self,
        game: G,
        ordinal: usize,
    ) -> Result<(Partial<G::C>, LastHits<G::C>), DeckError> {
        let offset = (ordinal as Trials - 1) * self.config.chunk;
        let rng = self.config.stream(ordinal);
        let last = match ordinal == self.ordinal {
            true => self.engine.last().clone(),
            false => LastHits::new(),
        };
        let mut engine = Engine::resume(game, rng, last, offset);
        let partial = engine.run(self.config.size(ordinal))?;
        Ok((partial, engine.last().clone()))
    }

    /// re-seat the sequential engine after a parallel pass
    fn rewind(&mut self, game: G, last: LastHits<G::C>) {
        let rng = self.config.stream(self.ordinal);
        self.engine = Engine::resume(game, rng, last, self.summary.trials());
    }

    fn interrupt(&mut self) {
        log::warn!(
            "interrupted after chunk {}/{}, keeping {} merged trials",
            self.ordinal - 1,
            self.config.chunks(),
            self.summary.trials()
        );
        self.summary.interrupted = true;
    }

    fn fail(&self, ordinal: usize, reason: DeckError) -> Failure<G::C> {
        log::warn!(
            "chunk {}/{} failed: {}; {} trials from earlier chunks are kept",
            ordinal,
            self.config.chunks(),
            reason,
            self.summary.trials()
        );
        Failure {
            ordinal,
            reason,
            checkpoint: self.checkpoint(),
        }
    }

    fn report(&self, snapshot: &Snapshot<G::C>) {
        let ordinal = snapshot.ordinal();
        log::info!(
            "chunk {:>4}/{:<4} {:>14} trials merged",
            ordinal,
            self.config.chunks(),
            self.summary.trials()
        );
        for (category, hits) in snapshot.tally().iter() {
            log::debug!("chunk {:>4} {:<20}{:>12}", ordinal, category, hits);
        }
        let every = self.config.report_every;
        if every > 0 && ordinal % every == 0 {
            log::info!(
                "running totals after {} chunks\n{}",
                ordinal,
                self.summary.tally
            );
        }
    }
}

impl<G: Game> std::fmt::Debug for Aggregator<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("ordinal", &self.ordinal)
            .field("chunks", &self.config.chunks())
            .field("trials", &self.summary.trials())
            .finish()
    }
}
