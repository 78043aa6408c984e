use super::category::Category;
use super::config::Config;
use super::waits::LastHits;
use crate::Trials;
use crate::cards::DeckError;

/// Where a run stood after its last merged chunk.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<C: Category> {
    pub config: Config<C>,
    /// the 1-based chunk to run next
    pub ordinal: usize,
    /// trials merged before `ordinal`
    pub completed: Trials,
    pub last: LastHits<C>,
}

/// A chunk that could not complete. Nothing from it was merged; every
/// earlier chunk was, and `checkpoint` says how to carry on.
#[derive(Debug, Clone, thiserror::Error)]
#[error("chunk {ordinal} failed after {} merged trials: {reason}", .checkpoint.completed)]
pub struct Failure<C: Category> {
    pub ordinal: usize,
    #[source]
    pub reason: DeckError,
    pub checkpoint: Checkpoint<C>,
}

/// How one chunk ended.
#[derive(Debug, Clone)]
pub enum Chunk<C: Category> {
    Complete(super::snapshot::Snapshot<C>),
    Failed(Failure<C>),
}
