use super::category::Category;
use super::engine::Partial;
use super::snapshot::Snapshot;
use super::tally::Tally;
use super::waits::WaitLog;
use crate::Trials;
use std::collections::BTreeMap;

/// Everything a run has merged so far.
///
/// Updated only by [`Summary::absorb`], one completed chunk at a time, so a
/// summary taken after any chunk is a valid prefix of the full run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct Summary<C: Category> {
    pub tally: Tally<C>,
    pub waits: WaitLog<C>,
    pub snapshots: Vec<Snapshot<C>>,
    /// Gaps that straddle two independently simulated chunks. Only parallel
    /// runs produce these; the gap itself is unknowable and is left out of
    /// `waits` rather than estimated.
    pub severed: BTreeMap<C, Trials>,
    /// the run stopped early on request
    pub interrupted: bool,
}

impl<C: Category> Default for Summary<C> {
    fn default() -> Self {
        Self {
            tally: Tally::new(),
            waits: WaitLog::new(),
            snapshots: Vec::new(),
            severed: C::all().iter().map(|c| (*c, 0)).collect(),
            interrupted: false,
        }
    }
}

impl<C: Category> Summary<C> {
    pub fn new() -> Self {
        Self::default()
    }
    /// Merge the next chunk in sequence. Returns that chunk's snapshot.
    pub fn absorb(&mut self, ordinal: usize, partial: Partial<C>) -> &Snapshot<C> {
        debug_assert!(self.snapshots.last().map_or(0, Snapshot::ordinal) < ordinal);
        self.tally.merge(&partial.tally);
        self.waits.append(partial.waits);
        self.snapshots.push(Snapshot::new(ordinal, partial.tally));
        self.snapshots.last().expect("just pushed")
    }
    /// Merge a chunk simulated on its own stream. Each category that hit
    /// both before and inside this chunk loses exactly one gap at the seam.
    pub fn absorb_detached(&mut self, ordinal: usize, partial: Partial<C>) -> &Snapshot<C> {
        for (category, hits) in partial.tally.iter() {
            if hits > 0 && self.tally.hits(category) > 0 {
                *self.severed.entry(category).or_default() += 1;
            }
        }
        self.absorb(ordinal, partial)
    }
    /// trials merged so far
    pub fn trials(&self) -> Trials {
        self.tally.trials()
    }
    pub fn chunks(&self) -> usize {
        self.snapshots.len()
    }
    pub fn severed(&self, category: C) -> Trials {
        self.severed.get(&category).copied().unwrap_or_default()
    }
}
