use super::category::Category;
use super::tally::Tally;

/// One chunk's own tally, frozen at the moment the chunk completed.
/// Kept for dispersion statistics across chunks.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<C: Category> {
    ordinal: usize,
    tally: Tally<C>,
}

impl<C: Category> Snapshot<C> {
    pub fn new(ordinal: usize, tally: Tally<C>) -> Self {
        Self { ordinal, tally }
    }
    /// 1-based position of the chunk within its run
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
    pub fn tally(&self) -> &Tally<C> {
        &self.tally
    }
}
