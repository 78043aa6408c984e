use super::category::Category;
use crate::Trials;
use std::collections::BTreeMap;

/// Global index of the most recent trial each category hit in.
/// Categories that have not hit yet are absent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct LastHits<C: Category>(BTreeMap<C, Trials>);

impl<C: Category> Default for LastHits<C> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<C: Category> LastHits<C> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self, category: C) -> Option<Trials> {
        self.0.get(&category).copied()
    }
    /// mark a hit at `index`, returning the gap since the previous one
    pub fn hit(&mut self, category: C, index: Trials) -> Option<Trials> {
        self.0.insert(category, index).map(|prior| {
            debug_assert!(index > prior);
            index - prior
        })
    }
    /// combine with a later stretch of trials. later indices win.
    pub fn absorb(&mut self, later: &Self) {
        for (category, index) in later.0.iter() {
            let entry = self.0.entry(*category).or_insert(*index);
            *entry = Trials::max(*entry, *index);
        }
    }
}

/// Gaps, in trials, between consecutive hits of each category.
///
/// Append-only. A category's first hit has nothing to measure against, so
/// `k` hits yield `k - 1` gaps, all strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct WaitLog<C: Category>(BTreeMap<C, Vec<Trials>>);

impl<C: Category> Default for WaitLog<C> {
    fn default() -> Self {
        Self(C::all().iter().map(|c| (*c, Vec::new())).collect())
    }
}

impl<C: Category> WaitLog<C> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn push(&mut self, category: C, gap: Trials) {
        self.0.entry(category).or_default().push(gap);
    }
    /// concatenate a later stretch's gaps after ours
    pub fn append(&mut self, mut later: Self) {
        for (category, gaps) in later.0.iter_mut() {
            self.0.entry(*category).or_default().append(gaps);
        }
    }
    pub fn gaps(&self, category: C) -> &[Trials] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or_default()
    }
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn iter(&self) -> impl Iterator<Item = (C, &[Trials])> + '_ {
        self.0.iter().map(|(c, g)| (*c, g.as_slice()))
    }
}
