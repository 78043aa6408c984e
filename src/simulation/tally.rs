use super::category::Category;
use crate::Trials;
use std::collections::BTreeMap;

/// Hit counts per category plus the number of trials they came from.
///
/// Every category is present from construction, so lookups never miss.
/// Trials that match nothing only advance the trial count.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct Tally<C: Category> {
    hits: BTreeMap<C, Trials>,
    trials: Trials,
}

impl<C: Category> Default for Tally<C> {
    fn default() -> Self {
        Self {
            hits: C::all().iter().map(|c| (*c, 0)).collect(),
            trials: 0,
        }
    }
}

impl<C: Category> Tally<C> {
    pub fn new() -> Self {
        Self::default()
    }
    /// count one trial and its outcome
    pub fn record(&mut self, outcome: Option<C>) {
        self.trials += 1;
        if let Some(category) = outcome {
            *self.hits.entry(category).or_default() += 1;
        }
    }
    /// per-category summation
    pub fn merge(&mut self, other: &Self) {
        self.trials += other.trials;
        for (category, n) in other.hits.iter() {
            *self.hits.entry(*category).or_default() += n;
        }
    }
    pub fn hits(&self, category: C) -> Trials {
        self.hits.get(&category).copied().unwrap_or_default()
    }
    pub fn trials(&self) -> Trials {
        self.trials
    }
    /// trials that landed in some category
    pub fn matched(&self) -> Trials {
        self.hits.values().sum()
    }
    /// hits per trial
    pub fn frequency(&self, category: C) -> f64 {
        match self.trials {
            0 => 0.,
            n => self.hits(category) as f64 / n as f64,
        }
    }
    /// the "1 in X" figure, undefined without a hit
    pub fn odds(&self, category: C) -> Option<f64> {
        match self.hits(category) {
            0 => None,
            h => Some(self.trials as f64 / h as f64),
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = (C, Trials)> + '_ {
        self.hits.iter().map(|(c, n)| (*c, *n))
    }
}

impl<C: Category> std::fmt::Display for Tally<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<20}{:>14}", "trials", self.trials)?;
        for (category, n) in self.iter() {
            match self.odds(category) {
                Some(x) => writeln!(f, "{:<20}{:>14}   1 in {:.0}", category, n, x)?,
                None => writeln!(f, "{:<20}{:>14}", category, n)?,
            }
        }
        Ok(())
    }
}
