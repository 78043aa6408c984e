use crate::Chips;
use crate::simulation::Category;
use crate::simulation::ConfigError;
use std::collections::BTreeMap;

/// Which categories pay a progressive jackpot instead of a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub enum Progressive<C: Category> {
    Single(C),
    /// Two tiers, paid in inverse proportion to how often they hit.
    Dual { major: C, minor: C },
}

impl<C: Category> Progressive<C> {
    pub fn contains(&self, category: C) -> bool {
        match *self {
            Progressive::Single(c) => c == category,
            Progressive::Dual { major, minor } => major == category || minor == category,
        }
    }
}

/// The side bet's pay table: stake per trial, fixed payouts by category,
/// and the progressive tiers left to solve for. Payouts are totals returned
/// to the player per unit wager, as the casino quotes them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct Schedule<C: Category> {
    pub wager: Chips,
    pub fixed: BTreeMap<C, Chips>,
    pub progressive: Progressive<C>,
}

impl<C: Category> Schedule<C> {
    pub fn new(wager: Chips, progressive: Progressive<C>) -> Self {
        Self {
            wager,
            fixed: BTreeMap::new(),
            progressive,
        }
    }
    pub fn pays(mut self, category: C, amount: Chips) -> Self {
        self.fixed.insert(category, amount);
        self
    }
    pub fn staking(self, wager: Chips) -> Self {
        Self { wager, ..self }
    }
    pub fn fixed(&self, category: C) -> Option<Chips> {
        self.fixed.get(&category).copied()
    }
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.wager.is_finite() && self.wager > 0.) {
            return Err(ConfigError::Wager(self.wager));
        }
        if let Progressive::Dual { major, minor } = self.progressive {
            if major == minor {
                return Err(ConfigError::Tiers);
            }
        }
        for (category, amount) in self.fixed.iter() {
            if !(amount.is_finite() && *amount >= 0.) {
                return Err(ConfigError::Payout {
                    category: category.to_string(),
                    value: *amount,
                });
            }
            if self.progressive.contains(*category) {
                return Err(ConfigError::Overlap(category.to_string()));
            }
        }
        Ok(())
    }
}
