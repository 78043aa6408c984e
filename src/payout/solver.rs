use super::schedule::Progressive;
use super::schedule::Schedule;
use crate::Chips;
use crate::Trials;
use crate::simulation::Category;
use crate::simulation::Tally;
use std::collections::BTreeMap;

/// Solved progressive amounts.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Jackpot {
    Single(Chips),
    Dual { major: Chips, minor: Chips },
}

/// The pool accounting behind a fair progressive.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct Solution<C: Category> {
    /// trials × wager
    pub wagered: Chips,
    /// fixed payouts handed out, by category
    pub paid: BTreeMap<C, Chips>,
    /// sum of `paid`
    pub fixed: Chips,
    /// what the progressive tiers must return for zero house edge
    pub remaining: Chips,
    /// minor hits per major hit, for two-tier schedules with both tiers hit
    pub ratio: Option<f64>,
    pub jackpot: Jackpot,
}

/// the whole pool on one tier. zero when it never hit.
pub fn single(remaining: Chips, hits: Trials) -> Chips {
    match hits {
        0 => 0.,
        h => remaining / h as Chips,
    }
}

/// Split the pool over two tiers so that `major / minor = minor_hits /
/// major_hits` and `major_hits × major + minor_hits × minor = remaining`.
/// Zero for both unless both tiers hit.
pub fn dual(remaining: Chips, major_hits: Trials, minor_hits: Trials) -> (Chips, Chips) {
    match (major_hits, minor_hits) {
        (0, _) | (_, 0) => (0., 0.),
        (major_hits, minor_hits) => {
            let ratio = minor_hits as Chips / major_hits as Chips;
            let minor = remaining / (ratio * major_hits as Chips + minor_hits as Chips);
            let major = minor * ratio;
            (major, minor)
        }
    }
}

impl<C: Category> Schedule<C> {
    /// Solve for the progressive amounts that return every wagered chip.
    pub fn solve(&self, tally: &Tally<C>) -> Solution<C> {
        let wagered = tally.trials() as Chips * self.wager;
        let paid = self
            .fixed
            .iter()
            .map(|(c, amount)| (*c, tally.hits(*c) as Chips * amount))
            .collect::<BTreeMap<C, Chips>>();
        let fixed = paid.values().sum::<Chips>();
        let remaining = wagered - fixed;
        let (ratio, jackpot) = match self.progressive {
            Progressive::Single(c) => (None, Jackpot::Single(single(remaining, tally.hits(c)))),
            Progressive::Dual { major, minor } => {
                let major_hits = tally.hits(major);
                let minor_hits = tally.hits(minor);
                let (major, minor) = dual(remaining, major_hits, minor_hits);
                let ratio = (major_hits > 0).then(|| minor_hits as f64 / major_hits as f64);
                (ratio, Jackpot::Dual { major, minor })
            }
        };
        Solution {
            wagered,
            paid,
            fixed,
            remaining,
            ratio,
            jackpot,
        }
    }
}

impl<C: Category> Solution<C> {
    /// what the solved jackpots would have paid out over the same trials
    pub fn progressive(&self, tally: &Tally<C>, schedule: &Schedule<C>) -> Chips {
        match (self.jackpot, schedule.progressive) {
            (Jackpot::Single(value), Progressive::Single(c)) => value * tally.hits(c) as Chips,
            (Jackpot::Dual { major, minor }, Progressive::Dual { major: a, minor: b }) => {
                major * tally.hits(a) as Chips + minor * tally.hits(b) as Chips
            }
            _ => 0.,
        }
    }
}

impl<C: Category> std::fmt::Display for Solution<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<24}{:>18.2}", "total wagered", self.wagered)?;
        for (category, amount) in self.paid.iter() {
            writeln!(f, "{:<24}{:>18.2}", category, amount)?;
        }
        writeln!(f, "{:<24}{:>18.2}", "total fixed payouts", self.fixed)?;
        writeln!(f, "{:<24}{:>18.2}", "remaining to cover", self.remaining)?;
        if let Some(ratio) = self.ratio {
            writeln!(f, "{:<24}{:>18.4}", "minor/major hit ratio", ratio)?;
        }
        match self.jackpot {
            Jackpot::Single(value) => writeln!(f, "{:<24}{:>18.2}", "fair progressive", value),
            Jackpot::Dual { major, minor } => {
                writeln!(f, "{:<24}{:>18.2}", "fair major progressive", major)?;
                writeln!(f, "{:<24}{:>18.2}", "fair minor progressive", minor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackjack::Blackjack;
    use crate::blackjack::Bonus;
    use crate::holdem::Holdem;
    use crate::holdem::Premium;
    use crate::simulation::Game;

    fn tally<C: Category>(trials: Trials, hits: &[(C, Trials)]) -> Tally<C> {
        let mut tally = Tally::new();
        for (category, n) in hits {
            for _ in 0..*n {
                tally.record(Some(*category));
            }
        }
        let matched = tally.trials();
        for _ in matched..trials {
            tally.record(None);
        }
        tally
    }

    #[test]
    fn single_progressive_is_fair() {
        let tally = tally(
            1_000_000,
            &[
                (Premium::RoyalFlush, 3),
                (Premium::StraightFlush, 280),
                (Premium::FourOAK, 1_700),
                (Premium::FullHouse, 26_000),
            ],
        );
        let schedule = Holdem.schedule();
        let solution = schedule.solve(&tally);
        let expected = 1_000_000. * 5.;
        assert_eq!(solution.wagered, expected);
        assert_eq!(solution.fixed, 280. * 1500. + 1_700. * 500. + 26_000. * 50.);
        let returned = solution.progressive(&tally, &schedule) + solution.fixed;
        assert!((returned - expected).abs() < 1e-6);
    }

    #[test]
    fn single_progressive_without_hits_is_zero() {
        let tally = tally(1_000, &[(Premium::FullHouse, 20)]);
        let solution = Holdem.schedule().solve(&tally);
        assert_eq!(solution.jackpot, Jackpot::Single(0.));
        assert_eq!(single(100., 0), 0.);
    }

    #[test]
    fn dual_progressive_is_fair_and_proportional() {
        let tally = tally(
            1_000_000,
            &[
                (Bonus::MajorProgressive, 2),
                (Bonus::MinorProgressive, 7),
                (Bonus::SuitedAceJack, 300),
                (Bonus::ColoredAceJack, 290),
                (Bonus::MixedAceJack, 600),
                (Bonus::OtherBlackjack, 40_000),
            ],
        );
        let schedule = Blackjack::default().schedule();
        let solution = schedule.solve(&tally);
        let Jackpot::Dual { major, minor } = solution.jackpot else {
            panic!("blackjack has two tiers");
        };
        assert_eq!(solution.ratio, Some(3.5));
        assert!((major / minor - 3.5).abs() < 1e-12);
        let returned = solution.progressive(&tally, &schedule) + solution.fixed;
        assert!((returned - solution.wagered).abs() < 1e-6);
    }

    #[test]
    fn dual_progressive_needs_both_tiers() {
        assert_eq!(dual(1000., 0, 5), (0., 0.));
        assert_eq!(dual(1000., 5, 0), (0., 0.));
        let (major, minor) = dual(1000., 1, 4);
        assert_eq!(minor, 125.);
        assert_eq!(major, 500.);
    }
}
