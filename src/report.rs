use crate::Chips;
use crate::Trials;
use crate::payout::Schedule;
use crate::payout::Solution;
use crate::simulation::Category;
use crate::simulation::Summary;
use crate::stats::Dispersion;
use crate::stats::Horizon;
use crate::stats::Sessions;
use crate::stats::WaitSummary;

/// What a run found for one category.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct Line<C: Category> {
    pub category: C,
    pub hits: Trials,
    pub frequency: f64,
    /// the "1 in X" figure
    pub odds: Option<f64>,
    /// fixed payout, `None` for progressive tiers
    pub payout: Option<Chips>,
    pub waits: Option<WaitSummary>,
    pub dispersion: Option<Dispersion>,
    /// the expected wait at the table
    pub horizon: Option<Horizon>,
    /// gaps lost between independently simulated chunks
    pub severed: Trials,
}

/// The final word on a run: frequencies, wait statistics, and the fair
/// progressive payouts they imply.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct Report<C: Category> {
    pub trials: Trials,
    pub chunks: usize,
    pub interrupted: bool,
    pub wager: Chips,
    pub lines: Vec<Line<C>>,
    pub solution: Solution<C>,
}

impl<C: Category> Report<C> {
    pub fn new(summary: &Summary<C>, schedule: &Schedule<C>) -> Self {
        let sessions = Sessions::default();
        let lines = C::all()
            .iter()
            .map(|&category| {
                let odds = summary.tally.odds(category);
                Line {
                    category,
                    hits: summary.tally.hits(category),
                    frequency: summary.tally.frequency(category),
                    odds,
                    payout: schedule.fixed(category),
                    waits: WaitSummary::new(summary.waits.gaps(category)),
                    dispersion: Dispersion::new(&summary.snapshots, category),
                    horizon: odds.map(|wait| sessions.horizon(wait)),
                    severed: summary.severed(category),
                }
            })
            .collect();
        Self {
            trials: summary.trials(),
            chunks: summary.chunks(),
            interrupted: summary.interrupted,
            wager: schedule.wager,
            solution: schedule.solve(&summary.tally),
            lines,
        }
    }
    pub fn line(&self, category: C) -> Option<&Line<C>> {
        self.lines.iter().find(|l| l.category == category)
    }
}

impl<C: Category> std::fmt::Display for Report<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} trials in {} chunks", self.trials, self.chunks)?;
        if self.interrupted {
            writeln!(f, "interrupted before the planned trial count")?;
        }
        writeln!(
            f,
            "{:<20}{:>12}{:>16}{:>14}{:>14}{:>14}",
            "category", "hits", "1 in", "mean wait", "95% low", "95% high"
        )?;
        for line in self.lines.iter() {
            let odds = line.odds.map_or("-".to_string(), |x| format!("{:.1}", x));
            let (mean, lower, upper) = line.waits.map_or(
                ("-".to_string(), "-".to_string(), "-".to_string()),
                |w| (format!("{:.0}", w.mean), format!("{:.0}", w.lower), format!("{:.0}", w.upper)),
            );
            writeln!(
                f,
                "{:<20}{:>12}{:>16}{:>14}{:>14}{:>14}",
                line.category, line.hits, odds, mean, lower, upper
            )?;
        }
        for line in self.lines.iter() {
            if let Some(horizon) = line.horizon {
                writeln!(
                    f,
                    "{:<20} every {:.1} sessions, {:.2} years weekly, {:.2} years daily",
                    line.category, horizon.sessions, horizon.weekly, horizon.daily
                )?;
            }
        }
        for line in self.lines.iter().filter(|l| l.severed > 0) {
            writeln!(
                f,
                "{:<20} {} gaps span parallel chunk seams and are not logged",
                line.category, line.severed
            )?;
        }
        write!(f, "{}", self.solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackjack::Blackjack;
    use crate::blackjack::Bonus;
    use crate::simulation::Aggregator;
    use crate::simulation::Config;
    use crate::simulation::Game;

    #[test]
    fn report_covers_every_category() {
        let game = Blackjack::default();
        let config = Config::new(40_000, 10_000, game.schedule()).seeded(5);
        let schedule = config.schedule.clone();
        let mut aggregator = Aggregator::new(game, config).unwrap();
        let summary = aggregator.run(|| false).unwrap();
        let report = Report::new(summary, &schedule);
        assert_eq!(report.trials, 40_000);
        assert_eq!(report.chunks, 4);
        assert_eq!(report.lines.len(), 6);
        let other = report.line(Bonus::OtherBlackjack).unwrap();
        assert!(other.hits > 0);
        assert_eq!(other.payout, Some(25.));
        assert_eq!(other.dispersion.map(|d| d.chunks), Some(4));
        assert!(other.waits.is_some());
        assert!(other.horizon.is_some());
        assert_eq!(report.line(Bonus::MajorProgressive).unwrap().payout, None);
        assert!(!report.to_string().is_empty());
    }
}
