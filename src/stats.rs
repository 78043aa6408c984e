//! Numeric summaries of a finished run.
//!
//! Everything here is a pure function of a [`Summary`](crate::simulation::Summary)'s
//! pieces: wait gaps, chunk snapshots, and hit odds.
use crate::Trials;
use crate::simulation::Category;
use crate::simulation::Snapshot;

/// Linearly interpolated percentile of sorted values, `p` in `[0, 100]`.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = p.clamp(0., 100.) / 100. * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            let weight = rank - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * weight
        }
    }
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Distribution of the gaps between consecutive hits of one category.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaitSummary {
    pub count: usize,
    pub min: Trials,
    pub max: Trials,
    pub mean: f64,
    pub median: f64,
    /// population standard deviation
    pub std: f64,
    /// 2.5th percentile
    pub lower: f64,
    /// 97.5th percentile
    pub upper: f64,
}

impl WaitSummary {
    /// `None` when there are no gaps, i.e. fewer than two hits.
    pub fn new(gaps: &[Trials]) -> Option<Self> {
        let mut sorted = gaps.iter().map(|&g| g as f64).collect::<Vec<f64>>();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);
        let mean = mean(&sorted);
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / sorted.len() as f64;
        Some(Self {
            count: sorted.len(),
            min: gaps.iter().copied().min().unwrap_or_default(),
            max: gaps.iter().copied().max().unwrap_or_default(),
            mean,
            median: percentile(&sorted, 50.),
            std: variance.sqrt(),
            lower: percentile(&sorted, 2.5),
            upper: percentile(&sorted, 97.5),
        })
    }
}

/// How one category's hit count varies from chunk to chunk.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dispersion {
    pub chunks: usize,
    /// mean hits per chunk
    pub mean: f64,
    /// sample variance of hits per chunk
    pub variance: f64,
    pub std: f64,
    pub min: Trials,
    pub max: Trials,
    /// chunk size over chunk hits, for chunks that hit at all
    pub per_hit: Option<Interval>,
}

/// A mean with its central 95% range.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    pub fn new(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);
        Some(Self {
            mean: mean(&sorted),
            lower: percentile(&sorted, 2.5),
            upper: percentile(&sorted, 97.5),
        })
    }
}

impl Dispersion {
    /// `None` without any snapshots.
    pub fn new<C: Category>(snapshots: &[Snapshot<C>], category: C) -> Option<Self> {
        let hits = snapshots
            .iter()
            .map(|s| s.tally().hits(category))
            .collect::<Vec<Trials>>();
        let counts = hits.iter().map(|&h| h as f64).collect::<Vec<f64>>();
        let n = counts.len();
        if n == 0 {
            return None;
        }
        let mean = mean(&counts);
        let squares = counts.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
        let variance = match n {
            1 => 0.,
            n => squares / (n - 1) as f64,
        };
        let per_hit = snapshots
            .iter()
            .map(|s| (s.tally().trials(), s.tally().hits(category)))
            .filter(|(_, hits)| *hits > 0)
            .map(|(trials, hits)| trials as f64 / hits as f64)
            .collect::<Vec<f64>>();
        Some(Self {
            chunks: n,
            mean,
            variance,
            std: variance.sqrt(),
            min: hits.iter().copied().min().unwrap_or_default(),
            max: hits.iter().copied().max().unwrap_or_default(),
            per_hit: Interval::new(&per_hit),
        })
    }
}

/// A wait in trials, restated as real time at the table.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Horizon {
    pub sessions: f64,
    /// years playing one session a week
    pub weekly: f64,
    /// years playing two sessions a week
    pub twice_weekly: f64,
    /// years playing every day
    pub daily: f64,
}

/// Pace of play: how many side-bet hands one sitting deals.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sessions {
    pub hands: f64,
}

impl Default for Sessions {
    fn default() -> Self {
        Self {
            hands: crate::HANDS_PER_HOUR * crate::HOURS_PER_SESSION,
        }
    }
}

impl Sessions {
    pub fn sessions(&self, wait: f64) -> f64 {
        wait / self.hands
    }
    /// years to wait at `per_week` sessions a week
    pub fn years(&self, wait: f64, per_week: f64) -> f64 {
        self.sessions(wait) / (per_week * crate::WEEKS_PER_YEAR)
    }
    pub fn horizon(&self, wait: f64) -> Horizon {
        Horizon {
            sessions: self.sessions(wait),
            weekly: self.years(wait, 1.),
            twice_weekly: self.years(wait, 2.),
            daily: self.sessions(wait) / crate::DAYS_PER_YEAR,
        }
    }
}
