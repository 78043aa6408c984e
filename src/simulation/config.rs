use super::category::Category;
use crate::Trials;
use crate::payout::Schedule;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("a run needs at least one trial")]
    Trials,
    #[error("chunk size must be at least one trial")]
    Chunk,
    #[error("a shoe needs at least one deck")]
    Decks,
    #[error("wager must be positive and finite, got {0}")]
    Wager(f64),
    #[error("payout for {category} must be non-negative and finite, got {value}")]
    Payout { category: String, value: f64 },
    #[error("{0} is both a fixed and a progressive payout")]
    Overlap(String),
    #[error("major and minor progressives must be different categories")]
    Tiers,
}

/// Everything needed to start, or restart, a run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct Config<C: Category> {
    /// total trials across all chunks
    pub trials: Trials,
    /// trials per chunk; the final chunk may be shorter
    pub chunk: Trials,
    /// `None` draws entropy from the OS
    pub seed: Option<u64>,
    /// log running totals every this many chunks
    pub report_every: usize,
    pub schedule: Schedule<C>,
}

impl<C: Category> Config<C> {
    pub fn new(trials: Trials, chunk: Trials, schedule: Schedule<C>) -> Self {
        Self {
            trials,
            chunk,
            seed: None,
            report_every: crate::REPORT_EVERY,
            schedule,
        }
    }
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Trials);
        }
        if self.chunk == 0 {
            return Err(ConfigError::Chunk);
        }
        self.schedule.validate()
    }
    /// number of chunks, counting a short final one
    pub fn chunks(&self) -> usize {
        self.trials.div_ceil(self.chunk) as usize
    }
    /// trials in the 1-based chunk `ordinal`
    pub fn size(&self, ordinal: usize) -> Trials {
        let start = (ordinal as Trials - 1) * self.chunk;
        Trials::min(self.chunk, self.trials.saturating_sub(start))
    }
    /// the random source for a whole sequential run
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
    /// an independent random source for one chunk, used when chunks do not
    /// share a stream (parallel runs and resumed runs). Seed and ordinal are
    /// mixed arithmetically, so a seeded stream is the same on every build.
    pub fn stream(&self, ordinal: usize) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(mix(seed, ordinal)),
            None => SmallRng::from_os_rng(),
        }
    }
}

/// spread consecutive ordinals across the seed space
fn mix(seed: u64, ordinal: usize) -> u64 {
    seed ^ (ordinal as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holdem::Holdem;
    use crate::simulation::Game;

    #[test]
    fn chunk_sizes_cover_trials() {
        let config = Config::new(25, 10, Holdem.schedule());
        assert_eq!(config.chunks(), 3);
        assert_eq!(config.size(1), 10);
        assert_eq!(config.size(2), 10);
        assert_eq!(config.size(3), 5);
        let total = (1..=config.chunks()).map(|i| config.size(i)).sum::<Trials>();
        assert_eq!(total, 25);
    }

    #[test]
    fn rejects_empty_runs() {
        assert_eq!(
            Config::new(0, 10, Holdem.schedule()).validate(),
            Err(ConfigError::Trials)
        );
        assert_eq!(
            Config::new(10, 0, Holdem.schedule()).validate(),
            Err(ConfigError::Chunk)
        );
        assert_eq!(Config::new(10, 10, Holdem.schedule()).validate(), Ok(()));
    }

    #[test]
    fn streams_differ_by_ordinal() {
        use rand::Rng;
        let config = Config::new(10, 10, Holdem.schedule()).seeded(3);
        let a = config.stream(1).random::<u64>();
        let b = config.stream(2).random::<u64>();
        let c = config.stream(1).random::<u64>();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn streams_are_a_fixed_function_of_seed_and_ordinal() {
        use rand::Rng;
        let config = Config::new(10, 10, Holdem.schedule()).seeded(3);
        let expected = SmallRng::seed_from_u64(3 ^ 2u64.wrapping_mul(0x9E37_79B9_7F4A_7C15)).random::<u64>();
        assert_eq!(config.stream(2).random::<u64>(), expected);
        assert_eq!(mix(3, 0), 3);
        assert_ne!(mix(3, 1), mix(3, 2));
    }
}
