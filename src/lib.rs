pub mod blackjack;
pub mod cards;
pub mod holdem;
pub mod payout;
pub mod report;
pub mod simulation;
pub mod stats;

/// A count of trials, or a global trial index.
pub type Trials = u64;
/// An amount of money, in units of the table minimum.
pub type Chips = f64;

// ============================================================================
// RUN DEFAULTS
// ============================================================================
/// Trials per run.
pub const TRIALS: Trials = 100_000_000;
/// Trials per chunk for the blackjack bet.
pub const BLACKJACK_CHUNK: Trials = 10_000_000;
/// Trials per chunk for the Hold'em bet. Seven-card hands are dealt from a
/// rebuilt deck each trial, so chunks are kept smaller.
pub const HOLDEM_CHUNK: Trials = 1_000_000;
/// Decks in the blackjack shoe.
pub const DECKS: usize = 6;
/// Running totals are logged every this many chunks.
pub const REPORT_EVERY: usize = 10;

// ============================================================================
// PAY TABLES
// Totals returned per wager, as quoted on the felt.
// ============================================================================
/// Side-bet stake per trial.
pub const WAGER: Chips = 5.0;
pub const SUITED_ACE_JACK: Chips = 350.0;
pub const COLORED_ACE_JACK: Chips = 250.0;
pub const MIXED_ACE_JACK: Chips = 100.0;
pub const OTHER_BLACKJACK: Chips = 25.0;
pub const COMMUNITY_ROYAL: Chips = 5000.0;
pub const STRAIGHT_FLUSH: Chips = 1500.0;
pub const FOUR_OAK: Chips = 500.0;
pub const FULL_HOUSE: Chips = 50.0;

// ============================================================================
// SESSIONS
// How long a player actually waits, at a realistic pace of play.
// ============================================================================
/// Side-bet hands dealt per hour at a full table.
pub const HANDS_PER_HOUR: f64 = 20.0;
/// Hours in one sitting.
pub const HOURS_PER_SESSION: f64 = 3.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Global interrupt flag for graceful shutdown between chunks.
#[cfg(feature = "cli")]
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional deadline from the SIM_DURATION env var.
#[cfg(feature = "cli")]
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
/// Check if a stop was requested (via stdin "Q") or the deadline passed.
#[cfg(feature = "cli")]
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}
/// No-op interrupt check when the cli feature is disabled.
#[cfg(not(feature = "cli"))]
pub fn interrupted() -> bool {
    false
}
/// Register graceful interrupt handler. Type "Q" + Enter to stop after the
/// current chunk. Optionally set SIM_DURATION (e.g. "2h", "30m") for timed runs.
#[cfg(feature = "cli")]
pub fn brb() {
    if let Ok(duration) = std::env::var("SIM_DURATION") {
        if let Some(deadline) = parse_duration(&duration) {
            let _ = DEADLINE.set(std::time::Instant::now() + deadline);
            log::info!("simulation will stop after {}", duration);
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current chunk...");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
#[cfg(feature = "cli")]
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}
