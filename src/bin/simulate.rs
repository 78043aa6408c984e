//! Simulate Binary
//!
//! Deals a side bet for many trials, then solves the progressive payouts
//! that make it fair. Type "Q" + Enter to stop after the current chunk.
//!
//! Subcommands: blackjack, holdem

use clap::Parser;
use sidebet::report::Report;
use sidebet::simulation::Aggregator;
use sidebet::simulation::Config;
use sidebet::simulation::Game;
use sidebet::*;

#[derive(clap::Args)]
struct Run {
    #[arg(long, default_value_t = TRIALS, help = "Total trials to deal")]
    trials: Trials,
    #[arg(long, help = "Trials per chunk [default: per game]")]
    chunk: Option<Trials>,
    #[arg(long, help = "Seed for a reproducible run")]
    seed: Option<u64>,
    #[arg(long, help = "Side-bet stake per trial [default: 5]")]
    wager: Option<Chips>,
    #[arg(long, default_value_t = REPORT_EVERY, help = "Log running totals every N chunks")]
    report_every: usize,
    #[arg(long, help = "Simulate chunks concurrently on independent streams")]
    parallel: bool,
    #[arg(long, help = "Print the final report as JSON on stdout")]
    json: bool,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Simulate {
    #[command(about = "Blackjack A-J side bet with major and minor progressives", alias = "bj")]
    Blackjack {
        #[command(flatten)]
        run: Run,
        #[arg(long, default_value_t = DECKS, help = "Decks in the shoe")]
        decks: usize,
    },
    #[command(about = "Ultimate Texas Hold'em premium-hand side bet", alias = "uth")]
    Holdem {
        #[command(flatten)]
        run: Run,
    },
}

impl Run {
    fn simulate<G>(self, game: G, chunk: Trials) -> anyhow::Result<()>
    where
        G: Game + Clone,
    {
        let schedule = match self.wager {
            Some(wager) => game.schedule().staking(wager),
            None => game.schedule(),
        };
        let config = Config {
            seed: self.seed,
            report_every: self.report_every,
            ..Config::new(self.trials, self.chunk.unwrap_or(chunk), schedule.clone())
        };
        let mut aggregator = Aggregator::new(game, config)?;
        let summary = match self.parallel {
            true => aggregator.parallel(interrupted)?,
            false => aggregator.run(interrupted)?,
        };
        let report = Report::new(summary, &schedule);
        log::info!("results\n{}", report);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    log();
    brb();
    match Simulate::parse() {
        Simulate::Blackjack { run, decks } => run.simulate(blackjack::Blackjack::new(decks)?, BLACKJACK_CHUNK),
        Simulate::Holdem { run } => run.simulate(holdem::Holdem, HOLDEM_CHUNK),
    }
}
