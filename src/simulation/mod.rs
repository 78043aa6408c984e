//! The trial loop and everything it accumulates.
//!
//! - [`Engine`]: deals, classifies and measures one stretch of trials
//! - [`Aggregator`]: splits a run into chunks and merges them
//! - [`Tally`], [`WaitLog`], [`LastHits`], [`Snapshot`]: running state
//! - [`Summary`]: the merged result of a run
pub mod aggregator;
pub use aggregator::*;

pub mod category;
pub use category::*;

pub mod config;
pub use config::*;

pub mod engine;
pub use engine::*;

pub mod failure;
pub use failure::*;

pub mod game;
pub use game::*;

pub mod snapshot;
pub use snapshot::*;

pub mod summary;
pub use summary::*;

pub mod tally;
pub use tally::*;

pub mod waits;
pub use waits::*;

#[cfg(test)]
mod tests;
