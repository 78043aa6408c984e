//! Fair progressive payouts.
//!
//! Given how often each category hit, the progressive tiers must return
//! whatever the fixed payouts leave of the wagered pool:
//!
//! `remaining = trials × wager − Σ hits(c) × fixed(c)`
//!
//! A single tier takes all of it. Two tiers split it evenly, so that
//! `major × major hits = minor × minor hits`.
pub mod schedule;
pub use schedule::*;

pub mod solver;
pub use solver::*;
