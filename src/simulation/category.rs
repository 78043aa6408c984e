use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// A closed set of mutually exclusive trial outcomes for one game.
///
/// Implementors are plain fieldless enums. `all()` lists every variant in
/// classifier priority order, which is also the order tallies and reports
/// iterate in.
pub trait Category:
    Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + serde::Serialize
    + serde::de::DeserializeOwned
    + 'static
{
    fn all() -> &'static [Self];
}
