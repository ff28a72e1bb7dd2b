//! Phrase-frequency accumulation, merging, and selection.
//!
//! Data flow: token stream -> [`PhraseAggregator`] -> per-source
//! [`FrequencyMap`] -> [`merge`] -> aggregate map -> [`top_n`] -> ordered
//! results.
//!
//! Ownership:
//! - Each aggregation owns its map until [`PhraseAggregator::finish`].
//! - [`merge`] consumes both inputs and returns a fresh value.
//! - [`top_n`] only reads the map it is given.
//!
//! Nothing here locks, because nothing here shares.

mod aggregator;
mod merge;
mod select;

pub use aggregator::{aggregate, PhraseAggregator};
pub use merge::{merge, merge_all};
pub use select::top_n;

use rustc_hash::FxHashMap;
use tricount_types::Count;

/// Mapping from phrase key to occurrence count.
///
/// Every present key has count >= 1; absence means zero occurrences.
pub type FrequencyMap = FxHashMap<String, Count>;
