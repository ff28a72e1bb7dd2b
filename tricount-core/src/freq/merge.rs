//! Frequency map merging.

use crate::freq::FrequencyMap;

/// Merges two frequency maps, summing counts for shared phrases.
///
/// A phrase absent from one input counts as zero there. Merging is
/// commutative and associative, and merging with an empty map yields a map
/// equal to the other input. The smaller map is drained into the larger to
/// reuse its allocation; the result's contents never depend on argument
/// order.
#[must_use]
pub fn merge(a: FrequencyMap, b: FrequencyMap) -> FrequencyMap {
    let (mut into, from) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    for (phrase, count) in from {
        *into.entry(phrase).or_insert(0) += count;
    }

    into
}

/// Merges any number of frequency maps by repeated pairwise merge.
#[must_use]
pub fn merge_all<I>(maps: I) -> FrequencyMap
where
    I: IntoIterator<Item = FrequencyMap>,
{
    maps.into_iter().fold(FrequencyMap::default(), merge)
}
