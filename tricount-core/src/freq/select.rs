//! Top-N selection over frequency maps.

use crate::freq::FrequencyMap;
use smallvec::SmallVec;
use tricount_types::PhraseCount;

/// Selects the `n` most frequent phrases from `map`.
///
/// Returns `min(n, distinct phrases)` entries sorted by count descending;
/// equal counts break ties by ascending phrase order (the [`PhraseCount`]
/// ordering), so output is deterministic across runs. `n = 0` yields an
/// empty vector; `n` beyond the distinct-key count yields all entries.
///
/// When the map holds more than `n` entries, a partial sort keeps only the
/// winning prefix instead of sorting the whole map.
#[must_use]
pub fn top_n(map: &FrequencyMap, n: usize) -> Vec<PhraseCount> {
    if n == 0 || map.is_empty() {
        return Vec::new();
    }

    let mut entries: SmallVec<[PhraseCount; 64]> = map
        .iter()
        .map(|(phrase, &count)| PhraseCount::new(phrase.clone(), count))
        .collect();

    if entries.len() > n {
        entries.select_nth_unstable(n - 1);
        entries.truncate(n);
    }
    entries.sort_unstable();

    entries.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, u64)]) -> FrequencyMap {
        entries
            .iter()
            .map(|&(phrase, count)| (phrase.to_owned(), count))
            .collect()
    }

    #[test]
    fn orders_by_descending_count() {
        let top = top_n(&map(&[("a a a", 1), ("b b b", 3), ("c c c", 2)]), 3);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0], PhraseCount::new("b b b", 3));
        assert_eq!(top[1], PhraseCount::new("c c c", 2));
        assert_eq!(top[2], PhraseCount::new("a a a", 1));
    }

    #[test]
    fn bounds_result_to_n() {
        let top = top_n(&map(&[("a a a", 5), ("b b b", 4), ("c c c", 3)]), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].phrase, "a a a");
        assert_eq!(top[1].phrase, "b b b");
    }

    #[test]
    fn n_zero_yields_nothing() {
        assert!(top_n(&map(&[("a a a", 5)]), 0).is_empty());
    }

    #[test]
    fn n_beyond_distinct_keys_yields_all() {
        let top = top_n(&map(&[("a a a", 1), ("b b b", 2)]), 10);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn empty_map_yields_nothing() {
        assert!(top_n(&FrequencyMap::default(), 5).is_empty());
    }

    #[test]
    fn ties_break_alphabetically() {
        let top = top_n(&map(&[("x x x", 4), ("y y y", 4), ("z z z", 1)]), 2);

        assert_eq!(top[0], PhraseCount::new("x x x", 4));
        assert_eq!(top[1], PhraseCount::new("y y y", 4));
    }

    #[test]
    fn selection_is_deterministic_across_calls() {
        let m = map(&[("x x x", 4), ("y y y", 4), ("z z z", 1), ("w w w", 4)]);

        let first = top_n(&m, 2);
        for _ in 0..10 {
            assert_eq!(top_n(&m, 2), first);
        }
    }

    #[test]
    fn partial_sort_matches_full_sort() {
        let m: FrequencyMap = (0..500)
            .map(|i| (format!("p{i} p{i} p{i}"), (i % 17) as u64 + 1))
            .collect();

        let partial = top_n(&m, 10);

        let mut full: Vec<PhraseCount> = m
            .iter()
            .map(|(phrase, &count)| PhraseCount::new(phrase.clone(), count))
            .collect();
        full.sort();
        full.truncate(10);

        assert_eq!(partial, full);
    }
}
