//! Incremental phrase-frequency aggregation.

use crate::analyzer::tokenizer::WordTokenizer;
use crate::analyzer::window::PhraseWindow;
use crate::freq::FrequencyMap;

/// Streaming aggregator combining tokenizer, window, and frequency map.
///
/// Feed it text in any number of chunks (typically lines); every completed
/// 3-token window increments that phrase's count. The window survives
/// between feeds, so phrases span line boundaries even though individual
/// words never do.
///
/// Each aggregator owns its map exclusively until [`finish`] hands it over,
/// which is what makes concurrent per-source aggregation safe: nothing is
/// shared until the merge step, and merge inputs are consumed by value.
///
/// [`finish`]: PhraseAggregator::finish
///
/// # Example
///
/// ```
/// use tricount_core::PhraseAggregator;
///
/// let mut agg = PhraseAggregator::new();
/// agg.feed("this sentence with its");
/// agg.feed("line endings");
/// let counts = agg.finish();
///
/// assert_eq!(counts.get("its line endings"), Some(&1));
/// ```
#[derive(Debug, Default)]
pub struct PhraseAggregator {
    tokenizer: WordTokenizer,
    window: PhraseWindow,
    counts: FrequencyMap,
}

impl PhraseAggregator {
    /// Creates a new, empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk of text (a line, or any larger complete chunk).
    ///
    /// Chunk boundaries act as token separators, never phrase separators.
    pub fn feed(&mut self, text: &str) {
        let Self {
            tokenizer,
            window,
            counts,
        } = self;

        tokenizer.tokenize(text, |token| {
            if let Some(phrase) = window.push(token) {
                if let Some(count) = counts.get_mut(phrase) {
                    *count += 1;
                } else {
                    counts.insert(phrase.to_owned(), 1);
                }
            }
        });
    }

    /// Number of distinct phrases counted so far.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no phrase has been counted yet.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Consumes the aggregator and returns the frequency map.
    #[must_use]
    pub fn finish(self) -> FrequencyMap {
        self.counts
    }
}

/// Aggregates a complete text in one call.
///
/// Equivalent to feeding the text to a fresh [`PhraseAggregator`] and
/// finishing it. Inputs with fewer than three tokens yield an empty map.
pub fn aggregate(text: &str) -> FrequencyMap {
    let mut agg = PhraseAggregator::new();
    agg.feed(text);
    agg.finish()
}
