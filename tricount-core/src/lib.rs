//! Streaming trigram phrase-frequency engine.
//!
//! The pipeline has two halves:
//!
//! - **Analyzer**: a streaming tokenizer that turns raw line input into
//!   lower-cased word tokens, and a 3-slot sliding window that folds those
//!   tokens into three-word phrase keys.
//! - **Freq**: the aggregator that accumulates phrase counts, plus merge and
//!   top-N selection over the resulting frequency maps.
//!
//! Everything here is pure: no I/O, no shared state. Each aggregation
//! produces its own map, maps combine by value, and selection reads a map
//! without touching it.

pub mod analyzer;
pub mod freq;

pub use analyzer::tokenizer::WordTokenizer;
pub use analyzer::window::PhraseWindow;
pub use freq::{aggregate, merge, merge_all, top_n, FrequencyMap, PhraseAggregator};
