//! Streaming Word Tokenizer
//!
//! Converts raw text into a forward-only sequence of normalized word tokens.
//! Input arrives incrementally (typically line-by-line); tokens are emitted
//! through a callback, so no intermediate collection is built.
//!
//! ## What It Does
//!
//! Given input like `"This sentence, with commas."`, it emits each word
//! lower-cased with punctuation discarded:
//!
//! ```ignore
//! "this" "sentence" "with" "commas"
//! ```
//!
//! ## Token Rules
//!
//! A token is a maximal run of word characters: Unicode letters, combining
//! marks, apostrophe, and hyphen. Everything else (whitespace, digits,
//! punctuation, symbols, line breaks) is a boundary and is discarded.
//! Tokens are lower-cased as they accumulate, so `"SHOULDN'T"` emits as
//! `"shouldn't"` and `"  well-known  "` emits as `"well-known"`.
//!
//! ## The Input Contract
//!
//! Each `tokenize` call must cover a complete line (or any larger complete
//! chunk). The scanner flushes an in-progress word at the end of every call,
//! so a word can never span two calls; line breaks separate tokens. Phrase
//! assembly downstream keeps its own state across calls, which is how
//! phrases still span line boundaries.

/// Streaming tokenizer - splits raw text into normalized word tokens.
///
/// The tokenizer owns a reusable accumulation buffer; emitted tokens are
/// borrowed slices of that buffer, valid for the duration of the callback.
/// No per-token heap allocation happens once the buffer has warmed up.
///
/// ## Example
///
/// ```
/// use tricount_core::analyzer::tokenizer::WordTokenizer;
///
/// let mut tokenizer = WordTokenizer::new();
/// let mut words = Vec::new();
///
/// tokenizer.tokenize("Don't panic!", |token| {
///     words.push(token.to_owned());
/// });
///
/// assert_eq!(words, ["don't", "panic"]);
/// ```
#[derive(Debug, Default)]
pub struct WordTokenizer {
    buf: String,
}

impl WordTokenizer {
    /// Creates a new tokenizer.
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(32),
        }
    }

    /// Tokenizes `text` and emits each token through `emit`.
    ///
    /// The borrowed token is only valid inside the callback; callers that
    /// need to keep it must copy it out. An in-progress word is flushed at
    /// the end of the call, so the final token of a line is never lost even
    /// without a trailing boundary character.
    #[inline]
    pub fn tokenize<F>(&mut self, text: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        for ch in text.chars() {
            if is_word_char(ch) {
                for lowered in ch.to_lowercase() {
                    self.buf.push(lowered);
                }
            } else if !self.buf.is_empty() {
                emit(&self.buf);
                self.buf.clear();
            }
        }

        if !self.buf.is_empty() {
            emit(&self.buf);
            self.buf.clear();
        }
    }
}

/// Collects all tokens of `text` into owned strings.
///
/// Convenience for callers that want the materialized token list rather
/// than the streaming form; both produce identical sequences.
pub fn tokens(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    WordTokenizer::new().tokenize(text, |token| out.push(token.to_owned()));
    out
}

#[inline(always)]
fn is_word_char(c: char) -> bool {
    c == '\'' || c == '-' || c.is_alphabetic() || is_combining_mark(c)
}

/// Combining marks count as word characters so that decomposed accented
/// letters (`e` + U+0301) stay inside their token.
#[inline(always)]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'   // Combining Diacritical Marks
        | '\u{0483}'..='\u{0489}' // Cyrillic
        | '\u{0591}'..='\u{05C7}' // Hebrew points
        | '\u{0610}'..='\u{061A}' // Arabic marks
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{1AB0}'..='\u{1AFF}' // Extended
        | '\u{1DC0}'..='\u{1DFF}' // Supplement
        | '\u{20D0}'..='\u{20FF}' // For Symbols
        | '\u{FE20}'..='\u{FE2F}' // Half Marks
    )
}
