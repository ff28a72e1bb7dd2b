//! Sliding phrase window.
//!
//! Folds a token stream into three-word phrase keys using a bounded 3-slot
//! buffer. The window is transient aggregation state; it never appears in
//! any result.

/// A 3-slot sliding window over a token stream.
///
/// Each pushed token either fills the window or rotates it. From the third
/// token onward, every push yields the phrase key of the three most recent
/// tokens, joined by single spaces. A stream of fewer than three tokens
/// never yields anything.
///
/// Slot strings and the key buffer are reused across pushes, so a warmed-up
/// window allocates nothing per token.
///
/// # Example
///
/// ```
/// use tricount_core::analyzer::window::PhraseWindow;
///
/// let mut window = PhraseWindow::new();
/// assert_eq!(window.push("the"), None);
/// assert_eq!(window.push("quick"), None);
/// assert_eq!(window.push("brown"), Some("the quick brown"));
/// assert_eq!(window.push("fox"), Some("quick brown fox"));
/// ```
#[derive(Debug, Default)]
pub struct PhraseWindow {
    slots: [String; 3],
    filled: usize,
    key: String,
}

impl PhraseWindow {
    /// Creates a new, empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a token, returning the completed phrase key once the window
    /// holds three tokens.
    ///
    /// The borrowed key is only valid until the next push; callers that
    /// need to keep it must copy it out.
    #[inline]
    pub fn push(&mut self, token: &str) -> Option<&str> {
        if self.filled < 3 {
            self.slots[self.filled].clear();
            self.slots[self.filled].push_str(token);
            self.filled += 1;
            if self.filled < 3 {
                return None;
            }
        } else {
            self.slots.rotate_left(1);
            self.slots[2].clear();
            self.slots[2].push_str(token);
        }

        self.key.clear();
        self.key.push_str(&self.slots[0]);
        self.key.push(' ');
        self.key.push_str(&self.slots[1]);
        self.key.push(' ');
        self.key.push_str(&self.slots[2]);
        Some(&self.key)
    }

    /// Number of tokens currently held, at most 3.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Returns `true` if no tokens have been pushed yet.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Empties the window for reuse on a fresh token stream.
    pub fn clear(&mut self) {
        self.filled = 0;
    }
}
