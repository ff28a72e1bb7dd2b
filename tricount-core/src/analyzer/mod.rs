//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Tokenizer**: Splits raw text into normalized word tokens
//! - **Window**: Folds tokens into 3-word sliding phrase keys

pub mod tokenizer;
pub mod window;

pub use tokenizer::WordTokenizer;
pub use window::PhraseWindow;
