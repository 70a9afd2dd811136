//! Tokenizers split raw text into tokens.
//!
//! A tokenizer never leaves gaps: every token it emits advances the position
//! by one and the final increment is zero. Gaps only appear once filters drop
//! tokens.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// First stage of an analysis pipeline.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Short name shown in debug output.
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod whitespace;

pub use self::regex::RegexTokenizer;
pub use self::whitespace::WhitespaceTokenizer;
