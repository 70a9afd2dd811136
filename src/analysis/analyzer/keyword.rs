//! Analyzer that keeps the whole input as one token.
//!
//! A count over a keyword-analyzed value is 1 for any non-empty input and 0
//! for the empty string.
//!
//! ```
//! use kazoe::analysis::analyzer::{Analyzer, KeywordAnalyzer};
//!
//! let tokens: Vec<_> = KeywordAnalyzer.analyze("user-123 abc").unwrap().collect();
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "user-123 abc");
//! ```

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordAnalyzer;

impl KeywordAnalyzer {
    pub fn new() -> Self {
        KeywordAnalyzer
    }
}

impl Analyzer for KeywordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        if text.is_empty() {
            return Ok(TokenStream::empty());
        }
        Ok(TokenStream::new([Token::spanning(text, 0, text.len())]))
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
