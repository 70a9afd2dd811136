//! Tokenizer emitting every match of a regular expression.
//!
//! ```
//! use kazoe::analysis::tokenizer::{RegexTokenizer, Tokenizer};
//!
//! let tokenizer = RegexTokenizer::words().unwrap();
//! let texts: Vec<String> = tokenizer.tokenize("don't stop").unwrap().map(|t| t.text).collect();
//! assert_eq!(texts, vec!["don", "t", "stop"]);
//! ```

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{KazoeError, Result};

/// Emits one token per non-overlapping match, in input order.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    /// Runs of word characters (`\w+`).
    pub fn words() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Compile `pattern`; an invalid expression is an analysis error.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(|pattern| RegexTokenizer { pattern })
            .map_err(|e| KazoeError::analysis(format!("Invalid token pattern {pattern:?}: {e}")))
    }

    /// The source of the compiled expression.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .map(|m| Token::spanning(m.as_str(), m.start(), m.end()))
            .collect();

        Ok(TokenStream::new(tokens))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_spans() {
        let tokens: Vec<Token> = RegexTokenizer::words()
            .unwrap()
            .tokenize("fox, 42 dogs")
            .unwrap()
            .collect();

        let spans: Vec<(&str, usize, usize)> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.start_offset, t.end_offset))
            .collect();
        assert_eq!(spans, vec![("fox", 0, 3), ("42", 5, 7), ("dogs", 8, 12)]);
        assert!(tokens.iter().all(|t| t.position_increment == 1));
    }

    #[test]
    fn test_custom_pattern_skips_empty_fields() {
        let tokenizer = RegexTokenizer::with_pattern(r"[^,]+").unwrap();
        assert_eq!(tokenizer.pattern(), "[^,]+");

        let stream = tokenizer.tokenize("a,b,,c,").unwrap();
        assert_eq!(stream.final_position_increment(), 0);
        assert_eq!(stream.count(), 3);
    }

    #[test]
    fn test_invalid_pattern_is_analysis_error() {
        let err = RegexTokenizer::with_pattern("(").unwrap_err();
        assert!(err.is_analysis());
        assert!(err.to_string().contains("\"(\""));
    }
}
