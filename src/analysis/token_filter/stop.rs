//! Stop-word removal that preserves the position space.
//!
//! A dropped token's increment moves onto the next kept token. Increments of
//! tokens dropped after the last kept token move onto the stream's final
//! position increment, so counting with increments sees every original word.
//!
//! ```
//! use kazoe::analysis::token::{Token, TokenStream};
//! use kazoe::analysis::token_filter::{Filter, StopFilter};
//!
//! let tokens = TokenStream::new(["the", "quick", "brown", "and"].map(Token::new));
//!
//! let stream = StopFilter::english().filter(tokens).unwrap();
//! assert_eq!(stream.final_position_increment(), 1);
//!
//! let kept: Vec<(String, usize)> = stream.map(|t| (t.text, t.position_increment)).collect();
//! assert_eq!(kept, vec![("quick".to_string(), 2), ("brown".to_string(), 1)]);
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// English stop words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static ENGLISH: LazyLock<Arc<AHashSet<String>>> = LazyLock::new(|| {
    Arc::new(ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect())
});

/// Drops tokens whose text is in a fixed word set.
///
/// Matching is exact, so it normally runs after [`LowercaseFilter`](super::LowercaseFilter).
#[derive(Clone, Debug)]
pub struct StopFilter {
    words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Stop on the given words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Stop on [`ENGLISH_STOP_WORDS`].
    pub fn english() -> Self {
        StopFilter {
            words: Arc::clone(&ENGLISH),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut pending = 0usize;
        let trailing = tokens.final_position_increment();
        let mut kept: Vec<Token> = Vec::new();

        for token in tokens {
            if self.is_stop_word(&token.text) {
                pending = pending.saturating_add(token.position_increment);
                continue;
            }
            let increment = token.position_increment.saturating_add(pending);
            pending = 0;
            kept.push(token.with_position_increment(increment));
        }

        Ok(TokenStream::new(kept).with_final_position_increment(trailing.saturating_add(pending)))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(filter: &StopFilter, stream: TokenStream) -> (Vec<(String, usize)>, usize) {
        let stream = filter.filter(stream).unwrap();
        let trailing = stream.final_position_increment();
        (
            stream.map(|t| (t.text, t.position_increment)).collect(),
            trailing,
        )
    }

    fn words(input: &[&str]) -> TokenStream {
        TokenStream::new(input.iter().copied().map(Token::new).collect::<Vec<_>>())
    }

    #[test]
    fn test_gaps_move_to_next_kept_token() {
        let filter = StopFilter::new(["or", "and"]);
        let (kept, trailing) = run(&filter, words(&["cats", "and", "or", "dogs"]));

        assert_eq!(kept, vec![("cats".to_string(), 1), ("dogs".to_string(), 3)]);
        assert_eq!(trailing, 0);
    }

    #[test]
    fn test_existing_gaps_are_kept() {
        let filter = StopFilter::new(["x"]);
        let stream = TokenStream::new(vec![
            Token::new("x").with_position_increment(2),
            Token::new("y").with_position_increment(0),
        ]);

        let (kept, _) = run(&filter, stream);
        assert_eq!(kept, vec![("y".to_string(), 2)]);
    }

    #[test]
    fn test_trailing_stop_words_become_final_increment() {
        let input = words(&["fox", "and", "the"]).with_final_position_increment(1);
        let (kept, trailing) = run(&StopFilter::english(), input);

        assert_eq!(kept.len(), 1);
        assert_eq!(trailing, 3);
    }

    #[test]
    fn test_only_stop_words() {
        let (kept, trailing) = run(&StopFilter::english(), words(&["the", "a", "an"]));
        assert!(kept.is_empty());
        assert_eq!(trailing, 3);
    }

    #[test]
    fn test_english_list() {
        let filter = StopFilter::english();
        assert_eq!(filter.len(), ENGLISH_STOP_WORDS.len());
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("The"));
        assert!(StopFilter::new(Vec::<String>::new()).is_empty());
    }
}
