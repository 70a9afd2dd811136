//! Tokens and token streams.
//!
//! A [`Token`] only records what position counting needs: its text, its byte
//! span in the input and its distance from the previous token. A
//! [`TokenStream`] yields tokens in analyzer order and, once drained, reports
//! the gap left after the last token.
//!
//! ```text
//! Input: "the quick fox and the"   (stop words removed)
//!
//!   "quick" (pos_inc=2)   ← "the" was removed before it
//!   "fox"   (pos_inc=1)
//!   end     (final_pos_inc=2)  ← "and", "the" were removed after the last token
//! ```
//!
//! # Examples
//!
//! ```
//! use kazoe::analysis::token::{Token, TokenStream};
//!
//! let stream = TokenStream::new(vec![
//!     Token::new("hello"),
//!     Token::new("world").with_position_increment(2),
//! ])
//! .with_final_position_increment(1);
//!
//! assert_eq!(stream.final_position_increment(), 1);
//! let increments: Vec<usize> = stream.map(|t| t.position_increment).collect();
//! assert_eq!(increments, vec![1, 2]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One analyzed unit of text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token text after filtering.
    pub text: String,

    /// Distance from the previous token in position space. Zero stacks the
    /// token on the previous position; more than one leaves a gap.
    pub position_increment: usize,

    /// Byte offset of the first character in the analyzed text.
    pub start_offset: usize,

    /// Byte offset one past the last character.
    pub end_offset: usize,
}

impl Token {
    /// Create a token with increment 1 and an empty span.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            position_increment: 1,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a token covering `text[start..end]` of the analyzed input.
    pub fn spanning<S: Into<String>>(text: S, start: usize, end: usize) -> Self {
        Token {
            start_offset: start,
            end_offset: end,
            ..Token::new(text)
        }
    }

    /// Replace the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Replace the text, keeping span and increment.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

/// Tokens produced by an analyzer, plus the increment emitted after the last one.
///
/// The stream is lazy and cannot be restarted.
pub struct TokenStream {
    tokens: Box<dyn Iterator<Item = Token>>,
    final_position_increment: usize,
}

impl TokenStream {
    /// Create a token stream over the given tokens with no trailing gap.
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
        I::IntoIter: 'static,
    {
        TokenStream {
            tokens: Box::new(tokens.into_iter()),
            final_position_increment: 0,
        }
    }

    /// Create a stream that yields no tokens.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Set the final position increment.
    pub fn with_final_position_increment(mut self, increment: usize) -> Self {
        self.final_position_increment = increment;
        self
    }

    /// The position increment emitted after the last token.
    pub fn final_position_increment(&self) -> usize {
        self.final_position_increment
    }

    /// Transform every token lazily, keeping the final position increment.
    pub fn map_tokens<F>(self, f: F) -> TokenStream
    where
        F: FnMut(Token) -> Token + 'static,
    {
        TokenStream {
            tokens: Box::new(self.tokens.map(f)),
            final_position_increment: self.final_position_increment,
        }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokens.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream")
            .field("final_position_increment", &self.final_position_increment)
            .finish_non_exhaustive()
    }
}
