//! Canned analyzer that replays a fixed token script.
//!
//! The analyzer ignores its input and returns the same tokens and the same
//! final position increment every time it is asked. It stands in for a real
//! analysis chain wherever a test needs exact control over increments.
//!
//! # Examples
//!
//! ```
//! use kazoe::analysis::analyzer::{Analyzer, CannedAnalyzer};
//!
//! let analyzer = CannedAnalyzer::from_increments([0, 1, 2]).with_final_position_increment(4);
//!
//! let stream = analyzer.analyze("ignored").unwrap();
//! assert_eq!(stream.final_position_increment(), 4);
//! let increments: Vec<usize> = stream.map(|t| t.position_increment).collect();
//! assert_eq!(increments, vec![0, 1, 2]);
//! ```

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// An analyzer that yields a pre-scripted token sequence for any input.
#[derive(Clone, Debug, Default)]
pub struct CannedAnalyzer {
    tokens: Vec<Token>,
    final_position_increment: usize,
}

impl CannedAnalyzer {
    /// Create a canned analyzer replaying `tokens`.
    pub fn new(tokens: Vec<Token>) -> Self {
        CannedAnalyzer {
            tokens,
            final_position_increment: 0,
        }
    }

    /// Create a canned analyzer whose tokens carry the given increments, in order.
    pub fn from_increments<I>(increments: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let tokens = increments
            .into_iter()
            .enumerate()
            .map(|(i, increment)| Token::new(format!("t{i}")).with_position_increment(increment))
            .collect();
        Self::new(tokens)
    }

    /// Set the final position increment emitted after the last token.
    pub fn with_final_position_increment(mut self, increment: usize) -> Self {
        self.final_position_increment = increment;
        self
    }

    /// The scripted tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl Analyzer for CannedAnalyzer {
    fn analyze(&self, _text: &str) -> Result<TokenStream> {
        Ok(TokenStream::new(self.tokens.clone())
            .with_final_position_increment(self.final_position_increment))
    }

    fn name(&self) -> &str {
        "canned"
    }
}
