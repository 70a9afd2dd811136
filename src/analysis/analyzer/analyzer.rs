//! The analyzer capability.
//!
//! Everything outside `analysis` sees text analysis only through
//! [`Analyzer::token_stream`]: a field name and a text go in, a
//! [`TokenStream`] with its final position increment comes out.
//!
//! ```text
//! (field, text) → Analyzer → TokenStream → count_positions
//! ```
//!
//! # Examples
//!
//! ```
//! use kazoe::analysis::analyzer::Analyzer;
//! use kazoe::analysis::token::{Token, TokenStream};
//! use kazoe::error::Result;
//!
//! struct CommaAnalyzer;
//!
//! impl Analyzer for CommaAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         let tokens: Vec<Token> = text.split(',').map(|s| Token::new(s.trim())).collect();
//!         Ok(TokenStream::new(tokens))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "comma"
//!     }
//! }
//!
//! assert_eq!(CommaAnalyzer.token_stream("tags", "a, b").unwrap().count(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Turns text into a token stream.
///
/// Analyzers are shared by every thread parsing documents.
pub trait Analyzer: Send + Sync {
    /// Analyze `text` without regard to the field it belongs to.
    ///
    /// Fails with an analysis error when the text cannot be tokenized.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Produce the token stream for `text` indexed under `field_name`.
    ///
    /// The default ignores the field name.
    fn token_stream(&self, field_name: &str, text: &str) -> Result<TokenStream> {
        let _ = field_name;
        self.analyze(text)
    }

    /// Name used in logs and debug output.
    fn name(&self) -> &str;
}
