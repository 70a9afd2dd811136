//! Token filters rewrite or drop tokens after tokenization.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A stage applied to the stream a tokenizer or a previous filter produced.
///
/// The returned stream keeps the incoming final position increment. A filter
/// that drops trailing tokens adds their increments to it.
pub trait Filter: Send + Sync {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Short name shown in debug output.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
