//! Unicode lowercasing.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases token text. Increments and spans are untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(tokens.map_tokens(|token| {
            if token.text.chars().any(char::is_uppercase) {
                let lowered = token.text.to_lowercase();
                token.with_text(lowered)
            } else {
                token
            }
        }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercases_and_keeps_positions() {
        let tokens = TokenStream::new(vec![
            Token::spanning("Ärger", 0, 6),
            Token::spanning("OVER", 7, 11).with_position_increment(2),
            Token::spanning("ok", 12, 14),
        ])
        .with_final_position_increment(1);

        let stream = LowercaseFilter::new().filter(tokens).unwrap();
        assert_eq!(stream.final_position_increment(), 1);

        let tokens: Vec<Token> = stream.collect();
        assert_eq!(
            tokens,
            vec![
                Token::spanning("ärger", 0, 6),
                Token::spanning("over", 7, 11).with_position_increment(2),
                Token::spanning("ok", 12, 14),
            ]
        );
    }
}
