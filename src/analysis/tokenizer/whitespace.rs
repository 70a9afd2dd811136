//! Tokenizer splitting on Unicode whitespace.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Emits every maximal run of non-whitespace characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut run_start = None;

        for (offset, ch) in text.char_indices() {
            match (run_start, ch.is_whitespace()) {
                (None, false) => run_start = Some(offset),
                (Some(start), true) => {
                    tokens.push(Token::spanning(&text[start..offset], start, offset));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            tokens.push(Token::spanning(&text[start..], start, text.len()));
        }

        Ok(TokenStream::new(tokens))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        WhitespaceTokenizer::new()
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(texts("Hello,  world\tagain\n"), vec!["Hello,", "world", "again"]);
    }

    #[test]
    fn test_repeated_words_have_distinct_offsets() {
        let tokens: Vec<Token> = WhitespaceTokenizer::new()
            .tokenize(" to be or to be ")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].start_offset, 1);
        assert_eq!(tokens[3].text, "to");
        assert_eq!(tokens[3].start_offset, 10);
        assert_eq!(tokens[4].end_offset, 15);
    }

    #[test]
    fn test_multibyte_offsets() {
        let tokens: Vec<Token> = WhitespaceTokenizer::new()
            .tokenize("数え る")
            .unwrap()
            .collect();
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (7, 10));
    }

    #[test]
    fn test_blank_input() {
        assert!(texts("").is_empty());
        assert!(texts(" \n\t\u{3000}").is_empty());
    }
}
