//! Text analysis module for Kazoe.
//!
//! This module provides tokenization, token filtering, analysis pipelines and
//! the position counter that turns an analyzed token stream into a number.

pub mod analyzer;
pub mod position;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
