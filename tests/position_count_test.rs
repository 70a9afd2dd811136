//! Integration tests for position counting.

use std::sync::Arc;

use kazoe::analysis::analyzer::{
    Analyzer, AnalyzerRegistry, CannedAnalyzer, KeywordAnalyzer, PerFieldAnalyzer,
    PipelineAnalyzer,
};
use kazoe::analysis::position::{CountingMode, count_positions};
use kazoe::analysis::token::TokenStream;
use kazoe::error::{KazoeError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

fn count_both(analyzer: &dyn Analyzer, field: &str, text: &str) -> Result<(usize, usize)> {
    Ok((
        count_positions(analyzer, field, text, CountingMode::WithIncrements)?,
        count_positions(analyzer, field, text, CountingMode::WithoutIncrements)?,
    ))
}

#[test]
fn test_shuffled_increments_count_the_same() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x6b61_7a6f_65);
    let mut increments = vec![0, 1, 2];

    for _ in 0..50 {
        increments.shuffle(&mut rng);
        let analyzer = CannedAnalyzer::from_increments(increments.clone())
            .with_final_position_increment(4);

        assert_eq!(
            count_both(&analyzer, "body", "")?,
            (7, 2),
            "increments {increments:?}"
        );
    }

    Ok(())
}

#[test]
fn test_random_streams_keep_mode_ordering() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);

    for len in 0..40 {
        let mut increments: Vec<usize> = (0..len).map(|i| i % 4).collect();
        increments.shuffle(&mut rng);
        let analyzer = CannedAnalyzer::from_increments(increments.clone())
            .with_final_position_increment(len % 3);

        let (with, without) = count_both(&analyzer, "body", "")?;
        assert!(with >= without);
        assert_eq!(without, increments.iter().filter(|&&i| i > 0).count());
        assert_eq!(with, increments.iter().sum::<usize>() + len % 3);
    }

    Ok(())
}

#[test]
fn test_empty_text_counts_zero() -> Result<()> {
    let registry = AnalyzerRegistry::with_builtin()?;

    for name in registry.names() {
        let analyzer = registry.resolve(name)?;
        assert_eq!(count_both(analyzer.as_ref(), "body", "")?, (0, 0), "analyzer {name}");
    }

    Ok(())
}

#[test]
fn test_stop_word_gaps() -> Result<()> {
    let analyzer = PipelineAnalyzer::standard()?;

    assert_eq!(count_both(&analyzer, "body", "the quick fox and the")?, (5, 2));
    assert_eq!(count_both(&analyzer, "body", "the and of")?, (3, 0));

    Ok(())
}

#[test]
fn test_field_name_reaches_the_analyzer() -> Result<()> {
    let analyzer = PerFieldAnalyzer::new(Arc::new(PipelineAnalyzer::standard()?))
        .with_field("tag", Arc::new(KeywordAnalyzer::new()));

    let text = "the quick fox and the";
    assert_eq!(count_both(&analyzer, "tag", text)?, (1, 1));
    assert_eq!(count_both(&analyzer, "body", text)?, (5, 2));

    Ok(())
}

struct BrokenAnalyzer;

impl Analyzer for BrokenAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        Err(KazoeError::analysis(format!("cannot analyze {text:?}")))
    }

    fn name(&self) -> &str {
        "broken"
    }
}

#[test]
fn test_analysis_failure_is_reported() {
    for mode in [CountingMode::WithIncrements, CountingMode::WithoutIncrements] {
        let err = count_positions(&BrokenAnalyzer, "body", "text", mode).unwrap_err();
        assert!(err.is_analysis());
        assert_eq!(err.to_string(), "Analysis error: cannot analyze \"text\"");
    }
}
