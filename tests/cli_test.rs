//! Integration tests for the CLI commands.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use kazoe::analysis::analyzer::AnalyzerRegistry;
use kazoe::cli::args::{Command, KazoeArgs};
use kazoe::cli::commands::{load_config, merge_mappings, parse_documents};
use kazoe::cli::output::output_result;
use kazoe::error::{KazoeError, Result};
use kazoe::schema::config::MappingConfig;
use tempfile::TempDir;

const MAPPING: &str = r#"{
    "properties": {
        "body": {"type": "text"},
        "body_length": {
            "type": "derived-token-count",
            "sourceField": "body",
            "analyzer": "standard",
            "nullValue": 0
        }
    }
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

fn registry() -> Result<Arc<AnalyzerRegistry>> {
    Ok(Arc::new(AnalyzerRegistry::with_builtin()?))
}

#[test]
fn test_merge_command_reports_every_generation() -> Result<()> {
    let dir = TempDir::new()?;
    let base = write(&dir, "base.json", MAPPING)?;
    let update = write(
        &dir,
        "update.json",
        r#"{"properties":{"body_length":{"type":"derived-token-count","sourceField":"body","analyzer":"keyword"}}}"#,
    )?;

    let args = KazoeArgs::try_parse_from([
        "kazoe".into(),
        "merge".into(),
        base.clone().into_os_string(),
        update.into_os_string(),
    ])
    .map_err(|e| KazoeError::other(e.to_string()))?;
    let Command::Merge(merge_args) = &args.command else {
        panic!("Expected Merge command");
    };

    let report = merge_mappings(merge_args, registry()?, MappingConfig::default())?;
    assert_eq!(report.generations.len(), 2);
    assert_eq!(report.generations[0].version, 1);
    assert_eq!(report.generations[0].token_count_fields[0].analyzer(), "standard");
    assert_eq!(report.generations[1].token_count_fields[0].analyzer(), "keyword");
    assert_eq!(report.generations[1].token_count_fields[0].null_value(), None);

    let mut out = Vec::new();
    output_result(&report, &args, &mut out)?;
    let text = String::from_utf8(out).map_err(|e| KazoeError::other(e.to_string()))?;
    assert!(text.starts_with(&format!("Generation 1 ({}, 2 fields)", base.display())));
    assert!(text.contains("body_length <- body  analyzer=keyword mode=with_increments null_value=-"));

    Ok(())
}

#[test]
fn test_merge_command_stops_on_bad_update() -> Result<()> {
    let dir = TempDir::new()?;
    let base = write(&dir, "base.json", MAPPING)?;
    let bad = write(
        &dir,
        "bad.json",
        r#"{"properties":{"body":{"type":"text","analyzer":"keyword"}}}"#,
    )?;

    let args = KazoeArgs::try_parse_from([
        "kazoe".into(),
        "merge".into(),
        base.into_os_string(),
        bad.into_os_string(),
    ])
    .map_err(|e| KazoeError::other(e.to_string()))?;
    let Command::Merge(merge_args) = &args.command else {
        panic!("Expected Merge command");
    };

    let err = merge_mappings(merge_args, registry()?, MappingConfig::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Failed to merge "), "{message}");
    assert!(message.contains("bad.json: Merge conflict: "), "{message}");

    let KazoeError::Anyhow(inner) = &err else {
        panic!("Expected a merge error with file context, got {err:?}");
    };
    assert!(matches!(
        inner.downcast_ref::<KazoeError>(),
        Some(KazoeError::MergeConflict(_))
    ));

    Ok(())
}

#[test]
fn test_merge_command_names_missing_update() -> Result<()> {
    let dir = TempDir::new()?;
    let base = write(&dir, "base.json", MAPPING)?;
    let missing = dir.path().join("missing.json");

    let args = KazoeArgs::try_parse_from([
        "kazoe".into(),
        "merge".into(),
        base.into_os_string(),
        missing.clone().into_os_string(),
    ])
    .map_err(|e| KazoeError::other(e.to_string()))?;
    let Command::Merge(merge_args) = &args.command else {
        panic!("Expected Merge command");
    };

    let err = merge_mappings(merge_args, registry()?, MappingConfig::default()).unwrap_err();
    assert!(
        err.to_string()
            .starts_with(&format!("Failed to read {}: ", missing.display()))
    );

    Ok(())
}

#[test]
fn test_parse_command_reports_counts_per_line() -> Result<()> {
    let dir = TempDir::new()?;
    let mapping = write(&dir, "mapping.json", MAPPING)?;
    let docs = write(
        &dir,
        "docs.jsonl",
        concat!(
            "{\"body\": \"the quick fox and the\"}\n",
            "\n",
            "{\"title\": \"no body\"}\n",
            "not json\n",
            "{\"body\": \"x\", \"body_length\": 3}\n",
        ),
    )?;

    let args = KazoeArgs::try_parse_from([
        "kazoe".into(),
        "--format".into(),
        "json".into(),
        "parse".into(),
        "--mapping".into(),
        mapping.into_os_string(),
        docs.into_os_string(),
    ])
    .map_err(|e| KazoeError::other(e.to_string()))?;
    let Command::Parse(parse_args) = &args.command else {
        panic!("Expected Parse command");
    };

    let report = parse_documents(parse_args, registry()?, MappingConfig::default())?;
    assert_eq!(report.mapping_version, 1);

    let lines: Vec<usize> = report.documents.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 3, 4, 5]);
    assert_eq!(report.documents[0].counts["body_length"], 5);
    assert_eq!(report.documents[1].counts["body_length"], 0);
    assert!(report.documents[2].error.is_some());
    assert!(report.documents[3].error.as_deref().unwrap().contains("body_length"));
    assert_eq!(report.failures(), 2);

    let mut out = Vec::new();
    output_result(&report, &args, &mut out)?;
    let json: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(json["documents"][0]["counts"]["body_length"], 5);

    Ok(())
}

#[test]
fn test_config_file_sets_default_counting_mode() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write(&dir, "config.json", r#"{"default_counting_mode": false}"#)?;
    let mapping = write(&dir, "mapping.json", MAPPING)?;
    let docs = write(&dir, "docs.jsonl", "{\"body\": \"the quick fox and the\"}\n")?;

    let config = load_config(Some(config.as_path()))?;
    let args = KazoeArgs::try_parse_from([
        "kazoe".into(),
        "parse".into(),
        "--mapping".into(),
        mapping.into_os_string(),
        docs.into_os_string(),
    ])
    .map_err(|e| KazoeError::other(e.to_string()))?;
    let Command::Parse(parse_args) = &args.command else {
        panic!("Expected Parse command");
    };

    let report = parse_documents(parse_args, registry()?, config)?;
    assert_eq!(report.documents[0].counts["body_length"], 2);

    Ok(())
}
