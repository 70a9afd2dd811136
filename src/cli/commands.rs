//! Command implementations for the Kazoe CLI.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use log::{debug, info};

use crate::analysis::analyzer::AnalyzerRegistry;
use crate::analysis::position::{CountingMode, count_positions};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::document::Document;
use crate::document::field_value::FieldValue;
use crate::error::{KazoeError, Result};
use crate::schema::config::MappingConfig;
use crate::schema::mapping::Mapping;
use crate::schema::service::MappingService;

/// Execute a CLI command, writing its report to stdout.
pub fn execute_command(args: KazoeArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let registry = Arc::new(AnalyzerRegistry::with_builtin()?);
    let mut stdout = io::stdout().lock();

    match &args.command {
        Command::Count(count_args) => {
            let result = count_text(count_args, &registry)?;
            output_result(&result, &args, &mut stdout)
        }
        Command::Merge(merge_args) => {
            let report = merge_mappings(merge_args, registry, config)?;
            output_result(&report, &args, &mut stdout)
        }
        Command::Parse(parse_args) => {
            let report = parse_documents(parse_args, registry, config)?;
            output_result(&report, &args, &mut stdout)?;
            match report.failures() {
                0 => Ok(()),
                n => Err(KazoeError::other(format!("{n} documents failed to parse"))),
            }
        }
    }
}

/// Load the mapping configuration, or the default when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<MappingConfig> {
    match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let reader = BufReader::new(open(path)?);
            let config: MappingConfig = serde_json::from_reader(reader)
                .with_context(|| format!("Invalid configuration in {}", path.display()))?;
            Ok(config)
        }
        None => Ok(MappingConfig::default()),
    }
}

/// Count the positions of the given text.
pub fn count_text(args: &CountArgs, registry: &AnalyzerRegistry) -> Result<CountResult> {
    let analyzer = registry.resolve(&args.analyzer)?;
    let mode = CountingMode::from_flag(!args.without_increments);
    let count = count_positions(analyzer.as_ref(), &args.field, &args.text, mode)?;

    Ok(CountResult {
        analyzer: args.analyzer.clone(),
        field: args.field.clone(),
        with_increments: mode.counts_increments(),
        count,
    })
}

/// Apply the initial mapping and every update in order.
///
/// Stops at the first update that fails to merge.
pub fn merge_mappings(
    args: &MergeArgs,
    registry: Arc<AnalyzerRegistry>,
    config: MappingConfig,
) -> Result<MergeReport> {
    let service = MappingService::new(registry, config);
    let mut generations = Vec::new();

    for path in std::iter::once(&args.mapping_file).chain(&args.update_files) {
        let json = read(path)?;
        let mapping = service
            .merge_json(&json)
            .with_context(|| format!("Failed to merge {}", path.display()))?;
        generations.push(generation_report(&mapping, path));
    }

    Ok(MergeReport { generations })
}

fn open(path: &Path) -> Result<File> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(file)
}

fn read(path: &Path) -> Result<String> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(text)
}

fn generation_report(mapping: &Mapping, source: &Path) -> GenerationReport {
    GenerationReport {
        version: mapping.version(),
        source: source.display().to_string(),
        fields: mapping.len(),
        token_count_fields: mapping
            .token_count_fields()
            .map(|field| field.as_ref().clone())
            .collect(),
    }
}

/// Compute derived fields for every document in a JSONL file.
///
/// Blank lines are skipped. A line that fails is reported and the rest
/// are still parsed.
pub fn parse_documents(
    args: &ParseArgs,
    registry: Arc<AnalyzerRegistry>,
    config: MappingConfig,
) -> Result<ParseReport> {
    let service = MappingService::new(registry, config);
    service
        .merge_json(&read(&args.mapping)?)
        .with_context(|| format!("Failed to apply {}", args.mapping.display()))?;
    let parser = service.document_parser();

    let reader = BufReader::new(open(&args.document_file)?);
    let mut lines = Vec::new();
    let mut documents = Vec::new();
    let mut reports = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!("Failed to read {}", args.document_file.display())
        })?;
        if line.trim().is_empty() {
            continue;
        }
        match Document::from_json(&line) {
            Ok(doc) => {
                lines.push(index + 1);
                documents.push(doc);
            }
            Err(e) => reports.push(DocumentReport {
                line: index + 1,
                counts: Default::default(),
                error: Some(e.to_string()),
            }),
        }
    }

    info!(
        "Parsing {} documents against mapping version {}",
        documents.len(),
        parser.mapping().version()
    );

    let derived: Vec<&str> = parser
        .mapping()
        .token_count_fields()
        .map(|field| field.name())
        .collect();

    for (line, result) in lines.into_iter().zip(parser.parse_batch(&documents)) {
        let report = match result {
            Ok(parsed) => DocumentReport {
                line,
                counts: derived
                    .iter()
                    .filter_map(|name| match parsed.document.get_field(name) {
                        Some(FieldValue::Integer(count)) => Some((name.to_string(), *count)),
                        _ => None,
                    })
                    .collect(),
                error: None,
            },
            Err(e) => DocumentReport {
                line,
                counts: Default::default(),
                error: Some(e.to_string()),
            },
        };
        reports.push(report);
    }
    reports.sort_by_key(|report| report.line);

    Ok(ParseReport {
        mapping_version: parser.mapping().version(),
        documents: reports,
    })
}
