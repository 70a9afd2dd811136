//! Output formatting for CLI commands.

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{KazoeArgs, OutputFormat};
use crate::error::Result;
use crate::schema::token_count::TokenCountField;

/// Result structure for a position count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountResult {
    pub analyzer: String,
    pub field: String,
    pub with_increments: bool,
    pub count: usize,
}

/// One mapping generation produced by a merge.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub version: u64,
    pub source: String,
    pub fields: usize,
    pub token_count_fields: Vec<TokenCountField>,
}

/// Result structure for a merge run.
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub generations: Vec<GenerationReport>,
}

/// Derived values computed for one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub line: usize,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub counts: BTreeMap<String, i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

/// Result structure for a parse run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseReport {
    pub mapping_version: u64,
    pub documents: Vec<DocumentReport>,
}

impl ParseReport {
    /// Number of documents that failed to parse.
    pub fn failures(&self) -> usize {
        self.documents.iter().filter(|d| d.error.is_some()).count()
    }
}

/// Something the CLI can print in every output format.
pub trait Report: Serialize {
    /// Write the human-readable rendering.
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

impl Report for CountResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        let mode = if self.with_increments {
            "with increments"
        } else {
            "without increments"
        };
        writeln!(
            out,
            "{} ({} analyzer on [{}], {mode})",
            self.count, self.analyzer, self.field
        )?;
        Ok(())
    }
}

impl Report for MergeReport {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for generation in &self.generations {
            writeln!(
                out,
                "Generation {} ({}, {} fields)",
                generation.version, generation.source, generation.fields
            )?;
            for field in &generation.token_count_fields {
                let null_value = field
                    .null_value()
                    .map_or_else(|| "-".to_string(), |v| v.to_string());
                writeln!(
                    out,
                    "  {} <- {}  analyzer={} mode={} null_value={}",
                    field.name(),
                    field.source_field(),
                    field.analyzer(),
                    field.counting_mode(),
                    null_value
                )?;
            }
        }
        Ok(())
    }
}

impl Report for ParseReport {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Mapping version {}", self.mapping_version)?;
        for doc in &self.documents {
            match &doc.error {
                Some(error) => writeln!(out, "line {}: error: {error}", doc.line)?,
                None => {
                    let counts: Vec<String> = doc
                        .counts
                        .iter()
                        .map(|(name, count)| format!("{name}={count}"))
                        .collect();
                    writeln!(out, "line {}: {}", doc.line, counts.join(" "))?;
                }
            }
        }
        Ok(())
    }
}

/// Output a result in the format selected by `args`.
pub fn output_result<T: Report>(result: &T, args: &KazoeArgs, out: &mut dyn Write) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(result, args.pretty, out),
    }
}

fn output_json<T: Serialize>(result: &T, pretty: bool, out: &mut dyn Write) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}
