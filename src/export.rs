//! Rendering generated keywords as text, CSV or JSON.
//!
//! The CSV layout is a single `Keyword` column with one row per keyword and
//! no index column.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::generator::Strategy;
use crate::scoring::ScoredIdea;
use crate::vocabulary::Complexity;

/// Header of the single CSV column.
pub const CSV_HEADER: &str = "Keyword";

/// Output format for generated keywords.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One `- keyword` bullet per line
    #[default]
    Text,
    /// Single `Keyword` column
    Csv,
    /// Keywords plus request metadata
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Csv, ExportFormat::Json];

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        Self::ALL.into_iter().find(|format| format.extension() == ext)
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// JSON export document.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordExport<'a> {
    pub base_phrase: &'a str,
    pub language: &'a str,
    pub complexity: Complexity,
    pub strategy: Strategy,
    pub generated_at: String,
    pub keywords: &'a [String],
    #[serde(skip_serializing_if = "<[ScoredIdea]>::is_empty")]
    pub ideas: &'a [ScoredIdea],
}

impl<'a> KeywordExport<'a> {
    pub fn new(
        base_phrase: &'a str,
        language: &'a str,
        complexity: Complexity,
        strategy: Strategy,
        keywords: &'a [String],
    ) -> Self {
        Self {
            base_phrase,
            language,
            complexity,
            strategy,
            generated_at: chrono::Utc::now().to_rfc3339(),
            keywords,
            ideas: &[],
        }
    }

    pub fn with_ideas(mut self, ideas: &'a [ScoredIdea]) -> Self {
        self.ideas = ideas;
        self
    }
}

/// Quote a CSV field when it contains a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn to_csv(keywords: &[String]) -> String {
    let mut out = String::with_capacity(keywords.len() * 24 + CSV_HEADER.len() + 1);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for keyword in keywords {
        out.push_str(&csv_field(keyword));
        out.push('\n');
    }
    out
}

pub fn to_text(keywords: &[String]) -> String {
    keywords.iter().map(|k| format!("- {}\n", k)).collect()
}

pub fn to_json(export: &KeywordExport<'_>) -> Result<String> {
    serde_json::to_string_pretty(export).context("Failed to serialize keywords to JSON")
}

/// Render an export in the requested format.
pub fn render(format: ExportFormat, export: &KeywordExport<'_>) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(to_text(export.keywords)),
        ExportFormat::Csv => Ok(to_csv(export.keywords)),
        ExportFormat::Json => to_json(export).map(|mut json| {
            json.push('\n');
            json
        }),
    }
}

/// Write rendered content, creating parent directories as needed.
pub fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    Ok(())
}
