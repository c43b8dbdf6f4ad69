//! Loading and aggregation of the line count document.
//!
//! The input is the JSON emitted by the upstream line counter: a top-level
//! object mapping language names to per-language records, with a reserved
//! `"Total"` entry carrying aggregate counts. The consumer is deliberately
//! lenient: entries that are not well-formed records are skipped and absent
//! fields count as zero, since upstream tools differ in which fields they
//! emit.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{BadgeError, Result};

/// Reserved key for the aggregate entry.
pub const TOTAL_KEY: &str = "Total";

/// Default number of languages shown in the chart.
pub const DEFAULT_TOP_LANGUAGES: usize = 6;

/// Markup-variant language names folded into their base language for display.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[("TSX", "TypeScript"), ("JSX", "JavaScript")];

/// Per-language record as emitted by the upstream counter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageStats {
    #[serde(default)]
    pub code: u64,
    #[serde(default)]
    pub files: u64,
    #[serde(default)]
    pub reports: Vec<Value>,
}

/// Aggregate counts across all languages.
///
/// `lines` includes comment and blank lines, `code` does not.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregateStats {
    #[serde(default)]
    pub code: u64,
    #[serde(default)]
    pub lines: u64,
    #[serde(default)]
    pub files: u64,
}

/// The parsed count document, entries in file order.
#[derive(Debug, Clone)]
pub struct StatsDocument {
    entries: IndexMap<String, Value>,
}

impl StatsDocument {
    /// Read and parse the document at `path`.
    ///
    /// # Errors
    /// Returns [`BadgeError::MissingInput`] if the file does not exist, and
    /// [`BadgeError::Parse`] if its content is not a JSON object.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BadgeError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a document from its JSON text.
    ///
    /// # Errors
    /// Returns [`BadgeError::Parse`] if the text is not a JSON object.
    pub fn parse(content: &str) -> Result<Self> {
        let entries: IndexMap<String, Value> = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    /// Aggregate counts from the reserved `Total` entry.
    ///
    /// A missing or malformed entry yields all-zero aggregates.
    #[must_use]
    pub fn totals(&self) -> AggregateStats {
        self.entries
            .get(TOTAL_KEY)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }

    /// Per-language entries in document order, skipping the `Total` entry
    /// and anything that is not a well-formed record.
    fn languages(&self) -> impl Iterator<Item = (&str, LanguageStats)> {
        self.entries
            .iter()
            .filter(|(name, _)| name.as_str() != TOTAL_KEY)
            .filter_map(|(name, value)| {
                let stats = serde_json::from_value(value.clone()).ok()?;
                Some((name.as_str(), stats))
            })
    }
}

/// A language surviving zero-filtering and alias merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedLanguage {
    pub name: String,
    pub code: u64,
}

/// Derived view over a [`StatsDocument`]: totals plus the merged language
/// ranking. Constructed once per render call, never persisted.
#[derive(Debug, Clone, Default)]
pub struct Breakdown {
    pub total_code: u64,
    pub total_lines: u64,
    pub total_files: u64,
    /// Merged languages, descending by code count. Ties keep document order.
    pub languages: Vec<RankedLanguage>,
}

impl Breakdown {
    /// Aggregate and rank the document.
    #[must_use]
    pub fn from_document(document: &StatsDocument) -> Self {
        let totals = document.totals();

        let total_files = if totals.files == 0 {
            Self::count_files_from_reports(document)
        } else {
            totals.files
        };

        Self {
            total_code: totals.code,
            total_lines: totals.lines,
            total_files,
            languages: Self::rank_languages(document),
        }
    }

    /// Fallback file count: sum of report-list lengths across all language
    /// entries. Some upstream counters omit `Total.files`.
    fn count_files_from_reports(document: &StatsDocument) -> u64 {
        document
            .languages()
            .map(|(_, stats)| stats.reports.len() as u64)
            .sum()
    }

    /// Merge alias variants into their base language and sort descending by
    /// code count. Zero-code entries are dropped before merging.
    fn rank_languages(document: &StatsDocument) -> Vec<RankedLanguage> {
        let mut merged: IndexMap<&str, u64> = IndexMap::new();
        for (name, stats) in document.languages() {
            if stats.code == 0 {
                continue;
            }
            *merged.entry(canonical_name(name)).or_insert(0) += stats.code;
        }

        let mut languages: Vec<RankedLanguage> = merged
            .into_iter()
            .map(|(name, code)| RankedLanguage {
                name: name.to_string(),
                code,
            })
            .collect();
        languages.sort_by(|a, b| b.code.cmp(&a.code));
        languages
    }

    /// The ranked list truncated to the first `n` languages.
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedLanguage] {
        &self.languages[..self.languages.len().min(n)]
    }
}

/// Resolve a markup-variant name to the base language it is folded into.
fn canonical_name(name: &str) -> &str {
    LANGUAGE_ALIASES
        .iter()
        .copied()
        .find(|&(alias, _)| alias == name)
        .map_or(name, |(_, base)| base)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
