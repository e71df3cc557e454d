//! CSV to topic-file conversion.
//!
//! Two converters mirror the two dataset shapes:
//!
//! - [`convert_pairs`]: rows with exactly two cells become `pairs` entries
//! - [`convert_multiple`]: rows with at least `min_alternatives` cells become
//!   `entries` with an `alternatives` list, plus summary statistics
//!
//! Rows that do not qualify are kept under `invalid_rows` so nothing is lost
//! silently. Row numbers are 1-based CSV record numbers, counting blank lines.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{info, warn};
use memory_match_core::{AlternativesEntry, PairEntry};
use serde::{Deserialize, Serialize};

use crate::csv::{clean_row, parse_records};
use crate::error::ConvertError;

/// A CSV row that was not converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRow {
    pub row_number: usize,
    pub content: Vec<String>,
    pub element_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRows {
    pub count: usize,
    pub details: Vec<InvalidRow>,
}

impl InvalidRows {
    fn collect(details: Vec<InvalidRow>) -> Option<Self> {
        if details.is_empty() {
            None
        } else {
            Some(Self {
                count: details.len(),
                details,
            })
        }
    }
}

/// Output of [`convert_pairs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairsDocument {
    pub total_pairs: usize,
    pub pairs: Vec<PairEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_rows: Option<InvalidRows>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleMetadata {
    pub source_file: String,
    pub total_entries: usize,
    pub minimum_alternatives_required: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeStatistics {
    pub min_alternatives: usize,
    pub max_alternatives: usize,
    pub total_alternatives: usize,
    /// Entries per alternatives count, ordered by count.
    pub alternative_counts: BTreeMap<usize, usize>,
    /// Rounded to two decimals; 0 when there are no entries.
    pub average_alternatives: f64,
}

/// Output of [`convert_multiple`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleDocument {
    pub metadata: MultipleMetadata,
    pub statistics: AlternativeStatistics,
    pub entries: Vec<AlternativesEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_rows: Option<InvalidRows>,
}

/// Cells-per-row histogram of a CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowDistribution {
    pub total_rows: usize,
    pub counts: BTreeMap<usize, usize>,
}

impl RowDistribution {
    /// Share of rows with `cells` cells, in percent.
    pub fn percentage(&self, cells: usize) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        let rows = self.counts.get(&cells).copied().unwrap_or(0);
        rows as f64 * 100.0 / self.total_rows as f64
    }
}

/// Convert CSV text whose rows are word pairs.
pub fn convert_pairs(text: &str) -> PairsDocument {
    let mut pairs = Vec::new();
    let mut invalid = Vec::new();

    for (row_number, record) in numbered_records(text) {
        if record.is_empty() {
            continue;
        }
        let row = clean_row(record);
        if let [term1, term2] = row.as_slice() {
            pairs.push(PairEntry {
                id: Some(row_number as u64),
                term1: term1.clone(),
                term2: term2.clone(),
            });
        } else {
            invalid.push(InvalidRow {
                row_number,
                element_count: row.len(),
                content: row,
                reason: None,
            });
        }
    }

    if !invalid.is_empty() {
        warn!(
            "{} rows do not contain exactly 2 elements; recorded under invalid_rows",
            invalid.len()
        );
    }

    PairsDocument {
        total_pairs: pairs.len(),
        pairs,
        invalid_rows: InvalidRows::collect(invalid),
    }
}

/// Convert CSV text whose rows are groups of interchangeable words.
///
/// `source_file` is recorded in the output metadata.
pub fn convert_multiple(
    text: &str,
    source_file: &str,
    min_alternatives: usize,
) -> Result<MultipleDocument, ConvertError> {
    if min_alternatives < 1 {
        return Err(ConvertError::InvalidMinimum(min_alternatives));
    }

    let mut entries = Vec::new();
    let mut invalid = Vec::new();
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    let mut total_alternatives = 0usize;

    for (row_number, record) in numbered_records(text) {
        let row = clean_row(record);
        let count = row.len();
        if count >= min_alternatives {
            total_alternatives += count;
            *counts.entry(count).or_insert(0) += 1;
            entries.push(AlternativesEntry {
                id: Some(row_number as u64),
                base: None,
                alternatives_count: Some(count),
                alternatives: row,
            });
        } else if count > 0 {
            invalid.push(InvalidRow {
                row_number,
                content: row,
                element_count: count,
                reason: Some(format!("Less than {} alternatives", min_alternatives)),
            });
        }
    }

    if !invalid.is_empty() {
        warn!(
            "{} rows have fewer than {} elements; recorded under invalid_rows",
            invalid.len(),
            min_alternatives
        );
    }

    let statistics = AlternativeStatistics {
        min_alternatives: counts.keys().next().copied().unwrap_or(0),
        max_alternatives: counts.keys().next_back().copied().unwrap_or(0),
        total_alternatives,
        average_alternatives: if entries.is_empty() {
            0.0
        } else {
            round2(total_alternatives as f64 / entries.len() as f64)
        },
        alternative_counts: counts,
    };

    Ok(MultipleDocument {
        metadata: MultipleMetadata {
            source_file: source_file.to_string(),
            total_entries: entries.len(),
            minimum_alternatives_required: min_alternatives,
        },
        statistics,
        entries,
        invalid_rows: InvalidRows::collect(invalid),
    })
}

/// Count cells per non-empty row.
pub fn analyze(text: &str) -> RowDistribution {
    let mut distribution = RowDistribution::default();
    for record in parse_records(text) {
        let row = clean_row(record);
        if row.is_empty() {
            continue;
        }
        distribution.total_rows += 1;
        *distribution.counts.entry(row.len()).or_insert(0) += 1;
    }
    distribution
}

/// `words.csv` -> `words.json`
pub fn default_pairs_output(csv_path: &Path) -> PathBuf {
    csv_path.with_extension("json")
}

/// `words.csv` -> `words_multiple.json`
pub fn default_multiple_output(csv_path: &Path) -> PathBuf {
    let mut name: OsString = csv_path.with_extension("").into_os_string();
    name.push("_multiple.json");
    PathBuf::from(name)
}

pub fn read_csv(path: &Path) -> Result<String, ConvertError> {
    std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `document` as pretty-printed UTF-8 JSON (non-ASCII kept as is).
pub fn write_json<T: Serialize>(path: &Path, document: &T) -> Result<(), ConvertError> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {}", path.display());
    Ok(())
}

fn numbered_records(text: &str) -> impl Iterator<Item = (usize, Vec<String>)> {
    parse_records(text)
        .into_iter()
        .enumerate()
        .map(|(i, record)| (i + 1, record))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
