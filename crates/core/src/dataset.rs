//! Dataset module - the two on-disk word list shapes
//!
//! A topic file is either a list of fixed pairs:
//!
//! ```json
//! { "total_pairs": 2, "pairs": [ { "id": 1, "term1": "גדול", "term2": "ענק" } ] }
//! ```
//!
//! or a list of entries with two or more interchangeable alternatives:
//!
//! ```json
//! { "entries": [ { "id": 1, "alternatives_count": 3, "alternatives": ["שמח", "עליז", "מאושר"] } ] }
//! ```
//!
//! The shape is decided once, when the JSON value is converted into a
//! [`WordPairDataset`]; everything downstream matches on the enum.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DatasetError, Result};

/// One row of the pairs shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub term1: String,
    pub term2: String,
}

impl PairEntry {
    pub fn new(term1: impl Into<String>, term2: impl Into<String>) -> Self {
        Self {
            id: None,
            term1: term1.into(),
            term2: term2.into(),
        }
    }
}

/// One row of the alternatives shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativesEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Optional headword; informational only, the candidates are `alternatives`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives_count: Option<usize>,
    pub alternatives: Vec<String>,
}

impl AlternativesEntry {
    pub fn new<I, S>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            base: None,
            alternatives_count: None,
            alternatives: alternatives.into_iter().map(Into::into).collect(),
        }
    }
}

/// A parsed topic file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordPairDataset {
    Pairs(Vec<PairEntry>),
    Alternatives(Vec<AlternativesEntry>),
}

impl WordPairDataset {
    /// Detect the shape of a parsed JSON document.
    ///
    /// Exactly one of `pairs` / `entries` must be present. Anything else is a
    /// [`DatasetError::Format`].
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_core::{DatasetError, WordPairDataset};
    /// use serde_json::json;
    ///
    /// let data = json!({ "pairs": [ { "term1": "a", "term2": "b" } ] });
    /// assert_eq!(WordPairDataset::from_value(&data).unwrap().len(), 1);
    ///
    /// let bad = json!({ "notValid": "json structure" });
    /// assert!(matches!(WordPairDataset::from_value(&bad), Err(DatasetError::Format(_))));
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            return Err(DatasetError::Format(
                "top-level value is not an object".to_string(),
            ));
        };

        match (object.get("pairs"), object.get("entries")) {
            (Some(pairs), None) => serde_json::from_value::<Vec<PairEntry>>(pairs.clone())
                .map(WordPairDataset::Pairs)
                .map_err(|e| DatasetError::Format(format!("invalid `pairs` list: {}", e))),
            (None, Some(entries)) => {
                serde_json::from_value::<Vec<AlternativesEntry>>(entries.clone())
                    .map(WordPairDataset::Alternatives)
                    .map_err(|e| DatasetError::Format(format!("invalid `entries` list: {}", e)))
            }
            (Some(_), Some(_)) => Err(DatasetError::Format(
                "both `pairs` and `entries` are present".to_string(),
            )),
            (None, None) => Err(DatasetError::Format(
                "expected a `pairs` or `entries` list".to_string(),
            )),
        }
    }

    /// Shape name, as used in logs and the topic menu.
    pub fn shape(&self) -> &'static str {
        match self {
            WordPairDataset::Pairs(_) => "pairs",
            WordPairDataset::Alternatives(_) => "alternatives",
        }
    }

    /// Number of entries, valid or not.
    pub fn len(&self) -> usize {
        match self {
            WordPairDataset::Pairs(pairs) => pairs.len(),
            WordPairDataset::Alternatives(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every entry as a list of candidate words.
    ///
    /// Pairs yield exactly two words; alternatives yield their full list.
    pub fn word_groups(&self) -> Vec<Vec<String>> {
        match self {
            WordPairDataset::Pairs(pairs) => pairs
                .iter()
                .map(|p| vec![p.term1.clone(), p.term2.clone()])
                .collect(),
            WordPairDataset::Alternatives(entries) => {
                entries.iter().map(|e| e.alternatives.clone()).collect()
            }
        }
    }
}
