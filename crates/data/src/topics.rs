//! Topic discovery and the `topic_index.json` catalogue.
//!
//! A data directory holds one JSON file per topic. `topic_index.json`, when
//! present, lists them with a description and some bookkeeping; without it
//! the directory listing is used.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TopicIndexError;

pub const INDEX_FILE_NAME: &str = "topic_index.json";

/// Recorded as `generator_script` in generated indexes.
pub const GENERATOR_NAME: &str = "memory-match index";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicIndex {
    pub generated_at: String,
    pub generator_script: String,
    pub total_files: usize,
    pub files: Vec<TopicFile>,
}

/// One indexed topic file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFile {
    pub filename: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub file_size_bytes: u64,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_metadata: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_entries: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_error: Option<String>,
}

impl TopicFile {
    /// Description when set, else the file stem.
    pub fn display_name(&self) -> String {
        let description = self.description.trim();
        if description.is_empty() {
            file_stem(&self.filename)
        } else {
            description.to_string()
        }
    }
}

/// A selectable topic in the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub path: PathBuf,
    pub entries: Option<u64>,
}

pub fn load_topic_index(path: &Path) -> Result<TopicIndex, TopicIndexError> {
    let text = fs::read_to_string(path).map_err(|source| TopicIndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| TopicIndexError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Topics available in `dir`.
///
/// Uses `topic_index.json` when it exists, otherwise every `*.json` file in
/// the directory, sorted by name.
pub fn discover_topics(dir: &Path) -> Result<Vec<Topic>, TopicIndexError> {
    let index_path = dir.join(INDEX_FILE_NAME);
    if index_path.is_file() {
        let index = load_topic_index(&index_path)?;
        debug!("{} topics listed in {}", index.files.len(), index_path.display());
        return Ok(index
            .files
            .iter()
            .map(|file| Topic {
                name: file.display_name(),
                path: dir.join(&file.filename),
                entries: file.total_entries,
            })
            .collect());
    }

    let topics = json_files(dir)?
        .into_iter()
        .map(|filename| Topic {
            name: file_stem(&filename),
            path: dir.join(&filename),
            entries: None,
        })
        .collect::<Vec<_>>();
    debug!("no topic index in {}; found {} files", dir.display(), topics.len());
    Ok(topics)
}

/// Describe every topic file in `dir`.
///
/// Files that cannot be read or parsed are still listed, with `read_error`
/// set.
pub fn build_topic_index(dir: &Path) -> Result<TopicIndex, TopicIndexError> {
    let files: Vec<TopicFile> = json_files(dir)?
        .into_iter()
        .map(|filename| describe_file(dir, filename))
        .collect();

    Ok(TopicIndex {
        generated_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        generator_script: GENERATOR_NAME.to_string(),
        total_files: files.len(),
        files,
    })
}

/// Write `index` to `dir/topic_index.json`, replacing any existing file.
pub fn write_topic_index(dir: &Path, index: &TopicIndex) -> Result<PathBuf, TopicIndexError> {
    let path = dir.join(INDEX_FILE_NAME);
    if path.exists() {
        info!("replacing existing {}", path.display());
    }
    let mut json = serde_json::to_string_pretty(index)?;
    json.push('\n');
    fs::write(&path, json).map_err(|source| TopicIndexError::Io {
        path: path.clone(),
        source,
    })?;
    info!("indexed {} topic files into {}", index.total_files, path.display());
    Ok(path)
}

fn json_files(dir: &Path) -> Result<Vec<String>, TopicIndexError> {
    let io_err = |source: std::io::Error| TopicIndexError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.ends_with(".json") && name != INDEX_FILE_NAME && entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn describe_file(dir: &Path, filename: String) -> TopicFile {
    let path = dir.join(&filename);
    let mut file = TopicFile {
        filename,
        description: String::new(),
        file_size_bytes: 0,
        last_modified: String::new(),
        has_metadata: None,
        total_entries: None,
        source_file: None,
        read_error: None,
    };

    if let Ok(meta) = fs::metadata(&path) {
        file.file_size_bytes = meta.len();
        if let Ok(modified) = meta.modified() {
            file.last_modified = format_time(modified);
        }
    }

    let parsed = fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str::<Value>(&text).map_err(|e| e.to_string()));

    match parsed {
        Ok(value) => {
            if let Some(metadata) = value.get("metadata") {
                file.has_metadata = Some(true);
                file.source_file = metadata
                    .get("source_file")
                    .and_then(Value::as_str)
                    .map(str::to_string);
            }
            file.total_entries = count_entries(&value);
        }
        Err(e) => {
            warn!("could not read {}: {}", path.display(), e);
            file.read_error = Some(e);
        }
    }
    file
}

/// Entry count of a topic document, from the first field that has one.
fn count_entries(value: &Value) -> Option<u64> {
    if let Some(items) = value.as_array() {
        return Some(items.len() as u64);
    }
    let len_of = |key: &str| value.get(key).and_then(Value::as_array).map(|a| a.len() as u64);

    value
        .get("metadata")
        .and_then(|m| m.get("total_entries"))
        .and_then(Value::as_u64)
        .or_else(|| value.get("total_entries").and_then(Value::as_u64))
        .or_else(|| len_of("entries"))
        .or_else(|| value.get("total_pairs").and_then(Value::as_u64))
        .or_else(|| len_of("pairs"))
}

fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(TIMESTAMP_FORMAT).to_string()
}

fn file_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
        .to_string()
}
