use std::io;
use std::path::{Path, PathBuf};

use memory_match_core::DatasetError;
use thiserror::Error;

/// Failure to turn a topic file into a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: {}", .path.display(), .source)]
    Format {
        path: PathBuf,
        #[source]
        source: DatasetError,
    },
}

impl LoadError {
    /// File the failure is about.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Format { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("minimum alternatives must be at least 1, got {0}")]
    InvalidMinimum(usize),
}

#[derive(Debug, Error)]
pub enum TopicIndexError {
    #[error("failed to access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize topic index: {0}")]
    Serialize(#[from] serde_json::Error),
}
