//! Reading topic files from disk.

use std::path::Path;

use log::info;
use memory_match_core::WordPairDataset;
use serde_json::Value;

use crate::error::LoadError;

/// Read and classify a topic file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<WordPairDataset, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(path, &text)
}

/// Async variant of [`load_dataset`] for the background loader.
pub async fn load_dataset_async(path: impl AsRef<Path>) -> Result<WordPairDataset, LoadError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    decode(path, &text)
}

/// Classify already-read file contents. `path` is only used in errors.
pub fn decode(path: &Path, text: &str) -> Result<WordPairDataset, LoadError> {
    let value: Value = serde_json::from_str(text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = WordPairDataset::from_value(&value).map_err(|source| LoadError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "loaded {} ({} entries, {} shape)",
        path.display(),
        dataset.len(),
        dataset.shape()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory_match_core::DatasetError;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_pairs_file() {
        let file = write_temp(r#"{"total_pairs":1,"pairs":[{"id":1,"term1":"גדול","term2":"קטן"}]}"#);
        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.shape(), "pairs");
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn loads_alternatives_file_async() {
        let file = write_temp(r#"{"entries":[{"alternatives":["a","b","c"]}]}"#);
        let dataset = tokio_test::block_on(load_dataset_async(file.path())).unwrap();
        assert_eq!(dataset.shape(), "alternatives");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let file = write_temp("{ not json");
        assert!(matches!(
            load_dataset(file.path()),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_shape_is_format_error() {
        let file = write_temp(r#"{"notValid": "json structure"}"#);
        match load_dataset(file.path()) {
            Err(LoadError::Format { source, .. }) => {
                assert!(matches!(source, DatasetError::Format(_)))
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }
}
