//! Data module - topic files on disk
//!
//! Everything that touches the filesystem lives here; the engine only ever
//! sees a parsed [`WordPairDataset`](memory_match_core::WordPairDataset).
//!
//! # Module Structure
//!
//! - [`loader`]: read and classify one topic file (sync and async)
//! - [`runtime`]: background [`Loader`] polled by the game loop
//! - [`topics`]: `topic_index.json` generation and topic discovery
//! - [`convert`]: CSV to topic-file converters
//! - [`csv`]: quote-aware CSV record splitter
//!
//! # Data Directory
//!
//! ```text
//! data/
//!   topic_index.json       optional catalogue (see `memory-match index`)
//!   opposites.json         {"total_pairs": N, "pairs": [...]}
//!   synonyms_multiple.json {"metadata": {...}, "statistics": {...}, "entries": [...]}
//! ```

pub mod convert;
pub mod csv;
pub mod error;
pub mod loader;
pub mod runtime;
pub mod topics;

pub use convert::{
    analyze, convert_multiple, convert_pairs, MultipleDocument, PairsDocument, RowDistribution,
};
pub use error::{ConvertError, LoadError, TopicIndexError};
pub use loader::{load_dataset, load_dataset_async};
pub use runtime::{LoadResult, Loader, RequestId};
pub use topics::{
    build_topic_index, discover_topics, write_topic_index, Topic, TopicFile, TopicIndex,
    INDEX_FILE_NAME,
};
