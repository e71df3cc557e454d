//! Runtime configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::DEFAULT_TARGET_PAIRS;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the topic files.
    pub data_dir: PathBuf,
    /// Pairs dealt per game.
    pub pairs: usize,
    pub seed: u32,
    /// Log file for the interactive game; logging is off when unset.
    pub log_path: Option<PathBuf>,
    /// Reverse Hebrew words for terminals without bidi support.
    pub reverse_rtl: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let data_dir = non_empty("MEMORY_MATCH_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));

        let pairs = non_empty("MEMORY_MATCH_PAIRS")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_TARGET_PAIRS);

        let seed = non_empty("MEMORY_MATCH_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = non_empty("MEMORY_MATCH_LOG_PATH").map(PathBuf::from);

        let reverse_rtl = non_empty("MEMORY_MATCH_REVERSE_RTL")
            .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
            .unwrap_or(true);

        Self {
            data_dir,
            pairs,
            seed,
            log_path,
            reverse_rtl,
        }
    }
}

/// Seed derived from the wall clock.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
