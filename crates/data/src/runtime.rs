//! Background dataset loading.
//!
//! Bridges the sync game loop with async file reads: requests are spawned on
//! an owned tokio runtime and results come back over a channel the loop polls
//! once per frame.

use std::io;
use std::path::PathBuf;

use log::debug;
use memory_match_core::WordPairDataset;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;

use crate::error::LoadError;
use crate::loader::load_dataset_async;

/// Identifies one load request.
pub type RequestId = u64;

/// A finished load, delivered to the game loop.
#[derive(Debug)]
pub struct LoadResult {
    pub id: RequestId,
    pub path: PathBuf,
    pub outcome: Result<WordPairDataset, LoadError>,
}

/// Running loader instance.
pub struct Loader {
    rt: Runtime,
    result_tx: mpsc::UnboundedSender<LoadResult>,
    result_rx: mpsc::UnboundedReceiver<LoadResult>,
    next_id: RequestId,
}

impl Loader {
    /// Start a loader with a single worker thread.
    pub fn start() -> io::Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("memory-match-loader")
            .enable_all()
            .build()?;
        let (result_tx, result_rx) = mpsc::unbounded_channel();

        Ok(Self {
            rt,
            result_tx,
            result_rx,
            next_id: 1,
        })
    }

    /// Queue a load of `path`. The result carries the returned id.
    pub fn request(&mut self, path: impl Into<PathBuf>) -> RequestId {
        let id = self.next_id;
        self.next_id += 1;

        let path = path.into();
        let tx = self.result_tx.clone();
        debug!("load request {} for {}", id, path.display());
        self.rt.spawn(async move {
            let outcome = load_dataset_async(&path).await;
            let _ = tx.send(LoadResult { id, path, outcome });
        });
        id
    }

    /// Next finished load, if any.
    pub fn try_recv(&mut self) -> Option<LoadResult> {
        self.result_rx.try_recv().ok()
    }

    /// Block until the next load finishes.
    ///
    /// Must not be called from inside an async context.
    pub fn recv_blocking(&mut self) -> Option<LoadResult> {
        self.result_rx.blocking_recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_results_with_request_ids() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(&good, r#"{"pairs":[{"term1":"a","term2":"b"}]}"#).unwrap();
        let missing = dir.path().join("missing.json");

        let mut loader = Loader::start().unwrap();
        let first = loader.request(&good);
        let second = loader.request(&missing);
        assert_ne!(first, second);

        let mut results = vec![
            loader.recv_blocking().unwrap(),
            loader.recv_blocking().unwrap(),
        ];
        results.sort_by_key(|r| r.id);

        assert_eq!(results[0].id, first);
        assert_eq!(results[0].path, good);
        assert_eq!(results[0].outcome.as_ref().unwrap().len(), 1);
        assert_eq!(results[1].id, second);
        assert!(matches!(results[1].outcome, Err(LoadError::Io { .. })));
        assert!(loader.try_recv().is_none());
    }
}
