//! Durable, append-only record of per-track sync outcomes.
//!
//! Each playlist owns a directory below the ledger base containing two
//! line-delimited logs: `completed.log` for tracks that were downloaded and
//! imported, `failed.log` for tracks whose fetch or import failed. Entries
//! are only ever appended, never rewritten or reordered, so a crash mid-run
//! loses at most the in-flight track.

use std::{
    collections::HashSet,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use futures_util::AsyncWriteExt;

const COMPLETED_LOG: &str = "completed.log";
const FAILED_LOG: &str = "failed.log";

#[derive(Debug)]
pub enum LedgerError {
    IoError(Error),
}

impl From<Error> for LedgerError {
    fn from(err: Error) -> Self {
        LedgerError::IoError(err)
    }
}

/// In-memory view of a playlist's ledger: two disjoint sets of track ids.
#[derive(Debug, Default, Clone)]
pub struct SyncState {
    completed: HashSet<String>,
    failed: HashSet<String>,
}

impl SyncState {
    pub fn is_completed(&self, track_id: &str) -> bool {
        self.completed.contains(track_id)
    }

    pub fn is_failed(&self, track_id: &str) -> bool {
        self.failed.contains(track_id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

pub struct PlaylistLedger {
    dir: PathBuf,
    state: SyncState,
    retry_failed: bool,
}

impl PlaylistLedger {
    /// Loads the ledger for a playlist from below `base`.
    ///
    /// Missing logs mean nothing has been recorded yet and produce empty
    /// sets; storage is created lazily on the first append. With
    /// `retry_failed` set, previously failed tracks are not reported as
    /// resolved, but they stay in the failed set so re-failing them does
    /// not duplicate log entries.
    pub async fn load(
        base: impl AsRef<Path>,
        playlist_id: &str,
        retry_failed: bool,
    ) -> Result<Self, LedgerError> {
        let dir = base.as_ref().join(playlist_id);
        let completed = Self::read_ids(&dir.join(COMPLETED_LOG)).await?;
        let mut failed = Self::read_ids(&dir.join(FAILED_LOG)).await?;

        // completed wins: failed.log may retain ids from attempts that a
        // later retry run completed, since log entries are never removed
        failed.retain(|id| !completed.contains(id));

        Ok(Self {
            dir,
            state: SyncState { completed, failed },
            retry_failed,
        })
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    /// Whether a track needs no further work this run.
    ///
    /// Completed tracks are never reconsidered. Failed tracks count as
    /// resolved unless the ledger was loaded with the retry-failed policy.
    pub fn is_resolved(&self, track_id: &str) -> bool {
        if self.state.completed.contains(track_id) {
            return true;
        }
        !self.retry_failed && self.state.failed.contains(track_id)
    }

    /// Durably records a track as downloaded and imported.
    ///
    /// Once this returns, a reload, even after a crash, reflects the track
    /// as completed.
    pub async fn record_completed(&mut self, track_id: &str) -> Result<(), LedgerError> {
        if self.state.completed.contains(track_id) {
            return Ok(());
        }
        self.append(COMPLETED_LOG, track_id).await?;
        self.state.completed.insert(track_id.to_string());
        self.state.failed.remove(track_id);
        Ok(())
    }

    /// Durably records a track as failed, once.
    ///
    /// Ids already present in either set are not written again: the failed
    /// set deduplicates across runs and within this one, and a completed
    /// track is never demoted.
    pub async fn record_failed(&mut self, track_id: &str) -> Result<(), LedgerError> {
        if self.state.failed.contains(track_id) || self.state.completed.contains(track_id) {
            return Ok(());
        }
        self.append(FAILED_LOG, track_id).await?;
        self.state.failed.insert(track_id.to_string());
        Ok(())
    }

    // One id per line, written as a single O_APPEND write so concurrent
    // recorders for sibling tracks cannot interleave within a line.
    async fn append(&self, log: &str, track_id: &str) -> Result<(), LedgerError> {
        async_fs::create_dir_all(&self.dir).await?;
        let mut file = async_fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.dir.join(log))
            .await?;
        file.write_all(format!("{}\n", track_id).as_bytes()).await?;
        file.flush().await?;
        file.sync_data().await?;
        Ok(())
    }

    async fn read_ids(path: &Path) -> Result<HashSet<String>, LedgerError> {
        let content = match async_fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect())
    }
}
