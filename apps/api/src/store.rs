//! Keyed on-disk store for resume records and their match results.
//!
//! Layout under the data directory:
//! - `resumes/<id>.json`  resume record, written once per ingestion
//! - `results/<id>.json`  latest match result for that resume
//! - `latest.json`        pointer to the most recently ingested resume
//!
//! All writes go through a temp file in the target directory followed by a rename,
//! so readers never observe a half-written artifact. Access to a given key is
//! serialized by a per-key async lock; the latest pointer has its own lock.
//! A key's lock lives in the map only while some task holds a lease on it.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{MatchResult, ResumeRecord};

const RESUMES_DIR: &str = "resumes";
const RESULTS_DIR: &str = "results";
const LATEST_FILE: &str = "latest.json";

#[derive(Debug, Serialize, Deserialize)]
struct LatestPointer {
    resume_id: Uuid,
}

pub struct ResumeStore {
    root: PathBuf,
    latest: Mutex<()>,
    locks: StdMutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl ResumeStore {
    /// Opens (creating if needed) a store rooted at `root`.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        tokio::fs::create_dir_all(root.join(RESUMES_DIR)).await?;
        tokio::fs::create_dir_all(root.join(RESULTS_DIR)).await?;
        info!("Resume store opened at {}", root.display());

        Ok(Self {
            root,
            latest: Mutex::new(()),
            locks: StdMutex::new(HashMap::new()),
        })
    }

    /// Persists a new record and makes it the latest one.
    pub async fn save_record(&self, record: &ResumeRecord) -> Result<(), AppError> {
        {
            let lease = self.lease(record.id);
            let _guard = lease.lock.lock().await;
            write_json_atomic(self.record_path(record.id), record).await?;
        }

        let _guard = self.latest.lock().await;
        write_json_atomic(
            self.root.join(LATEST_FILE),
            &LatestPointer {
                resume_id: record.id,
            },
        )
        .await?;

        debug!(resume_id = %record.id, "Latest resume pointer updated");
        Ok(())
    }

    /// Loads the record with `id`, or the latest record when `id` is `None`.
    pub async fn load_record(&self, id: Option<Uuid>) -> Result<ResumeRecord, AppError> {
        let id = match id {
            Some(id) => id,
            None => self.latest_id().await?.ok_or_else(not_found)?,
        };

        let lease = self.lease(id);
        let _guard = lease.lock.lock().await;
        read_json(&self.record_path(id)).await?.ok_or_else(not_found)
    }

    /// Persists a match result, replacing any earlier result for the same resume.
    pub async fn save_result(&self, result: &MatchResult) -> Result<(), AppError> {
        let lease = self.lease(result.resume_id);
        let _guard = lease.lock.lock().await;
        write_json_atomic(self.result_path(result.resume_id), result).await
    }

    async fn latest_id(&self) -> Result<Option<Uuid>, AppError> {
        let _guard = self.latest.lock().await;
        let pointer: Option<LatestPointer> = read_json(&self.root.join(LATEST_FILE)).await?;
        Ok(pointer.map(|p| p.resume_id))
    }

    fn lease(&self, id: Uuid) -> KeyLease<'_> {
        let mut locks = self.locks.lock().unwrap_or_else(|p| p.into_inner());
        let lock = locks.entry(id).or_default().clone();
        KeyLease {
            store: self,
            id,
            lock,
        }
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.root.join(RESUMES_DIR).join(format!("{id}.json"))
    }

    fn result_path(&self, id: Uuid) -> PathBuf {
        self.root.join(RESULTS_DIR).join(format!("{id}.json"))
    }

    #[cfg(test)]
    fn lock_entries(&self) -> usize {
        self.locks.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    #[cfg(test)]
    pub async fn load_result(&self, id: Uuid) -> Result<Option<MatchResult>, AppError> {
        read_json(&self.result_path(id)).await
    }
}

/// Shared handle on a key's lock. The map entry is dropped with the last lease.
struct KeyLease<'a> {
    store: &'a ResumeStore,
    id: Uuid,
    lock: Arc<Mutex<()>>,
}

impl Drop for KeyLease<'_> {
    fn drop(&mut self) {
        let mut locks = self.store.locks.lock().unwrap_or_else(|p| p.into_inner());
        // map + this lease
        let unused = Arc::strong_count(&self.lock) == 2;
        if unused && locks.get(&self.id).is_some_and(|l| Arc::ptr_eq(l, &self.lock)) {
            locks.remove(&self.id);
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Resume data file not found".to_string())
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, AppError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_json_atomic<T: Serialize>(path: PathBuf, value: &T) -> Result<(), AppError> {
    let bytes = serde_json::to_vec_pretty(value)?;

    tokio::task::spawn_blocking(move || -> Result<(), AppError> {
        let dir = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("{} has no parent directory", path.display()))?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| AppError::Io(e.error))?;
        Ok(())
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?
}
