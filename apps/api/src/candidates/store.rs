//! File-backed candidate list.
//!
//! A single JSON array on disk, rewritten whole on each append. An absent or
//! unreadable file reads as the empty list. Writes are serialized through an
//! async mutex; no durability guarantees beyond that.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use crate::models::candidate::CandidateRecord;

#[derive(Clone)]
pub struct CandidateStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl CandidateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Appends one record to the stored list.
    pub async fn append(&self, record: CandidateRecord) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut list = self.read_list().await;
        list.push(record);
        let json = serde_json::to_string_pretty(&list)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("failed to write candidate list to {}", self.path.display()))
    }

    /// All stored records in insertion order.
    pub async fn all(&self) -> Vec<CandidateRecord> {
        let _guard = self.lock.lock().await;
        self.read_list().await
    }

    /// All stored records, highest score first.
    pub async fn ranked(&self) -> Vec<CandidateRecord> {
        let mut list = self.all().await;
        list.sort_by(|a, b| b.score.cmp(&a.score));
        list
    }

    async fn read_list(&self) -> Vec<CandidateRecord> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }
}
