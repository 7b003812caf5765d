// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL alarm store.
//!
//! Each record is a single line of JSON appended to `<dir>/<name>.jsonl`.
//! Every append is fsynced - the file is the durability point for alarm
//! definitions. Corrupt lines are skipped on read so one bad entry cannot
//! take the whole alarm list down.

use crate::store::{AlarmStore, StoreError};
use async_trait::async_trait;
use chime_core::AlarmRecord;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// File-backed alarm store, one JSON record per line.
#[derive(Debug)]
pub struct JsonlAlarmStore {
    path: PathBuf,
}

impl JsonlAlarmStore {
    /// Open (or create) the store file `<dir>/<name>.jsonl`.
    pub fn open(dir: &Path, name: &str) -> Result<Self, StoreError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(format!("{name}.jsonl")),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AlarmStore for JsonlAlarmStore {
    async fn append(&self, record: &AlarmRecord) -> Result<(), StoreError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.sync_all().await?;
        Ok(())
    }

    async fn all(&self) -> Result<Vec<AlarmRecord>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            // A store that was never written to is empty, not an error.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str(trimmed) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(line = index + 1, error = %e, "skipping corrupt alarm record");
                }
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
