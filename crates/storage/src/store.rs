// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistent alarm store interface.
//!
//! The durable store is an external collaborator; the scheduling core only
//! needs two operations: append one record, read all records. Its on-disk
//! format is the implementation's concern.

use async_trait::async_trait;
use chime_core::AlarmRecord;
use std::io;
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store failure: {0}")]
    Backend(String),
}

/// Durable, append-only storage for alarm records.
#[async_trait]
pub trait AlarmStore: Send + Sync {
    /// Append one record to the store.
    async fn append(&self, record: &AlarmRecord) -> Result<(), StoreError>;

    /// Read every record in insertion order.
    async fn all(&self) -> Result<Vec<AlarmRecord>, StoreError>;
}
