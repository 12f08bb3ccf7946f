//! In-memory record store
//!
//! Insertion order is the storage order. Pages use a stable sort, so records
//! with equal keys keep their insertion order.

use std::sync::Arc;

use async_trait::async_trait;
use sheetport_core::Record;
use tokio::sync::RwLock;

use super::{RecordStore, StoreResult};
use crate::models::{PageRequest, SortKey};

/// Record store held entirely in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<RwLock<Vec<Record>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with records
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn find_all(&self) -> StoreResult<Vec<Record>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_page(&self, page: PageRequest, sort: SortKey) -> StoreResult<Vec<Record>> {
        let mut sorted = self.records.read().await.clone();
        sorted.sort_by(|a, b| sort.compare(a, b));

        let skip = page
            .offset()
            .map_or(0, |offset| usize::try_from(offset).unwrap_or(usize::MAX));
        let take = page
            .limit()
            .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(sorted.into_iter().skip(skip).take(take).collect())
    }

    async fn insert_batch(&self, records: &[Record]) -> StoreResult<u64> {
        self.records.write().await.extend_from_slice(records);
        Ok(records.len() as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
