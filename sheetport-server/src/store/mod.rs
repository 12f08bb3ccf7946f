//! Record storage
//!
//! Handlers talk to a [`RecordStore`] held in application state, never to a
//! process-wide connection. Two implementations share the same contract:
//! - [`PgRecordStore`]: the `"user"` table in PostgreSQL via a sqlx pool
//! - [`MemoryRecordStore`]: a vector behind a lock, for tests and `serve --memory`

use async_trait::async_trait;
use sheetport_core::Record;

use crate::models::{PageRequest, SortKey};

pub mod memory;
pub mod pool;
pub mod postgres;

pub use memory::MemoryRecordStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgRecordStore;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for imported records.
///
/// Records are never updated or deleted through this interface.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every stored record, in storage order.
    async fn find_all(&self) -> StoreResult<Vec<Record>>;

    /// One page of records ordered ascending by `sort`.
    ///
    /// See [`PageRequest`] for how degenerate coordinates are treated.
    async fn find_page(&self, page: PageRequest, sort: SortKey) -> StoreResult<Vec<Record>>;

    /// Persist all records in batched writes, returning the number of rows written.
    ///
    /// No wrapping transaction: a failure part way through leaves earlier
    /// batches in place.
    async fn insert_batch(&self, records: &[Record]) -> StoreResult<u64>;

    /// Round-trip to the backing storage; fails when it cannot be reached.
    async fn ping(&self) -> StoreResult<()>;

    /// Short backend name reported by the health endpoint
    fn backend(&self) -> &'static str;
}
