//! sheetport-server: HTTP API over the record table
//!
//! Three endpoints:
//! - `GET /getData/all`: every record
//! - `GET /getData/page?current=&size=`: one page ordered by age
//! - `POST /upload`: import the active worksheet of a spreadsheet (`file` field)

pub mod http;
pub mod models;
pub mod state;
pub mod store;

pub use http::{router, run_server, ServerConfig};
pub use state::AppState;
pub use store::{MemoryRecordStore, PgRecordStore, RecordStore};
