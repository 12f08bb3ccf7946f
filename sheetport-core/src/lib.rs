//! sheetport-core: records and spreadsheet ingestion
//!
//! Turns an uploaded spreadsheet into a list of [`Record`]s:
//! - `sheet`: opens the container and renders the active worksheet as text rows
//! - `parser`: drops the header row and maps fixed columns onto record fields
//! - `record`: the record type and the lenient integer coercion it relies on

pub mod error;
pub mod parser;
pub mod record;
pub mod sheet;

pub use error::{Result, SheetError};
pub use parser::parse_rows;
pub use record::{coerce_int, Record};
pub use sheet::{import_records, read_rows};
