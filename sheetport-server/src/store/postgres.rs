//! PostgreSQL record store
//!
//! Expects an existing table shaped like the one the service was first
//! deployed against:
//!
//! ```sql
//! CREATE TABLE "user" (
//!     name    TEXT,
//!     age     BIGINT,
//!     sex     TEXT,
//!     address TEXT
//! );
//! ```
//!
//! NULL columns read back as empty text / zero.

use async_trait::async_trait;
use sheetport_core::Record;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::{RecordStore, StoreResult};
use crate::models::{PageRequest, SortKey};

/// Postgres caps a statement at 65535 bind parameters
const MAX_BIND_PARAMS: usize = 65_535;

/// Bound columns per inserted record
const COLUMNS_PER_RECORD: usize = 4;

/// Records per INSERT statement
const INSERT_CHUNK: usize = MAX_BIND_PARAMS / COLUMNS_PER_RECORD;

#[derive(Debug, FromRow)]
struct RecordRow {
    name: Option<String>,
    age: Option<i64>,
    sex: Option<String>,
    address: Option<String>,
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record {
            name: row.name.unwrap_or_default(),
            age: row.age.unwrap_or_default(),
            sex: row.sex.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
        }
    }
}

/// Record store backed by a sqlx connection pool
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find_all(&self) -> StoreResult<Vec<Record>> {
        let rows: Vec<RecordRow> =
            sqlx::query_as(r#"SELECT name, age, sex, address FROM "user""#)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Record::from).collect())
    }

    async fn find_page(&self, page: PageRequest, sort: SortKey) -> StoreResult<Vec<Record>> {
        // NULL limit means LIMIT ALL, NULL offset means OFFSET 0
        let sql = format!(
            r#"SELECT name, age, sex, address FROM "user" ORDER BY {} LIMIT $1 OFFSET $2"#,
            sort.column()
        );

        let rows: Vec<RecordRow> = sqlx::query_as(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Record::from).collect())
    }

    async fn insert_batch(&self, records: &[Record]) -> StoreResult<u64> {
        let mut written = 0;

        for chunk in records.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new(r#"INSERT INTO "user" (name, age, sex, address) "#);

            builder.push_values(chunk, |mut row, record| {
                row.push_bind(&record.name)
                    .push_bind(record.age)
                    .push_bind(&record.sex)
                    .push_bind(&record.address);
            });

            let result = builder.build().execute(&self.pool).await?;
            written += result.rows_affected();
        }

        tracing::debug!(written, "inserted record batch");
        Ok(written)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
