//! SQLite implementation of the sales record repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewSalesRecord, SalesRecord};
use crate::domain::repositories::SalesRepository;
use crate::error::AppError;

/// SQLite repository over the `sales_records` table.
///
/// Queries use the runtime API rather than the compile-time checked macros so
/// the crate builds without a database reachable at compile time.
pub struct SqliteSalesRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSalesRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalesRepository for SqliteSalesRepository {
    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales_records")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn insert_batch(&self, records: Vec<NewSalesRecord>) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        for record in &records {
            sqlx::query(
                r#"
                INSERT INTO sales_records (date, product, category, quantity, revenue)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(record.date)
            .bind(&record.product)
            .bind(&record.category)
            .bind(record.quantity)
            .bind(record.revenue)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(records.len() as u64)
    }

    async fn fetch_all(&self) -> Result<Vec<SalesRecord>, AppError> {
        let records = sqlx::query_as::<_, SalesRecord>(
            r#"
            SELECT id, date, product, category, quantity, revenue
            FROM sales_records
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }
}
