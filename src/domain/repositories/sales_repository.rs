//! Repository trait for the sales record store.

use crate::domain::entities::{NewSalesRecord, SalesRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the single shared `sales_records` table.
///
/// The store transitions once from empty to seeded and is read-only
/// afterwards, so the interface is deliberately narrow: count for the
/// seeding precondition check, one bulk insert, one full read.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteSalesRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalesRepository: Send + Sync {
    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Inserts a batch of records inside a single transaction.
    ///
    /// Either every row is written or none is. Returns the number of rows
    /// inserted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; the transaction is
    /// rolled back.
    async fn insert_batch(&self, records: Vec<NewSalesRecord>) -> Result<u64, AppError>;

    /// Loads every record, ordered by id.
    ///
    /// The dashboard reads the entire table on each request; there is no
    /// filtering or pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_all(&self) -> Result<Vec<SalesRecord>, AppError>;
}
