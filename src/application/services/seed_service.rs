//! Idempotent seeding of the record store with synthetic sales data.

use std::sync::Arc;

use chrono::NaiveDate;
use rand::Rng;

use crate::domain::entities::NewSalesRecord;
use crate::domain::repositories::SalesRepository;
use crate::error::AppError;

/// Number of records written on first startup.
pub const SEED_RECORD_COUNT: usize = 100;

/// Calendar year all synthetic dates fall into.
const SEED_YEAR: i32 = 2024;

const PRODUCTS: [&str; 5] = ["Laptop", "Phone", "Tablet", "Desktop", "Accessories"];
const CATEGORIES: [&str; 3] = ["Electronics", "Mobile", "Computing"];

/// Result of a seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty; this many records were inserted.
    Seeded(usize),
    /// The store already held records; nothing was written.
    AlreadySeeded,
}

/// Service that populates an empty store with one batch of synthetic records.
///
/// Runs once at process start, before the listener binds. The random source
/// is injected so tests can reproduce exact datasets with a fixed seed.
pub struct SeedService<R: SalesRepository> {
    repository: Arc<R>,
}

impl<R: SalesRepository> SeedService<R> {
    /// Creates a new seeding service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Seeds the store if and only if it is empty.
    ///
    /// The precondition check and the insert are two statements, not one
    /// atomic unit: two fresh processes sharing a database file could both
    /// observe an empty store and double-seed. A single process cannot race
    /// itself because seeding completes before any request is served.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; seeding failures
    /// are fatal to startup.
    pub async fn ensure_seeded<G: Rng + Send>(&self, rng: &mut G) -> Result<SeedOutcome, AppError> {
        if self.repository.count().await? > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let records = generate_records(rng);
        let inserted = self.repository.insert_batch(records).await?;

        Ok(SeedOutcome::Seeded(inserted as usize))
    }
}

/// Generates [`SEED_RECORD_COUNT`] records with independently randomized
/// date, product, category, quantity, and revenue.
///
/// Days stay below 28 so every month produces a valid date.
fn generate_records<G: Rng>(rng: &mut G) -> Vec<NewSalesRecord> {
    (0..SEED_RECORD_COUNT)
        .map(|_| {
            let month = rng.random_range(1..13);
            let day = rng.random_range(1..28);
            NewSalesRecord {
                date: NaiveDate::from_ymd_opt(SEED_YEAR, month, day)
                    .expect("days below 28 are valid in every month"),
                product: PRODUCTS[rng.random_range(0..PRODUCTS.len())].to_string(),
                category: CATEGORIES[rng.random_range(0..CATEGORIES.len())].to_string(),
                quantity: rng.random_range(1..50),
                revenue: rng.random_range(100.0..2000.0),
            }
        })
        .collect()
}
