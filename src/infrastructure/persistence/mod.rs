//! Concrete repository implementations.

pub mod sqlite_sales_repository;

pub use sqlite_sales_repository::SqliteSalesRepository;
