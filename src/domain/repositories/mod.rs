//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod sales_repository;

pub use sales_repository::SalesRepository;

#[cfg(test)]
pub use sales_repository::MockSalesRepository;
