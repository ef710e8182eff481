//! Core business entities.

pub mod sales_record;

pub use sales_record::{NewSalesRecord, SalesRecord};
