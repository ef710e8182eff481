//! Server-rendered page handlers.

pub mod index;
pub mod sales;

pub use index::index_handler;
pub use sales::sales_handler;
