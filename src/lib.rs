//! # Sales Dashboard
//!
//! A minimal sales analytics dashboard built with Axum and SQLite.
//!
//! On first startup the service seeds a local SQLite database with one batch
//! of synthetic sales records. Every dashboard request then reads the full
//! table, aggregates it three ways (revenue by category, quantity histogram,
//! daily revenue), and renders a page embedding the serialized chart
//! payloads for client-side drawing.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The sales record entity, repository trait,
//!   and the pure aggregation pipeline
//! - **Application Layer** ([`application`]) - Seeding, dashboard service, and
//!   chart presentation
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - Health endpoint and HTTP middleware
//! - **Web Layer** ([`web`]) - Server-rendered HTML pages
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; every variable has a working default
//! export DATABASE_URL="sqlite://sales.db"
//! export LISTEN="0.0.0.0:3000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DashboardService, SeedOutcome, SeedService};
    pub use crate::domain::entities::{NewSalesRecord, SalesRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
