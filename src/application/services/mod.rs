//! Application services orchestrating the seeding and dashboard pipelines.

pub mod dashboard_service;
pub mod seed_service;

pub use dashboard_service::DashboardService;
pub use seed_service::{SeedOutcome, SeedService};
