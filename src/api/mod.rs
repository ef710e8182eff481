//! Operational API layer: health endpoint, DTOs, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
