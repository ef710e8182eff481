//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, sales_handler};
use axum::{Router, routing::get};

/// Server-rendered page routes.
///
/// # Endpoints
///
/// - `GET /` - Landing page
/// - `GET /sales` - Sales dashboard with the three charts
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/sales", get(sales_handler))
}
