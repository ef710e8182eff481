//! Sales dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

/// Template for the sales dashboard page.
///
/// Renders `templates/sales.html` with the three serialized chart payloads
/// embedded for client-side hydration: revenue by category, quantity
/// distribution, daily revenue.
#[derive(Template, WebTemplate)]
#[template(path = "sales.html")]
pub struct SalesTemplate {
    pub charts: Vec<String>,
}

/// Renders the sales dashboard.
///
/// Reads the full record set, aggregates it, and embeds the chart payloads
/// into the page. An empty store renders three empty charts.
///
/// # Endpoint
///
/// `GET /sales`
///
/// # Errors
///
/// Returns a 500 JSON error if the store cannot be read.
pub async fn sales_handler(State(state): State<AppState>) -> Result<SalesTemplate, AppError> {
    let charts = state.dashboard_service.chart_payloads().await?;

    Ok(SalesTemplate { charts })
}
