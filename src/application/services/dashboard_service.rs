//! Dashboard service composing aggregation and chart rendering.

use std::sync::Arc;

use crate::application::presenter::render_charts;
use crate::domain::aggregation::compute_aggregations;
use crate::domain::repositories::SalesRepository;
use crate::error::AppError;

/// Service behind the sales page: reads the full record set, aggregates it,
/// and renders the chart payloads.
///
/// Stateless apart from the repository handle; every call reads the table
/// fresh.
pub struct DashboardService<R: SalesRepository> {
    repository: Arc<R>,
}

impl<R: SalesRepository> DashboardService<R> {
    /// Creates a new dashboard service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Produces the three serialized chart payloads for the sales page.
    ///
    /// An empty store yields three empty charts, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database or serialization errors.
    pub async fn chart_payloads(&self) -> Result<Vec<String>, AppError> {
        let records = self.repository.fetch_all().await?;
        let aggregations = compute_aggregations(&records);
        render_charts(&aggregations)
    }

    /// Counts stored records.
    ///
    /// Used by the health endpoint as a database reachability probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SalesRecord;
    use crate::domain::repositories::MockSalesRepository;
    use serde_json::json;

    fn fixed_records() -> Vec<SalesRecord> {
        vec![
            SalesRecord {
                id: 1,
                date: "2024-06-01".parse().unwrap(),
                product: "Tablet".to_string(),
                category: "Electronics".to_string(),
                quantity: 5,
                revenue: 100.0,
            },
            SalesRecord {
                id: 2,
                date: "2024-06-01".parse().unwrap(),
                product: "Tablet".to_string(),
                category: "Electronics".to_string(),
                quantity: 9,
                revenue: 50.0,
            },
            SalesRecord {
                id: 3,
                date: "2024-06-02".parse().unwrap(),
                product: "Phone".to_string(),
                category: "Mobile".to_string(),
                quantity: 2,
                revenue: 200.0,
            },
        ]
    }

    #[tokio::test]
    async fn test_chart_payloads_aggregate_records() {
        let mut mock_repo = MockSalesRepository::new();
        mock_repo
            .expect_fetch_all()
            .times(1)
            .returning(|| Ok(fixed_records()));

        let service = DashboardService::new(Arc::new(mock_repo));
        let payloads = service.chart_payloads().await.unwrap();

        assert_eq!(payloads.len(), 3);

        let bar: serde_json::Value = serde_json::from_str(&payloads[0]).unwrap();
        assert_eq!(bar["x"], json!(["Electronics", "Mobile"]));
        assert_eq!(bar["y"], json!([150.0, 200.0]));
    }

    #[tokio::test]
    async fn test_chart_payloads_with_empty_store() {
        let mut mock_repo = MockSalesRepository::new();
        mock_repo
            .expect_fetch_all()
            .times(1)
            .returning(|| Ok(Vec::new()));

        let service = DashboardService::new(Arc::new(mock_repo));
        let payloads = service.chart_payloads().await.unwrap();

        assert_eq!(payloads.len(), 3);
        for payload in &payloads {
            assert!(payload.contains(r#""x":[]"#));
        }
    }

    #[tokio::test]
    async fn test_record_count_passthrough() {
        let mut mock_repo = MockSalesRepository::new();
        mock_repo.expect_count().times(1).returning(|| Ok(100));

        let service = DashboardService::new(Arc::new(mock_repo));

        assert_eq!(service.record_count().await.unwrap(), 100);
    }

    #[tokio::test]
    async fn test_repository_failure_surfaces_as_error() {
        let mut mock_repo = MockSalesRepository::new();
        mock_repo
            .expect_fetch_all()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = DashboardService::new(Arc::new(mock_repo));

        assert!(service.chart_payloads().await.is_err());
    }
}
