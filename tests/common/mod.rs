#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;

use sales_dashboard::application::services::DashboardService;
use sales_dashboard::infrastructure::persistence::SqliteSalesRepository;
use sales_dashboard::state::AppState;

pub async fn insert_record(
    pool: &SqlitePool,
    date: &str,
    product: &str,
    category: &str,
    quantity: i64,
    revenue: f64,
) {
    sqlx::query(
        "INSERT INTO sales_records (date, product, category, quantity, revenue) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(date)
    .bind(product)
    .bind(category)
    .bind(quantity)
    .bind(revenue)
    .execute(pool)
    .await
    .unwrap();
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);
    let repository = Arc::new(SqliteSalesRepository::new(pool));
    let dashboard_service = Arc::new(DashboardService::new(repository));

    AppState::new(dashboard_service)
}
