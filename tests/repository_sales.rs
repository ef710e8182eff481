mod common;

use sqlx::SqlitePool;
use std::sync::Arc;

use sales_dashboard::domain::entities::NewSalesRecord;
use sales_dashboard::domain::repositories::SalesRepository;
use sales_dashboard::infrastructure::persistence::SqliteSalesRepository;

fn new_record(date: &str, category: &str, quantity: i64, revenue: f64) -> NewSalesRecord {
    NewSalesRecord {
        date: date.parse().unwrap(),
        product: "Laptop".to_string(),
        category: category.to_string(),
        quantity,
        revenue,
    }
}

#[sqlx::test]
async fn test_count_on_empty_store(pool: SqlitePool) {
    let repo = SqliteSalesRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_insert_batch_writes_every_row(pool: SqlitePool) {
    let repo = SqliteSalesRepository::new(Arc::new(pool));

    let records = vec![
        new_record("2024-01-05", "Electronics", 3, 250.0),
        new_record("2024-02-10", "Mobile", 7, 799.99),
        new_record("2024-03-15", "Computing", 1, 1500.0),
    ];

    let inserted = repo.insert_batch(records).await.unwrap();

    assert_eq!(inserted, 3);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
async fn test_fetch_all_returns_rows_ordered_by_id(pool: SqlitePool) {
    let repo = SqliteSalesRepository::new(Arc::new(pool.clone()));

    common::insert_record(&pool, "2024-05-01", "Tablet", "Electronics", 4, 320.0).await;
    common::insert_record(&pool, "2024-04-01", "Phone", "Mobile", 9, 650.5).await;

    let records = repo.fetch_all().await.unwrap();

    assert_eq!(records.len(), 2);
    assert!(records[0].id < records[1].id);
    assert_eq!(records[0].product, "Tablet");
    assert_eq!(records[1].product, "Phone");
}

#[sqlx::test]
async fn test_fetch_all_round_trips_values(pool: SqlitePool) {
    let repo = SqliteSalesRepository::new(Arc::new(pool));

    repo.insert_batch(vec![new_record("2024-11-27", "Mobile", 42, 1234.56)])
        .await
        .unwrap();

    let records = repo.fetch_all().await.unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.date.to_string(), "2024-11-27");
    assert_eq!(record.category, "Mobile");
    assert_eq!(record.quantity, 42);
    assert!((record.revenue - 1234.56).abs() < f64::EPSILON);
}

#[sqlx::test]
async fn test_fetch_all_on_empty_store(pool: SqlitePool) {
    let repo = SqliteSalesRepository::new(Arc::new(pool));

    assert!(repo.fetch_all().await.unwrap().is_empty());
}
