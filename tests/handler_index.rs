use axum::{Router, routing::get};
use axum_test::TestServer;

use sales_dashboard::web::handlers::index_handler;

#[tokio::test]
async fn test_index_page_renders() {
    let app = Router::new().route("/", get(index_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Sales Dashboard"));
    assert!(body.contains(r#"href="/sales""#));
}
