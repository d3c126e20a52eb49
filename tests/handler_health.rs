mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use employee_directory::web::handlers::health_handler;
use sqlx::SqlitePool;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_health_reports_healthy(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[sqlx::test]
async fn test_health_counts_records(pool: SqlitePool) {
    common::create_test_employee(&pool, "Bob", "bob@x.com", "Eng").await;
    let server = make_server(pool);

    let response = server.get("/health").await;

    let body = response.json::<serde_json::Value>();
    let message = body["checks"]["database"]["message"].as_str().unwrap();
    assert!(message.contains("1 employee record"));
}
