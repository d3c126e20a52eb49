#![allow(dead_code)]

use axum::{Router, middleware};
use axum_test::TestServer;
use chrono::Utc;
use employee_directory::application::services::{AuthService, EmployeeService};
use employee_directory::infrastructure::persistence::{
    SqliteAccountRepository, SqliteEmployeeRepository, SqliteSessionRepository,
};
use employee_directory::state::AppState;
use employee_directory::web;
use employee_directory::web::middleware::web_auth;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_SESSION_SECRET: &str = "test-session-secret";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);

    let account_repo = Arc::new(SqliteAccountRepository::new(pool.clone()));
    let session_repo = Arc::new(SqliteSessionRepository::new(pool.clone()));
    let employee_repo = Arc::new(SqliteEmployeeRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        account_repo,
        session_repo,
        TEST_SESSION_SECRET.to_string(),
        24,
    ));
    let employee_service = Arc::new(EmployeeService::new(employee_repo));

    AppState {
        auth_service,
        employee_service,
    }
}

/// Build a test server over the full page router with a cookie jar, so
/// session and flash cookies flow between requests like in a browser.
pub fn make_server(pool: SqlitePool) -> TestServer {
    let state = create_test_state(pool);

    let protected = web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::layer,
    ));

    let app = Router::new()
        .merge(web::routes::public_routes())
        .merge(protected)
        .with_state(state);

    TestServer::builder().save_cookies().build(app).unwrap()
}

/// Register an account and log in, leaving the session cookie in the jar.
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) {
    server
        .post("/register")
        .form(&json!({ "username": username, "password": password }))
        .await;
    server
        .post("/login")
        .form(&json!({ "username": username, "password": password }))
        .await;
}

pub async fn create_test_employee(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    department: &str,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO employees (name, email, department, created_at) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(department)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_accounts(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_employees(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_sessions(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sessions")
        .fetch_one(pool)
        .await
        .unwrap()
}
