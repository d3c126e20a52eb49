mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

// ─── Register ────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_register_creates_account_and_redirects_to_login(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/register")
        .form(&json!({ "username": "alice", "password": "pw1" }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
    assert_eq!(common::count_accounts(&pool).await, 1);
}

#[sqlx::test]
async fn test_register_duplicate_username_warns_without_second_row(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    server
        .post("/register")
        .form(&json!({ "username": "alice", "password": "pw1" }))
        .await;
    let response = server
        .post("/register")
        .form(&json!({ "username": "alice", "password": "other" }))
        .await;

    // Back to the form, not an error page.
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/register");
    assert_eq!(common::count_accounts(&pool).await, 1);

    // The queued flash shows up on the next page render.
    let page = server.get("/register").await;
    page.assert_status_ok();
    assert!(page.text().contains("User already exists"));
}

#[sqlx::test]
async fn test_register_stores_hash_not_password(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    server
        .post("/register")
        .form(&json!({ "username": "alice", "password": "pw1" }))
        .await;

    let stored: String =
        sqlx::query_scalar("SELECT password_hash FROM accounts WHERE username = 'alice'")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_ne!(stored, "pw1");
    assert!(stored.starts_with("$argon2"));
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_login_with_original_password_reaches_dashboard(pool: SqlitePool) {
    let server = common::make_server(pool);

    server
        .post("/register")
        .form(&json!({ "username": "alice", "password": "pw1" }))
        .await;

    let response = server
        .post("/login")
        .form(&json!({ "username": "alice", "password": "pw1" }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard");

    let dashboard = server.get("/dashboard").await;
    dashboard.assert_status_ok();
    assert!(dashboard.text().contains("Logged in as alice"));
}

#[sqlx::test]
async fn test_login_wrong_password_rejected(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    server
        .post("/register")
        .form(&json!({ "username": "alice", "password": "pw1" }))
        .await;

    let response = server
        .post("/login")
        .form(&json!({ "username": "alice", "password": "pw2" }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
    assert_eq!(common::count_sessions(&pool).await, 0);

    let page = server.get("/login").await;
    assert!(page.text().contains("Invalid username or password"));
}

#[sqlx::test]
async fn test_login_unknown_user_same_response_as_wrong_password(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/login")
        .form(&json!({ "username": "ghost", "password": "pw1" }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");

    let page = server.get("/login").await;
    assert!(page.text().contains("Invalid username or password"));
}

// ─── Logout and gating ───────────────────────────────────────────────────────

#[sqlx::test]
async fn test_logout_ends_session_and_flashes_on_home(pool: SqlitePool) {
    let server = common::make_server(pool.clone());
    common::register_and_login(&server, "alice", "pw1").await;
    assert_eq!(common::count_sessions(&pool).await, 1);

    let response = server.get("/logout").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    assert_eq!(common::count_sessions(&pool).await, 0);

    let home = server.get("/").await;
    home.assert_status_ok();
    assert!(home.text().contains("Logged out successfully"));
}

#[sqlx::test]
async fn test_gated_actions_redirect_to_login_after_logout(pool: SqlitePool) {
    let server = common::make_server(pool);
    common::register_and_login(&server, "alice", "pw1").await;
    server.get("/logout").await;

    let dashboard = server.get("/dashboard").await;
    dashboard.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(dashboard.header("location"), "/login");

    let add = server
        .post("/add")
        .form(&json!({ "name": "Bob", "email": "bob@x.com", "department": "Eng" }))
        .await;
    add.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(add.header("location"), "/login");

    let delete = server.get("/delete/1").await;
    delete.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(delete.header("location"), "/login");

    let update = server.get("/update/1").await;
    update.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(update.header("location"), "/login");
}

#[sqlx::test]
async fn test_anonymous_visitor_never_sees_dashboard(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/dashboard").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[sqlx::test]
async fn test_garbage_session_cookie_redirects_to_login(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .get("/dashboard")
        .add_header("cookie", "session_token=not-a-real-token")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

// ─── Public pages ────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_public_pages_render(pool: SqlitePool) {
    let server = common::make_server(pool);

    server.get("/").await.assert_status_ok();
    server.get("/register").await.assert_status_ok();
    server.get("/login").await.assert_status_ok();
}
