use chrono::{Duration, Utc};
use employee_directory::domain::entities::{NewAccount, NewSession};
use employee_directory::domain::repositories::{AccountRepository, SessionRepository};
use employee_directory::infrastructure::persistence::{
    SqliteAccountRepository, SqliteSessionRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

async fn seed_account(pool: &SqlitePool) -> i64 {
    let repo = SqliteAccountRepository::new(Arc::new(pool.clone()));
    repo.create(NewAccount {
        username: "alice".to_string(),
        password_hash: "$argon2id$fake".to_string(),
    })
    .await
    .unwrap()
    .id
}

fn new_session(token_hash: &str, account_id: i64, ttl_hours: i64) -> NewSession {
    NewSession {
        token_hash: token_hash.to_string(),
        account_id,
        expires_at: Utc::now() + Duration::hours(ttl_hours),
    }
}

#[sqlx::test]
async fn test_create_and_find(pool: SqlitePool) {
    let account_id = seed_account(&pool).await;
    let repo = SqliteSessionRepository::new(Arc::new(pool));

    let created = repo
        .create(new_session("hash123", account_id, 24))
        .await
        .unwrap();
    assert_eq!(created.account_id, account_id);

    let found = repo.find_by_token_hash("hash123").await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    assert!(repo.find_by_token_hash("other").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete_by_token_hash(pool: SqlitePool) {
    let account_id = seed_account(&pool).await;
    let repo = SqliteSessionRepository::new(Arc::new(pool));

    repo.create(new_session("hash123", account_id, 24))
        .await
        .unwrap();

    assert!(repo.delete_by_token_hash("hash123").await.unwrap());
    assert!(repo.find_by_token_hash("hash123").await.unwrap().is_none());

    // Deleting an already-gone session reports false, not an error.
    assert!(!repo.delete_by_token_hash("hash123").await.unwrap());
}

#[sqlx::test]
async fn test_delete_expired_keeps_live_sessions(pool: SqlitePool) {
    let account_id = seed_account(&pool).await;
    let repo = SqliteSessionRepository::new(Arc::new(pool));

    repo.create(new_session("live", account_id, 24))
        .await
        .unwrap();
    repo.create(new_session("stale-1", account_id, -1))
        .await
        .unwrap();
    repo.create(new_session("stale-2", account_id, -48))
        .await
        .unwrap();

    let removed = repo.delete_expired(Utc::now()).await.unwrap();

    assert_eq!(removed, 2);
    assert!(repo.find_by_token_hash("live").await.unwrap().is_some());
    assert!(repo.find_by_token_hash("stale-1").await.unwrap().is_none());
}
