use employee_directory::domain::entities::NewAccount;
use employee_directory::domain::repositories::AccountRepository;
use employee_directory::error::AppError;
use employee_directory::infrastructure::persistence::SqliteAccountRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn new_account(username: &str) -> NewAccount {
    NewAccount {
        username: username.to_string(),
        password_hash: format!("$argon2id$fake-hash-for-{username}"),
    }
}

#[sqlx::test]
async fn test_create_account(pool: SqlitePool) {
    let repo = SqliteAccountRepository::new(Arc::new(pool));

    let account = repo.create(new_account("alice")).await.unwrap();

    assert_eq!(account.username, "alice");
    assert!(account.id > 0);
    assert!(account.password_hash.starts_with("$argon2id$"));
}

#[sqlx::test]
async fn test_duplicate_username_is_conflict(pool: SqlitePool) {
    let repo = SqliteAccountRepository::new(Arc::new(pool));

    repo.create(new_account("alice")).await.unwrap();
    let result = repo.create(new_account("alice")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_username(pool: SqlitePool) {
    let repo = SqliteAccountRepository::new(Arc::new(pool));

    repo.create(new_account("alice")).await.unwrap();

    let found = repo.find_by_username("alice").await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().username, "alice");

    let missing = repo.find_by_username("ghost").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_find_by_id(pool: SqlitePool) {
    let repo = SqliteAccountRepository::new(Arc::new(pool));

    let created = repo.create(new_account("alice")).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().username, "alice");

    assert!(repo.find_by_id(created.id + 100).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_in_insertion_order(pool: SqlitePool) {
    let repo = SqliteAccountRepository::new(Arc::new(pool));

    repo.create(new_account("alice")).await.unwrap();
    repo.create(new_account("bob")).await.unwrap();
    repo.create(new_account("carol")).await.unwrap();

    let accounts = repo.list().await.unwrap();
    let usernames: Vec<_> = accounts.iter().map(|a| a.username.as_str()).collect();

    assert_eq!(usernames, vec!["alice", "bob", "carol"]);
}
