//! Authentication service: registration, login, logout, session checks.

use argon2::password_hash::{Error as PasswordHashError, PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use rand::distr::{Alphanumeric, SampleString};
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{Account, NewAccount, NewSession};
use crate::domain::repositories::{AccountRepository, SessionRepository};
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Length of the opaque session token placed in the cookie.
const SESSION_TOKEN_LEN: usize = 48;

/// Service for account registration and cookie-session authentication.
///
/// Passwords are stored as salted Argon2 PHC strings; verification goes
/// through `Argon2::verify_password`, which compares in constant time.
/// Session tokens are opaque random strings hashed with HMAC-SHA256 (keyed
/// by `signing_secret`) before storage, so a reader of the database cannot
/// forge a live session cookie.
pub struct AuthService<A: AccountRepository, S: SessionRepository> {
    accounts: Arc<A>,
    sessions: Arc<S>,
    signing_secret: String,
    session_ttl_hours: i64,
}

impl<A: AccountRepository, S: SessionRepository> AuthService<A, S> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `accounts` - account repository
    /// - `sessions` - session repository
    /// - `signing_secret` - HMAC key for session token hashing
    /// - `session_ttl_hours` - how long a login stays valid
    pub fn new(
        accounts: Arc<A>,
        sessions: Arc<S>,
        signing_secret: String,
        session_ttl_hours: i64,
    ) -> Self {
        Self {
            accounts,
            sessions,
            signing_secret,
            session_ttl_hours,
        }
    }

    /// Session lifetime in hours; the login handler uses it for the
    /// cookie `Max-Age`.
    pub fn session_ttl_hours(&self) -> i64 {
        self.session_ttl_hours
    }

    /// Registers a new account.
    ///
    /// The account is never returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken;
    /// the caller surfaces this as a warning, not a failure page.
    ///
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AppError> {
        if self.accounts.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(
                "User already exists",
                json!({ "username": username }),
            ));
        }

        let password_hash = hash_password(password)?;
        self.accounts
            .create(NewAccount {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(username, "Account registered");
        Ok(())
    }

    /// Authenticates credentials and starts a session.
    ///
    /// Returns the raw session token for the cookie. An unknown username
    /// and a wrong password produce the same error, so callers cannot be
    /// used to enumerate accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on bad credentials and
    /// [`AppError::Internal`] on database errors.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let account = self
            .accounts
            .find_by_username(username)
            .await?
            .ok_or_else(invalid_credentials)?;

        verify_password(password, &account.password_hash)?;

        let token = generate_token();
        let token_hash = self.hash_token(&token);
        self.sessions
            .create(NewSession {
                token_hash,
                account_id: account.id,
                expires_at: Utc::now() + Duration::hours(self.session_ttl_hours),
            })
            .await?;

        tracing::info!(username, "Login succeeded");
        Ok(token)
    }

    /// Ends the session identified by the raw cookie token.
    ///
    /// Deleting an already-gone session is not an error; the cookie is
    /// cleared either way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let token_hash = self.hash_token(token);
        self.sessions.delete_by_token_hash(&token_hash).await?;
        Ok(())
    }

    /// Resolves the raw cookie token to its account.
    ///
    /// Run by the web-auth middleware on every gated request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the session is unknown or
    /// expired, or the account no longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<Account, AppError> {
        let token_hash = self.hash_token(token);

        let session = self
            .sessions
            .find_by_token_hash(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized", json!({ "reason": "unknown session" }))
            })?;

        if session.is_expired(Utc::now()) {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "session expired" }),
            ));
        }

        self.accounts
            .find_by_id(session.account_id)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized", json!({ "reason": "account missing" }))
            })
    }

    /// Hashes a raw session token with HMAC-SHA256 using the signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Generates an opaque alphanumeric session token.
fn generate_token() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), SESSION_TOKEN_LEN)
}

/// Hashes a password with Argon2 and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            AppError::internal("Failed to hash password", json!({ "error": e.to_string() }))
        })?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored Argon2 PHC string.
fn verify_password(password: &str, stored_hash: &str) -> Result<(), AppError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        AppError::internal(
            "Stored password hash is malformed",
            json!({ "error": e.to_string() }),
        )
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(()),
        Err(PasswordHashError::Password) => Err(invalid_credentials()),
        Err(e) => Err(AppError::internal(
            "Password verification failed",
            json!({ "error": e.to_string() }),
        )),
    }
}

/// The single error for both unknown-user and wrong-password, so the two
/// cannot be told apart from the outside.
fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid username or password", json!({}))
}
