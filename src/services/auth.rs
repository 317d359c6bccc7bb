use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};

/// Hashes a password with a fresh random salt, returning a PHC string
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Checks a password against a stored PHC hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Failed to parse password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Registers a new account.
///
/// A duplicate username or email surfaces as [`AppError::Conflict`], mapped
/// from the unique constraints on the users table.
pub async fn signup(pool: &SqlitePool, new_user: &NewUser) -> AppResult<User> {
    let password_hash = hash_password(&new_user.password)?;

    let result = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email, password_hash)
         VALUES (?, ?, ?)
         RETURNING id, username, email, password_hash, created_at",
    )
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => {
            info!(username = %user.username, "registered new user");
            Ok(user)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
            AppError::Conflict("Username or email already exists".to_string()),
        ),
        Err(e) => Err(e.into()),
    }
}

/// Validates credentials.
///
/// Returns `Ok(None)` when the username is unknown or the password does not
/// verify; both cases are indistinguishable to the caller.
pub async fn login(pool: &SqlitePool, username: &str, password: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password_hash, created_at FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    match user {
        Some(user) if verify_password(&user.password_hash, password)? => {
            info!(username = %user.username, "login succeeded");
            Ok(Some(user))
        }
        _ => Ok(None),
    }
}
