//! Account and credential management.
//!
//! Owns every rule that touches a password: hashing, verification, the
//! minimum-length policy, and the reset-token lifecycle. Hashes use Argon2id
//! with per-password salts; token comparison happens against the stored row,
//! and login failures collapse unknown email and wrong password into one
//! error so the endpoint does not leak which emails have accounts.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{password_reset_token::PasswordResetTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
};

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// How long a reset token stays valid.
const RESET_TOKEN_TTL_HOURS: i64 = 1;

/// Length of generated reset tokens.
const RESET_TOKEN_LENGTH: usize = 32;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AuthError::EmailTaken)` - Email already has an account
    /// - `Err(AuthError::PasswordRejected)` - Password fails the length policy
    pub async fn register(&self, email: String, password: String) -> Result<User, AppError> {
        validate_password(&password)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&email).await? {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&password)?;

        let user = user_repo
            .create(CreateUserParams {
                email,
                password_hash,
                admin: false,
            })
            .await?;

        tracing::info!("Registered new account {}", user.id);

        Ok(user)
    }

    /// Verifies credentials and returns the account on success.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_entity_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&entity.password_hash, password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(entity))
    }

    /// Changes a logged-in user's password.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AuthError::WrongCurrentPassword)` - Current password did not verify
    /// - `Err(AuthError::PasswordRejected)` - New password fails the length policy
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: String,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_entity_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !verify_password(&entity.password_hash, current_password) {
            return Err(AuthError::WrongCurrentPassword.into());
        }

        validate_password(&new_password)?;

        let password_hash = hash_password(&new_password)?;
        user_repo.update_password(user_id, password_hash).await?;

        tracing::info!("Password changed for account {}", user_id);

        Ok(())
    }

    /// Starts a password reset for the given email.
    ///
    /// Replaces any earlier token so only one is live per account. Always
    /// reports success to the caller; whether the email had an account is
    /// only visible in the server log, never in the response.
    ///
    /// # Returns
    /// - `Ok(())` - Token issued, or email unknown (indistinguishable)
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_entity_by_email(email).await? else {
            tracing::info!("Password reset requested for unknown email");
            return Ok(());
        };

        let token_repo = PasswordResetTokenRepository::new(self.db);
        token_repo.delete_for_user(user.id).await?;

        let token = generate_reset_token();
        let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);

        token_repo.create(user.id, token.clone(), expires_at).await?;

        // Stands in for mail delivery; operators relay the token to the user.
        tracing::info!("Password reset token for account {}: {}", user.id, token);

        Ok(())
    }

    /// Completes a password reset with a previously issued token.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced and token consumed
    /// - `Err(AuthError::InvalidResetToken)` - Unknown email, wrong or expired token
    /// - `Err(AuthError::PasswordRejected)` - New password fails the length policy
    pub async fn confirm_password_reset(
        &self,
        email: &str,
        token: &str,
        new_password: String,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_entity_by_email(email).await? else {
            return Err(AuthError::InvalidResetToken.into());
        };

        let token_repo = PasswordResetTokenRepository::new(self.db);
        let now = Utc::now();

        if token_repo.find_valid(user.id, token, now).await?.is_none() {
            return Err(AuthError::InvalidResetToken.into());
        }

        validate_password(&new_password)?;

        let password_hash = hash_password(&new_password)?;
        user_repo.update_password(user.id, password_hash).await?;

        // Token is single-use
        token_repo.delete_for_user(user.id).await?;

        tracing::info!("Password reset completed for account {}", user.id);

        Ok(())
    }
}

/// Checks a candidate password against the length policy.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordRejected(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

/// Hashes a password with Argon2id and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored Argon2 hash.
///
/// An unparseable stored hash counts as a failed verification rather than an
/// error; it can only mean the row predates the current hash format.
fn verify_password(hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Generates a random alphanumeric reset token.
fn generate_reset_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..RESET_TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
