//! Password reset token repository for database operations.
//!
//! Reset tokens are single-use, short-lived secrets handed out by the
//! password-reset flow. A token row is valid while its expiry lies in the
//! future; confirming a reset (or requesting a new token) deletes every token
//! the user holds.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository providing database operations for password reset tokens.
pub struct PasswordResetTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PasswordResetTokenRepository<'a> {
    /// Creates a new PasswordResetTokenRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PasswordResetTokenRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new reset token for a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the account the token belongs to
    /// - `token` - The generated token value
    /// - `expires_at` - Instant after which the token no longer validates
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored token row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: i32,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::password_reset_token::Model, DbErr> {
        entity::password_reset_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an unexpired token row matching the given user and token value.
    ///
    /// # Arguments
    /// - `user_id` - Id of the account attempting the reset
    /// - `token` - The token value presented by the client
    /// - `now` - Current instant, used as the expiry cutoff
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Token exists and has not expired
    /// - `Ok(None)` - Token unknown, owned by someone else, or expired
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_valid(
        &self,
        user_id: i32,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::password_reset_token::Model>, DbErr> {
        entity::prelude::PasswordResetToken::find()
            .filter(entity::password_reset_token::Column::UserId.eq(user_id))
            .filter(entity::password_reset_token::Column::Token.eq(token))
            .filter(entity::password_reset_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Deletes every reset token a user holds.
    ///
    /// Called after a successful reset so the used token cannot be replayed,
    /// and before issuing a new token so only one is live at a time.
    ///
    /// # Returns
    /// - `Ok(())` - Tokens deleted (or none existed)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_for_user(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::PasswordResetToken::delete_many()
            .filter(entity::password_reset_token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
