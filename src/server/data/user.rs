//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts in the database.
//! It handles account creation, credential lookups, and password updates with proper
//! conversion between entity models and domain models at the infrastructure boundary.
//! Lookups that feed authentication return the raw entity model because the password
//! hash is needed for verification; everything else gets the hash-free domain model.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account.
    ///
    /// The email column carries a unique index, so inserting a duplicate email
    /// fails at the database level. Callers check availability first through
    /// `email_exists` for a friendlier error.
    ///
    /// # Arguments
    /// - `param` - Account parameters with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created account with generated id
    /// - `Err(DbErr)` - Database error during insert, including unique violations
    pub async fn create(&self, param: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            admin: ActiveValue::Set(param.admin),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id, returning the domain model.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets every account, ordered by email.
    ///
    /// Admin-only listing; regular flows never enumerate accounts.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All accounts (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Email)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Deletes an account by id.
    ///
    /// The owner foreign keys cascade, so the account's records and reset
    /// tokens go with it.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds a user entity by id, including the password hash.
    ///
    /// Used by the auth guard and password-change flow, which need the stored
    /// hash for verification.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_entity_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user entity by email, including the password hash.
    ///
    /// Used by the login and password-reset flows.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_entity_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether an account exists for the given email.
    ///
    /// # Returns
    /// - `Ok(true)` - An account uses this email
    /// - `Ok(false)` - Email is available
    /// - `Err(DbErr)` - Database error during count query
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces a user's password hash.
    ///
    /// # Arguments
    /// - `user_id` - Id of the account to update
    /// - `password_hash` - The new hash, produced by the auth service
    ///
    /// # Returns
    /// - `Ok(())` - Hash updated (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password(&self, user_id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
