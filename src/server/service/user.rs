//! Account-management service for administrators.
//!
//! Self-service account operations (registration, password changes) live in
//! the auth service; this one covers the admin surface that reads and removes
//! other users' accounts.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);
        Ok(repo.get_all().await?)
    }

    /// # Returns
    /// - `Ok(User)` - The account, without its password hash
    /// - `Err(AppError::NotFound)` - No account with that id
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Deletes an account and, through the cascading foreign keys, all of its
    /// records.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }
}
