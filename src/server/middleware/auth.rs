use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Guard that resolves the session to a database-backed user.
///
/// Every authenticated endpoint constructs a guard from the application state
/// and the request session, then calls [`AuthGuard::require`] before doing any
/// work. The returned user's id is the owner id for all record access.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user, returning their database record.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - No user id stored in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    pub async fn require(&self) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_entity_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Requires an authenticated administrator.
    ///
    /// The account-management endpoints operate on other users' accounts, so
    /// they additionally check the admin flag on top of [`AuthGuard::require`].
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated admin
    /// - `Err(AuthError::AdminRequired)` - Authenticated, but not an admin
    /// - `Err(AuthError::UserNotInSession)` - No user id stored in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    pub async fn require_admin(&self) -> Result<entity::user::Model, AppError> {
        let user = self.require().await?;

        if !user.admin {
            return Err(AuthError::AdminRequired.into());
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory::user::UserFactory};

    /// Tests the guard with no user id in the session.
    ///
    /// Expected: Err(UserNotInSession)
    #[tokio::test]
    async fn require_rejects_anonymous_session() {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let result = AuthGuard::new(db, session).require().await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::UserNotInSession))
        ));
    }

    /// Tests the admin guard against a regular account.
    ///
    /// Expected: Err(AdminRequired)
    #[tokio::test]
    async fn require_admin_rejects_regular_user() {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let user = UserFactory::new(db).build().await.unwrap();
        AuthSession::new(session).set_user_id(user.id).await.unwrap();

        let result = AuthGuard::new(db, session).require_admin().await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AdminRequired))
        ));
    }

    /// Tests the admin guard against an administrator account.
    ///
    /// Expected: Ok with the admin's record
    #[tokio::test]
    async fn require_admin_accepts_admin() {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let admin = UserFactory::new(db).admin(true).build().await.unwrap();
        AuthSession::new(session).set_user_id(admin.id).await.unwrap();

        let guard = AuthGuard::new(db, session);
        let user = guard.require_admin().await.unwrap();

        assert_eq!(user.id, admin.id);
        assert!(user.admin);
    }
}
