//! Type-safe session management wrapper.
//!
//! Wraps the raw tower-sessions `Session` behind a narrow interface so the
//! session key and value type for the authenticated user live in one place.
//! Controllers and guards go through `AuthSession` instead of touching the
//! session keys directly.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Session key under which the authenticated user's id is stored.
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles the logged-in user's id and the session lifecycle operations that
/// go with it (establishing a session at login, clearing it at logout).
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after a successful login or registration to establish a
    /// logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - User id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout and after a password change or reset so existing
    /// sessions no longer authenticate the user with the old credentials.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
