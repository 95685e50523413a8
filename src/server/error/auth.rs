use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Can happen when an account is deleted while a session for it is still
    /// live. Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// An authenticated but non-admin user called an admin endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Administrator access required")]
    AdminRequired,

    /// Login failed because the email is unknown or the password is wrong.
    ///
    /// Both cases map to the same message so the endpoint does not reveal
    /// which emails have accounts. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Change-password was called with a wrong current password.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Current password is incorrect")]
    WrongCurrentPassword,

    /// Registration attempted with an email that already has an account.
    ///
    /// Results in a 400 Bad Request response.
    #[error("An account with this email already exists")]
    EmailTaken,

    /// Password rejected by the validation rules.
    ///
    /// Results in a 400 Bad Request response with the rule that failed.
    #[error("{0}")]
    PasswordRejected(String),

    /// Password-reset token is unknown, already used, or expired.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired reset token")]
    InvalidResetToken,

    /// Password hashing or hash parsing failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message; the
    /// underlying error is logged server-side.
    #[error("Password hash error: {0}")]
    HashError(String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - wrong current password, taken email, rejected password, bad reset token
/// - 401 Unauthorized - missing session user or failed login
/// - 403 Forbidden - admin endpoint called without the admin flag
/// - 500 Internal Server Error - hashing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::AdminRequired => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::WrongCurrentPassword
            | Self::EmailTaken
            | Self::PasswordRejected(_)
            | Self::InvalidResetToken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::HashError(err) => {
                tracing::error!("Password hash error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
