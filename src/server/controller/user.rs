use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{ChangePasswordDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Change the logged-in user's password.
///
/// Verifies the current password before replacing it. The session is cleared
/// on success so the client logs in again with the new credentials.
///
/// # Returns
/// - `204 No Content` - Password replaced, session cleared
/// - `400 Bad Request` - Wrong current password or new password too weak
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/change-password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password replaced, session cleared"),
        (status = 400, description = "Wrong current password or new password too weak", body = ErrorDto),
        (status = 401, description = "No authenticated session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = AuthService::new(&state.db);

    service
        .change_password(user.id, &payload.current_password, payload.new_password)
        .await?;

    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// List every account. Administrators only.
///
/// # Returns
/// - `200 OK` - All accounts, ordered by email
/// - `401 Unauthorized` - No authenticated session
/// - `403 Forbidden` - Authenticated, but not an administrator
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All accounts", body = Vec<UserDto>),
        (status = 401, description = "No authenticated session", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require_admin().await?;

    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one account by id. Administrators only.
///
/// # Returns
/// - `200 OK` - The account
/// - `401 Unauthorized` - No authenticated session
/// - `403 Forbidden` - Authenticated, but not an administrator
/// - `404 Not Found` - No account with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "The account", body = UserDto),
        (status = 401, description = "No authenticated session", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "No account with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require_admin().await?;

    let service = UserService::new(&state.db);

    let user = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete an account. Administrators only.
///
/// The account's records and reset tokens are removed with it.
///
/// # Returns
/// - `204 No Content` - Account deleted
/// - `401 Unauthorized` - No authenticated session
/// - `403 Forbidden` - Authenticated, but not an administrator
/// - `404 Not Found` - No account with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "No authenticated session", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "No account with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require_admin().await?;

    let service = UserService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
