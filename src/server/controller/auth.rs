use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{
            ConfirmResetPasswordDto, LoginDto, LoginResponseDto, RegisterDto, ResetPasswordDto,
            UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::User,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a credential record with an argon2 hash of the supplied password.
/// Does not log the new account in; clients call the login endpoint next.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Email already registered or password too weak
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Email already registered or password too weak", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let user = service.register(payload.email, payload.password).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// On success the user's id is stored in the session; the session cookie set
/// on the response authenticates subsequent requests.
///
/// # Returns
/// - `200 OK` - Credentials valid, session established
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials valid, session established", body = LoginResponseDto),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let user = service.login(&payload.email, &payload.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    let response = LoginResponseDto {
        user_id: user.id,
        email: user.email.clone(),
        role: user.role().to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Log out the current session.
///
/// Clears the session unconditionally; logging out an already-anonymous
/// session is a no-op rather than an error.
///
/// # Returns
/// - `204 No Content` - Session cleared
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently authenticated user.
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged-in user", body = UserDto),
        (status = 401, description = "No authenticated session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(User::from_entity(user).into_dto())))
}

/// Request a password reset token.
///
/// Always answers with the same message whether or not the email has an
/// account, so the endpoint does not reveal which emails are registered.
///
/// # Returns
/// - `200 OK` - Reset initiated if the email has an account
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Reset initiated if the email has an account", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    service.request_password_reset(&payload.email).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "If the email is registered, a reset token has been issued".to_string(),
        }),
    ))
}

/// Complete a password reset with a previously issued token.
///
/// # Returns
/// - `204 No Content` - Password replaced, token consumed
/// - `400 Bad Request` - Invalid or expired token, or password too weak
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/confirm-reset-password",
    tag = AUTH_TAG,
    request_body = ConfirmResetPasswordDto,
    responses(
        (status = 204, description = "Password replaced, token consumed"),
        (status = 400, description = "Invalid or expired token, or password too weak", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    service
        .confirm_password_reset(&payload.email, &payload.token, payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
