use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        result::{CreateMonthlyResultDto, MonthlyResultDto, UpdateMonthlyResultDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::result::{CreateMonthlyResultParams, UpdateMonthlyResultParams},
        service::result::MonthlyResultService,
        state::AppState,
    },
};

/// Tag for grouping monthly result endpoints in OpenAPI documentation
pub static RESULT_TAG: &str = "monthly-result";

/// Close a month by recording its balance sheet.
///
/// Clients supply the three raw totals; `available`, `subtotal` and
/// `carry_over` are derived server-side and stored with the record.
///
/// # Returns
/// - `201 Created` - The created result with derived columns, and a Location header
/// - `400 Bad Request` - Invalid period
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/resultados",
    tag = RESULT_TAG,
    request_body = CreateMonthlyResultDto,
    responses(
        (status = 201, description = "Successfully created monthly result", body = MonthlyResultDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_result(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMonthlyResultDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = MonthlyResultService::new(&state.db);

    let params = CreateMonthlyResultParams::from_dto(user.id, payload);

    let result = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/resultados/{}", result.id))],
        Json(result.into_dto()),
    ))
}

/// List the owner's monthly results, ordered year then month.
///
/// # Returns
/// - `200 OK` - The owner's results
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/resultados",
    tag = RESULT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved monthly results", body = Vec<MonthlyResultDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_results(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = MonthlyResultService::new(&state.db);

    let results = service.get_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(results.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one of the owner's monthly results by id.
///
/// # Returns
/// - `200 OK` - The result
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's results
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/resultados/{id}",
    tag = RESULT_TAG,
    params(
        ("id" = i32, Path, description = "Monthly result ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved monthly result", body = MonthlyResultDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Monthly result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_result_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = MonthlyResultService::new(&state.db);

    let result = service.get_by_id(id, user.id).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Update a monthly result.
///
/// Derived columns are recomputed from the new raw totals.
///
/// # Returns
/// - `200 OK` - The updated result
/// - `400 Bad Request` - Invalid period
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's results
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/resultados/{id}",
    tag = RESULT_TAG,
    params(
        ("id" = i32, Path, description = "Monthly result ID")
    ),
    request_body = UpdateMonthlyResultDto,
    responses(
        (status = 200, description = "Successfully updated monthly result", body = MonthlyResultDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Monthly result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_result(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMonthlyResultDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = MonthlyResultService::new(&state.db);

    let params = UpdateMonthlyResultParams::from_dto(id, user.id, payload);

    let result = service.update(params).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Delete a monthly result.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's results
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/resultados/{id}",
    tag = RESULT_TAG,
    params(
        ("id" = i32, Path, description = "Monthly result ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted monthly result"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Monthly result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_result(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = MonthlyResultService::new(&state.db);

    service.delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
