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
        outflow::{CreateOutflowDto, OutflowDto, UpdateOutflowDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::outflow::{CreateOutflowParams, UpdateOutflowParams},
        service::outflow::OutflowService,
        state::AppState,
    },
};

/// Tag for grouping outflow endpoints in OpenAPI documentation
pub static OUTFLOW_TAG: &str = "outflow";

/// Record a variable spending entry.
///
/// The referenced catalog entry must belong to the owner; its current name is
/// denormalized onto the record.
///
/// # Returns
/// - `201 Created` - The created record, with a Location header
/// - `400 Bad Request` - Invalid period or expense not in the owner's catalog
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/saidas",
    tag = OUTFLOW_TAG,
    request_body = CreateOutflowDto,
    responses(
        (status = 201, description = "Successfully created outflow", body = OutflowDto),
        (status = 400, description = "Invalid period or expense not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_outflow(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOutflowDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = OutflowService::new(&state.db);

    let params = CreateOutflowParams::from_dto(user.id, payload);

    let outflow = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/saidas/{}", outflow.id))],
        Json(outflow.into_dto()),
    ))
}

/// List the owner's outflows for one month, ordered by date.
///
/// # Returns
/// - `200 OK` - The month's outflows
/// - `400 Bad Request` - Year or month out of range
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/saidas/{year}/{month}",
    tag = OUTFLOW_TAG,
    params(
        ("year" = i32, Path, description = "Year (1-9999)"),
        ("month" = u32, Path, description = "Month (1-12)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved outflows", body = Vec<OutflowDto>),
        (status = 400, description = "Year or month out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outflows_by_month(
    State(state): State<AppState>,
    session: Session,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = OutflowService::new(&state.db);

    let outflows = service.get_by_month(user.id, year, month).await?;

    Ok((
        StatusCode::OK,
        Json(outflows.into_iter().map(|o| o.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List the owner's outflows recorded on one calendar day.
///
/// # Returns
/// - `200 OK` - The day's outflows (empty if none)
/// - `400 Bad Request` - Segments do not form a calendar date
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/saidas/{year}/{month}/{day}",
    tag = OUTFLOW_TAG,
    params(
        ("year" = i32, Path, description = "Year (1-9999)"),
        ("month" = u32, Path, description = "Month (1-12)"),
        ("day" = u32, Path, description = "Day (1-31)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved outflows", body = Vec<OutflowDto>),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outflows_by_day(
    State(state): State<AppState>,
    session: Session,
    Path((year, month, day)): Path<(i32, u32, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = OutflowService::new(&state.db);

    let outflows = service.get_by_day(user.id, year, month, day).await?;

    Ok((
        StatusCode::OK,
        Json(outflows.into_iter().map(|o| o.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one of the owner's outflows by id.
///
/// # Returns
/// - `200 OK` - The outflow
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's records
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/saidas/{id}",
    tag = OUTFLOW_TAG,
    params(
        ("id" = i32, Path, description = "Outflow ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved outflow", body = OutflowDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Outflow not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outflow_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = OutflowService::new(&state.db);

    let outflow = service.get_by_id(id, user.id).await?;

    Ok((StatusCode::OK, Json(outflow.into_dto())))
}

/// Update an outflow.
///
/// # Returns
/// - `200 OK` - The updated record
/// - `400 Bad Request` - Invalid period or expense not in the owner's catalog
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's records
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/saidas/{id}",
    tag = OUTFLOW_TAG,
    params(
        ("id" = i32, Path, description = "Outflow ID")
    ),
    request_body = UpdateOutflowDto,
    responses(
        (status = 200, description = "Successfully updated outflow", body = OutflowDto),
        (status = 400, description = "Invalid period or expense not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Outflow not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_outflow(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOutflowDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = OutflowService::new(&state.db);

    let params = UpdateOutflowParams::from_dto(id, user.id, payload);

    let outflow = service.update(params).await?;

    Ok((StatusCode::OK, Json(outflow.into_dto())))
}

/// Delete an outflow.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's records
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/saidas/{id}",
    tag = OUTFLOW_TAG,
    params(
        ("id" = i32, Path, description = "Outflow ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted outflow"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Outflow not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_outflow(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = OutflowService::new(&state.db);

    service.delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
