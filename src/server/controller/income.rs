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
        income::{CreateIncomeDto, IncomeDto, UpdateIncomeDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::income::{CreateIncomeParams, UpdateIncomeParams},
        service::income::IncomeService,
        state::AppState,
    },
};

/// Tag for grouping income endpoints in OpenAPI documentation
pub static INCOME_TAG: &str = "income";

/// Record income for a month.
///
/// Body-supplied year and month are normalized to the fixed-width storage
/// form, so `"8"` and `"08"` land in the same month.
///
/// # Returns
/// - `201 Created` - The created record, with a Location header
/// - `400 Bad Request` - Invalid period or income type not in the owner's catalog
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/entradas",
    tag = INCOME_TAG,
    request_body = CreateIncomeDto,
    responses(
        (status = 201, description = "Successfully created income record", body = IncomeDto),
        (status = 400, description = "Invalid period or income type not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_income(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateIncomeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = IncomeService::new(&state.db);

    let params = CreateIncomeParams::from_dto(user.id, payload);

    let income = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/entradas/{}", income.id))],
        Json(income.into_dto()),
    ))
}

/// List the owner's income records for one month.
///
/// # Returns
/// - `200 OK` - The month's income records
/// - `400 Bad Request` - Year or month out of range
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/entradas/{year}/{month}",
    tag = INCOME_TAG,
    params(
        ("year" = i32, Path, description = "Year (1-9999)"),
        ("month" = u32, Path, description = "Month (1-12)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved income records", body = Vec<IncomeDto>),
        (status = 400, description = "Year or month out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_incomes_by_month(
    State(state): State<AppState>,
    session: Session,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = IncomeService::new(&state.db);

    let incomes = service.get_by_month(user.id, year, month).await?;

    Ok((
        StatusCode::OK,
        Json(incomes.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one of the owner's income records by id.
///
/// # Returns
/// - `200 OK` - The income record
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's records
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/entradas/{id}",
    tag = INCOME_TAG,
    params(
        ("id" = i32, Path, description = "Income record ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved income record", body = IncomeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Income record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_income_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = IncomeService::new(&state.db);

    let income = service.get_by_id(id, user.id).await?;

    Ok((StatusCode::OK, Json(income.into_dto())))
}

/// Update an income record.
///
/// # Returns
/// - `200 OK` - The updated record
/// - `400 Bad Request` - Invalid period or income type not in the owner's catalog
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's records
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/entradas/{id}",
    tag = INCOME_TAG,
    params(
        ("id" = i32, Path, description = "Income record ID")
    ),
    request_body = UpdateIncomeDto,
    responses(
        (status = 200, description = "Successfully updated income record", body = IncomeDto),
        (status = 400, description = "Invalid period or income type not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Income record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_income(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateIncomeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = IncomeService::new(&state.db);

    let params = UpdateIncomeParams::from_dto(id, user.id, payload);

    let income = service.update(params).await?;

    Ok((StatusCode::OK, Json(income.into_dto())))
}

/// Delete an income record.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's records
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/entradas/{id}",
    tag = INCOME_TAG,
    params(
        ("id" = i32, Path, description = "Income record ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted income record"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Income record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_income(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = IncomeService::new(&state.db);

    service.delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
