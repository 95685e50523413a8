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
        income::{CreateIncomeTypeDto, IncomeTypeDto, UpdateIncomeTypeDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::income::{CreateIncomeTypeParams, UpdateIncomeTypeParams},
        service::income::IncomeTypeService,
        state::AppState,
    },
};

/// Tag for grouping income type endpoints in OpenAPI documentation
pub static INCOME_TYPE_TAG: &str = "income-type";

/// Create an income type.
///
/// # Returns
/// - `201 Created` - The created type, with a Location header
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/tiposentrada",
    tag = INCOME_TYPE_TAG,
    request_body = CreateIncomeTypeDto,
    responses(
        (status = 201, description = "Successfully created income type", body = IncomeTypeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_income_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateIncomeTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = IncomeTypeService::new(&state.db);

    let params = CreateIncomeTypeParams::from_dto(user.id, payload);

    let income_type = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/tiposentrada/{}", income_type.id))],
        Json(income_type.into_dto()),
    ))
}

/// List the owner's income types, ordered by name.
///
/// # Returns
/// - `200 OK` - The owner's income types
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/tiposentrada",
    tag = INCOME_TYPE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved income types", body = Vec<IncomeTypeDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_income_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = IncomeTypeService::new(&state.db);

    let income_types = service.get_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            income_types
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get one of the owner's income types by id.
///
/// # Returns
/// - `200 OK` - The income type
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not in the owner's catalog
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/tiposentrada/{id}",
    tag = INCOME_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Income type ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved income type", body = IncomeTypeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Income type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_income_type_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = IncomeTypeService::new(&state.db);

    let income_type = service.get_by_id(id, user.id).await?;

    Ok((StatusCode::OK, Json(income_type.into_dto())))
}

/// Update an income type.
///
/// # Returns
/// - `200 OK` - The updated type
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not in the owner's catalog
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/tiposentrada/{id}",
    tag = INCOME_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Income type ID")
    ),
    request_body = UpdateIncomeTypeDto,
    responses(
        (status = 200, description = "Successfully updated income type", body = IncomeTypeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Income type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_income_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateIncomeTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = IncomeTypeService::new(&state.db);

    let params = UpdateIncomeTypeParams::from_dto(id, user.id, payload);

    let income_type = service.update(params).await?;

    Ok((StatusCode::OK, Json(income_type.into_dto())))
}

/// Delete an income type.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not in the owner's catalog
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/tiposentrada/{id}",
    tag = INCOME_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Income type ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted income type"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Income type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_income_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = IncomeTypeService::new(&state.db);

    service.delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
