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
        expense::{CreateExpenseTypeDto, ExpenseTypeDto, UpdateExpenseTypeDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::expense::{CreateExpenseTypeParams, UpdateExpenseTypeParams},
        service::expense::ExpenseTypeService,
        state::AppState,
    },
};

/// Tag for grouping expense type endpoints in OpenAPI documentation
pub static EXPENSE_TYPE_TAG: &str = "expense-type";

/// Create an expense type.
///
/// # Returns
/// - `201 Created` - The created type, with a Location header
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/tiposdespesa",
    tag = EXPENSE_TYPE_TAG,
    request_body = CreateExpenseTypeDto,
    responses(
        (status = 201, description = "Successfully created expense type", body = ExpenseTypeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_expense_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateExpenseTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ExpenseTypeService::new(&state.db);

    let params = CreateExpenseTypeParams::from_dto(user.id, payload);

    let expense_type = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/tiposdespesa/{}", expense_type.id))],
        Json(expense_type.into_dto()),
    ))
}

/// List the owner's expense types, ordered by name.
///
/// # Returns
/// - `200 OK` - The owner's expense types
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/tiposdespesa",
    tag = EXPENSE_TYPE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved expense types", body = Vec<ExpenseTypeDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expense_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ExpenseTypeService::new(&state.db);

    let expense_types = service.get_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            expense_types
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get one of the owner's expense types by id.
///
/// # Returns
/// - `200 OK` - The expense type
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not in the owner's catalog
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/tiposdespesa/{id}",
    tag = EXPENSE_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Expense type ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved expense type", body = ExpenseTypeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Expense type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expense_type_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ExpenseTypeService::new(&state.db);

    let expense_type = service.get_by_id(id, user.id).await?;

    Ok((StatusCode::OK, Json(expense_type.into_dto())))
}

/// Update an expense type.
///
/// # Returns
/// - `200 OK` - The updated type
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not in the owner's catalog
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/tiposdespesa/{id}",
    tag = EXPENSE_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Expense type ID")
    ),
    request_body = UpdateExpenseTypeDto,
    responses(
        (status = 200, description = "Successfully updated expense type", body = ExpenseTypeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Expense type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_expense_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateExpenseTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ExpenseTypeService::new(&state.db);

    let params = UpdateExpenseTypeParams::from_dto(id, user.id, payload);

    let expense_type = service.update(params).await?;

    Ok((StatusCode::OK, Json(expense_type.into_dto())))
}

/// Delete an expense type.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not in the owner's catalog
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/tiposdespesa/{id}",
    tag = EXPENSE_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Expense type ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted expense type"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Expense type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_expense_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ExpenseTypeService::new(&state.db);

    service.delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
