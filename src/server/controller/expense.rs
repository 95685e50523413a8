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
        expense::{CreateExpenseDto, ExpenseDto, UpdateExpenseDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::expense::{CreateExpenseParams, UpdateExpenseParams},
        service::expense::ExpenseService,
        state::AppState,
    },
};

/// Tag for grouping expense catalog endpoints in OpenAPI documentation
pub static EXPENSE_TAG: &str = "expense";

/// Create a fixed-expense catalog entry.
///
/// # Returns
/// - `201 Created` - The created entry, with a Location header
/// - `400 Bad Request` - Expense type not in the owner's catalog
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/despesas",
    tag = EXPENSE_TAG,
    request_body = CreateExpenseDto,
    responses(
        (status = 201, description = "Successfully created expense", body = ExpenseDto),
        (status = 400, description = "Expense type not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_expense(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateExpenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ExpenseService::new(&state.db);

    let params = CreateExpenseParams::from_dto(user.id, payload);

    let expense = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/despesas/{}", expense.id))],
        Json(expense.into_dto()),
    ))
}

/// List the owner's catalog entries, ordered by type name then entry name.
///
/// Each entry carries its type's name from the join, ready for list views.
///
/// # Returns
/// - `200 OK` - The owner's catalog entries
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/despesas",
    tag = EXPENSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved expenses", body = Vec<ExpenseDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expenses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ExpenseService::new(&state.db);

    let expenses = service.get_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(expenses.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one of the owner's catalog entries by id.
///
/// # Returns
/// - `200 OK` - The entry
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not in the owner's catalog
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/despesas/{id}",
    tag = EXPENSE_TAG,
    params(
        ("id" = i32, Path, description = "Expense ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved expense", body = ExpenseDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expense_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ExpenseService::new(&state.db);

    let expense = service.get_by_id(id, user.id).await?;

    Ok((StatusCode::OK, Json(expense.into_dto())))
}

/// Update a catalog entry.
///
/// # Returns
/// - `200 OK` - The updated entry
/// - `400 Bad Request` - Target expense type not in the owner's catalog
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Entry not in the owner's catalog
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/despesas/{id}",
    tag = EXPENSE_TAG,
    params(
        ("id" = i32, Path, description = "Expense ID")
    ),
    request_body = UpdateExpenseDto,
    responses(
        (status = 200, description = "Successfully updated expense", body = ExpenseDto),
        (status = 400, description = "Expense type not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_expense(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateExpenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ExpenseService::new(&state.db);

    let params = UpdateExpenseParams::from_dto(id, user.id, payload);

    let expense = service.update(params).await?;

    Ok((StatusCode::OK, Json(expense.into_dto())))
}

/// Delete a catalog entry.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not in the owner's catalog
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/despesas/{id}",
    tag = EXPENSE_TAG,
    params(
        ("id" = i32, Path, description = "Expense ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted expense"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_expense(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ExpenseService::new(&state.db);

    service.delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
