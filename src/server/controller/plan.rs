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
        plan::{AnnualPlanDto, CreateAnnualPlanDto, UpdateAnnualPlanDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::plan::{CreateAnnualPlanParams, UpdateAnnualPlanParams},
        service::plan::AnnualPlanService,
        state::AppState,
    },
};

/// Tag for grouping annual plan endpoints in OpenAPI documentation
pub static PLAN_TAG: &str = "annual-plan";

/// Create an annual plan entry.
///
/// # Returns
/// - `201 Created` - The created entry, with a Location header
/// - `400 Bad Request` - Invalid period
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/panual",
    tag = PLAN_TAG,
    request_body = CreateAnnualPlanDto,
    responses(
        (status = 201, description = "Successfully created annual plan entry", body = AnnualPlanDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAnnualPlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = AnnualPlanService::new(&state.db);

    let params = CreateAnnualPlanParams::from_dto(user.id, payload);

    let plan = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/panual/{}", plan.id))],
        Json(plan.into_dto()),
    ))
}

/// List the owner's plan entries for one year, ordered by month.
///
/// # Returns
/// - `200 OK` - The year's plan entries
/// - `400 Bad Request` - Year out of range
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/panual/{year}",
    tag = PLAN_TAG,
    params(
        ("year" = i32, Path, description = "Year (1-9999)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved annual plan entries", body = Vec<AnnualPlanDto>),
        (status = 400, description = "Year out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plans_by_year(
    State(state): State<AppState>,
    session: Session,
    Path(year): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = AnnualPlanService::new(&state.db);

    let plans = service.get_by_year(user.id, year).await?;

    Ok((
        StatusCode::OK,
        Json(plans.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one of the owner's plan entries by id.
///
/// # Returns
/// - `200 OK` - The plan entry
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's entries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/panual/entry/{id}",
    tag = PLAN_TAG,
    params(
        ("id" = i32, Path, description = "Annual plan entry ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved annual plan entry", body = AnnualPlanDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Annual plan entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plan_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = AnnualPlanService::new(&state.db);

    let plan = service.get_by_id(id, user.id).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Update a plan entry.
///
/// # Returns
/// - `200 OK` - The updated entry
/// - `400 Bad Request` - Invalid period
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's entries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/panual/{id}",
    tag = PLAN_TAG,
    params(
        ("id" = i32, Path, description = "Annual plan entry ID")
    ),
    request_body = UpdateAnnualPlanDto,
    responses(
        (status = 200, description = "Successfully updated annual plan entry", body = AnnualPlanDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Annual plan entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAnnualPlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = AnnualPlanService::new(&state.db);

    let params = UpdateAnnualPlanParams::from_dto(id, user.id, payload);

    let plan = service.update(params).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Delete a plan entry.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - Not one of the owner's entries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/panual/{id}",
    tag = PLAN_TAG,
    params(
        ("id" = i32, Path, description = "Annual plan entry ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted annual plan entry"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Annual plan entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = AnnualPlanService::new(&state.db);

    service.delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
