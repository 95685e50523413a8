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
        report::{
            DailyExpenseTotalDto, MonthlyExpenseTotalDto, OwnedMoneyDto, VariableExpenseDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// List the month's variable-expense lines, ordered by expense name.
///
/// # Returns
/// - `200 OK` - The month's report lines (empty if none)
/// - `400 Bad Request` - Year or month out of range
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/despesasvariaveis/{year}/{month}",
    tag = REPORT_TAG,
    params(
        ("year" = i32, Path, description = "Year (1-9999)"),
        ("month" = u32, Path, description = "Month (1-12)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved variable expenses", body = Vec<VariableExpenseDto>),
        (status = 400, description = "Year or month out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_variable_expenses(
    State(state): State<AppState>,
    session: Session,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ReportService::new(&state.db);

    let lines = service.variable_expenses(user.id, year, month).await?;

    Ok((
        StatusCode::OK,
        Json(lines.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Total the owner's spending on one calendar day.
///
/// A day with no records answers 404; only the monthly total zero-fills.
///
/// # Returns
/// - `200 OK` - The day's total
/// - `400 Bad Request` - Segments do not form a calendar date
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - No outflows recorded on the date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/dailyexpenses/{year}/{month}/{day}",
    tag = REPORT_TAG,
    params(
        ("year" = i32, Path, description = "Year (1-9999)"),
        ("month" = u32, Path, description = "Month (1-12)"),
        ("day" = u32, Path, description = "Day (1-31)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved daily total", body = DailyExpenseTotalDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "No outflows recorded on the date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_daily_expenses(
    State(state): State<AppState>,
    session: Session,
    Path((year, month, day)): Path<(i32, u32, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ReportService::new(&state.db);

    let total = service.daily_total(user.id, year, month, day).await?;

    Ok((StatusCode::OK, Json(total.into_dto())))
}

/// Total the owner's variable spending in one month.
///
/// A month with no records yields a zeroed record rather than a 404.
///
/// # Returns
/// - `200 OK` - The month's total
/// - `400 Bad Request` - Year or month out of range
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/monthlyexpenses/{year}/{month}",
    tag = REPORT_TAG,
    params(
        ("year" = i32, Path, description = "Year (1-9999)"),
        ("month" = u32, Path, description = "Month (1-12)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved monthly total", body = MonthlyExpenseTotalDto),
        (status = 400, description = "Year or month out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monthly_expenses(
    State(state): State<AppState>,
    session: Session,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ReportService::new(&state.db);

    let total = service.monthly_total(user.id, year, month).await?;

    Ok((StatusCode::OK, Json(total.into_dto())))
}

/// Balance income against outflows for every recorded month.
///
/// # Returns
/// - `200 OK` - One balance line per recorded month, chronological
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/ownedmoney",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved monthly balances", body = Vec<OwnedMoneyDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owned_money(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ReportService::new(&state.db);

    let months = service.owned_money(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(months.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Balance income against outflows for a single month.
///
/// # Returns
/// - `200 OK` - The month's balance line
/// - `400 Bad Request` - Year or month out of range
/// - `401 Unauthorized` - No authenticated session
/// - `404 Not Found` - No records for the month
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/ownedmoney/{year}/{month}",
    tag = REPORT_TAG,
    params(
        ("year" = i32, Path, description = "Year (1-9999)"),
        ("month" = u32, Path, description = "Month (1-12)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved monthly balance", body = OwnedMoneyDto),
        (status = 400, description = "Year or month out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "No records for the month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owned_money_for_month(
    State(state): State<AppState>,
    session: Session,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ReportService::new(&state.db);

    let month_line = service.owned_money_for_month(user.id, year, month).await?;

    Ok((StatusCode::OK, Json(month_line.into_dto())))
}
