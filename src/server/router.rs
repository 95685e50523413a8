use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{auth, expense, expense_type, income, income_type, outflow, plan, report, result, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_current_user,
        auth::reset_password,
        auth::confirm_reset_password,
        user::change_password,
        user::get_users,
        user::get_user_by_id,
        user::delete_user,
        expense_type::create_expense_type,
        expense_type::get_expense_types,
        expense_type::get_expense_type_by_id,
        expense_type::update_expense_type,
        expense_type::delete_expense_type,
        expense::create_expense,
        expense::get_expenses,
        expense::get_expense_by_id,
        expense::update_expense,
        expense::delete_expense,
        income_type::create_income_type,
        income_type::get_income_types,
        income_type::get_income_type_by_id,
        income_type::update_income_type,
        income_type::delete_income_type,
        income::create_income,
        income::get_incomes_by_month,
        income::get_income_by_id,
        income::update_income,
        income::delete_income,
        outflow::create_outflow,
        outflow::get_outflows_by_month,
        outflow::get_outflows_by_day,
        outflow::get_outflow_by_id,
        outflow::update_outflow,
        outflow::delete_outflow,
        plan::create_plan,
        plan::get_plans_by_year,
        plan::get_plan_by_id,
        plan::update_plan,
        plan::delete_plan,
        result::create_result,
        result::get_results,
        result::get_result_by_id,
        result::update_result,
        result::delete_result,
        report::get_variable_expenses,
        report::get_daily_expenses,
        report::get_monthly_expenses,
        report::get_owned_money,
        report::get_owned_money_for_month,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::MessageDto,
        model::auth::RegisterDto,
        model::auth::LoginDto,
        model::auth::LoginResponseDto,
        model::auth::UserDto,
        model::auth::ChangePasswordDto,
        model::auth::ResetPasswordDto,
        model::auth::ConfirmResetPasswordDto,
        model::expense::ExpenseTypeDto,
        model::expense::CreateExpenseTypeDto,
        model::expense::UpdateExpenseTypeDto,
        model::expense::ExpenseDto,
        model::expense::CreateExpenseDto,
        model::expense::UpdateExpenseDto,
        model::income::IncomeTypeDto,
        model::income::CreateIncomeTypeDto,
        model::income::UpdateIncomeTypeDto,
        model::income::IncomeDto,
        model::income::CreateIncomeDto,
        model::income::UpdateIncomeDto,
        model::outflow::OutflowDto,
        model::outflow::CreateOutflowDto,
        model::outflow::UpdateOutflowDto,
        model::plan::AnnualPlanDto,
        model::plan::CreateAnnualPlanDto,
        model::plan::UpdateAnnualPlanDto,
        model::result::MonthlyResultDto,
        model::result::CreateMonthlyResultDto,
        model::result::UpdateMonthlyResultDto,
        model::report::VariableExpenseDto,
        model::report::DailyExpenseTotalDto,
        model::report::MonthlyExpenseTotalDto,
        model::report::OwnedMoneyDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/user", get(auth::get_current_user))
        .route("/auth/reset-password", post(auth::reset_password))
        .route(
            "/auth/confirm-reset-password",
            post(auth::confirm_reset_password),
        )
        .route("/users/change-password", post(user::change_password))
        .route("/users", get(user::get_users))
        .route(
            "/users/{id}",
            get(user::get_user_by_id).delete(user::delete_user),
        )
        .route(
            "/tiposdespesa",
            post(expense_type::create_expense_type).get(expense_type::get_expense_types),
        )
        .route(
            "/tiposdespesa/{id}",
            get(expense_type::get_expense_type_by_id)
                .put(expense_type::update_expense_type)
                .delete(expense_type::delete_expense_type),
        )
        .route(
            "/despesas",
            post(expense::create_expense).get(expense::get_expenses),
        )
        .route(
            "/despesas/{id}",
            get(expense::get_expense_by_id)
                .put(expense::update_expense)
                .delete(expense::delete_expense),
        )
        .route(
            "/tiposentrada",
            post(income_type::create_income_type).get(income_type::get_income_types),
        )
        .route(
            "/tiposentrada/{id}",
            get(income_type::get_income_type_by_id)
                .put(income_type::update_income_type)
                .delete(income_type::delete_income_type),
        )
        .route("/entradas", post(income::create_income))
        .route(
            "/entradas/{id}",
            get(income::get_income_by_id)
                .put(income::update_income)
                .delete(income::delete_income),
        )
        .route("/entradas/{year}/{month}", get(income::get_incomes_by_month))
        .route("/saidas", post(outflow::create_outflow))
        .route(
            "/saidas/{id}",
            get(outflow::get_outflow_by_id)
                .put(outflow::update_outflow)
                .delete(outflow::delete_outflow),
        )
        .route("/saidas/{year}/{month}", get(outflow::get_outflows_by_month))
        .route(
            "/saidas/{year}/{month}/{day}",
            get(outflow::get_outflows_by_day),
        )
        .route("/panual", post(plan::create_plan))
        // GET by year shares the single-segment slot, so record-level reads
        // live under /panual/entry/{id}
        .route(
            "/panual/{year}",
            get(plan::get_plans_by_year)
                .put(plan::update_plan)
                .delete(plan::delete_plan),
        )
        .route("/panual/entry/{id}", get(plan::get_plan_by_id))
        .route(
            "/resultados",
            post(result::create_result).get(result::get_results),
        )
        .route(
            "/resultados/{id}",
            get(result::get_result_by_id)
                .put(result::update_result)
                .delete(result::delete_result),
        )
        .route(
            "/despesasvariaveis/{year}/{month}",
            get(report::get_variable_expenses),
        )
        .route(
            "/dailyexpenses/{year}/{month}/{day}",
            get(report::get_daily_expenses),
        )
        .route(
            "/monthlyexpenses/{year}/{month}",
            get(report::get_monthly_expenses),
        )
        .route("/ownedmoney", get(report::get_owned_money))
        .route(
            "/ownedmoney/{year}/{month}",
            get(report::get_owned_money_for_month),
        )
}
