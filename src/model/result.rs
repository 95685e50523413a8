use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Monthly kakeibo balance sheet.
///
/// `available`, `subtotal` and `carry_over` are derived server-side; clients
/// only ever supply the three raw totals.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MonthlyResultDto {
    pub id: i32,
    pub year: String,
    pub month: String,
    pub total_income: Decimal,
    pub total_fixed_expenses: Decimal,
    pub available: Decimal,
    pub total_variable_expenses: Decimal,
    pub subtotal: Decimal,
    pub carry_over: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateMonthlyResultDto {
    pub year: String,
    pub month: String,
    pub total_income: Decimal,
    pub total_fixed_expenses: Decimal,
    pub total_variable_expenses: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateMonthlyResultDto {
    pub year: String,
    pub month: String,
    pub total_income: Decimal,
    pub total_fixed_expenses: Decimal,
    pub total_variable_expenses: Decimal,
}
