use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One variable-expense line for a month, as shown on the daily page.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct VariableExpenseDto {
    pub date: Option<NaiveDate>,
    pub expense_name: String,
    pub description: Option<String>,
    pub amount: Decimal,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct DailyExpenseTotalDto {
    pub date: NaiveDate,
    pub year: String,
    pub month: String,
    pub total: Decimal,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MonthlyExpenseTotalDto {
    pub year: String,
    pub month: String,
    pub total: Decimal,
}

/// Income vs. fixed-expense balance for one month.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct OwnedMoneyDto {
    pub year: String,
    pub month: String,
    pub monthly_income: Decimal,
    pub fixed_expenses: Decimal,
    pub balance: Decimal,
}
