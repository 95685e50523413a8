use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct OutflowDto {
    pub id: i32,
    pub date: Option<NaiveDate>,
    pub year: String,
    pub month: String,
    pub expense_id: i32,
    pub description: Option<String>,
    pub expense_name: String,
    pub amount: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateOutflowDto {
    pub date: Option<NaiveDate>,
    pub year: String,
    pub month: String,
    pub expense_id: i32,
    pub description: Option<String>,
    pub expense_name: String,
    pub amount: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateOutflowDto {
    pub date: Option<NaiveDate>,
    pub year: String,
    pub month: String,
    pub expense_id: i32,
    pub description: Option<String>,
    pub expense_name: String,
    pub amount: Decimal,
}
