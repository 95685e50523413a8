use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct IncomeTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateIncomeTypeDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateIncomeTypeDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct IncomeDto {
    pub id: i32,
    pub year: String,
    pub month: String,
    pub income_type_id: i32,
    pub description: Option<String>,
    pub amount: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateIncomeDto {
    pub year: String,
    pub month: String,
    pub income_type_id: i32,
    pub description: Option<String>,
    pub amount: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateIncomeDto {
    pub year: String,
    pub month: String,
    pub income_type_id: i32,
    pub description: Option<String>,
    pub amount: Decimal,
}
