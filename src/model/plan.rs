use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AnnualPlanDto {
    pub id: i32,
    pub year: String,
    pub month: String,
    pub goal: String,
    pub target_amount: Decimal,
    pub notes: Option<String>,
    pub achieved: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateAnnualPlanDto {
    pub year: String,
    pub month: String,
    pub goal: String,
    pub target_amount: Decimal,
    pub notes: Option<String>,
    pub achieved: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateAnnualPlanDto {
    pub year: String,
    pub month: String,
    pub goal: String,
    pub target_amount: Decimal,
    pub notes: Option<String>,
    pub achieved: Option<String>,
}
