use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ExpenseTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateExpenseTypeDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateExpenseTypeDto {
    pub name: String,
}

/// Fixed-expense catalog entry joined with its type name for list views.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ExpenseDto {
    pub id: i32,
    pub expense_type_id: i32,
    pub expense_type_name: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateExpenseDto {
    pub expense_type_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateExpenseDto {
    pub expense_type_id: i32,
    pub name: String,
}
