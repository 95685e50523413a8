//! SeaORM entity models for the kakeibo database schema.

pub mod annual_plan;
pub mod expense;
pub mod expense_type;
pub mod income;
pub mod income_type;
pub mod monthly_result;
pub mod outflow;
pub mod password_reset_token;
pub mod user;

pub mod prelude {
    pub use super::annual_plan::Entity as AnnualPlan;
    pub use super::expense::Entity as Expense;
    pub use super::expense_type::Entity as ExpenseType;
    pub use super::income::Entity as Income;
    pub use super::income_type::Entity as IncomeType;
    pub use super::monthly_result::Entity as MonthlyResult;
    pub use super::outflow::Entity as Outflow;
    pub use super::password_reset_token::Entity as PasswordResetToken;
    pub use super::user::Entity as User;
}
