pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_password_reset_token_table;
mod m20260801_000003_create_expense_type_table;
mod m20260801_000004_create_expense_table;
mod m20260801_000005_create_income_type_table;
mod m20260801_000006_create_income_table;
mod m20260801_000007_create_outflow_table;
mod m20260801_000008_create_annual_plan_table;
mod m20260801_000009_create_monthly_result_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_password_reset_token_table::Migration),
            Box::new(m20260801_000003_create_expense_type_table::Migration),
            Box::new(m20260801_000004_create_expense_table::Migration),
            Box::new(m20260801_000005_create_income_type_table::Migration),
            Box::new(m20260801_000006_create_income_table::Migration),
            Box::new(m20260801_000007_create_outflow_table::Migration),
            Box::new(m20260801_000008_create_annual_plan_table::Migration),
            Box::new(m20260801_000009_create_monthly_result_table::Migration),
        ]
    }
}
