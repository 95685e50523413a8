use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonthlyResult::Table)
                    .if_not_exists()
                    .col(pk_auto(MonthlyResult::Id))
                    .col(string_len(MonthlyResult::Year, 4))
                    .col(string_len(MonthlyResult::Month, 2))
                    .col(integer(MonthlyResult::OwnerId))
                    .col(decimal_len(MonthlyResult::TotalIncome, 19, 2))
                    .col(decimal_len(MonthlyResult::TotalFixedExpenses, 19, 2))
                    .col(decimal_len(MonthlyResult::Available, 19, 2))
                    .col(decimal_len(MonthlyResult::TotalVariableExpenses, 19, 2))
                    .col(decimal_len(MonthlyResult::Subtotal, 19, 2))
                    .col(decimal_len(MonthlyResult::CarryOver, 19, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monthly_result_owner_id")
                            .from(MonthlyResult::Table, MonthlyResult::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonthlyResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MonthlyResult {
    Table,
    Id,
    Year,
    Month,
    OwnerId,
    TotalIncome,
    TotalFixedExpenses,
    Available,
    TotalVariableExpenses,
    Subtotal,
    CarryOver,
}
