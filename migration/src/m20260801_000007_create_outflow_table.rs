use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User, m20260801_000004_create_expense_table::Expense,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Outflow::Table)
                    .if_not_exists()
                    .col(pk_auto(Outflow::Id))
                    .col(date_null(Outflow::Date))
                    .col(string_len(Outflow::Year, 4))
                    .col(string_len(Outflow::Month, 2))
                    .col(integer(Outflow::OwnerId))
                    .col(integer(Outflow::ExpenseId))
                    .col(string_len_null(Outflow::Description, 50))
                    .col(string_len(Outflow::ExpenseName, 80))
                    .col(decimal_len(Outflow::Amount, 19, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outflow_expense_id")
                            .from(Outflow::Table, Outflow::ExpenseId)
                            .to(Expense::Table, Expense::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outflow_owner_id")
                            .from(Outflow::Table, Outflow::OwnerId)
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
            .drop_table(Table::drop().table(Outflow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Outflow {
    Table,
    Id,
    Date,
    Year,
    Month,
    OwnerId,
    ExpenseId,
    Description,
    ExpenseName,
    Amount,
}
