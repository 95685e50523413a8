use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000003_create_expense_type_table::ExpenseType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(pk_auto(Expense::Id))
                    .col(integer(Expense::ExpenseTypeId))
                    .col(string_len(Expense::Name, 80))
                    .col(integer(Expense::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_expense_type_id")
                            .from(Expense::Table, Expense::ExpenseTypeId)
                            .to(ExpenseType::Table, ExpenseType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_owner_id")
                            .from(Expense::Table, Expense::OwnerId)
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
            .drop_table(Table::drop().table(Expense::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Expense {
    Table,
    Id,
    ExpenseTypeId,
    Name,
    OwnerId,
}
