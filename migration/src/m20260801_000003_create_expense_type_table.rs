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
                    .table(ExpenseType::Table)
                    .if_not_exists()
                    .col(pk_auto(ExpenseType::Id))
                    .col(string_len(ExpenseType::Name, 30))
                    .col(integer(ExpenseType::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_type_owner_id")
                            .from(ExpenseType::Table, ExpenseType::OwnerId)
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
            .drop_table(Table::drop().table(ExpenseType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExpenseType {
    Table,
    Id,
    Name,
    OwnerId,
}
