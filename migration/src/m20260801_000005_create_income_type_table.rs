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
                    .table(IncomeType::Table)
                    .if_not_exists()
                    .col(pk_auto(IncomeType::Id))
                    .col(string_len(IncomeType::Name, 80))
                    .col(integer(IncomeType::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_income_type_owner_id")
                            .from(IncomeType::Table, IncomeType::OwnerId)
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
            .drop_table(Table::drop().table(IncomeType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum IncomeType {
    Table,
    Id,
    Name,
    OwnerId,
}
