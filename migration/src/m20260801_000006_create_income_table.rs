use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000005_create_income_type_table::IncomeType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Income::Table)
                    .if_not_exists()
                    .col(pk_auto(Income::Id))
                    .col(string_len(Income::Year, 4))
                    .col(string_len(Income::Month, 2))
                    .col(integer(Income::OwnerId))
                    .col(integer(Income::IncomeTypeId))
                    .col(string_len_null(Income::Description, 50))
                    .col(decimal_len(Income::Amount, 19, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_income_income_type_id")
                            .from(Income::Table, Income::IncomeTypeId)
                            .to(IncomeType::Table, IncomeType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_income_owner_id")
                            .from(Income::Table, Income::OwnerId)
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
            .drop_table(Table::drop().table(Income::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Income {
    Table,
    Id,
    Year,
    Month,
    OwnerId,
    IncomeTypeId,
    Description,
    Amount,
}
