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
                    .table(AnnualPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(AnnualPlan::Id))
                    .col(integer(AnnualPlan::OwnerId))
                    .col(string_len(AnnualPlan::Year, 4))
                    .col(string_len(AnnualPlan::Month, 2))
                    .col(string_len(AnnualPlan::Goal, 255))
                    .col(decimal_len(AnnualPlan::TargetAmount, 19, 2))
                    .col(text_null(AnnualPlan::Notes))
                    .col(string_len_null(AnnualPlan::Achieved, 10))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_annual_plan_owner_id")
                            .from(AnnualPlan::Table, AnnualPlan::OwnerId)
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
            .drop_table(Table::drop().table(AnnualPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AnnualPlan {
    Table,
    Id,
    OwnerId,
    Year,
    Month,
    Goal,
    TargetAmount,
    Notes,
    Achieved,
}
