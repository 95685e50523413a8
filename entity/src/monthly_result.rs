use sea_orm::entity::prelude::*;

/// Monthly kakeibo balance sheet.
///
/// `available`, `subtotal` and `carry_over` are derived from the other
/// amounts by the result service; they are stored so past months keep the
/// values they were closed with.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "monthly_result")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub year: String,
    pub month: String,
    pub owner_id: i32,
    pub total_income: Decimal,
    pub total_fixed_expenses: Decimal,
    pub available: Decimal,
    pub total_variable_expenses: Decimal,
    pub subtotal: Decimal,
    pub carry_over: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
