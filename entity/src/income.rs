use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "income")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub year: String,
    pub month: String,
    pub owner_id: i32,
    pub income_type_id: i32,
    pub description: Option<String>,
    pub amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::income_type::Entity",
        from = "Column::IncomeTypeId",
        to = "super::income_type::Column::Id"
    )]
    IncomeType,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::income_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IncomeType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
