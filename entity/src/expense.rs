use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expense")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub expense_type_id: i32,
    pub name: String,
    pub owner_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::expense_type::Entity",
        from = "Column::ExpenseTypeId",
        to = "super::expense_type::Column::Id"
    )]
    ExpenseType,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::outflow::Entity")]
    Outflow,
}

impl Related<super::expense_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseType.def()
    }
}

impl Related<super::outflow::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outflow.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
