//! Income type factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test income types with customizable fields.
pub struct IncomeTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    owner_id: i32,
}

impl<'a> IncomeTypeFactory<'a> {
    /// Creates a new IncomeTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Income Type {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Income Type {}", id),
            owner_id,
        }
    }

    /// Sets the name of the income type.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the income type entity into the database.
    pub async fn build(self) -> Result<entity::income_type::Model, DbErr> {
        entity::income_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an income type with default values for the given owner.
pub async fn create_income_type(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::income_type::Model, DbErr> {
    IncomeTypeFactory::new(db, owner_id).build().await
}
