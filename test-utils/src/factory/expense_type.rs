//! Expense type factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test expense types with customizable fields.
pub struct ExpenseTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    owner_id: i32,
}

impl<'a> ExpenseTypeFactory<'a> {
    /// Creates a new ExpenseTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Expense Type {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `owner_id` - Id of the owning user (must already exist)
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Expense Type {}", id),
            owner_id,
        }
    }

    /// Sets the name of the expense type.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the expense type entity into the database.
    pub async fn build(self) -> Result<entity::expense_type::Model, DbErr> {
        entity::expense_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an expense type with default values for the given owner.
pub async fn create_expense_type(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::expense_type::Model, DbErr> {
    ExpenseTypeFactory::new(db, owner_id).build().await
}
