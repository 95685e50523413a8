//! Expense factory for creating test fixed-expense catalog entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test expenses with customizable fields.
pub struct ExpenseFactory<'a> {
    db: &'a DatabaseConnection,
    expense_type_id: i32,
    name: String,
    owner_id: i32,
}

impl<'a> ExpenseFactory<'a> {
    /// Creates a new ExpenseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Expense {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `owner_id` - Id of the owning user (must already exist)
    /// - `expense_type_id` - Id of the expense type (must already exist)
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, expense_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            expense_type_id,
            name: format!("Expense {}", id),
            owner_id,
        }
    }

    /// Sets the name of the expense.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the expense entity into the database.
    pub async fn build(self) -> Result<entity::expense::Model, DbErr> {
        entity::expense::ActiveModel {
            expense_type_id: ActiveValue::Set(self.expense_type_id),
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an expense with default values for the given owner and type.
pub async fn create_expense(
    db: &DatabaseConnection,
    owner_id: i32,
    expense_type_id: i32,
) -> Result<entity::expense::Model, DbErr> {
    ExpenseFactory::new(db, owner_id, expense_type_id).build().await
}
