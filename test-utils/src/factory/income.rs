//! Income factory for creating test monthly income records.

use crate::factory::helpers::next_id;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test income records with customizable fields.
pub struct IncomeFactory<'a> {
    db: &'a DatabaseConnection,
    year: String,
    month: String,
    owner_id: i32,
    income_type_id: i32,
    description: Option<String>,
    amount: Decimal,
}

impl<'a> IncomeFactory<'a> {
    /// Creates a new IncomeFactory with default values.
    ///
    /// Defaults:
    /// - year/month: `"2026"` / `"08"`
    /// - description: `"Income {id}"` where id is auto-incremented
    /// - amount: `1000.00`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, income_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            year: "2026".to_string(),
            month: "08".to_string(),
            owner_id,
            income_type_id,
            description: Some(format!("Income {}", id)),
            amount: Decimal::new(100_000, 2),
        }
    }

    /// Sets the fixed-width year key.
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Sets the fixed-width month key.
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = month.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Builds and inserts the income entity into the database.
    pub async fn build(self) -> Result<entity::income::Model, DbErr> {
        entity::income::ActiveModel {
            year: ActiveValue::Set(self.year),
            month: ActiveValue::Set(self.month),
            owner_id: ActiveValue::Set(self.owner_id),
            income_type_id: ActiveValue::Set(self.income_type_id),
            description: ActiveValue::Set(self.description),
            amount: ActiveValue::Set(self.amount),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an income record with default values for the given owner and type.
pub async fn create_income(
    db: &DatabaseConnection,
    owner_id: i32,
    income_type_id: i32,
) -> Result<entity::income::Model, DbErr> {
    IncomeFactory::new(db, owner_id, income_type_id).build().await
}
