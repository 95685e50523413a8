//! Outflow factory for creating test daily spending records.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test outflows with customizable fields.
pub struct OutflowFactory<'a> {
    db: &'a DatabaseConnection,
    date: Option<NaiveDate>,
    year: String,
    month: String,
    owner_id: i32,
    expense_id: i32,
    description: Option<String>,
    expense_name: String,
    amount: Decimal,
}

impl<'a> OutflowFactory<'a> {
    /// Creates a new OutflowFactory with default values.
    ///
    /// Defaults:
    /// - date: 2026-08-15
    /// - year/month: `"2026"` / `"08"`
    /// - expense_name: `"Outflow {id}"` where id is auto-incremented
    /// - amount: `25.00`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, expense_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            date: NaiveDate::from_ymd_opt(2026, 8, 15),
            year: "2026".to_string(),
            month: "08".to_string(),
            owner_id,
            expense_id,
            description: None,
            expense_name: format!("Outflow {}", id),
            amount: Decimal::new(2500, 2),
        }
    }

    /// Sets the outflow date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
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

    /// Sets the denormalized expense name.
    pub fn expense_name(mut self, expense_name: impl Into<String>) -> Self {
        self.expense_name = expense_name.into();
        self
    }

    /// Sets the amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Builds and inserts the outflow entity into the database.
    pub async fn build(self) -> Result<entity::outflow::Model, DbErr> {
        entity::outflow::ActiveModel {
            date: ActiveValue::Set(self.date),
            year: ActiveValue::Set(self.year),
            month: ActiveValue::Set(self.month),
            owner_id: ActiveValue::Set(self.owner_id),
            expense_id: ActiveValue::Set(self.expense_id),
            description: ActiveValue::Set(self.description),
            expense_name: ActiveValue::Set(self.expense_name),
            amount: ActiveValue::Set(self.amount),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an outflow with default values for the given owner and expense.
pub async fn create_outflow(
    db: &DatabaseConnection,
    owner_id: i32,
    expense_id: i32,
) -> Result<entity::outflow::Model, DbErr> {
    OutflowFactory::new(db, owner_id, expense_id).build().await
}
