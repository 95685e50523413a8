//! Monthly result factory for creating test balance sheets.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test monthly results with customizable fields.
///
/// Derived fields are stored exactly as given; tests exercising the derivation
/// formulas go through the result service instead.
pub struct MonthlyResultFactory<'a> {
    db: &'a DatabaseConnection,
    year: String,
    month: String,
    owner_id: i32,
    total_income: Decimal,
    total_fixed_expenses: Decimal,
    total_variable_expenses: Decimal,
}

impl<'a> MonthlyResultFactory<'a> {
    /// Creates a new MonthlyResultFactory with default values.
    ///
    /// Defaults:
    /// - year/month: `"2026"` / `"08"`
    /// - total_income: `2000.00`
    /// - total_fixed_expenses: `800.00`
    /// - total_variable_expenses: `300.00`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            year: "2026".to_string(),
            month: "08".to_string(),
            owner_id,
            total_income: Decimal::new(200_000, 2),
            total_fixed_expenses: Decimal::new(80_000, 2),
            total_variable_expenses: Decimal::new(30_000, 2),
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

    /// Sets the total income (column A).
    pub fn total_income(mut self, total_income: Decimal) -> Self {
        self.total_income = total_income;
        self
    }

    /// Sets the total fixed expenses (column B).
    pub fn total_fixed_expenses(mut self, total_fixed_expenses: Decimal) -> Self {
        self.total_fixed_expenses = total_fixed_expenses;
        self
    }

    /// Sets the total variable expenses (column D).
    pub fn total_variable_expenses(mut self, total_variable_expenses: Decimal) -> Self {
        self.total_variable_expenses = total_variable_expenses;
        self
    }

    /// Builds and inserts the monthly result entity into the database.
    ///
    /// The derived columns are computed with the same formulas the result
    /// service applies: `available = income - fixed`,
    /// `subtotal = available - variable`, `carry_over = subtotal`.
    pub async fn build(self) -> Result<entity::monthly_result::Model, DbErr> {
        let available = self.total_income - self.total_fixed_expenses;
        let subtotal = available - self.total_variable_expenses;

        entity::monthly_result::ActiveModel {
            year: ActiveValue::Set(self.year),
            month: ActiveValue::Set(self.month),
            owner_id: ActiveValue::Set(self.owner_id),
            total_income: ActiveValue::Set(self.total_income),
            total_fixed_expenses: ActiveValue::Set(self.total_fixed_expenses),
            available: ActiveValue::Set(available),
            total_variable_expenses: ActiveValue::Set(self.total_variable_expenses),
            subtotal: ActiveValue::Set(subtotal),
            carry_over: ActiveValue::Set(subtotal),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a monthly result with default values for the given owner.
pub async fn create_result(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::monthly_result::Model, DbErr> {
    MonthlyResultFactory::new(db, owner_id).build().await
}
