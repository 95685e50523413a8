//! Annual plan factory for creating test savings goals.

use crate::factory::helpers::next_id;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test annual plans with customizable fields.
pub struct AnnualPlanFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    year: String,
    month: String,
    goal: String,
    target_amount: Decimal,
    notes: Option<String>,
    achieved: Option<String>,
}

impl<'a> AnnualPlanFactory<'a> {
    /// Creates a new AnnualPlanFactory with default values.
    ///
    /// Defaults:
    /// - year/month: `"2026"` / `"08"`
    /// - goal: `"Goal {id}"` where id is auto-incremented
    /// - target_amount: `500.00`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            year: "2026".to_string(),
            month: "08".to_string(),
            goal: format!("Goal {}", id),
            target_amount: Decimal::new(50_000, 2),
            notes: None,
            achieved: None,
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

    /// Sets the goal description.
    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    /// Sets the target amount.
    pub fn target_amount(mut self, target_amount: Decimal) -> Self {
        self.target_amount = target_amount;
        self
    }

    /// Sets the achieved marker.
    pub fn achieved(mut self, achieved: impl Into<String>) -> Self {
        self.achieved = Some(achieved.into());
        self
    }

    /// Builds and inserts the annual plan entity into the database.
    pub async fn build(self) -> Result<entity::annual_plan::Model, DbErr> {
        entity::annual_plan::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            year: ActiveValue::Set(self.year),
            month: ActiveValue::Set(self.month),
            goal: ActiveValue::Set(self.goal),
            target_amount: ActiveValue::Set(self.target_amount),
            notes: ActiveValue::Set(self.notes),
            achieved: ActiveValue::Set(self.achieved),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an annual plan with default values for the given owner.
pub async fn create_plan(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::annual_plan::Model, DbErr> {
    AnnualPlanFactory::new(db, owner_id).build().await
}
