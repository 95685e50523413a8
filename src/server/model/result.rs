//! Monthly result domain model and parameters.
//!
//! A monthly result is the closing balance sheet for one month. Clients only
//! supply the three raw totals; the derived columns are computed server-side
//! with [`DerivedBalances`] and stored, so a closed month keeps its figures
//! even if the derivation rules change later.

use rust_decimal::Decimal;

use crate::model::result::{CreateMonthlyResultDto, MonthlyResultDto, UpdateMonthlyResultDto};

/// The three stored columns derived from a result's raw totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedBalances {
    /// Income remaining after fixed expenses.
    pub available: Decimal,
    /// Available money remaining after variable expenses.
    pub subtotal: Decimal,
    /// Amount carried into the next month.
    pub carry_over: Decimal,
}

impl DerivedBalances {
    /// Computes the derived balance columns from the raw monthly totals.
    pub fn compute(
        total_income: Decimal,
        total_fixed_expenses: Decimal,
        total_variable_expenses: Decimal,
    ) -> Self {
        let available = total_income - total_fixed_expenses;
        let subtotal = available - total_variable_expenses;

        Self {
            available,
            subtotal,
            carry_over: subtotal,
        }
    }
}

/// The closing balance sheet for one month.
#[derive(Debug, Clone)]
pub struct MonthlyResult {
    pub id: i32,
    pub year: String,
    pub month: String,
    pub total_income: Decimal,
    pub total_fixed_expenses: Decimal,
    pub available: Decimal,
    pub total_variable_expenses: Decimal,
    pub subtotal: Decimal,
    pub carry_over: Decimal,
}

impl MonthlyResult {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::monthly_result::Model) -> Self {
        Self {
            id: entity.id,
            year: entity.year,
            month: entity.month,
            total_income: entity.total_income,
            total_fixed_expenses: entity.total_fixed_expenses,
            available: entity.available,
            total_variable_expenses: entity.total_variable_expenses,
            subtotal: entity.subtotal,
            carry_over: entity.carry_over,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> MonthlyResultDto {
        MonthlyResultDto {
            id: self.id,
            year: self.year,
            month: self.month,
            total_income: self.total_income,
            total_fixed_expenses: self.total_fixed_expenses,
            available: self.available,
            total_variable_expenses: self.total_variable_expenses,
            subtotal: self.subtotal,
            carry_over: self.carry_over,
        }
    }
}

/// Parameters for creating a monthly result.
#[derive(Debug, Clone)]
pub struct CreateMonthlyResultParams {
    pub owner_id: i32,
    pub year: String,
    pub month: String,
    pub total_income: Decimal,
    pub total_fixed_expenses: Decimal,
    pub total_variable_expenses: Decimal,
}

impl CreateMonthlyResultParams {
    /// Converts a DTO to creation parameters, attaching the authenticated owner.
    pub fn from_dto(owner_id: i32, dto: CreateMonthlyResultDto) -> Self {
        Self {
            owner_id,
            year: dto.year,
            month: dto.month,
            total_income: dto.total_income,
            total_fixed_expenses: dto.total_fixed_expenses,
            total_variable_expenses: dto.total_variable_expenses,
        }
    }

    /// Derived balance columns for this result's raw totals.
    pub fn derived(&self) -> DerivedBalances {
        DerivedBalances::compute(
            self.total_income,
            self.total_fixed_expenses,
            self.total_variable_expenses,
        )
    }
}

/// Parameters for updating a monthly result.
#[derive(Debug, Clone)]
pub struct UpdateMonthlyResultParams {
    pub id: i32,
    pub owner_id: i32,
    pub year: String,
    pub month: String,
    pub total_income: Decimal,
    pub total_fixed_expenses: Decimal,
    pub total_variable_expenses: Decimal,
}

impl UpdateMonthlyResultParams {
    /// Converts a DTO to update parameters, attaching the authenticated owner.
    pub fn from_dto(id: i32, owner_id: i32, dto: UpdateMonthlyResultDto) -> Self {
        Self {
            id,
            owner_id,
            year: dto.year,
            month: dto.month,
            total_income: dto.total_income,
            total_fixed_expenses: dto.total_fixed_expenses,
            total_variable_expenses: dto.total_variable_expenses,
        }
    }

    /// Derived balance columns for this result's raw totals.
    pub fn derived(&self) -> DerivedBalances {
        DerivedBalances::compute(
            self.total_income,
            self.total_fixed_expenses,
            self.total_variable_expenses,
        )
    }
}
