//! Read-only report models derived from ledger records.
//!
//! These models are never stored; the report repository computes them from the
//! income and outflow tables at query time.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::report::{
    DailyExpenseTotalDto, MonthlyExpenseTotalDto, OwnedMoneyDto, VariableExpenseDto,
};

/// One variable-expense line of a month's ledger.
#[derive(Debug, Clone)]
pub struct VariableExpense {
    pub date: Option<NaiveDate>,
    pub expense_name: String,
    pub description: Option<String>,
    pub amount: Decimal,
}

impl VariableExpense {
    /// Converts an outflow entity to a report line at the repository boundary.
    pub fn from_entity(entity: entity::outflow::Model) -> Self {
        Self {
            date: entity.date,
            expense_name: entity.expense_name,
            description: entity.description,
            amount: entity.amount,
        }
    }

    /// Converts the report line to a DTO for API responses.
    pub fn into_dto(self) -> VariableExpenseDto {
        VariableExpenseDto {
            date: self.date,
            expense_name: self.expense_name,
            description: self.description,
            amount: self.amount,
        }
    }
}

/// Total spending on one calendar day.
#[derive(Debug, Clone)]
pub struct DailyExpenseTotal {
    pub date: NaiveDate,
    pub year: String,
    pub month: String,
    pub total: Decimal,
}

impl DailyExpenseTotal {
    /// Converts the total to a DTO for API responses.
    pub fn into_dto(self) -> DailyExpenseTotalDto {
        DailyExpenseTotalDto {
            date: self.date,
            year: self.year,
            month: self.month,
            total: self.total,
        }
    }
}

/// Total variable spending in one month.
#[derive(Debug, Clone)]
pub struct MonthlyExpenseTotal {
    pub year: String,
    pub month: String,
    pub total: Decimal,
}

impl MonthlyExpenseTotal {
    /// Converts the total to a DTO for API responses.
    pub fn into_dto(self) -> MonthlyExpenseTotalDto {
        MonthlyExpenseTotalDto {
            year: self.year,
            month: self.month,
            total: self.total,
        }
    }
}

/// Income against outflow for one month.
#[derive(Debug, Clone)]
pub struct OwnedMoney {
    pub year: String,
    pub month: String,
    pub monthly_income: Decimal,
    pub fixed_expenses: Decimal,
    pub balance: Decimal,
}

impl OwnedMoney {
    /// Builds the month's balance line from its two summed totals.
    pub fn new(year: String, month: String, monthly_income: Decimal, fixed_expenses: Decimal) -> Self {
        let balance = monthly_income - fixed_expenses;
        Self {
            year,
            month,
            monthly_income,
            fixed_expenses,
            balance,
        }
    }

    /// Converts the balance line to a DTO for API responses.
    pub fn into_dto(self) -> OwnedMoneyDto {
        OwnedMoneyDto {
            year: self.year,
            month: self.month,
            monthly_income: self.monthly_income,
            fixed_expenses: self.fixed_expenses,
            balance: self.balance,
        }
    }
}
