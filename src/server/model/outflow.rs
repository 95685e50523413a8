//! Outflow domain model and parameters.
//!
//! Outflows are the variable spending records of the ledger: each one is a
//! purchase on a given day, tied to a fixed-expense catalog entry and stamped
//! with the year and month it belongs to. The expense name is denormalized
//! onto the record so the ledger keeps its label even if the catalog entry is
//! renamed later.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::outflow::{CreateOutflowDto, OutflowDto, UpdateOutflowDto};

/// A variable spending record.
#[derive(Debug, Clone)]
pub struct Outflow {
    pub id: i32,
    pub date: Option<NaiveDate>,
    pub year: String,
    pub month: String,
    pub expense_id: i32,
    pub description: Option<String>,
    pub expense_name: String,
    pub amount: Decimal,
}

impl Outflow {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::outflow::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            year: entity.year,
            month: entity.month,
            expense_id: entity.expense_id,
            description: entity.description,
            expense_name: entity.expense_name,
            amount: entity.amount,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> OutflowDto {
        OutflowDto {
            id: self.id,
            date: self.date,
            year: self.year,
            month: self.month,
            expense_id: self.expense_id,
            description: self.description,
            expense_name: self.expense_name,
            amount: self.amount,
        }
    }
}

/// Parameters for creating an outflow record.
#[derive(Debug, Clone)]
pub struct CreateOutflowParams {
    pub owner_id: i32,
    pub date: Option<NaiveDate>,
    pub year: String,
    pub month: String,
    pub expense_id: i32,
    pub description: Option<String>,
    pub expense_name: String,
    pub amount: Decimal,
}

impl CreateOutflowParams {
    /// Converts a DTO to creation parameters, attaching the authenticated owner.
    pub fn from_dto(owner_id: i32, dto: CreateOutflowDto) -> Self {
        Self {
            owner_id,
            date: dto.date,
            year: dto.year,
            month: dto.month,
            expense_id: dto.expense_id,
            description: dto.description,
            expense_name: dto.expense_name,
            amount: dto.amount,
        }
    }
}

/// Parameters for updating an outflow record.
#[derive(Debug, Clone)]
pub struct UpdateOutflowParams {
    pub id: i32,
    pub owner_id: i32,
    pub date: Option<NaiveDate>,
    pub year: String,
    pub month: String,
    pub expense_id: i32,
    pub description: Option<String>,
    pub expense_name: String,
    pub amount: Decimal,
}

impl UpdateOutflowParams {
    /// Converts a DTO to update parameters, attaching the authenticated owner.
    pub fn from_dto(id: i32, owner_id: i32, dto: UpdateOutflowDto) -> Self {
        Self {
            id,
            owner_id,
            date: dto.date,
            year: dto.year,
            month: dto.month,
            expense_id: dto.expense_id,
            description: dto.description,
            expense_name: dto.expense_name,
            amount: dto.amount,
        }
    }
}
