//! Income domain models and parameters.

use rust_decimal::Decimal;

use crate::model::income::{
    CreateIncomeDto, CreateIncomeTypeDto, IncomeDto, IncomeTypeDto, UpdateIncomeDto,
    UpdateIncomeTypeDto,
};

/// A user-defined income category ("Salary", "Side job").
#[derive(Debug, Clone)]
pub struct IncomeType {
    pub id: i32,
    pub name: String,
}

impl IncomeType {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::income_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> IncomeTypeDto {
        IncomeTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating an income type.
#[derive(Debug, Clone)]
pub struct CreateIncomeTypeParams {
    pub owner_id: i32,
    pub name: String,
}

impl CreateIncomeTypeParams {
    /// Converts a DTO to creation parameters, attaching the authenticated owner.
    pub fn from_dto(owner_id: i32, dto: CreateIncomeTypeDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
        }
    }
}

/// Parameters for updating an income type.
#[derive(Debug, Clone)]
pub struct UpdateIncomeTypeParams {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
}

impl UpdateIncomeTypeParams {
    /// Converts a DTO to update parameters, attaching the authenticated owner.
    pub fn from_dto(id: i32, owner_id: i32, dto: UpdateIncomeTypeDto) -> Self {
        Self {
            id,
            owner_id,
            name: dto.name,
        }
    }
}

/// An income record for one month.
#[derive(Debug, Clone)]
pub struct Income {
    pub id: i32,
    pub year: String,
    pub month: String,
    pub income_type_id: i32,
    pub description: Option<String>,
    pub amount: Decimal,
}

impl Income {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::income::Model) -> Self {
        Self {
            id: entity.id,
            year: entity.year,
            month: entity.month,
            income_type_id: entity.income_type_id,
            description: entity.description,
            amount: entity.amount,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> IncomeDto {
        IncomeDto {
            id: self.id,
            year: self.year,
            month: self.month,
            income_type_id: self.income_type_id,
            description: self.description,
            amount: self.amount,
        }
    }
}

/// Parameters for creating an income record.
#[derive(Debug, Clone)]
pub struct CreateIncomeParams {
    pub owner_id: i32,
    pub year: String,
    pub month: String,
    pub income_type_id: i32,
    pub description: Option<String>,
    pub amount: Decimal,
}

impl CreateIncomeParams {
    /// Converts a DTO to creation parameters, attaching the authenticated owner.
    pub fn from_dto(owner_id: i32, dto: CreateIncomeDto) -> Self {
        Self {
            owner_id,
            year: dto.year,
            month: dto.month,
            income_type_id: dto.income_type_id,
            description: dto.description,
            amount: dto.amount,
        }
    }
}

/// Parameters for updating an income record.
#[derive(Debug, Clone)]
pub struct UpdateIncomeParams {
    pub id: i32,
    pub owner_id: i32,
    pub year: String,
    pub month: String,
    pub income_type_id: i32,
    pub description: Option<String>,
    pub amount: Decimal,
}

impl UpdateIncomeParams {
    /// Converts a DTO to update parameters, attaching the authenticated owner.
    pub fn from_dto(id: i32, owner_id: i32, dto: UpdateIncomeDto) -> Self {
        Self {
            id,
            owner_id,
            year: dto.year,
            month: dto.month,
            income_type_id: dto.income_type_id,
            description: dto.description,
            amount: dto.amount,
        }
    }
}
