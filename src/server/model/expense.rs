//! Fixed-expense catalog domain models and parameters.
//!
//! Expense types group the fixed-expense catalog ("Housing", "Utilities");
//! expenses are the named entries within a type ("Rent", "Electricity").
//! Monthly variable spending against these entries is recorded as outflows.

use crate::model::expense::{
    CreateExpenseDto, CreateExpenseTypeDto, ExpenseDto, ExpenseTypeDto, UpdateExpenseDto,
    UpdateExpenseTypeDto,
};

/// A user-defined expense category.
#[derive(Debug, Clone)]
pub struct ExpenseType {
    pub id: i32,
    pub name: String,
}

impl ExpenseType {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::expense_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> ExpenseTypeDto {
        ExpenseTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating an expense type.
#[derive(Debug, Clone)]
pub struct CreateExpenseTypeParams {
    pub owner_id: i32,
    pub name: String,
}

impl CreateExpenseTypeParams {
    /// Converts a DTO to creation parameters, attaching the authenticated owner.
    pub fn from_dto(owner_id: i32, dto: CreateExpenseTypeDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
        }
    }
}

/// Parameters for updating an expense type.
#[derive(Debug, Clone)]
pub struct UpdateExpenseTypeParams {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
}

impl UpdateExpenseTypeParams {
    /// Converts a DTO to update parameters, attaching the authenticated owner.
    pub fn from_dto(id: i32, owner_id: i32, dto: UpdateExpenseTypeDto) -> Self {
        Self {
            id,
            owner_id,
            name: dto.name,
        }
    }
}

/// A catalog entry within an expense type, enriched with the type's name.
#[derive(Debug, Clone)]
pub struct Expense {
    pub id: i32,
    pub expense_type_id: i32,
    pub expense_type_name: String,
    pub name: String,
}

impl Expense {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// Enriches the expense with its type's name from the joined expense type
    /// model. Falls back to an empty name if the join produced no row.
    pub fn from_entity(
        entity: entity::expense::Model,
        type_model: Option<entity::expense_type::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            expense_type_id: entity.expense_type_id,
            expense_type_name: type_model.map(|t| t.name).unwrap_or_default(),
            name: entity.name,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> ExpenseDto {
        ExpenseDto {
            id: self.id,
            expense_type_id: self.expense_type_id,
            expense_type_name: self.expense_type_name,
            name: self.name,
        }
    }
}

/// Parameters for creating an expense catalog entry.
#[derive(Debug, Clone)]
pub struct CreateExpenseParams {
    pub owner_id: i32,
    pub expense_type_id: i32,
    pub name: String,
}

impl CreateExpenseParams {
    /// Converts a DTO to creation parameters, attaching the authenticated owner.
    pub fn from_dto(owner_id: i32, dto: CreateExpenseDto) -> Self {
        Self {
            owner_id,
            expense_type_id: dto.expense_type_id,
            name: dto.name,
        }
    }
}

/// Parameters for updating an expense catalog entry.
#[derive(Debug, Clone)]
pub struct UpdateExpenseParams {
    pub id: i32,
    pub owner_id: i32,
    pub expense_type_id: i32,
    pub name: String,
}

impl UpdateExpenseParams {
    /// Converts a DTO to update parameters, attaching the authenticated owner.
    pub fn from_dto(id: i32, owner_id: i32, dto: UpdateExpenseDto) -> Self {
        Self {
            id,
            owner_id,
            expense_type_id: dto.expense_type_id,
            name: dto.name,
        }
    }
}
