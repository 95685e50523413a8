//! Annual plan domain model and parameters.

use rust_decimal::Decimal;

use crate::model::plan::{AnnualPlanDto, CreateAnnualPlanDto, UpdateAnnualPlanDto};

/// A savings or spending goal for one month of a plan year.
#[derive(Debug, Clone)]
pub struct AnnualPlan {
    pub id: i32,
    pub year: String,
    pub month: String,
    pub goal: String,
    pub target_amount: Decimal,
    pub notes: Option<String>,
    pub achieved: Option<String>,
}

impl AnnualPlan {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::annual_plan::Model) -> Self {
        Self {
            id: entity.id,
            year: entity.year,
            month: entity.month,
            goal: entity.goal,
            target_amount: entity.target_amount,
            notes: entity.notes,
            achieved: entity.achieved,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> AnnualPlanDto {
        AnnualPlanDto {
            id: self.id,
            year: self.year,
            month: self.month,
            goal: self.goal,
            target_amount: self.target_amount,
            notes: self.notes,
            achieved: self.achieved,
        }
    }
}

/// Parameters for creating an annual plan entry.
#[derive(Debug, Clone)]
pub struct CreateAnnualPlanParams {
    pub owner_id: i32,
    pub year: String,
    pub month: String,
    pub goal: String,
    pub target_amount: Decimal,
    pub notes: Option<String>,
    pub achieved: Option<String>,
}

impl CreateAnnualPlanParams {
    /// Converts a DTO to creation parameters, attaching the authenticated owner.
    pub fn from_dto(owner_id: i32, dto: CreateAnnualPlanDto) -> Self {
        Self {
            owner_id,
            year: dto.year,
            month: dto.month,
            goal: dto.goal,
            target_amount: dto.target_amount,
            notes: dto.notes,
            achieved: dto.achieved,
        }
    }
}

/// Parameters for updating an annual plan entry.
#[derive(Debug, Clone)]
pub struct UpdateAnnualPlanParams {
    pub id: i32,
    pub owner_id: i32,
    pub year: String,
    pub month: String,
    pub goal: String,
    pub target_amount: Decimal,
    pub notes: Option<String>,
    pub achieved: Option<String>,
}

impl UpdateAnnualPlanParams {
    /// Converts a DTO to update parameters, attaching the authenticated owner.
    pub fn from_dto(id: i32, owner_id: i32, dto: UpdateAnnualPlanDto) -> Self {
        Self {
            id,
            owner_id,
            year: dto.year,
            month: dto.month,
            goal: dto.goal,
            target_amount: dto.target_amount,
            notes: dto.notes,
            achieved: dto.achieved,
        }
    }
}
