//! Annual plan service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::plan::AnnualPlanRepository,
    error::AppError,
    model::plan::{AnnualPlan, CreateAnnualPlanParams, UpdateAnnualPlanParams},
    util::parse::{normalize_month_str, normalize_year, normalize_year_str},
};

pub struct AnnualPlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnualPlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, mut param: CreateAnnualPlanParams) -> Result<AnnualPlan, AppError> {
        param.year = normalize_year_str(&param.year)?;
        param.month = normalize_month_str(&param.month)?;

        let repo = AnnualPlanRepository::new(self.db);
        Ok(repo.create(param).await?)
    }

    pub async fn get_by_year(&self, owner_id: i32, year: i32) -> Result<Vec<AnnualPlan>, AppError> {
        let year = normalize_year(year)?;

        let repo = AnnualPlanRepository::new(self.db);
        Ok(repo.get_by_year(owner_id, &year).await?)
    }

    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<AnnualPlan, AppError> {
        let repo = AnnualPlanRepository::new(self.db);

        repo.get_by_id(id, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Annual plan {} not found", id)))
    }

    pub async fn update(&self, mut param: UpdateAnnualPlanParams) -> Result<AnnualPlan, AppError> {
        param.year = normalize_year_str(&param.year)?;
        param.month = normalize_month_str(&param.month)?;

        let id = param.id;
        let repo = AnnualPlanRepository::new(self.db);

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Annual plan {} not found", id)))
    }

    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        let repo = AnnualPlanRepository::new(self.db);

        if !repo.delete(id, owner_id).await? {
            return Err(AppError::NotFound(format!("Annual plan {} not found", id)));
        }

        Ok(())
    }
}
