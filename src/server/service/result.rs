//! Monthly result service.
//!
//! Derived columns are computed here from the raw totals the client supplies
//! and handed to the repository alongside the params; the stored figures are
//! never recomputed afterwards.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::result::MonthlyResultRepository,
    error::AppError,
    model::result::{CreateMonthlyResultParams, MonthlyResult, UpdateMonthlyResultParams},
    util::parse::{normalize_month_str, normalize_year_str},
};

pub struct MonthlyResultService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonthlyResultService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        mut param: CreateMonthlyResultParams,
    ) -> Result<MonthlyResult, AppError> {
        param.year = normalize_year_str(&param.year)?;
        param.month = normalize_month_str(&param.month)?;

        let derived = param.derived();
        let repo = MonthlyResultRepository::new(self.db);

        Ok(repo.create(param, derived).await?)
    }

    pub async fn get_all(&self, owner_id: i32) -> Result<Vec<MonthlyResult>, AppError> {
        let repo = MonthlyResultRepository::new(self.db);
        Ok(repo.get_all(owner_id).await?)
    }

    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<MonthlyResult, AppError> {
        let repo = MonthlyResultRepository::new(self.db);

        repo.get_by_id(id, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Monthly result {} not found", id)))
    }

    pub async fn update(
        &self,
        mut param: UpdateMonthlyResultParams,
    ) -> Result<MonthlyResult, AppError> {
        param.year = normalize_year_str(&param.year)?;
        param.month = normalize_month_str(&param.month)?;

        let id = param.id;
        let derived = param.derived();
        let repo = MonthlyResultRepository::new(self.db);

        repo.update(param, derived)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Monthly result {} not found", id)))
    }

    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        let repo = MonthlyResultRepository::new(self.db);

        if !repo.delete(id, owner_id).await? {
            return Err(AppError::NotFound(format!("Monthly result {} not found", id)));
        }

        Ok(())
    }
}
