//! Income type and income record services.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{income::IncomeRepository, income_type::IncomeTypeRepository},
    error::AppError,
    model::income::{
        CreateIncomeParams, CreateIncomeTypeParams, Income, IncomeType, UpdateIncomeParams,
        UpdateIncomeTypeParams,
    },
    util::parse::{normalize_month, normalize_month_str, normalize_year, normalize_year_str},
};

pub struct IncomeTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IncomeTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateIncomeTypeParams) -> Result<IncomeType, AppError> {
        let repo = IncomeTypeRepository::new(self.db);
        Ok(repo.create(param).await?)
    }

    pub async fn get_all(&self, owner_id: i32) -> Result<Vec<IncomeType>, AppError> {
        let repo = IncomeTypeRepository::new(self.db);
        Ok(repo.get_all(owner_id).await?)
    }

    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<IncomeType, AppError> {
        let repo = IncomeTypeRepository::new(self.db);

        repo.get_by_id(id, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Income type {} not found", id)))
    }

    pub async fn update(&self, param: UpdateIncomeTypeParams) -> Result<IncomeType, AppError> {
        let id = param.id;
        let repo = IncomeTypeRepository::new(self.db);

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Income type {} not found", id)))
    }

    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        let repo = IncomeTypeRepository::new(self.db);

        if !repo.delete(id, owner_id).await? {
            return Err(AppError::NotFound(format!("Income type {} not found", id)));
        }

        Ok(())
    }
}

pub struct IncomeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IncomeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records income for a month.
    ///
    /// Body-supplied period fields are normalized to the fixed-width storage
    /// form so "8" and "08" land in the same month.
    ///
    /// # Returns
    /// - `Ok(Income)` - The created record
    /// - `Err(AppError::BadRequest)` - Invalid period, or type not in the
    ///   owner's catalog
    pub async fn create(&self, mut param: CreateIncomeParams) -> Result<Income, AppError> {
        param.year = normalize_year_str(&param.year)?;
        param.month = normalize_month_str(&param.month)?;

        self.require_income_type(param.income_type_id, param.owner_id)
            .await?;

        let repo = IncomeRepository::new(self.db);
        Ok(repo.create(param).await?)
    }

    pub async fn get_by_month(
        &self,
        owner_id: i32,
        year: i32,
        month: u32,
    ) -> Result<Vec<Income>, AppError> {
        let year = normalize_year(year)?;
        let month = normalize_month(month)?;

        let repo = IncomeRepository::new(self.db);
        Ok(repo.get_by_month(owner_id, &year, &month).await?)
    }

    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<Income, AppError> {
        let repo = IncomeRepository::new(self.db);

        repo.get_by_id(id, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Income {} not found", id)))
    }

    pub async fn update(&self, mut param: UpdateIncomeParams) -> Result<Income, AppError> {
        param.year = normalize_year_str(&param.year)?;
        param.month = normalize_month_str(&param.month)?;

        self.require_income_type(param.income_type_id, param.owner_id)
            .await?;

        let id = param.id;
        let repo = IncomeRepository::new(self.db);

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Income {} not found", id)))
    }

    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        let repo = IncomeRepository::new(self.db);

        if !repo.delete(id, owner_id).await? {
            return Err(AppError::NotFound(format!("Income {} not found", id)));
        }

        Ok(())
    }

    async fn require_income_type(&self, income_type_id: i32, owner_id: i32) -> Result<(), AppError> {
        let type_repo = IncomeTypeRepository::new(self.db);

        if !type_repo.exists(income_type_id, owner_id).await? {
            return Err(AppError::BadRequest(format!(
                "Income type {} does not exist",
                income_type_id
            )));
        }

        Ok(())
    }
}
