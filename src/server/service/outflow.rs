//! Outflow (variable spending) service.

use sea_orm::DatabaseConnection;

use chrono::NaiveDate;

use crate::server::{
    data::{expense::ExpenseRepository, outflow::OutflowRepository},
    error::AppError,
    model::outflow::{CreateOutflowParams, Outflow, UpdateOutflowParams},
    util::parse::{
        normalize_month, normalize_month_str, normalize_year, normalize_year_str, validate_day,
    },
};

pub struct OutflowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OutflowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a variable spending entry.
    ///
    /// The referenced catalog entry must belong to the owner, and its current
    /// name is denormalized onto the record regardless of what the client
    /// sent, so the ledger label always matches the catalog at recording
    /// time.
    ///
    /// # Returns
    /// - `Ok(Outflow)` - The created record
    /// - `Err(AppError::BadRequest)` - Invalid period, or expense not in the
    ///   owner's catalog
    pub async fn create(&self, mut param: CreateOutflowParams) -> Result<Outflow, AppError> {
        param.year = normalize_year_str(&param.year)?;
        param.month = normalize_month_str(&param.month)?;
        param.expense_name = self.resolve_expense_name(param.expense_id, param.owner_id).await?;

        let repo = OutflowRepository::new(self.db);
        Ok(repo.create(param).await?)
    }

    pub async fn get_by_month(
        &self,
        owner_id: i32,
        year: i32,
        month: u32,
    ) -> Result<Vec<Outflow>, AppError> {
        let year = normalize_year(year)?;
        let month = normalize_month(month)?;

        let repo = OutflowRepository::new(self.db);
        Ok(repo.get_by_month(owner_id, &year, &month).await?)
    }

    /// Lists the owner's outflows recorded on one calendar day.
    pub async fn get_by_day(
        &self,
        owner_id: i32,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Vec<Outflow>, AppError> {
        normalize_year(year)?;
        normalize_month(month)?;
        let day = validate_day(day)?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid date: {}-{:02}-{:02}", year, month, day))
        })?;

        let repo = OutflowRepository::new(self.db);
        Ok(repo.get_by_date(owner_id, date).await?)
    }

    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<Outflow, AppError> {
        let repo = OutflowRepository::new(self.db);

        repo.get_by_id(id, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Outflow {} not found", id)))
    }

    pub async fn update(&self, mut param: UpdateOutflowParams) -> Result<Outflow, AppError> {
        param.year = normalize_year_str(&param.year)?;
        param.month = normalize_month_str(&param.month)?;
        param.expense_name = self.resolve_expense_name(param.expense_id, param.owner_id).await?;

        let id = param.id;
        let repo = OutflowRepository::new(self.db);

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Outflow {} not found", id)))
    }

    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        let repo = OutflowRepository::new(self.db);

        if !repo.delete(id, owner_id).await? {
            return Err(AppError::NotFound(format!("Outflow {} not found", id)));
        }

        Ok(())
    }

    /// Looks up the owner's catalog entry and returns its name for
    /// denormalization onto the outflow record.
    async fn resolve_expense_name(&self, expense_id: i32, owner_id: i32) -> Result<String, AppError> {
        let expense_repo = ExpenseRepository::new(self.db);

        let Some(expense) = expense_repo.get_by_id(expense_id, owner_id).await? else {
            return Err(AppError::BadRequest(format!(
                "Expense {} does not exist",
                expense_id
            )));
        };

        Ok(expense.name)
    }
}
