//! Report service.
//!
//! Reports are computed from the ledger tables at query time; nothing here
//! writes to the database.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::report::ReportRepository,
    error::AppError,
    model::report::{DailyExpenseTotal, MonthlyExpenseTotal, OwnedMoney, VariableExpense},
    util::parse::{normalize_month, normalize_year, validate_day},
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the owner's variable-expense lines for one month.
    pub async fn variable_expenses(
        &self,
        owner_id: i32,
        year: i32,
        month: u32,
    ) -> Result<Vec<VariableExpense>, AppError> {
        let year = normalize_year(year)?;
        let month = normalize_month(month)?;

        let repo = ReportRepository::new(self.db);
        Ok(repo.variable_expenses(owner_id, &year, &month).await?)
    }

    /// Totals the owner's spending on one calendar day.
    ///
    /// # Returns
    /// - `Ok(DailyExpenseTotal)` - The day's total
    /// - `Err(AppError::BadRequest)` - Segments do not form a calendar date
    /// - `Err(AppError::NotFound)` - No outflows recorded on the date
    pub async fn daily_total(
        &self,
        owner_id: i32,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<DailyExpenseTotal, AppError> {
        let year_key = normalize_year(year)?;
        let month_key = normalize_month(month)?;
        let day = validate_day(day)?;

        // Range checks above leave only month-length mismatches, e.g. Feb 30
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid date: {}-{:02}-{:02}", year, month, day))
        })?;

        let repo = ReportRepository::new(self.db);

        repo.daily_total(owner_id, date, &year_key, &month_key)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No records for {}", date)))
    }

    /// Totals the owner's variable spending in one month.
    pub async fn monthly_total(
        &self,
        owner_id: i32,
        year: i32,
        month: u32,
    ) -> Result<MonthlyExpenseTotal, AppError> {
        let year = normalize_year(year)?;
        let month = normalize_month(month)?;

        let repo = ReportRepository::new(self.db);
        Ok(repo.monthly_total(owner_id, &year, &month).await?)
    }

    /// Balances income against outflows for every month the owner recorded.
    pub async fn owned_money(&self, owner_id: i32) -> Result<Vec<OwnedMoney>, AppError> {
        let repo = ReportRepository::new(self.db);
        Ok(repo.owned_money(owner_id).await?)
    }

    /// Balances income against outflows for a single month.
    ///
    /// # Returns
    /// - `Ok(OwnedMoney)` - The month's balance line
    /// - `Err(AppError::NotFound)` - No records for the month
    pub async fn owned_money_for_month(
        &self,
        owner_id: i32,
        year: i32,
        month: u32,
    ) -> Result<OwnedMoney, AppError> {
        let year = normalize_year(year)?;
        let month = normalize_month(month)?;

        let repo = ReportRepository::new(self.db);

        repo.owned_money_for_month(owner_id, &year, &month)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No records for {}-{}", year, month))
            })
    }
}
