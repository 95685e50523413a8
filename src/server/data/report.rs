//! Read-only report queries over the ledger tables.
//!
//! Reports are computed from the income and outflow tables at query time
//! instead of being maintained as separate aggregate tables, so they can
//! never drift out of sync with the records they summarize. Sums are folded
//! in Rust over the owner's filtered rows; at household-ledger scale this is
//! a handful of rows per month.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::report::{
    DailyExpenseTotal, MonthlyExpenseTotal, OwnedMoney, VariableExpense,
};

/// Repository computing report views from the ledger tables.
pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    /// Creates a new ReportRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReportRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the owner's variable-expense lines for one month, ordered by date.
    ///
    /// # Returns
    /// - `Ok(Vec<VariableExpense>)` - Report lines for the month (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn variable_expenses(
        &self,
        owner_id: i32,
        year: &str,
        month: &str,
    ) -> Result<Vec<VariableExpense>, DbErr> {
        let entities = entity::prelude::Outflow::find()
            .filter(entity::outflow::Column::OwnerId.eq(owner_id))
            .filter(entity::outflow::Column::Year.eq(year))
            .filter(entity::outflow::Column::Month.eq(month))
            .order_by_asc(entity::outflow::Column::ExpenseName)
            .order_by_asc(entity::outflow::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(VariableExpense::from_entity)
            .collect())
    }

    /// Totals the owner's spending on one calendar day.
    ///
    /// Only dated outflows count toward a daily total. A day with no records
    /// has no report row, unlike the monthly total which zero-fills.
    ///
    /// # Arguments
    /// - `owner_id` - Authenticated owner
    /// - `date` - The calendar day to total
    /// - `year` / `month` - Period strings echoed back on the report line
    ///
    /// # Returns
    /// - `Ok(Some(DailyExpenseTotal))` - The day's total
    /// - `Ok(None)` - No outflows recorded on the date
    /// - `Err(DbErr)` - Database error during query
    pub async fn daily_total(
        &self,
        owner_id: i32,
        date: NaiveDate,
        year: &str,
        month: &str,
    ) -> Result<Option<DailyExpenseTotal>, DbErr> {
        let entities = entity::prelude::Outflow::find()
            .filter(entity::outflow::Column::OwnerId.eq(owner_id))
            .filter(entity::outflow::Column::Date.eq(date))
            .all(self.db)
            .await?;

        if entities.is_empty() {
            return Ok(None);
        }

        let total = entities.iter().map(|o| o.amount).sum::<Decimal>();

        Ok(Some(DailyExpenseTotal {
            date,
            year: year.to_string(),
            month: month.to_string(),
            total,
        }))
    }

    /// Totals the owner's variable spending in one month.
    ///
    /// # Returns
    /// - `Ok(MonthlyExpenseTotal)` - The month's total (zero if no records)
    /// - `Err(DbErr)` - Database error during query
    pub async fn monthly_total(
        &self,
        owner_id: i32,
        year: &str,
        month: &str,
    ) -> Result<MonthlyExpenseTotal, DbErr> {
        let entities = entity::prelude::Outflow::find()
            .filter(entity::outflow::Column::OwnerId.eq(owner_id))
            .filter(entity::outflow::Column::Year.eq(year))
            .filter(entity::outflow::Column::Month.eq(month))
            .all(self.db)
            .await?;

        let total = entities.iter().map(|o| o.amount).sum::<Decimal>();

        Ok(MonthlyExpenseTotal {
            year: year.to_string(),
            month: month.to_string(),
            total,
        })
    }

    /// Balances the owner's income against outflows for every recorded month.
    ///
    /// Months appear if they have income records, outflow records, or both,
    /// ordered chronologically. A month with only outflows shows zero income
    /// and a negative balance.
    ///
    /// # Returns
    /// - `Ok(Vec<OwnedMoney>)` - One balance line per recorded month
    /// - `Err(DbErr)` - Database error during query
    pub async fn owned_money(&self, owner_id: i32) -> Result<Vec<OwnedMoney>, DbErr> {
        let incomes = entity::prelude::Income::find()
            .filter(entity::income::Column::OwnerId.eq(owner_id))
            .all(self.db)
            .await?;

        let outflows = entity::prelude::Outflow::find()
            .filter(entity::outflow::Column::OwnerId.eq(owner_id))
            .all(self.db)
            .await?;

        // BTreeMap keyed by (year, month) keeps the fixed-width strings in
        // chronological order.
        let mut months: BTreeMap<(String, String), (Decimal, Decimal)> = BTreeMap::new();

        for income in incomes {
            let entry = months
                .entry((income.year, income.month))
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            entry.0 += income.amount;
        }

        for outflow in outflows {
            let entry = months
                .entry((outflow.year, outflow.month))
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            entry.1 += outflow.amount;
        }

        Ok(months
            .into_iter()
            .map(|((year, month), (income, expenses))| {
                OwnedMoney::new(year, month, income, expenses)
            })
            .collect())
    }

    /// Balances the owner's income against outflows for one month.
    ///
    /// # Returns
    /// - `Ok(Some(OwnedMoney))` - The month's balance line
    /// - `Ok(None)` - No income or outflow records in the month
    /// - `Err(DbErr)` - Database error during query
    pub async fn owned_money_for_month(
        &self,
        owner_id: i32,
        year: &str,
        month: &str,
    ) -> Result<Option<OwnedMoney>, DbErr> {
        let incomes = entity::prelude::Income::find()
            .filter(entity::income::Column::OwnerId.eq(owner_id))
            .filter(entity::income::Column::Year.eq(year))
            .filter(entity::income::Column::Month.eq(month))
            .all(self.db)
            .await?;

        let outflows = entity::prelude::Outflow::find()
            .filter(entity::outflow::Column::OwnerId.eq(owner_id))
            .filter(entity::outflow::Column::Year.eq(year))
            .filter(entity::outflow::Column::Month.eq(month))
            .all(self.db)
            .await?;

        if incomes.is_empty() && outflows.is_empty() {
            return Ok(None);
        }

        let income_total = incomes.iter().map(|i| i.amount).sum::<Decimal>();
        let expense_total = outflows.iter().map(|o| o.amount).sum::<Decimal>();

        Ok(Some(OwnedMoney::new(
            year.to_string(),
            month.to_string(),
            income_total,
            expense_total,
        )))
    }
}
