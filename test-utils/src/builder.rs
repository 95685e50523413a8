use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring in-memory SQLite test
/// environments. Add entity tables, then call `build()` to create the
/// configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{ExpenseType, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(ExpenseType)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for expense bookkeeping.
    ///
    /// Adds `User`, `ExpenseType`, `Expense` and `Outflow` in dependency
    /// order. Use this when testing outflow or expense-catalog functionality.
    pub fn with_expense_tables(self) -> Self {
        self.with_table(User)
            .with_table(ExpenseType)
            .with_table(Expense)
            .with_table(Outflow)
    }

    /// Adds all tables required for income bookkeeping.
    ///
    /// Adds `User`, `IncomeType` and `Income` in dependency order.
    pub fn with_income_tables(self) -> Self {
        self.with_table(User).with_table(IncomeType).with_table(Income)
    }

    /// Adds every kakeibo table.
    ///
    /// Use this for report tests that aggregate across income and outflows.
    pub fn with_all_tables(self) -> Self {
        self.with_expense_tables()
            .with_table(IncomeType)
            .with_table(Income)
            .with_table(AnnualPlan)
            .with_table(MonthlyResult)
            .with_table(PasswordResetToken)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
