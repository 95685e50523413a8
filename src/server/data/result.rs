//! Monthly result data repository for database operations.
//!
//! The derived balance columns arrive precomputed from the service layer and
//! are stored verbatim; this repository never recomputes them.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::result::{
    CreateMonthlyResultParams, DerivedBalances, MonthlyResult, UpdateMonthlyResultParams,
};

/// Repository providing database operations for monthly results.
pub struct MonthlyResultRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonthlyResultRepository<'a> {
    /// Creates a new MonthlyResultRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MonthlyResultRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new monthly result for the owner.
    ///
    /// # Arguments
    /// - `param` - The raw totals supplied by the client
    /// - `derived` - Balance columns computed by the service layer
    ///
    /// # Returns
    /// - `Ok(MonthlyResult)` - The created result with generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateMonthlyResultParams,
        derived: DerivedBalances,
    ) -> Result<MonthlyResult, DbErr> {
        let entity = entity::monthly_result::ActiveModel {
            year: ActiveValue::Set(param.year),
            month: ActiveValue::Set(param.month),
            owner_id: ActiveValue::Set(param.owner_id),
            total_income: ActiveValue::Set(param.total_income),
            total_fixed_expenses: ActiveValue::Set(param.total_fixed_expenses),
            available: ActiveValue::Set(derived.available),
            total_variable_expenses: ActiveValue::Set(param.total_variable_expenses),
            subtotal: ActiveValue::Set(derived.subtotal),
            carry_over: ActiveValue::Set(derived.carry_over),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MonthlyResult::from_entity(entity))
    }

    /// Gets all of the owner's monthly results, ordered by year then month.
    ///
    /// # Returns
    /// - `Ok(Vec<MonthlyResult>)` - The owner's results (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, owner_id: i32) -> Result<Vec<MonthlyResult>, DbErr> {
        let entities = entity::prelude::MonthlyResult::find()
            .filter(entity::monthly_result::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::monthly_result::Column::Year)
            .order_by_asc(entity::monthly_result::Column::Month)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MonthlyResult::from_entity)
            .collect())
    }

    /// Gets one of the owner's monthly results by id.
    ///
    /// # Returns
    /// - `Ok(Some(MonthlyResult))` - Result found and owned by `owner_id`
    /// - `Ok(None)` - No such result, or it belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<Option<MonthlyResult>, DbErr> {
        let entity = entity::prelude::MonthlyResult::find()
            .filter(entity::monthly_result::Column::Id.eq(id))
            .filter(entity::monthly_result::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await?;

        Ok(entity.map(MonthlyResult::from_entity))
    }

    /// Updates one of the owner's monthly results.
    ///
    /// # Arguments
    /// - `param` - The raw totals supplied by the client
    /// - `derived` - Balance columns recomputed by the service layer
    ///
    /// # Returns
    /// - `Ok(Some(MonthlyResult))` - The updated result
    /// - `Ok(None)` - No such result, or it belongs to another user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        param: UpdateMonthlyResultParams,
        derived: DerivedBalances,
    ) -> Result<Option<MonthlyResult>, DbErr> {
        let Some(existing) = entity::prelude::MonthlyResult::find()
            .filter(entity::monthly_result::Column::Id.eq(param.id))
            .filter(entity::monthly_result::Column::OwnerId.eq(param.owner_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::monthly_result::ActiveModel = existing.into();
        active_model.year = ActiveValue::Set(param.year);
        active_model.month = ActiveValue::Set(param.month);
        active_model.total_income = ActiveValue::Set(param.total_income);
        active_model.total_fixed_expenses = ActiveValue::Set(param.total_fixed_expenses);
        active_model.available = ActiveValue::Set(derived.available);
        active_model.total_variable_expenses = ActiveValue::Set(param.total_variable_expenses);
        active_model.subtotal = ActiveValue::Set(derived.subtotal);
        active_model.carry_over = ActiveValue::Set(derived.carry_over);

        let entity = active_model.update(self.db).await?;

        Ok(Some(MonthlyResult::from_entity(entity)))
    }

    /// Deletes one of the owner's monthly results.
    ///
    /// # Returns
    /// - `Ok(true)` - Result deleted
    /// - `Ok(false)` - No such result, or it belongs to another user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MonthlyResult::delete_many()
            .filter(entity::monthly_result::Column::Id.eq(id))
            .filter(entity::monthly_result::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
