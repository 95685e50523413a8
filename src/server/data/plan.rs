//! Annual plan data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::plan::{AnnualPlan, CreateAnnualPlanParams, UpdateAnnualPlanParams};

/// Repository providing database operations for annual plan entries.
pub struct AnnualPlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnualPlanRepository<'a> {
    /// Creates a new AnnualPlanRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AnnualPlanRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new plan entry for the owner.
    ///
    /// # Returns
    /// - `Ok(AnnualPlan)` - The created entry with generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateAnnualPlanParams) -> Result<AnnualPlan, DbErr> {
        let entity = entity::annual_plan::ActiveModel {
            owner_id: ActiveValue::Set(param.owner_id),
            year: ActiveValue::Set(param.year),
            month: ActiveValue::Set(param.month),
            goal: ActiveValue::Set(param.goal),
            target_amount: ActiveValue::Set(param.target_amount),
            notes: ActiveValue::Set(param.notes),
            achieved: ActiveValue::Set(param.achieved),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AnnualPlan::from_entity(entity))
    }

    /// Gets the owner's plan entries for one year, ordered by month.
    ///
    /// # Arguments
    /// - `owner_id` - Authenticated owner
    /// - `year` - Four digit year string
    ///
    /// # Returns
    /// - `Ok(Vec<AnnualPlan>)` - Entries for the year (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_year(&self, owner_id: i32, year: &str) -> Result<Vec<AnnualPlan>, DbErr> {
        let entities = entity::prelude::AnnualPlan::find()
            .filter(entity::annual_plan::Column::OwnerId.eq(owner_id))
            .filter(entity::annual_plan::Column::Year.eq(year))
            .order_by_asc(entity::annual_plan::Column::Month)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AnnualPlan::from_entity).collect())
    }

    /// Gets one of the owner's plan entries by id.
    ///
    /// # Returns
    /// - `Ok(Some(AnnualPlan))` - Entry found and owned by `owner_id`
    /// - `Ok(None)` - No such entry, or it belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<Option<AnnualPlan>, DbErr> {
        let entity = entity::prelude::AnnualPlan::find()
            .filter(entity::annual_plan::Column::Id.eq(id))
            .filter(entity::annual_plan::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await?;

        Ok(entity.map(AnnualPlan::from_entity))
    }

    /// Updates one of the owner's plan entries.
    ///
    /// # Returns
    /// - `Ok(Some(AnnualPlan))` - The updated entry
    /// - `Ok(None)` - No such entry, or it belongs to another user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateAnnualPlanParams) -> Result<Option<AnnualPlan>, DbErr> {
        let Some(existing) = entity::prelude::AnnualPlan::find()
            .filter(entity::annual_plan::Column::Id.eq(param.id))
            .filter(entity::annual_plan::Column::OwnerId.eq(param.owner_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::annual_plan::ActiveModel = existing.into();
        active_model.year = ActiveValue::Set(param.year);
        active_model.month = ActiveValue::Set(param.month);
        active_model.goal = ActiveValue::Set(param.goal);
        active_model.target_amount = ActiveValue::Set(param.target_amount);
        active_model.notes = ActiveValue::Set(param.notes);
        active_model.achieved = ActiveValue::Set(param.achieved);

        let entity = active_model.update(self.db).await?;

        Ok(Some(AnnualPlan::from_entity(entity)))
    }

    /// Deletes one of the owner's plan entries.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry deleted
    /// - `Ok(false)` - No such entry, or it belongs to another user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AnnualPlan::delete_many()
            .filter(entity::annual_plan::Column::Id.eq(id))
            .filter(entity::annual_plan::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
