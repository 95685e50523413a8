//! Income record data repository for database operations.
//!
//! Income records are keyed by their period: the four digit year and two
//! digit month strings. The month listing is the primary read path; callers
//! normalize the period segments before they reach this layer.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::income::{CreateIncomeParams, Income, UpdateIncomeParams};

/// Repository providing database operations for income records.
pub struct IncomeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IncomeRepository<'a> {
    /// Creates a new IncomeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `IncomeRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new income record for the owner.
    ///
    /// # Returns
    /// - `Ok(Income)` - The created record with generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateIncomeParams) -> Result<Income, DbErr> {
        let entity = entity::income::ActiveModel {
            year: ActiveValue::Set(param.year),
            month: ActiveValue::Set(param.month),
            owner_id: ActiveValue::Set(param.owner_id),
            income_type_id: ActiveValue::Set(param.income_type_id),
            description: ActiveValue::Set(param.description),
            amount: ActiveValue::Set(param.amount),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Income::from_entity(entity))
    }

    /// Gets the owner's income records for one month.
    ///
    /// # Arguments
    /// - `owner_id` - Authenticated owner
    /// - `year` - Four digit year string
    /// - `month` - Two digit month string
    ///
    /// # Returns
    /// - `Ok(Vec<Income>)` - Records for the month (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_month(
        &self,
        owner_id: i32,
        year: &str,
        month: &str,
    ) -> Result<Vec<Income>, DbErr> {
        let entities = entity::prelude::Income::find()
            .filter(entity::income::Column::OwnerId.eq(owner_id))
            .filter(entity::income::Column::Year.eq(year))
            .filter(entity::income::Column::Month.eq(month))
            .order_by_asc(entity::income::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Income::from_entity).collect())
    }

    /// Gets one of the owner's income records by id.
    ///
    /// # Returns
    /// - `Ok(Some(Income))` - Record found and owned by `owner_id`
    /// - `Ok(None)` - No such record, or it belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<Option<Income>, DbErr> {
        let entity = entity::prelude::Income::find()
            .filter(entity::income::Column::Id.eq(id))
            .filter(entity::income::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Income::from_entity))
    }

    /// Updates one of the owner's income records.
    ///
    /// # Returns
    /// - `Ok(Some(Income))` - The updated record
    /// - `Ok(None)` - No such record, or it belongs to another user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateIncomeParams) -> Result<Option<Income>, DbErr> {
        let Some(existing) = entity::prelude::Income::find()
            .filter(entity::income::Column::Id.eq(param.id))
            .filter(entity::income::Column::OwnerId.eq(param.owner_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::income::ActiveModel = existing.into();
        active_model.year = ActiveValue::Set(param.year);
        active_model.month = ActiveValue::Set(param.month);
        active_model.income_type_id = ActiveValue::Set(param.income_type_id);
        active_model.description = ActiveValue::Set(param.description);
        active_model.amount = ActiveValue::Set(param.amount);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Income::from_entity(entity)))
    }

    /// Deletes one of the owner's income records.
    ///
    /// # Returns
    /// - `Ok(true)` - Record deleted
    /// - `Ok(false)` - No such record, or it belongs to another user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Income::delete_many()
            .filter(entity::income::Column::Id.eq(id))
            .filter(entity::income::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
