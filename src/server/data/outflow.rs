//! Outflow data repository for database operations.
//!
//! Outflows carry both a concrete calendar date and the year/month strings of
//! the period they are booked under, so the month listing works even for
//! records without a date.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::outflow::{CreateOutflowParams, Outflow, UpdateOutflowParams};

/// Repository providing database operations for outflow records.
pub struct OutflowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OutflowRepository<'a> {
    /// Creates a new OutflowRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OutflowRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new outflow record for the owner.
    ///
    /// The caller verifies that the referenced catalog entry belongs to the
    /// owner before calling.
    ///
    /// # Returns
    /// - `Ok(Outflow)` - The created record with generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateOutflowParams) -> Result<Outflow, DbErr> {
        let entity = entity::outflow::ActiveModel {
            date: ActiveValue::Set(param.date),
            year: ActiveValue::Set(param.year),
            month: ActiveValue::Set(param.month),
            owner_id: ActiveValue::Set(param.owner_id),
            expense_id: ActiveValue::Set(param.expense_id),
            description: ActiveValue::Set(param.description),
            expense_name: ActiveValue::Set(param.expense_name),
            amount: ActiveValue::Set(param.amount),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Outflow::from_entity(entity))
    }

    /// Gets the owner's outflows for one month, ordered by date.
    ///
    /// Records without a date sort first; the booking order within a day
    /// follows insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<Outflow>)` - Records for the month (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_month(
        &self,
        owner_id: i32,
        year: &str,
        month: &str,
    ) -> Result<Vec<Outflow>, DbErr> {
        let entities = entity::prelude::Outflow::find()
            .filter(entity::outflow::Column::OwnerId.eq(owner_id))
            .filter(entity::outflow::Column::Year.eq(year))
            .filter(entity::outflow::Column::Month.eq(month))
            .order_by_asc(entity::outflow::Column::Date)
            .order_by_asc(entity::outflow::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Outflow::from_entity).collect())
    }

    /// Gets the owner's outflows for one calendar day.
    ///
    /// # Returns
    /// - `Ok(Vec<Outflow>)` - Records dated exactly `date` (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_date(&self, owner_id: i32, date: NaiveDate) -> Result<Vec<Outflow>, DbErr> {
        let entities = entity::prelude::Outflow::find()
            .filter(entity::outflow::Column::OwnerId.eq(owner_id))
            .filter(entity::outflow::Column::Date.eq(date))
            .order_by_asc(entity::outflow::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Outflow::from_entity).collect())
    }

    /// Gets one of the owner's outflows by id.
    ///
    /// # Returns
    /// - `Ok(Some(Outflow))` - Record found and owned by `owner_id`
    /// - `Ok(None)` - No such record, or it belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<Option<Outflow>, DbErr> {
        let entity = entity::prelude::Outflow::find()
            .filter(entity::outflow::Column::Id.eq(id))
            .filter(entity::outflow::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Outflow::from_entity))
    }

    /// Updates one of the owner's outflows.
    ///
    /// # Returns
    /// - `Ok(Some(Outflow))` - The updated record
    /// - `Ok(None)` - No such record, or it belongs to another user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateOutflowParams) -> Result<Option<Outflow>, DbErr> {
        let Some(existing) = entity::prelude::Outflow::find()
            .filter(entity::outflow::Column::Id.eq(param.id))
            .filter(entity::outflow::Column::OwnerId.eq(param.owner_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::outflow::ActiveModel = existing.into();
        active_model.date = ActiveValue::Set(param.date);
        active_model.year = ActiveValue::Set(param.year);
        active_model.month = ActiveValue::Set(param.month);
        active_model.expense_id = ActiveValue::Set(param.expense_id);
        active_model.description = ActiveValue::Set(param.description);
        active_model.expense_name = ActiveValue::Set(param.expense_name);
        active_model.amount = ActiveValue::Set(param.amount);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Outflow::from_entity(entity)))
    }

    /// Deletes one of the owner's outflows.
    ///
    /// # Returns
    /// - `Ok(true)` - Record deleted
    /// - `Ok(false)` - No such record, or it belongs to another user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Outflow::delete_many()
            .filter(entity::outflow::Column::Id.eq(id))
            .filter(entity::outflow::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
