//! Income type data repository for database operations.
//!
//! Mirrors the expense type repository for the income side of the ledger.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::income::{CreateIncomeTypeParams, IncomeType, UpdateIncomeTypeParams};

/// Repository providing database operations for income types.
pub struct IncomeTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IncomeTypeRepository<'a> {
    /// Creates a new IncomeTypeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `IncomeTypeRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new income type for the owner.
    ///
    /// # Returns
    /// - `Ok(IncomeType)` - The created type with generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateIncomeTypeParams) -> Result<IncomeType, DbErr> {
        let entity = entity::income_type::ActiveModel {
            name: ActiveValue::Set(param.name),
            owner_id: ActiveValue::Set(param.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(IncomeType::from_entity(entity))
    }

    /// Gets all income types belonging to the owner, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<IncomeType>)` - The owner's types (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, owner_id: i32) -> Result<Vec<IncomeType>, DbErr> {
        let entities = entity::prelude::IncomeType::find()
            .filter(entity::income_type::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::income_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(IncomeType::from_entity).collect())
    }

    /// Gets one of the owner's income types by id.
    ///
    /// # Returns
    /// - `Ok(Some(IncomeType))` - Type found and owned by `owner_id`
    /// - `Ok(None)` - No such type, or it belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<Option<IncomeType>, DbErr> {
        let entity = entity::prelude::IncomeType::find()
            .filter(entity::income_type::Column::Id.eq(id))
            .filter(entity::income_type::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await?;

        Ok(entity.map(IncomeType::from_entity))
    }

    /// Updates one of the owner's income types.
    ///
    /// # Returns
    /// - `Ok(Some(IncomeType))` - The updated type
    /// - `Ok(None)` - No such type, or it belongs to another user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateIncomeTypeParams) -> Result<Option<IncomeType>, DbErr> {
        let Some(existing) = entity::prelude::IncomeType::find()
            .filter(entity::income_type::Column::Id.eq(param.id))
            .filter(entity::income_type::Column::OwnerId.eq(param.owner_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::income_type::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(param.name);

        let entity = active_model.update(self.db).await?;

        Ok(Some(IncomeType::from_entity(entity)))
    }

    /// Deletes one of the owner's income types.
    ///
    /// Income records under the type are removed by the CASCADE constraint.
    ///
    /// # Returns
    /// - `Ok(true)` - Type deleted
    /// - `Ok(false)` - No such type, or it belongs to another user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::IncomeType::delete_many()
            .filter(entity::income_type::Column::Id.eq(id))
            .filter(entity::income_type::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an income type exists and belongs to the owner.
    ///
    /// # Returns
    /// - `Ok(true)` - Type exists and is owned by `owner_id`
    /// - `Ok(false)` - No such type, or it belongs to another user
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::IncomeType::find()
            .filter(entity::income_type::Column::Id.eq(id))
            .filter(entity::income_type::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
