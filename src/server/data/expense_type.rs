//! Expense type data repository for database operations.
//!
//! This module provides the `ExpenseTypeRepository` for managing a user's
//! expense categories. Every query is scoped by owner id, so one user's
//! categories are invisible to another.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::expense::{CreateExpenseTypeParams, ExpenseType, UpdateExpenseTypeParams};

/// Repository providing database operations for expense types.
pub struct ExpenseTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseTypeRepository<'a> {
    /// Creates a new ExpenseTypeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ExpenseTypeRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new expense type for the owner.
    ///
    /// # Returns
    /// - `Ok(ExpenseType)` - The created type with generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateExpenseTypeParams) -> Result<ExpenseType, DbErr> {
        let entity = entity::expense_type::ActiveModel {
            name: ActiveValue::Set(param.name),
            owner_id: ActiveValue::Set(param.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ExpenseType::from_entity(entity))
    }

    /// Gets all expense types belonging to the owner, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<ExpenseType>)` - The owner's types (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, owner_id: i32) -> Result<Vec<ExpenseType>, DbErr> {
        let entities = entity::prelude::ExpenseType::find()
            .filter(entity::expense_type::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::expense_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ExpenseType::from_entity).collect())
    }

    /// Gets one of the owner's expense types by id.
    ///
    /// # Returns
    /// - `Ok(Some(ExpenseType))` - Type found and owned by `owner_id`
    /// - `Ok(None)` - No such type, or it belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<Option<ExpenseType>, DbErr> {
        let entity = entity::prelude::ExpenseType::find()
            .filter(entity::expense_type::Column::Id.eq(id))
            .filter(entity::expense_type::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ExpenseType::from_entity))
    }

    /// Updates one of the owner's expense types.
    ///
    /// # Returns
    /// - `Ok(Some(ExpenseType))` - The updated type
    /// - `Ok(None)` - No such type, or it belongs to another user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        param: UpdateExpenseTypeParams,
    ) -> Result<Option<ExpenseType>, DbErr> {
        let Some(existing) = entity::prelude::ExpenseType::find()
            .filter(entity::expense_type::Column::Id.eq(param.id))
            .filter(entity::expense_type::Column::OwnerId.eq(param.owner_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::expense_type::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(param.name);

        let entity = active_model.update(self.db).await?;

        Ok(Some(ExpenseType::from_entity(entity)))
    }

    /// Deletes one of the owner's expense types.
    ///
    /// Catalog entries under the type are removed by the CASCADE constraint.
    ///
    /// # Returns
    /// - `Ok(true)` - Type deleted
    /// - `Ok(false)` - No such type, or it belongs to another user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ExpenseType::delete_many()
            .filter(entity::expense_type::Column::Id.eq(id))
            .filter(entity::expense_type::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an expense type exists and belongs to the owner.
    ///
    /// Used before creating or moving catalog entries under a type.
    ///
    /// # Returns
    /// - `Ok(true)` - Type exists and is owned by `owner_id`
    /// - `Ok(false)` - No such type, or it belongs to another user
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ExpenseType::find()
            .filter(entity::expense_type::Column::Id.eq(id))
            .filter(entity::expense_type::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
