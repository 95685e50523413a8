//! Expense catalog data repository for database operations.
//!
//! This module provides the `ExpenseRepository` for the named entries of the
//! fixed-expense catalog. List queries join the expense type so responses can
//! carry the type's name alongside each entry.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::expense::{CreateExpenseParams, Expense, UpdateExpenseParams};

/// Repository providing database operations for expense catalog entries.
pub struct ExpenseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseRepository<'a> {
    /// Creates a new ExpenseRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ExpenseRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new catalog entry for the owner.
    ///
    /// The caller verifies that the expense type belongs to the owner before
    /// calling; the foreign key only guarantees the type exists at all.
    ///
    /// # Returns
    /// - `Ok(Expense)` - The created entry with its type name resolved
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateExpenseParams) -> Result<Expense, DbErr> {
        let entity = entity::expense::ActiveModel {
            expense_type_id: ActiveValue::Set(param.expense_type_id),
            name: ActiveValue::Set(param.name),
            owner_id: ActiveValue::Set(param.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let type_model = entity::prelude::ExpenseType::find_by_id(entity.expense_type_id)
            .one(self.db)
            .await?;

        Ok(Expense::from_entity(entity, type_model))
    }

    /// Gets all of the owner's catalog entries with their type names.
    ///
    /// Ordered by type name, then entry name, matching how the catalog is
    /// displayed.
    ///
    /// # Returns
    /// - `Ok(Vec<Expense>)` - The owner's entries (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, owner_id: i32) -> Result<Vec<Expense>, DbErr> {
        let rows = entity::prelude::Expense::find()
            .find_also_related(entity::prelude::ExpenseType)
            .filter(entity::expense::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::expense_type::Column::Name)
            .order_by_asc(entity::expense::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(expense, type_model)| Expense::from_entity(expense, type_model))
            .collect())
    }

    /// Gets one of the owner's catalog entries by id.
    ///
    /// # Returns
    /// - `Ok(Some(Expense))` - Entry found and owned by `owner_id`
    /// - `Ok(None)` - No such entry, or it belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<Option<Expense>, DbErr> {
        let row = entity::prelude::Expense::find()
            .find_also_related(entity::prelude::ExpenseType)
            .filter(entity::expense::Column::Id.eq(id))
            .filter(entity::expense::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await?;

        Ok(row.map(|(expense, type_model)| Expense::from_entity(expense, type_model)))
    }

    /// Updates one of the owner's catalog entries.
    ///
    /// # Returns
    /// - `Ok(Some(Expense))` - The updated entry
    /// - `Ok(None)` - No such entry, or it belongs to another user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateExpenseParams) -> Result<Option<Expense>, DbErr> {
        let Some(existing) = entity::prelude::Expense::find()
            .filter(entity::expense::Column::Id.eq(param.id))
            .filter(entity::expense::Column::OwnerId.eq(param.owner_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::expense::ActiveModel = existing.into();
        active_model.expense_type_id = ActiveValue::Set(param.expense_type_id);
        active_model.name = ActiveValue::Set(param.name);

        let entity = active_model.update(self.db).await?;

        let type_model = entity::prelude::ExpenseType::find_by_id(entity.expense_type_id)
            .one(self.db)
            .await?;

        Ok(Some(Expense::from_entity(entity, type_model)))
    }

    /// Deletes one of the owner's catalog entries.
    ///
    /// Outflows recorded against the entry are removed by the CASCADE
    /// constraint.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry deleted
    /// - `Ok(false)` - No such entry, or it belongs to another user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Expense::delete_many()
            .filter(entity::expense::Column::Id.eq(id))
            .filter(entity::expense::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
