//! Fixed-expense catalog services.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{expense::ExpenseRepository, expense_type::ExpenseTypeRepository},
    error::AppError,
    model::expense::{
        CreateExpenseParams, CreateExpenseTypeParams, Expense, ExpenseType, UpdateExpenseParams,
        UpdateExpenseTypeParams,
    },
};

pub struct ExpenseTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateExpenseTypeParams) -> Result<ExpenseType, AppError> {
        let repo = ExpenseTypeRepository::new(self.db);
        Ok(repo.create(param).await?)
    }

    pub async fn get_all(&self, owner_id: i32) -> Result<Vec<ExpenseType>, AppError> {
        let repo = ExpenseTypeRepository::new(self.db);
        Ok(repo.get_all(owner_id).await?)
    }

    /// # Returns
    /// - `Ok(ExpenseType)` - The owner's expense type
    /// - `Err(AppError::NotFound)` - No such type in the owner's catalog
    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<ExpenseType, AppError> {
        let repo = ExpenseTypeRepository::new(self.db);

        repo.get_by_id(id, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Expense type {} not found", id)))
    }

    pub async fn update(&self, param: UpdateExpenseTypeParams) -> Result<ExpenseType, AppError> {
        let id = param.id;
        let repo = ExpenseTypeRepository::new(self.db);

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Expense type {} not found", id)))
    }

    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        let repo = ExpenseTypeRepository::new(self.db);

        if !repo.delete(id, owner_id).await? {
            return Err(AppError::NotFound(format!(
                "Expense type {} not found",
                id
            )));
        }

        Ok(())
    }
}

pub struct ExpenseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a catalog entry under one of the owner's expense types.
    ///
    /// # Returns
    /// - `Ok(Expense)` - The created entry with its type's name attached
    /// - `Err(AppError::BadRequest)` - Type does not exist in the owner's catalog
    pub async fn create(&self, param: CreateExpenseParams) -> Result<Expense, AppError> {
        self.require_expense_type(param.expense_type_id, param.owner_id)
            .await?;

        let repo = ExpenseRepository::new(self.db);
        Ok(repo.create(param).await?)
    }

    pub async fn get_all(&self, owner_id: i32) -> Result<Vec<Expense>, AppError> {
        let repo = ExpenseRepository::new(self.db);
        Ok(repo.get_all(owner_id).await?)
    }

    pub async fn get_by_id(&self, id: i32, owner_id: i32) -> Result<Expense, AppError> {
        let repo = ExpenseRepository::new(self.db);

        repo.get_by_id(id, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Expense {} not found", id)))
    }

    /// Updates a catalog entry, which may move it to another of the owner's
    /// expense types.
    pub async fn update(&self, param: UpdateExpenseParams) -> Result<Expense, AppError> {
        self.require_expense_type(param.expense_type_id, param.owner_id)
            .await?;

        let id = param.id;
        let repo = ExpenseRepository::new(self.db);

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Expense {} not found", id)))
    }

    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        let repo = ExpenseRepository::new(self.db);

        if !repo.delete(id, owner_id).await? {
            return Err(AppError::NotFound(format!("Expense {} not found", id)));
        }

        Ok(())
    }

    /// The referenced type must exist in the owner's own catalog; another
    /// user's type id is rejected the same way as a nonexistent one.
    async fn require_expense_type(&self, expense_type_id: i32, owner_id: i32) -> Result<(), AppError> {
        let type_repo = ExpenseTypeRepository::new(self.db);

        if !type_repo.exists(expense_type_id, owner_id).await? {
            return Err(AppError::BadRequest(format!(
                "Expense type {} does not exist",
                expense_type_id
            )));
        }

        Ok(())
    }
}
