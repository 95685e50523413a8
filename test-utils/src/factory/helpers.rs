//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an outflow with its full dependency chain.
///
/// Creates, in order: a user, an expense type owned by that user, an expense
/// of that type, and an outflow recorded against the expense. All entities
/// use default values; use the individual factories for customization.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, expense_type, expense, outflow))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_outflow_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::expense_type::Model,
        entity::expense::Model,
        entity::outflow::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let expense_type = crate::factory::expense_type::create_expense_type(db, user.id).await?;
    let expense = crate::factory::expense::create_expense(db, user.id, expense_type.id).await?;
    let outflow = crate::factory::outflow::create_outflow(db, user.id, expense.id).await?;

    Ok((user, expense_type, expense, outflow))
}

/// Creates an expense (and its type) for a specific user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - Owner of the expense catalog entries
///
/// # Returns
/// - `Ok((expense_type, expense))` - Created catalog entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_expense_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<(entity::expense_type::Model, entity::expense::Model), DbErr> {
    let expense_type = crate::factory::expense_type::create_expense_type(db, user.id).await?;
    let expense = crate::factory::expense::create_expense(db, user.id, expense_type.id).await?;

    Ok((expense_type, expense))
}

/// Creates an income (and its type) for a specific user.
pub async fn create_income_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<(entity::income_type::Model, entity::income::Model), DbErr> {
    let income_type = crate::factory::income_type::create_income_type(db, user.id).await?;
    let income = crate::factory::income::create_income(db, user.id, income_type.id).await?;

    Ok((income_type, income))
}
