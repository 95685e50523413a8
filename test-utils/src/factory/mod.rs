//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign keys explicitly: callers pass the ids
//! of already-created parent rows.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let expense_type = factory::create_expense_type(&db, user.id).await?;
//!     let expense = factory::create_expense(&db, user.id, expense_type.id).await?;
//!
//!     // Or create a full chain in one call
//!     let (user, expense_type, expense, outflow) =
//!         factory::helpers::create_outflow_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod annual_plan;
pub mod expense;
pub mod expense_type;
pub mod helpers;
pub mod income;
pub mod income_type;
pub mod monthly_result;
pub mod outflow;
pub mod user;

pub use annual_plan::create_plan;
pub use expense::create_expense;
pub use expense_type::create_expense_type;
pub use income::create_income;
pub use income_type::create_income_type;
pub use monthly_result::create_result;
pub use outflow::create_outflow;
pub use user::{create_user, create_user_with_email};
