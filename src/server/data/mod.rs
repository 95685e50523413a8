//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All record-level repositories scope their queries by owner id; a record that belongs to
//! another user behaves exactly like a record that does not exist.

pub mod expense;
pub mod expense_type;
pub mod income;
pub mod income_type;
pub mod outflow;
pub mod password_reset_token;
pub mod plan;
pub mod report;
pub mod result;
pub mod user;

#[cfg(test)]
mod test;
