//! Business logic layer.
//!
//! Services sit between controllers and repositories. They own the rules the
//! data layer does not enforce: password hashing and verification, cross-table
//! ownership checks before inserts, period normalization, and derived-column
//! computation for monthly results.

pub mod auth;
pub mod expense;
pub mod income;
pub mod outflow;
pub mod plan;
pub mod report;
pub mod result;
pub mod user;
