//! Domain models and operation parameters.
//!
//! These types sit between the wire DTOs in `crate::model` and the database
//! entities in the `entity` crate. Repositories convert entities into domain
//! models at the infrastructure boundary; controllers convert DTOs into
//! parameter types, attaching the authenticated owner id, before calling into
//! services.

pub mod expense;
pub mod income;
pub mod outflow;
pub mod plan;
pub mod report;
pub mod result;
pub mod user;
