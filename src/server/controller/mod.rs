//! HTTP request handlers.
//!
//! Controllers resolve the authenticated user through [`AuthGuard`], convert
//! wire DTOs into parameter types, call a service, and convert the returned
//! domain model back into a DTO. Each controller declares its routes with
//! `#[utoipa::path]` so the OpenAPI document stays next to the handler.
//!
//! [`AuthGuard`]: crate::server::middleware::auth::AuthGuard

pub mod auth;
pub mod expense;
pub mod expense_type;
pub mod income;
pub mod income_type;
pub mod outflow;
pub mod plan;
pub mod report;
pub mod result;
pub mod user;
