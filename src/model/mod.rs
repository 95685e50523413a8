//! Wire DTOs shared by the HTTP surface.
//!
//! These types define the JSON request and response bodies. Conversion to and
//! from domain models happens at the controller boundary.

pub mod api;
pub mod auth;
pub mod expense;
pub mod income;
pub mod outflow;
pub mod plan;
pub mod report;
pub mod result;
