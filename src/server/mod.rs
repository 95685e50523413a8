//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the kakeibo
//! application: API endpoints, business logic, data access, and infrastructure.
//! The backend uses Axum as the web framework and SeaORM for database
//! operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logging`) - tracing subscriber setup
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Initialization of database and session store
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives an HTTP request and routes to the controller
//! 2. **Controller** resolves the authenticated user, converts DTOs to params, calls the service
//! 3. **Service** executes business logic (derived fields, password hashing, aggregation)
//! 4. **Data** queries the database scoped to the owner, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
