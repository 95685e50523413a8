//! User domain model and account parameters.

use chrono::{DateTime, Utc};

use crate::model::auth::UserDto;

/// Role name exposed for administrator accounts.
pub const ROLE_ADMIN: &str = "admin";
/// Role name exposed for regular accounts.
pub const ROLE_USER: &str = "user";

/// An application user account.
///
/// The password hash never leaves the repository layer, so it is not part of
/// this model.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }

    /// Role name for API responses.
    pub fn role(&self) -> &'static str {
        if self.admin {
            ROLE_ADMIN
        } else {
            ROLE_USER
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        let role = self.role().to_string();
        UserDto {
            id: self.id,
            email: self.email,
            role,
        }
    }
}

/// Parameters for creating a new user account.
///
/// The password arrives here already hashed; the auth service owns hashing.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub admin: bool,
}
