use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Returned by a successful login. The session cookie set alongside this body
/// carries the authenticated identity; the fields here mirror it for clients.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginResponseDto {
    pub user_id: i32,
    pub email: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ConfirmResetPasswordDto {
    pub email: String,
    pub token: String,
    pub new_password: String,
}
