use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod email_exists;
mod find_by_id;
mod find_entity_by_email;
mod get_all;
mod update_password;
