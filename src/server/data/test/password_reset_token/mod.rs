use crate::server::data::password_reset_token::PasswordResetTokenRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_for_user;
mod find_valid;
