use crate::server::{
    data::result::MonthlyResultRepository,
    model::result::{CreateMonthlyResultParams, UpdateMonthlyResultParams},
};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update;
