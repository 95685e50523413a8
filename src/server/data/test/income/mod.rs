use crate::server::{
    data::income::IncomeRepository,
    model::income::{CreateIncomeParams, UpdateIncomeParams},
};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_month;
mod update;
