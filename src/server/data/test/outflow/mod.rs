use crate::server::{data::outflow::OutflowRepository, model::outflow::UpdateOutflowParams};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_date;
mod get_by_month;
mod update;
