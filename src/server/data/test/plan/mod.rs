use crate::server::{data::plan::AnnualPlanRepository, model::plan::CreateAnnualPlanParams};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_year;
