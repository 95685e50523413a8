use crate::server::data::report::ReportRepository;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod daily_total;
mod monthly_total;
mod owned_money;
mod variable_expenses;
