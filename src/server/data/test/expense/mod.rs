use crate::server::{
    data::expense::ExpenseRepository,
    model::expense::{CreateExpenseParams, UpdateExpenseParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
