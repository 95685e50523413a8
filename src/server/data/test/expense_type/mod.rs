use crate::server::{
    data::expense_type::ExpenseTypeRepository,
    model::expense::{CreateExpenseTypeParams, UpdateExpenseTypeParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
