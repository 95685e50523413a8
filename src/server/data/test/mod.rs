mod expense;
mod expense_type;
mod income;
mod outflow;
mod password_reset_token;
mod plan;
mod report;
mod result;
mod user;
