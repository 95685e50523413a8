//! Year and month path segment parsing.
//!
//! Bookkeeping records key their period as fixed-width strings: a four digit
//! year ("2026") and a two digit month ("08"). Routes accept the segments as
//! numbers so "8" and "08" address the same month, and these helpers produce
//! the canonical stored form.

use crate::server::error::AppError;

/// Normalizes a year path segment to the four digit storage form.
///
/// # Returns
/// - `Ok(String)` - Zero-padded year, e.g. `"2026"`
/// - `Err(AppError::BadRequest)` - Year outside 1..=9999
pub fn normalize_year(year: i32) -> Result<String, AppError> {
    if !(1..=9999).contains(&year) {
        return Err(AppError::BadRequest(format!(
            "Invalid year: {}, expected a value between 1 and 9999",
            year
        )));
    }

    Ok(format!("{:04}", year))
}

/// Normalizes a month path segment to the two digit storage form.
///
/// # Returns
/// - `Ok(String)` - Zero-padded month, e.g. `"08"`
/// - `Err(AppError::BadRequest)` - Month outside 1..=12
pub fn normalize_month(month: u32) -> Result<String, AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(format!(
            "Invalid month: {}, expected a value between 1 and 12",
            month
        )));
    }

    Ok(format!("{:02}", month))
}

/// Normalizes a year supplied in a request body to the four digit storage form.
///
/// # Returns
/// - `Ok(String)` - Zero-padded year
/// - `Err(AppError::BadRequest)` - Not a number, or outside 1..=9999
pub fn normalize_year_str(year: &str) -> Result<String, AppError> {
    let year = year
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid year: {}", year)))?;

    normalize_year(year)
}

/// Normalizes a month supplied in a request body to the two digit storage form.
///
/// # Returns
/// - `Ok(String)` - Zero-padded month
/// - `Err(AppError::BadRequest)` - Not a number, or outside 1..=12
pub fn normalize_month_str(month: &str) -> Result<String, AppError> {
    let month = month
        .parse::<u32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid month: {}", month)))?;

    normalize_month(month)
}

/// Normalizes a day path segment, checking only the calendar-independent range.
///
/// Day 31 in a 30 day month simply matches no records, so the repository layer
/// does not need a per-month upper bound here.
///
/// # Returns
/// - `Ok(u32)` - The day unchanged
/// - `Err(AppError::BadRequest)` - Day outside 1..=31
pub fn validate_day(day: u32) -> Result<u32, AppError> {
    if !(1..=31).contains(&day) {
        return Err(AppError::BadRequest(format!(
            "Invalid day: {}, expected a value between 1 and 31",
            day
        )));
    }

    Ok(day)
}
