// File: ./src/months.rs
//! Calendar month arithmetic on plain dates.
//!
//! All stage intervals are expressed in whole months since birth, so the
//! whole crate funnels its date math through these helpers.

use chrono::{Datelike, Days, NaiveDate};
use std::cmp::Ordering;

pub const MONTHS_IN_YEAR: i64 = 12;

/// Number of full calendar months from `earlier` to `later`.
///
/// Counting rules:
/// - a month is full once the day-of-month of `later` reaches that of `earlier`;
/// - a `later` date on 28 February or after stands for the 30th, so the
///   February month-end always completes the month;
/// - across a single calendar month, a `later` date on the last day of its
///   month is a full month (31 March -> 30 April is one month).
///
/// The result is negative when `later` precedes `earlier`.
pub fn months_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    let sign: i64 = match later.cmp(&earlier) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => return 0,
    };

    let difference = calendar_months(later, earlier).abs();
    if difference < 1 {
        return 0;
    }

    let mut shifted = later;
    if later.month() == 2 && later.day() > 27 {
        shifted = with_day_overflowing(shifted, 30);
    }
    shifted = with_month_overflowing(shifted, shifted.month0() as i64 - sign * difference);

    let short = if sign > 0 {
        Ordering::Less
    } else {
        Ordering::Greater
    };
    let mut last_month_not_full = shifted.cmp(&earlier) == short;
    if sign > 0 && difference == 1 && is_last_day_of_month(later) {
        last_month_not_full = false;
    }

    sign * (difference - last_month_not_full as i64)
}

/// Difference of the (year, month) pairs, ignoring days.
fn calendar_months(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later.year() as i64 - earlier.year() as i64) * MONTHS_IN_YEAR
        + (later.month() as i64 - earlier.month() as i64)
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

/// Day `day` of the date's month, rolling into the next month past its end.
fn with_day_overflowing(date: NaiveDate, day: u32) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_add_days(Days::new(day.saturating_sub(1) as u64)))
        .unwrap_or(date)
}

/// Same day in month `month0` (0-based, may leave 0..12), rolling the day
/// into the following month when it does not exist.
fn with_month_overflowing(date: NaiveDate, month0: i64) -> NaiveDate {
    let total = date.year() as i64 * MONTHS_IN_YEAR + month0;
    let year = total.div_euclid(MONTHS_IN_YEAR) as i32;
    let month = total.rem_euclid(MONTHS_IN_YEAR) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(date.day() as u64 - 1)))
        .unwrap_or(date)
}

/// Number of full years from `earlier` to `later` (an age).
pub fn years_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    months_between(later, earlier) / MONTHS_IN_YEAR
}

/// Same month and day, `years` later. 29 February clamps to the 28th.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

/// Splits a month count into (years, months) for display.
pub fn split_years(months: i64) -> (i64, i64) {
    (months / MONTHS_IN_YEAR, months % MONTHS_IN_YEAR)
}
