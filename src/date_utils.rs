// 📅 Date Utilities - leap years and month tables
//
// NOTE: days_in_month is a fixed table. February is always 28, it is not
// composed with is_leap_year.

use chrono::Month;

use crate::error::{DomainError, DomainResult};

/// Gregorian rule: divisible by 4, except centuries not divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    if year % 4 != 0 {
        false
    } else if year % 100 != 0 {
        true
    } else {
        year % 400 == 0
    }
}

/// Full English month name for 1..=12
pub fn month_name(month: u32) -> DomainResult<&'static str> {
    to_month(month).map(|m| m.name())
}

/// Days in a month, February fixed at 28
pub fn days_in_month(month: u32) -> DomainResult<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => Ok(28),
        _ => Err(DomainError::InvalidMonth(month)),
    }
}

fn to_month(month: u32) -> DomainResult<Month> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(DomainError::InvalidMonth(month))
}
