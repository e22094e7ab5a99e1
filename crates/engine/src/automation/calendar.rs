//! Brazilian court calendar predicates.
//!
//! Covers the eight fixed national holidays, year-independent. Movable
//! holidays (Carnaval, Sexta-feira Santa, Corpus Christi) are not
//! modeled; a per-year table can replace `NATIONAL_HOLIDAYS` behind the
//! same predicate without touching the deadline calculator.

use chrono::{Datelike, NaiveDate, Weekday};

/// Fixed national holidays as (month, day).
const NATIONAL_HOLIDAYS: [(u32, u32); 8] = [
    (1, 1),   // Confraternização Universal
    (4, 21),  // Tiradentes
    (5, 1),   // Dia do Trabalho
    (9, 7),   // Independência do Brasil
    (10, 12), // Nossa Senhora Aparecida
    (11, 2),  // Finados
    (11, 15), // Proclamação da República
    (12, 25), // Natal
];

/// Check if a date is a fixed national holiday.
pub fn is_national_holiday(date: NaiveDate) -> bool {
    NATIONAL_HOLIDAYS.contains(&(date.month(), date.day()))
}

/// Check if a date is a weekend.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Check if a date counts as a business day (dia útil).
pub fn is_business_day(date: NaiveDate, consider_holidays: bool) -> bool {
    !is_weekend(date) && !(consider_holidays && is_national_holiday(date))
}
