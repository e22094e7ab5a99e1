//! National holiday and business-day predicate tests.

use engine::automation::calendar::{is_business_day, is_national_holiday, is_weekend};

use crate::common::date;

#[test]
fn new_year_is_holiday() {
    assert!(is_national_holiday(date(2024, 1, 1)));
}

#[test]
fn independence_day_is_holiday() {
    assert!(is_national_holiday(date(2024, 9, 7)));
}

#[test]
fn christmas_is_holiday() {
    assert!(is_national_holiday(date(2024, 12, 25)));
}

#[test]
fn january_second_is_not_holiday() {
    assert!(!is_national_holiday(date(2024, 1, 2)));
}

#[test]
fn holidays_are_year_independent() {
    // Tiradentes in three different years
    assert!(is_national_holiday(date(2024, 4, 21)));
    assert!(is_national_holiday(date(2025, 4, 21)));
    assert!(is_national_holiday(date(2030, 4, 21)));
}

#[test]
fn all_eight_fixed_holidays() {
    let holidays = [
        (1, 1),
        (4, 21),
        (5, 1),
        (9, 7),
        (10, 12),
        (11, 2),
        (11, 15),
        (12, 25),
    ];
    for (month, day) in holidays {
        assert!(
            is_national_holiday(date(2025, month, day)),
            "{}-{} should be a holiday",
            month,
            day
        );
    }
}

#[test]
fn saturday_is_weekend() {
    assert!(is_weekend(date(2025, 10, 4)));
}

#[test]
fn sunday_is_weekend() {
    assert!(is_weekend(date(2025, 10, 5)));
}

#[test]
fn monday_is_not_weekend() {
    assert!(!is_weekend(date(2025, 10, 6)));
}

#[test]
fn regular_weekday_is_business_day() {
    assert!(is_business_day(date(2025, 10, 6), true));
}

#[test]
fn weekend_is_never_business_day() {
    assert!(!is_business_day(date(2025, 10, 4), true));
    assert!(!is_business_day(date(2025, 10, 4), false));
}

#[test]
fn holiday_counts_as_business_day_when_ignored() {
    // Dia do Trabalho 2025 falls on a Thursday
    assert!(!is_business_day(date(2025, 5, 1), true));
    assert!(is_business_day(date(2025, 5, 1), false));
}
