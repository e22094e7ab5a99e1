//! Urgency classifier boundary tests.

use engine::automation::deadline::classify_priority;
use shared_types::Priority;

use crate::common::date;

fn classify(days_remaining: i64) -> Priority {
    let today = date(2025, 6, 10);
    classify_priority(today + chrono::Duration::days(days_remaining), today)
}

#[test]
fn overdue_is_critical() {
    assert_eq!(classify(-5), Priority::Critical);
}

#[test]
fn due_today_is_critical() {
    assert_eq!(classify(0), Priority::Critical);
}

#[test]
fn one_day_out_is_critical() {
    assert_eq!(classify(1), Priority::Critical);
}

#[test]
fn two_and_three_days_out_are_high() {
    assert_eq!(classify(2), Priority::High);
    assert_eq!(classify(3), Priority::High);
}

#[test]
fn four_through_seven_days_out_are_medium() {
    for days in 4..=7 {
        assert_eq!(classify(days), Priority::Medium, "{} days out", days);
    }
}

#[test]
fn eight_days_and_beyond_are_low() {
    assert_eq!(classify(8), Priority::Low);
    assert_eq!(classify(100), Priority::Low);
}

#[test]
fn tiers_are_totally_ordered() {
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);
    assert!(Priority::High < Priority::Critical);
}

#[test]
fn priority_renders_to_status_vocabulary() {
    assert_eq!(Priority::Critical.as_str(), "critical");
    assert_eq!(Priority::parse("medium"), Some(Priority::Medium));
    assert_eq!(Priority::parse("urgent"), None);
}
