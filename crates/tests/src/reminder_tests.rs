//! Reminder scheduler tests.

use engine::automation::deadline::reminder_schedule;
use shared_types::REMINDER_OFFSETS;

use crate::common::date;

#[test]
fn exactly_four_reminders() {
    let reminders = reminder_schedule(date(2025, 8, 20));
    assert_eq!(reminders.len(), 4);
}

#[test]
fn offsets_follow_the_fixed_set() {
    let reminders = reminder_schedule(date(2025, 8, 20));
    let offsets: Vec<i32> = reminders.iter().map(|(offset, _)| *offset).collect();
    assert_eq!(offsets, REMINDER_OFFSETS.to_vec());
}

#[test]
fn dates_are_offset_days_before_due() {
    let reminders = reminder_schedule(date(2025, 8, 20));
    assert_eq!(reminders[0], (7, date(2025, 8, 13)));
    assert_eq!(reminders[1], (3, date(2025, 8, 17)));
    assert_eq!(reminders[2], (1, date(2025, 8, 19)));
    assert_eq!(reminders[3], (0, date(2025, 8, 20)));
}

#[test]
fn zero_offset_reminder_lands_on_due_date() {
    let due = date(2025, 12, 1);
    let reminders = reminder_schedule(due);
    assert_eq!(reminders.last().unwrap().1, due);
}

#[test]
fn reminders_cross_month_boundaries() {
    let reminders = reminder_schedule(date(2025, 3, 2));
    assert_eq!(reminders[0], (7, date(2025, 2, 23)));
}

#[test]
fn past_due_dates_still_produce_full_schedule() {
    // Dates already in the past are not suppressed; filtering is the
    // external notifier's decision.
    let reminders = reminder_schedule(date(2020, 1, 10));
    assert_eq!(reminders.len(), 4);
    assert_eq!(reminders[0].1, date(2020, 1, 3));
}
