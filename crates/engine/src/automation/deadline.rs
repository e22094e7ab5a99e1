//! Deadline computation: due-date calculator, urgency classifier, and
//! reminder scheduler.
//!
//! Calendar-mode periods (dias corridos) add the day count directly.
//! Business-mode periods (dias úteis) walk forward one calendar day at a
//! time, counting only weekdays that are not national holidays; the
//! trigger date itself is never counted.

use chrono::{Duration, NaiveDate};
use shared_types::{
    AppError, AutomationCatalog, CountingMode, DeadlineTypeDefinition, Priority,
    REMINDER_OFFSETS,
};

use super::calendar::is_business_day;

/// Compute the due date for a catalog deadline type.
pub fn calculate_due_date(
    catalog: &AutomationCatalog,
    start_date: NaiveDate,
    deadline_type_code: &str,
    consider_holidays: bool,
) -> Result<NaiveDate, AppError> {
    let definition = catalog.deadline_type(deadline_type_code).ok_or_else(|| {
        AppError::not_found(format!("Unknown deadline type: {deadline_type_code}"))
    })?;
    due_date_for(definition, start_date, consider_holidays)
}

/// Compute the due date for an already-resolved deadline-type definition.
pub fn due_date_for(
    definition: &DeadlineTypeDefinition,
    start_date: NaiveDate,
    consider_holidays: bool,
) -> Result<NaiveDate, AppError> {
    if definition.days < 0 {
        return Err(AppError::bad_request(format!(
            "Deadline type {} has a negative day count",
            definition.code
        )));
    }

    match definition.counting {
        CountingMode::Calendar => start_date
            .checked_add_signed(Duration::days(definition.days as i64))
            .ok_or_else(|| AppError::bad_request("Date overflow during calendar day count")),
        CountingMode::Business => {
            add_business_days(start_date, definition.days, consider_holidays)
        }
    }
}

/// Advance `days` business days from `start`. The start date is never
/// counted; `days == 0` returns `start` unchanged.
pub fn add_business_days(
    start: NaiveDate,
    days: i32,
    consider_holidays: bool,
) -> Result<NaiveDate, AppError> {
    let mut current = start;
    let mut counted = 0;
    while counted < days {
        current = current
            .succ_opt()
            .ok_or_else(|| AppError::bad_request("Date overflow during business day count"))?;
        if is_business_day(current, consider_holidays) {
            counted += 1;
        }
    }
    Ok(current)
}

/// Classify a deadline's urgency relative to today.
///
/// Overdue and due-today deadlines are critical; the tiers widen to 3
/// and 7 days out, then everything beyond is low.
pub fn classify_priority(due_date: NaiveDate, today: NaiveDate) -> Priority {
    let days_remaining = (due_date - today).num_days();
    if days_remaining <= 1 {
        Priority::Critical
    } else if days_remaining <= 3 {
        Priority::High
    } else if days_remaining <= 7 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Reminder dates for a due date, one per offset in [`REMINDER_OFFSETS`].
///
/// Past-dated reminders are intentionally kept: whether to deliver them
/// is the external notifier's decision, not the scheduler's.
pub fn reminder_schedule(due_date: NaiveDate) -> Vec<(i32, NaiveDate)> {
    REMINDER_OFFSETS
        .iter()
        .map(|&offset| (offset, due_date - Duration::days(offset as i64)))
        .collect()
}
