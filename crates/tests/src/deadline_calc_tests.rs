//! Due-date calculator tests: dias corridos, dias úteis, holiday
//! skipping, and catalog lookup failures.

use engine::automation::calendar::is_weekend;
use engine::automation::deadline::{add_business_days, calculate_due_date, due_date_for};
use shared_types::{AppErrorKind, AutomationCatalog, CountingMode, DeadlineTypeDefinition};

use crate::common::date;

fn custom_type(days: i32, counting: CountingMode) -> DeadlineTypeDefinition {
    DeadlineTypeDefinition {
        code: "CUSTOM".to_string(),
        description: "Prazo convencionado".to_string(),
        days,
        counting,
    }
}

#[test]
fn calendar_mode_adds_days_directly() {
    // PAGAMENTO_ACORDO: 30 dias corridos
    let catalog = AutomationCatalog::builtin();
    let due = calculate_due_date(&catalog, date(2025, 1, 15), "PAGAMENTO_ACORDO", true).unwrap();
    assert_eq!(due, date(2025, 2, 14));
}

#[test]
fn calendar_mode_ignores_weekends_and_holidays() {
    // Landing on a Sunday is fine in calendar mode -- no adjustment
    let def = custom_type(6, CountingMode::Calendar);
    let due = due_date_for(&def, date(2025, 3, 3), true).unwrap();
    assert_eq!(due, date(2025, 3, 9));
    assert!(is_weekend(due));
}

#[test]
fn calendar_mode_zero_days_returns_start() {
    let def = custom_type(0, CountingMode::Calendar);
    assert_eq!(due_date_for(&def, date(2025, 7, 9), true).unwrap(), date(2025, 7, 9));
}

#[test]
fn business_mode_zero_days_returns_start() {
    let def = custom_type(0, CountingMode::Business);
    assert_eq!(due_date_for(&def, date(2025, 7, 9), true).unwrap(), date(2025, 7, 9));
}

#[test]
fn business_mode_skips_weekends() {
    // CONTESTACAO: 15 dias úteis from Monday 2025-03-03; three weekends
    // fall inside the walk
    let catalog = AutomationCatalog::builtin();
    let due = calculate_due_date(&catalog, date(2025, 3, 3), "CONTESTACAO", true).unwrap();
    assert_eq!(due, date(2025, 3, 24));
}

#[test]
fn business_mode_skips_holidays() {
    // EMBARGOS_DECLARACAO: 5 dias úteis from Wednesday 2025-04-16.
    // Tiradentes (Mon 2025-04-21) is skipped.
    let catalog = AutomationCatalog::builtin();
    let due = calculate_due_date(&catalog, date(2025, 4, 16), "EMBARGOS_DECLARACAO", true).unwrap();
    assert_eq!(due, date(2025, 4, 24));
}

#[test]
fn business_mode_counts_holiday_when_disabled() {
    // Same walk with holidays disabled lands one day earlier
    let catalog = AutomationCatalog::builtin();
    let due =
        calculate_due_date(&catalog, date(2025, 4, 16), "EMBARGOS_DECLARACAO", false).unwrap();
    assert_eq!(due, date(2025, 4, 23));
}

#[test]
fn business_mode_start_date_is_never_counted() {
    // One business day from a Friday is Monday, not Friday itself
    let due = add_business_days(date(2025, 3, 7), 1, false).unwrap();
    assert_eq!(due, date(2025, 3, 10));
}

#[test]
fn business_mode_never_lands_on_weekend() {
    for days in 1..=30 {
        for start_day in 1..=7 {
            let due = add_business_days(date(2025, 9, start_day), days, false).unwrap();
            assert!(!is_weekend(due), "{} days from 2025-09-{}", days, start_day);
        }
    }
}

#[test]
fn labor_appeal_period() {
    // RECURSO_ORDINARIO: 8 dias úteis from Monday 2025-06-02
    let catalog = AutomationCatalog::builtin();
    let due = calculate_due_date(&catalog, date(2025, 6, 2), "RECURSO_ORDINARIO", true).unwrap();
    assert_eq!(due, date(2025, 6, 12));
}

#[test]
fn unknown_deadline_type_is_not_found() {
    let catalog = AutomationCatalog::builtin();
    let err = calculate_due_date(&catalog, date(2025, 1, 1), "NOPE", true).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn negative_day_count_is_rejected() {
    let def = custom_type(-1, CountingMode::Calendar);
    let err = due_date_for(&def, date(2025, 1, 1), true).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}
