//! Pure aggregations over case and deadline history.
//!
//! Every rate is computed from the rows handed in; denominator-zero
//! cases return 0 rather than NaN.

use chrono::NaiveDate;
use std::collections::HashMap;
use uuid::Uuid;

use shared_types::{CaseDeadline, LegalCase};

use super::compliance::evaluate_case;

/// Case counts grouped by service type.
pub fn count_by_type(cases: &[LegalCase]) -> HashMap<String, i64> {
    let mut counts = HashMap::new();
    for case in cases {
        *counts.entry(case.service_type.clone()).or_insert(0) += 1;
    }
    counts
}

/// Percentage of cases closed as won.
pub fn success_rate(cases: &[LegalCase]) -> f64 {
    if cases.is_empty() {
        return 0.0;
    }
    let won = cases.iter().filter(|c| c.is_won()).count();
    won as f64 * 100.0 / cases.len() as f64
}

/// Mean days from start to close, over cases having both dates.
pub fn average_duration_days(cases: &[LegalCase]) -> f64 {
    let durations: Vec<i64> = cases.iter().filter_map(|c| c.duration_days()).collect();
    if durations.is_empty() {
        return 0.0;
    }
    durations.iter().sum::<i64>() as f64 / durations.len() as f64
}

/// Percentage of resolved deadlines met on or before the due date.
///
/// Resolved means completed or overdue; pending rows past due count as
/// overdue whether or not their stored status was materialized.
pub fn deadline_compliance_rate(deadlines: &[CaseDeadline], today: NaiveDate) -> f64 {
    let resolved: Vec<&CaseDeadline> = deadlines
        .iter()
        .filter(|d| d.status == "completed" || d.is_overdue(today))
        .collect();
    if resolved.is_empty() {
        return 0.0;
    }
    let met = resolved.iter().filter(|d| d.was_met()).count();
    met as f64 * 100.0 / resolved.len() as f64
}

/// Percentage of cases with zero practice-rule violations.
pub fn oab_compliance_rate(
    cases: &[LegalCase],
    deadlines_by_case: &HashMap<Uuid, Vec<CaseDeadline>>,
    today: NaiveDate,
) -> f64 {
    if cases.is_empty() {
        return 0.0;
    }
    let compliant = cases
        .iter()
        .filter(|case| {
            let deadlines = deadlines_by_case
                .get(&case.id)
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            evaluate_case(case, deadlines, today).is_empty()
        })
        .count();
    compliant as f64 * 100.0 / cases.len() as f64
}

/// Group deadlines by owning case.
pub fn group_by_case(deadlines: Vec<CaseDeadline>) -> HashMap<Uuid, Vec<CaseDeadline>> {
    let mut grouped: HashMap<Uuid, Vec<CaseDeadline>> = HashMap::new();
    for deadline in deadlines {
        grouped.entry(deadline.case_id).or_default().push(deadline);
    }
    grouped
}
