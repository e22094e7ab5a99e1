//! Practice-rule evaluation tests.

use engine::automation::compliance::evaluate_case;
use pretty_assertions::assert_eq;
use shared_types::{ComplianceResult, Severity};

use crate::common::{date, sample_case, sample_deadline};

#[test]
fn clean_case_is_compliant() {
    let case = sample_case("firm1");
    let violations = evaluate_case(&case, &[], date(2025, 6, 10));
    assert!(violations.is_empty());

    let result = ComplianceResult::from_violations(&violations);
    assert!(result.compliant);
    assert!(result.violations.is_empty());
    assert!(result.recommendations.is_empty());
}

#[test]
fn overdue_deadline_and_missing_fee_yield_two_violations() {
    let mut case = sample_case("firm1");
    case.hourly_rate = None;
    case.fixed_fee = None;
    let today = date(2025, 6, 10);
    let overdue = sample_deadline(case.id, date(2025, 6, 1), "pending");

    let violations = evaluate_case(&case, &[overdue], today);

    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].description, "Prazos processuais em atraso");
    assert_eq!(violations[0].severity, Severity::Critical);
    assert_eq!(
        violations[1].description,
        "Contrato de honorários não definido"
    );
    assert_eq!(violations[1].severity, Severity::High);
    for violation in &violations {
        assert!(!violation.recommendation.is_empty());
    }

    let result = ComplianceResult::from_violations(&violations);
    assert!(!result.compliant);
    assert_eq!(result.violations.len(), result.recommendations.len());
}

#[test]
fn deadline_due_today_is_not_overdue() {
    let case = sample_case("firm1");
    let today = date(2025, 6, 10);
    let due_today = sample_deadline(case.id, today, "pending");

    assert!(evaluate_case(&case, &[due_today], today).is_empty());
}

#[test]
fn completed_late_deadline_does_not_violate() {
    let case = sample_case("firm1");
    let today = date(2025, 6, 10);
    let mut resolved = sample_deadline(case.id, date(2025, 6, 1), "completed");
    resolved.completed_at = Some(date(2025, 6, 5));

    assert!(evaluate_case(&case, &[resolved], today).is_empty());
}

#[test]
fn materialized_overdue_status_violates() {
    let case = sample_case("firm1");
    let today = date(2025, 6, 10);
    let overdue = sample_deadline(case.id, date(2025, 6, 1), "overdue");

    let violations = evaluate_case(&case, &[overdue], today);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].description, "Prazos processuais em atraso");
}

#[test]
fn fixed_fee_alone_satisfies_fee_rule() {
    let mut case = sample_case("firm1");
    case.hourly_rate = None;
    case.fixed_fee = Some(5_000.0);

    assert!(evaluate_case(&case, &[], date(2025, 6, 10)).is_empty());
}

#[test]
fn missing_documents_are_named() {
    let mut case = sample_case("firm1");
    case.has_power_of_attorney = false;
    case.has_initial_documents = false;

    let violations = evaluate_case(&case, &[], date(2025, 6, 10));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].severity, Severity::Medium);
    assert!(violations[0].description.contains("procuração"));
    assert!(violations[0]
        .description
        .contains("documentos iniciais do processo"));
    assert!(!violations[0].description.contains("contrato de honorários"));
}

#[test]
fn all_three_rules_can_fire_together() {
    let mut case = sample_case("firm1");
    case.hourly_rate = None;
    case.fixed_fee = None;
    case.has_fee_agreement = false;
    case.has_power_of_attorney = false;
    case.has_initial_documents = false;
    let today = date(2025, 6, 10);
    let overdue = sample_deadline(case.id, date(2025, 5, 1), "pending");

    let violations = evaluate_case(&case, &[overdue], today);
    assert_eq!(violations.len(), 3);
    let severities: Vec<Severity> = violations.iter().map(|v| v.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Critical, Severity::High, Severity::Medium]
    );
}
