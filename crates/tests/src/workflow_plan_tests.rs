//! Workflow planning and phase state-machine tests.

use engine::automation::workflow::plan_phases;
use pretty_assertions::assert_eq;
use shared_types::{AutomationCatalog, PhaseStatus, ProcedureTypeDefinition};

use crate::common::date;

#[test]
fn labor_ordinary_plans_four_phases_in_order() {
    let catalog = AutomationCatalog::builtin();
    let procedure = catalog.procedure_type("LABOR_ORDINARY").unwrap();
    let plans = plan_phases(procedure, date(2025, 5, 5));

    assert_eq!(plans.len(), 4);
    let indexes: Vec<i32> = plans.iter().map(|p| p.order_index).collect();
    assert_eq!(indexes, vec![1, 2, 3, 4]);
    let names: Vec<&str> = plans.iter().map(|p| p.phase_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Petição Inicial",
            "Audiência Inaugural",
            "Instrução",
            "Sentença"
        ]
    );
}

#[test]
fn first_phase_starts_active_rest_pending() {
    let catalog = AutomationCatalog::builtin();
    let procedure = catalog.procedure_type("LABOR_ORDINARY").unwrap();
    let plans = plan_phases(procedure, date(2025, 5, 5));

    assert_eq!(plans[0].status, PhaseStatus::Active);
    for plan in &plans[1..] {
        assert_eq!(plan.status, PhaseStatus::Pending);
    }
}

#[test]
fn estimated_starts_are_evenly_spaced_and_non_decreasing() {
    // 360 days over 4 phases: 90 days apart
    let catalog = AutomationCatalog::builtin();
    let procedure = catalog.procedure_type("LABOR_ORDINARY").unwrap();
    let today = date(2025, 5, 5);
    let plans = plan_phases(procedure, today);

    assert_eq!(plans[0].estimated_start, today);
    for pair in plans.windows(2) {
        assert_eq!((pair[1].estimated_start - pair[0].estimated_start).num_days(), 90);
    }
}

#[test]
fn duration_split_uses_integer_division() {
    // 720 days over 7 phases: floor(720 / 7) = 102
    let catalog = AutomationCatalog::builtin();
    let procedure = catalog.procedure_type("CIVIL_ORDINARY").unwrap();
    let plans = plan_phases(procedure, date(2025, 1, 1));

    assert_eq!(plans.len(), 7);
    for pair in plans.windows(2) {
        assert_eq!((pair[1].estimated_start - pair[0].estimated_start).num_days(), 102);
    }
}

#[test]
fn empty_phase_list_plans_nothing() {
    let procedure = ProcedureTypeDefinition {
        code: "EMPTY".to_string(),
        name: "Sem Fases".to_string(),
        classification: "civil".to_string(),
        estimated_duration_days: 100,
        phases: Vec::new(),
    };
    assert!(plan_phases(&procedure, date(2025, 1, 1)).is_empty());
}

// ── Phase state machine ─────────────────────────────────────────────

#[test]
fn legal_transitions() {
    assert!(PhaseStatus::Pending.can_transition(PhaseStatus::Active));
    assert!(PhaseStatus::Active.can_transition(PhaseStatus::Completed));
    assert!(PhaseStatus::Pending.can_transition(PhaseStatus::Skipped));
}

#[test]
fn illegal_transitions() {
    assert!(!PhaseStatus::Pending.can_transition(PhaseStatus::Completed));
    assert!(!PhaseStatus::Active.can_transition(PhaseStatus::Skipped));
    assert!(!PhaseStatus::Active.can_transition(PhaseStatus::Pending));
    assert!(!PhaseStatus::Completed.can_transition(PhaseStatus::Active));
    assert!(!PhaseStatus::Skipped.can_transition(PhaseStatus::Active));
}

#[test]
fn completed_and_skipped_are_terminal() {
    assert!(PhaseStatus::Completed.is_terminal());
    assert!(PhaseStatus::Skipped.is_terminal());
    assert!(!PhaseStatus::Pending.is_terminal());
    assert!(!PhaseStatus::Active.is_terminal());
}

#[test]
fn status_parses_from_stored_strings() {
    for status in [
        PhaseStatus::Pending,
        PhaseStatus::Active,
        PhaseStatus::Completed,
        PhaseStatus::Skipped,
    ] {
        assert_eq!(PhaseStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(PhaseStatus::parse("archived"), None);
}
