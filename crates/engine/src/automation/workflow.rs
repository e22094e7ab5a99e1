//! Workflow planning: lay out the phases of a procedure type as dated,
//! ordered steps ready for persistence.
//!
//! Transition legality lives on [`PhaseStatus::can_transition`]; the
//! repository enforces the same edges with guarded conditional UPDATEs.

use chrono::{Duration, NaiveDate};
use shared_types::{PhaseStatus, ProcedureTypeDefinition};

/// A phase computed for a new workflow instantiation, before persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct PhasePlan {
    pub phase_name: String,
    /// 1-based position within the workflow.
    pub order_index: i32,
    pub status: PhaseStatus,
    pub estimated_start: NaiveDate,
}

/// Lay out the phases for a procedure type starting today.
///
/// The estimated duration is split evenly across phases (integer
/// division); phase `i` starts `i * per_phase_days` after today. The
/// first phase begins active, the rest pending.
pub fn plan_phases(procedure: &ProcedureTypeDefinition, today: NaiveDate) -> Vec<PhasePlan> {
    let count = procedure.phases.len() as i32;
    if count == 0 {
        return Vec::new();
    }
    let per_phase_days = procedure.estimated_duration_days / count;

    procedure
        .phases
        .iter()
        .enumerate()
        .map(|(i, name)| PhasePlan {
            phase_name: name.clone(),
            order_index: i as i32 + 1,
            status: if i == 0 {
                PhaseStatus::Active
            } else {
                PhaseStatus::Pending
            },
            estimated_start: today + Duration::days(i as i64 * per_phase_days as i64),
        })
        .collect()
}
