use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Valid phase status values matching the DB CHECK constraint.
pub const PHASE_STATUSES: &[&str] = &["pending", "active", "completed", "skipped"];

/// Check whether a status string is a valid phase status.
pub fn is_valid_phase_status(s: &str) -> bool {
    PHASE_STATUSES.contains(&s)
}

/// Lifecycle state of a workflow phase.
///
/// Transitions: `Pending -> Active -> Completed`, plus the terminal
/// `Pending -> Skipped` edge. Everything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    Pending,
    Active,
    Completed,
    Skipped,
}

impl PhaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseStatus::Pending => "pending",
            PhaseStatus::Active => "active",
            PhaseStatus::Completed => "completed",
            PhaseStatus::Skipped => "skipped",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PhaseStatus::Pending),
            "active" => Some(PhaseStatus::Active),
            "completed" => Some(PhaseStatus::Completed),
            "skipped" => Some(PhaseStatus::Skipped),
            _ => None,
        }
    }

    /// Whether the transition `self -> to` is a legal edge of the phase
    /// state machine.
    pub fn can_transition(self, to: PhaseStatus) -> bool {
        matches!(
            (self, to),
            (PhaseStatus::Pending, PhaseStatus::Active)
                | (PhaseStatus::Active, PhaseStatus::Completed)
                | (PhaseStatus::Pending, PhaseStatus::Skipped)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PhaseStatus::Completed | PhaseStatus::Skipped)
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a case's procedural timeline.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkflowPhase {
    pub id: Uuid,
    pub firm_id: String,
    pub case_id: Uuid,
    pub procedure_type_code: String,
    pub phase_name: String,
    /// 1-based position within the workflow instantiation.
    pub order_index: i32,
    pub status: String,
    pub estimated_start: NaiveDate,
    pub actual_start: Option<NaiveDate>,
    pub actual_end: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
