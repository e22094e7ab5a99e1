use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

// ── Validation constants ────────────────────────────────────────────

/// Valid deadline status values matching the DB CHECK constraint.
pub const DEADLINE_STATUSES: &[&str] = &["pending", "completed", "overdue"];

/// Valid priority values matching the DB CHECK constraint.
pub const DEADLINE_PRIORITIES: &[&str] = &["low", "medium", "high", "critical"];

/// Check whether a status string is a valid deadline status.
pub fn is_valid_deadline_status(s: &str) -> bool {
    DEADLINE_STATUSES.contains(&s)
}

/// Check whether a priority string is valid.
pub fn is_valid_priority(s: &str) -> bool {
    DEADLINE_PRIORITIES.contains(&s)
}

// ── Priority tier ───────────────────────────────────────────────────

/// Urgency tier of a deadline relative to "today". Ordered so that
/// `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DB row struct ───────────────────────────────────────────────────

/// A procedural deadline attached to a case.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CaseDeadline {
    pub id: Uuid,
    pub firm_id: String,
    pub case_id: Uuid,
    pub deadline_type_code: String,
    pub due_date: NaiveDate,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub notified: bool,
    pub completed_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl CaseDeadline {
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }

    /// A deadline is overdue once past its due date and still pending,
    /// whether or not the stored status has been materialized to `overdue`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == "overdue" || (self.status == "pending" && self.due_date < today)
    }

    /// Completed on or before the due date.
    pub fn was_met(&self) -> bool {
        self.status == "completed"
            && self.completed_at.map_or(false, |done| done <= self.due_date)
    }
}

// ── Request / response types ────────────────────────────────────────

fn default_consider_holidays() -> bool {
    true
}

/// Request to create a deadline from a catalog type and a trigger date.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDeadlineRequest {
    pub case_id: Uuid,
    pub deadline_type_code: String,
    pub start_date: NaiveDate,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_consider_holidays")]
    pub consider_holidays: bool,
}

/// Query parameters for deadline search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeadlineSearchParams {
    pub status: Option<String>,
    pub case_id: Option<Uuid>,
    pub due_from: Option<NaiveDate>,
    pub due_to: Option<NaiveDate>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// Search response for deadlines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineSearchResponse {
    pub deadlines: Vec<CaseDeadline>,
    pub total: i64,
}
