use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ── Validation constants ────────────────────────────────────────────

/// Valid case status values matching the DB CHECK constraint.
pub const CASE_STATUSES: &[&str] = &[
    "open", "suspended", "closed_won", "closed_lost", "archived",
];

/// Valid service type values matching the DB CHECK constraint.
pub const SERVICE_TYPES: &[&str] = &[
    "civil", "labor", "corporate", "family", "consultative",
];

/// Check whether a status string is a valid case status.
pub fn is_valid_case_status(s: &str) -> bool {
    CASE_STATUSES.contains(&s)
}

/// Check whether a service type string is valid.
pub fn is_valid_service_type(s: &str) -> bool {
    SERVICE_TYPES.contains(&s)
}

// ── DB row struct ───────────────────────────────────────────────────

/// A client engagement record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LegalCase {
    pub id: Uuid,
    pub firm_id: String,
    pub case_number: String,
    pub title: String,
    pub client_name: String,
    pub service_type: String,
    pub status: String,
    pub hourly_rate: Option<f64>,
    pub fixed_fee: Option<f64>,
    pub has_fee_agreement: bool,
    pub has_power_of_attorney: bool,
    pub has_initial_documents: bool,
    pub start_date: NaiveDate,
    pub close_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LegalCase {
    pub fn is_open(&self) -> bool {
        self.status == "open"
    }

    pub fn is_won(&self) -> bool {
        self.status == "closed_won"
    }

    /// Whether any fee arrangement (hourly or fixed) has been set.
    pub fn has_fee_terms(&self) -> bool {
        self.hourly_rate.is_some() || self.fixed_fee.is_some()
    }

    /// Case duration in days, when both start and close dates are known.
    pub fn duration_days(&self) -> Option<i64> {
        self.close_date
            .map(|close| (close - self.start_date).num_days())
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Request to open a new case.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCaseRequest {
    #[validate(length(min = 1, max = 40, message = "case number must be 1-40 characters"))]
    pub case_number: String,
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 200, message = "client name must be 1-200 characters"))]
    pub client_name: String,
    pub service_type: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub fixed_fee: Option<f64>,
    #[serde(default)]
    pub has_fee_agreement: bool,
    #[serde(default)]
    pub has_power_of_attorney: bool,
    #[serde(default)]
    pub has_initial_documents: bool,
}
