use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::compliance::ComplianceViolation;
use crate::deadline::Priority;

/// Lookback window on case-creation date for analytics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "30days")]
    ThirtyDays,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
}

impl Timeframe {
    pub fn days(&self) -> i64 {
        match self {
            Timeframe::ThirtyDays => 30,
            Timeframe::SixMonths => 180,
            Timeframe::OneYear => 365,
        }
    }
}

/// Aggregated case metrics for a timeframe. Computed at query time from
/// the case and deadline history, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseAnalyticsSnapshot {
    pub total_cases: i64,
    pub cases_by_type: HashMap<String, i64>,
    /// Percentage of windowed cases closed as won.
    pub success_rate: f64,
    /// Mean days from start to close, over closed cases.
    pub average_duration_days: f64,
    /// Percentage of resolved deadlines met on or before the due date.
    pub deadline_compliance_rate: f64,
    /// Percentage of windowed cases with zero practice-rule violations.
    pub oab_compliance_rate: f64,
}

/// A pending deadline due within the alert horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineAlert {
    pub deadline_id: Uuid,
    pub case_id: Uuid,
    pub description: String,
    pub due_date: NaiveDate,
    pub days_remaining: i64,
    pub priority: Priority,
}

/// Near-term deadline alerts plus open-case rule violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertsResult {
    pub deadline_alerts: Vec<DeadlineAlert>,
    pub oab_violations: Vec<ComplianceViolation>,
}
