use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Severity of a compliance violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violated practice rule for a case. Recomputed on every evaluation,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceViolation {
    pub case_id: Uuid,
    pub description: String,
    pub recommendation: String,
    pub severity: Severity,
}

/// Result of evaluating the practice rules against one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub compliant: bool,
    pub violations: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ComplianceResult {
    pub fn from_violations(violations: &[ComplianceViolation]) -> Self {
        Self {
            compliant: violations.is_empty(),
            violations: violations.iter().map(|v| v.description.clone()).collect(),
            recommendations: violations
                .iter()
                .map(|v| v.recommendation.clone())
                .collect(),
        }
    }
}
