//! OAB practice-rule evaluation.
//!
//! Three rules, evaluated independently and in order, each contributing
//! at most one violation with a paired recommendation. Compliance is the
//! absence of violations.

use chrono::NaiveDate;
use shared_types::{CaseDeadline, ComplianceViolation, LegalCase, Severity};

/// Evaluate the practice rules against one case and its deadlines.
pub fn evaluate_case(
    case: &LegalCase,
    deadlines: &[CaseDeadline],
    today: NaiveDate,
) -> Vec<ComplianceViolation> {
    let mut violations = Vec::new();

    // Rule 1: unresolved deadlines past their due date.
    if deadlines.iter().any(|d| d.is_overdue(today)) {
        violations.push(ComplianceViolation {
            case_id: case.id,
            description: "Prazos processuais em atraso".to_string(),
            recommendation: "Regularizar imediatamente os prazos vencidos".to_string(),
            severity: Severity::Critical,
        });
    }

    // Rule 2: no fee arrangement agreed.
    if !case.has_fee_terms() {
        violations.push(ComplianceViolation {
            case_id: case.id,
            description: "Contrato de honorários não definido".to_string(),
            recommendation: "Formalizar contrato de honorários por escrito".to_string(),
            severity: Severity::High,
        });
    }

    // Rule 3: required document categories missing.
    let mut missing = Vec::new();
    if !case.has_fee_agreement {
        missing.push("contrato de honorários");
    }
    if !case.has_power_of_attorney {
        missing.push("procuração");
    }
    if !case.has_initial_documents {
        missing.push("documentos iniciais do processo");
    }
    if !missing.is_empty() {
        violations.push(ComplianceViolation {
            case_id: case.id,
            description: format!("Documentação obrigatória ausente: {}", missing.join(", ")),
            recommendation: "Providenciar os documentos obrigatórios pendentes".to_string(),
            severity: Severity::Medium,
        });
    }

    violations
}
