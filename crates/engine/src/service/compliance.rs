use shared_types::{AppError, ComplianceResult};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::automation::compliance::evaluate_case;
use crate::repo;
use crate::service::today;

/// Evaluate the practice rules against one case. Violations are
/// recomputed from current state on every call, never stored.
#[tracing::instrument(skip(pool))]
pub async fn evaluate_compliance(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
) -> Result<ComplianceResult, AppError> {
    let case = repo::case::find_by_id(pool, firm_id, case_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", case_id)))?;

    let deadlines = repo::deadline::list_by_case(pool, firm_id, case_id).await?;
    let violations = evaluate_case(&case, &deadlines, today());

    Ok(ComplianceResult::from_violations(&violations))
}
