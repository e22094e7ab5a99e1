use chrono::NaiveDate;
use shared_types::{AppError, WorkflowPhase};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::automation::workflow::PhasePlan;
use crate::error_convert::SqlxErrorExt;

/// Insert a planned workflow as one transactional batch. Returns the
/// created rows in order-index order.
pub async fn insert_batch(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
    procedure_type_code: &str,
    plans: &[PhasePlan],
) -> Result<Vec<WorkflowPhase>, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let mut phases = Vec::with_capacity(plans.len());
    for plan in plans {
        let phase = sqlx::query_as::<_, WorkflowPhase>(
            r#"
            INSERT INTO workflow_phases
                (firm_id, case_id, procedure_type_code, phase_name,
                 order_index, status, estimated_start, actual_start)
            VALUES ($1, $2, $3, $4, $5, $6, $7,
                    CASE WHEN $6 = 'active' THEN $7 ELSE NULL END)
            RETURNING id, firm_id, case_id, procedure_type_code, phase_name,
                      order_index, status, estimated_start, actual_start,
                      actual_end, created_at, updated_at
            "#,
        )
        .bind(firm_id)
        .bind(case_id)
        .bind(procedure_type_code)
        .bind(&plan.phase_name)
        .bind(plan.order_index)
        .bind(plan.status.as_str())
        .bind(plan.estimated_start)
        .fetch_one(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
        phases.push(phase);
    }

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(phases)
}

/// Whether a workflow has already been instantiated for the case and
/// procedure pair.
pub async fn exists(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
    procedure_type_code: &str,
) -> Result<bool, AppError> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM workflow_phases
        WHERE firm_id = $1 AND case_id = $2 AND procedure_type_code = $3
        "#,
    )
    .bind(firm_id)
    .bind(case_id)
    .bind(procedure_type_code)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(count > 0)
}

/// Find a phase by ID within a specific firm and case.
pub async fn find_by_id(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
    phase_id: Uuid,
) -> Result<Option<WorkflowPhase>, AppError> {
    let row = sqlx::query_as::<_, WorkflowPhase>(
        r#"
        SELECT id, firm_id, case_id, procedure_type_code, phase_name,
               order_index, status, estimated_start, actual_start,
               actual_end, created_at, updated_at
        FROM workflow_phases
        WHERE id = $1 AND firm_id = $2 AND case_id = $3
        "#,
    )
    .bind(phase_id)
    .bind(firm_id)
    .bind(case_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// List a case's phases for one procedure, in order-index order.
pub async fn list_by_case(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
    procedure_type_code: &str,
) -> Result<Vec<WorkflowPhase>, AppError> {
    let rows = sqlx::query_as::<_, WorkflowPhase>(
        r#"
        SELECT id, firm_id, case_id, procedure_type_code, phase_name,
               order_index, status, estimated_start, actual_start,
               actual_end, created_at, updated_at
        FROM workflow_phases
        WHERE firm_id = $1 AND case_id = $2 AND procedure_type_code = $3
        ORDER BY order_index ASC
        "#,
    )
    .bind(firm_id)
    .bind(case_id)
    .bind(procedure_type_code)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Complete the active phase, stamping its actual end date.
///
/// Guarded: the UPDATE only matches while the phase is still `active`,
/// so concurrent or repeated advances cannot double-complete it.
pub async fn complete_active(
    pool: &Pool<Postgres>,
    firm_id: &str,
    phase_id: Uuid,
    today: NaiveDate,
) -> Result<Option<WorkflowPhase>, AppError> {
    let row = sqlx::query_as::<_, WorkflowPhase>(
        r#"
        UPDATE workflow_phases SET
            status = 'completed',
            actual_end = $3,
            updated_at = NOW()
        WHERE id = $1 AND firm_id = $2 AND status = 'active'
        RETURNING id, firm_id, case_id, procedure_type_code, phase_name,
                  order_index, status, estimated_start, actual_start,
                  actual_end, created_at, updated_at
        "#,
    )
    .bind(phase_id)
    .bind(firm_id)
    .bind(today)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Activate the phase at the given order index, stamping its actual
/// start date.
///
/// Guarded: only a `pending` phase is activated, preserving the
/// single-active-phase invariant under concurrent advances.
pub async fn activate_at_index(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
    procedure_type_code: &str,
    order_index: i32,
    today: NaiveDate,
) -> Result<Option<WorkflowPhase>, AppError> {
    let row = sqlx::query_as::<_, WorkflowPhase>(
        r#"
        UPDATE workflow_phases SET
            status = 'active',
            actual_start = $5,
            updated_at = NOW()
        WHERE firm_id = $1 AND case_id = $2 AND procedure_type_code = $3
          AND order_index = $4 AND status = 'pending'
        RETURNING id, firm_id, case_id, procedure_type_code, phase_name,
                  order_index, status, estimated_start, actual_start,
                  actual_end, created_at, updated_at
        "#,
    )
    .bind(firm_id)
    .bind(case_id)
    .bind(procedure_type_code)
    .bind(order_index)
    .bind(today)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Skip a phase that has not started.
///
/// Guarded: only a `pending` phase can be skipped.
pub async fn skip_pending(
    pool: &Pool<Postgres>,
    firm_id: &str,
    phase_id: Uuid,
) -> Result<Option<WorkflowPhase>, AppError> {
    let row = sqlx::query_as::<_, WorkflowPhase>(
        r#"
        UPDATE workflow_phases SET
            status = 'skipped',
            updated_at = NOW()
        WHERE id = $1 AND firm_id = $2 AND status = 'pending'
        RETURNING id, firm_id, case_id, procedure_type_code, phase_name,
                  order_index, status, estimated_start, actual_start,
                  actual_end, created_at, updated_at
        "#,
    )
    .bind(phase_id)
    .bind(firm_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}
