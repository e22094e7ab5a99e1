use shared_types::{AppError, AutomationCatalog, PhaseStatus, WorkflowPhase};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::automation::workflow::plan_phases;
use crate::repo;
use crate::service::today;

/// Instantiate the procedural workflow for a case: plan the phases from
/// the procedure catalog and persist them as one batch, first phase
/// active.
///
/// A second call for the same case/procedure pair is rejected with a
/// conflict; the unique index on order indexes backs the same guarantee
/// against races.
#[tracing::instrument(skip(pool, catalog))]
pub async fn automate_workflow(
    pool: &Pool<Postgres>,
    firm_id: &str,
    catalog: &AutomationCatalog,
    case_id: Uuid,
    procedure_type_code: &str,
) -> Result<Vec<WorkflowPhase>, AppError> {
    let procedure = catalog.procedure_type(procedure_type_code).ok_or_else(|| {
        AppError::not_found(format!("Unknown procedure type: {}", procedure_type_code))
    })?;

    repo::case::find_by_id(pool, firm_id, case_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", case_id)))?;

    if repo::workflow::exists(pool, firm_id, case_id, procedure_type_code).await? {
        return Err(AppError::conflict(format!(
            "Workflow {} already instantiated for case {}",
            procedure_type_code, case_id
        )));
    }

    let plans = plan_phases(procedure, today());
    let phases =
        repo::workflow::insert_batch(pool, firm_id, case_id, procedure_type_code, &plans).await?;

    tracing::info!(
        phases = phases.len(),
        procedure = procedure_type_code,
        "workflow instantiated"
    );

    Ok(phases)
}

/// Complete the active phase and activate its successor, if any.
///
/// Guarded transitions throughout: repeating the call on an
/// already-completed phase has no effect, and a phase that never started
/// (`pending`/`skipped`) is rejected.
#[tracing::instrument(skip(pool))]
pub async fn advance_phase(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
    phase_id: Uuid,
) -> Result<(), AppError> {
    let phase = repo::workflow::find_by_id(pool, firm_id, case_id, phase_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Phase {} not found", phase_id)))?;

    let status = PhaseStatus::parse(&phase.status)
        .ok_or_else(|| AppError::internal(format!("Invalid phase status: {}", phase.status)))?;

    match status {
        // Idempotent repeat.
        PhaseStatus::Completed => Ok(()),
        PhaseStatus::Pending | PhaseStatus::Skipped => Err(AppError::conflict(format!(
            "Phase {} is {}, not active",
            phase_id, phase.status
        ))),
        PhaseStatus::Active => {
            let now = today();
            if repo::workflow::complete_active(pool, firm_id, phase_id, now)
                .await?
                .is_none()
            {
                // A concurrent caller completed it first; nothing left to do.
                return Ok(());
            }

            let next = repo::workflow::activate_at_index(
                pool,
                firm_id,
                case_id,
                &phase.procedure_type_code,
                phase.order_index + 1,
                now,
            )
            .await?;

            match next {
                Some(next_phase) => tracing::info!(
                    completed = %phase.phase_name,
                    activated = %next_phase.phase_name,
                    "workflow advanced"
                ),
                None => tracing::info!(
                    completed = %phase.phase_name,
                    "workflow finished"
                ),
            }

            Ok(())
        }
    }
}

/// Skip a phase that has not started. Repeating the call on an
/// already-skipped phase has no effect; active or completed phases are
/// rejected.
#[tracing::instrument(skip(pool))]
pub async fn skip_phase(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
    phase_id: Uuid,
) -> Result<(), AppError> {
    let phase = repo::workflow::find_by_id(pool, firm_id, case_id, phase_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Phase {} not found", phase_id)))?;

    let status = PhaseStatus::parse(&phase.status)
        .ok_or_else(|| AppError::internal(format!("Invalid phase status: {}", phase.status)))?;

    match status {
        // Idempotent repeat.
        PhaseStatus::Skipped => Ok(()),
        PhaseStatus::Active | PhaseStatus::Completed => Err(AppError::conflict(format!(
            "Phase {} is {}, only pending phases can be skipped",
            phase_id, phase.status
        ))),
        PhaseStatus::Pending => {
            repo::workflow::skip_pending(pool, firm_id, phase_id).await?;
            tracing::info!(skipped = %phase.phase_name, "phase skipped");
            Ok(())
        }
    }
}

/// List a case's phases for one procedure, in order.
#[tracing::instrument(skip(pool))]
pub async fn list_phases(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
    procedure_type_code: &str,
) -> Result<Vec<WorkflowPhase>, AppError> {
    repo::workflow::list_by_case(pool, firm_id, case_id, procedure_type_code).await
}
