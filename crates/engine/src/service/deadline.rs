use shared_types::{
    is_valid_deadline_status, AppError, AutomationCatalog, CaseDeadline,
    CreateDeadlineRequest, DeadlineNotification, DeadlineSearchParams,
    DeadlineSearchResponse,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::automation::deadline::{classify_priority, due_date_for, reminder_schedule};
use crate::error_convert::ValidateRequest;
use crate::repo;
use crate::service::today;

/// Create a deadline from a catalog type and trigger date: compute the
/// due date, classify urgency, and persist the row together with its
/// four-reminder batch in one transaction.
#[tracing::instrument(skip(pool, catalog, req), fields(case_id = %req.case_id, deadline_type = %req.deadline_type_code))]
pub async fn create_deadline(
    pool: &Pool<Postgres>,
    firm_id: &str,
    catalog: &AutomationCatalog,
    req: CreateDeadlineRequest,
) -> Result<CaseDeadline, AppError> {
    req.validate_request()?;

    let definition = catalog.deadline_type(&req.deadline_type_code).ok_or_else(|| {
        AppError::not_found(format!("Unknown deadline type: {}", req.deadline_type_code))
    })?;

    repo::case::find_by_id(pool, firm_id, req.case_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", req.case_id)))?;

    let due_date = due_date_for(definition, req.start_date, req.consider_holidays)?;
    let priority = classify_priority(due_date, today());
    let description = req
        .description
        .unwrap_or_else(|| definition.description.clone());
    let reminders = reminder_schedule(due_date);

    let deadline = repo::deadline::insert_with_notifications(
        pool,
        firm_id,
        req.case_id,
        &definition.code,
        due_date,
        &description,
        priority,
        &reminders,
    )
    .await?;

    tracing::info!(
        deadline_id = %deadline.id,
        due_date = %deadline.due_date,
        priority = %deadline.priority,
        "deadline created with reminder batch"
    );

    Ok(deadline)
}

/// Mark a deadline as completed, stamping today as the completion date.
/// Repeating the call on an already-completed deadline has no effect.
#[tracing::instrument(skip(pool))]
pub async fn complete_deadline(
    pool: &Pool<Postgres>,
    firm_id: &str,
    deadline_id: Uuid,
) -> Result<CaseDeadline, AppError> {
    let existing = repo::deadline::find_by_id(pool, firm_id, deadline_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Deadline {} not found", deadline_id)))?;

    if existing.status == "completed" {
        return Ok(existing);
    }

    match repo::deadline::complete(pool, firm_id, deadline_id, today()).await? {
        Some(updated) => {
            tracing::info!(deadline_id = %updated.id, "deadline completed");
            Ok(updated)
        }
        // A concurrent caller resolved it first; return the current row.
        None => repo::deadline::find_by_id(pool, firm_id, deadline_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Deadline {} not found", deadline_id))),
    }
}

/// Materialize the implicit overdue rule for a firm. Returns the number
/// of deadlines flipped to `overdue`.
#[tracing::instrument(skip(pool))]
pub async fn mark_overdue_deadlines(
    pool: &Pool<Postgres>,
    firm_id: &str,
) -> Result<u64, AppError> {
    let flipped = repo::deadline::mark_overdue(pool, firm_id, today()).await?;
    if flipped > 0 {
        tracing::info!(flipped, "pending deadlines marked overdue");
    }
    Ok(flipped)
}

/// Search deadlines with filters and pagination.
#[tracing::instrument(skip(pool, params))]
pub async fn search_deadlines(
    pool: &Pool<Postgres>,
    firm_id: &str,
    params: DeadlineSearchParams,
) -> Result<DeadlineSearchResponse, AppError> {
    let offset = params.offset.unwrap_or(0).max(0);
    let limit = params.limit.unwrap_or(20).clamp(1, 100);

    if let Some(ref s) = params.status {
        if !is_valid_deadline_status(s) {
            return Err(AppError::bad_request(format!(
                "Invalid status: {}. Valid values: pending, completed, overdue",
                s
            )));
        }
    }

    let (deadlines, total) = repo::deadline::search(
        pool,
        firm_id,
        params.status.as_deref(),
        params.case_id,
        params.due_from,
        params.due_to,
        offset,
        limit,
    )
    .await?;

    Ok(DeadlineSearchResponse { deadlines, total })
}

/// List the reminder batch for a deadline.
#[tracing::instrument(skip(pool))]
pub async fn list_notifications(
    pool: &Pool<Postgres>,
    firm_id: &str,
    deadline_id: Uuid,
) -> Result<Vec<DeadlineNotification>, AppError> {
    repo::deadline::find_by_id(pool, firm_id, deadline_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Deadline {} not found", deadline_id)))?;

    repo::notification::list_by_deadline(pool, firm_id, deadline_id).await
}

/// Record that the external notifier delivered a reminder. Repeating the
/// call on an already-sent reminder has no effect.
#[tracing::instrument(skip(pool))]
pub async fn mark_notification_sent(
    pool: &Pool<Postgres>,
    firm_id: &str,
    notification_id: Uuid,
) -> Result<DeadlineNotification, AppError> {
    let existing = repo::notification::find_by_id(pool, firm_id, notification_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Notification {} not found", notification_id))
        })?;

    if existing.is_sent() {
        return Ok(existing);
    }

    match repo::notification::mark_sent(pool, firm_id, notification_id).await? {
        Some(updated) => Ok(updated),
        // A concurrent caller marked it first; return the current row.
        None => repo::notification::find_by_id(pool, firm_id, notification_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Notification {} not found", notification_id))
            }),
    }
}
