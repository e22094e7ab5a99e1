use shared_types::{AppError, DeadlineNotification};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// List the reminders for a deadline, earliest first.
pub async fn list_by_deadline(
    pool: &Pool<Postgres>,
    firm_id: &str,
    deadline_id: Uuid,
) -> Result<Vec<DeadlineNotification>, AppError> {
    let rows = sqlx::query_as::<_, DeadlineNotification>(
        r#"
        SELECT id, firm_id, deadline_id, scheduled_date, offset_days, status, created_at
        FROM deadline_notifications
        WHERE firm_id = $1 AND deadline_id = $2
        ORDER BY scheduled_date ASC
        "#,
    )
    .bind(firm_id)
    .bind(deadline_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Find a notification by ID within a specific firm.
pub async fn find_by_id(
    pool: &Pool<Postgres>,
    firm_id: &str,
    id: Uuid,
) -> Result<Option<DeadlineNotification>, AppError> {
    let row = sqlx::query_as::<_, DeadlineNotification>(
        r#"
        SELECT id, firm_id, deadline_id, scheduled_date, offset_days, status, created_at
        FROM deadline_notifications
        WHERE id = $1 AND firm_id = $2
        "#,
    )
    .bind(id)
    .bind(firm_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Mark a reminder as sent and flag the parent deadline as notified, in
/// one transaction.
///
/// Guarded: only a `scheduled` reminder is updated. Returns None when
/// the guard does not match (already sent).
pub async fn mark_sent(
    pool: &Pool<Postgres>,
    firm_id: &str,
    id: Uuid,
) -> Result<Option<DeadlineNotification>, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let updated = sqlx::query_as::<_, DeadlineNotification>(
        r#"
        UPDATE deadline_notifications SET status = 'sent'
        WHERE id = $1 AND firm_id = $2 AND status = 'scheduled'
        RETURNING id, firm_id, deadline_id, scheduled_date, offset_days, status, created_at
        "#,
    )
    .bind(id)
    .bind(firm_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    if let Some(ref notification) = updated {
        sqlx::query(
            r#"
            UPDATE case_deadlines SET notified = TRUE
            WHERE id = $1 AND firm_id = $2
            "#,
        )
        .bind(notification.deadline_id)
        .bind(firm_id)
        .execute(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    }

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(updated)
}
