use chrono::NaiveDate;
use shared_types::{AppError, CaseDeadline, Priority};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Insert a deadline and its reminder batch in one transaction.
///
/// The deadline insert is keyed on `(firm_id, case_id, deadline_type_code,
/// due_date)`: a retried create hits the conflict arm and returns the
/// existing row without touching its reminders.
pub async fn insert_with_notifications(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
    deadline_type_code: &str,
    due_date: NaiveDate,
    description: &str,
    priority: Priority,
    reminders: &[(i32, NaiveDate)],
) -> Result<CaseDeadline, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let inserted = sqlx::query_as::<_, CaseDeadline>(
        r#"
        INSERT INTO case_deadlines
            (firm_id, case_id, deadline_type_code, due_date, description, priority)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (firm_id, case_id, deadline_type_code, due_date) DO NOTHING
        RETURNING id, firm_id, case_id, deadline_type_code, due_date, description,
                  priority, status, notified, completed_at, created_at
        "#,
    )
    .bind(firm_id)
    .bind(case_id)
    .bind(deadline_type_code)
    .bind(due_date)
    .bind(description)
    .bind(priority.as_str())
    .fetch_optional(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let deadline = match inserted {
        Some(deadline) => {
            for &(offset, scheduled) in reminders {
                sqlx::query(
                    r#"
                    INSERT INTO deadline_notifications
                        (firm_id, deadline_id, scheduled_date, offset_days)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (deadline_id, offset_days) DO NOTHING
                    "#,
                )
                .bind(firm_id)
                .bind(deadline.id)
                .bind(scheduled)
                .bind(offset)
                .execute(&mut *tx)
                .await
                .map_err(SqlxErrorExt::into_app_error)?;
            }
            deadline
        }
        // Retried create: the row and its reminders already exist.
        None => sqlx::query_as::<_, CaseDeadline>(
            r#"
            SELECT id, firm_id, case_id, deadline_type_code, due_date, description,
                   priority, status, notified, completed_at, created_at
            FROM case_deadlines
            WHERE firm_id = $1 AND case_id = $2
              AND deadline_type_code = $3 AND due_date = $4
            "#,
        )
        .bind(firm_id)
        .bind(case_id)
        .bind(deadline_type_code)
        .bind(due_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_app_error)?,
    };

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(deadline)
}

/// Find a deadline by ID within a specific firm.
pub async fn find_by_id(
    pool: &Pool<Postgres>,
    firm_id: &str,
    id: Uuid,
) -> Result<Option<CaseDeadline>, AppError> {
    let row = sqlx::query_as::<_, CaseDeadline>(
        r#"
        SELECT id, firm_id, case_id, deadline_type_code, due_date, description,
               priority, status, notified, completed_at, created_at
        FROM case_deadlines
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

/// Mark a deadline completed, stamping the completion date.
///
/// Guarded: only a still-unresolved (`pending` or `overdue`) row is
/// updated. Returns None when the guard does not match.
pub async fn complete(
    pool: &Pool<Postgres>,
    firm_id: &str,
    id: Uuid,
    completed_at: NaiveDate,
) -> Result<Option<CaseDeadline>, AppError> {
    let row = sqlx::query_as::<_, CaseDeadline>(
        r#"
        UPDATE case_deadlines SET
            status = 'completed',
            completed_at = $3
        WHERE id = $1 AND firm_id = $2 AND status IN ('pending', 'overdue')
        RETURNING id, firm_id, case_id, deadline_type_code, due_date, description,
                  priority, status, notified, completed_at, created_at
        "#,
    )
    .bind(id)
    .bind(firm_id)
    .bind(completed_at)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Materialize the implicit overdue rule: flip every pending deadline
/// past its due date to `overdue`. Returns the number of rows updated.
pub async fn mark_overdue(
    pool: &Pool<Postgres>,
    firm_id: &str,
    today: NaiveDate,
) -> Result<u64, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE case_deadlines SET status = 'overdue'
        WHERE firm_id = $1 AND status = 'pending' AND due_date < $2
        "#,
    )
    .bind(firm_id)
    .bind(today)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected())
}

/// List all deadlines for a case, soonest first.
pub async fn list_by_case(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
) -> Result<Vec<CaseDeadline>, AppError> {
    let rows = sqlx::query_as::<_, CaseDeadline>(
        r#"
        SELECT id, firm_id, case_id, deadline_type_code, due_date, description,
               priority, status, notified, completed_at, created_at
        FROM case_deadlines
        WHERE firm_id = $1 AND case_id = $2
        ORDER BY due_date ASC
        "#,
    )
    .bind(firm_id)
    .bind(case_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// List every deadline of a firm, soonest first.
pub async fn list_for_firm(
    pool: &Pool<Postgres>,
    firm_id: &str,
) -> Result<Vec<CaseDeadline>, AppError> {
    let rows = sqlx::query_as::<_, CaseDeadline>(
        r#"
        SELECT id, firm_id, case_id, deadline_type_code, due_date, description,
               priority, status, notified, completed_at, created_at
        FROM case_deadlines
        WHERE firm_id = $1
        ORDER BY due_date ASC
        "#,
    )
    .bind(firm_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// List pending deadlines due inside the inclusive date window, soonest
/// first.
pub async fn list_pending_due_between(
    pool: &Pool<Postgres>,
    firm_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<CaseDeadline>, AppError> {
    let rows = sqlx::query_as::<_, CaseDeadline>(
        r#"
        SELECT id, firm_id, case_id, deadline_type_code, due_date, description,
               priority, status, notified, completed_at, created_at
        FROM case_deadlines
        WHERE firm_id = $1 AND status = 'pending'
          AND due_date >= $2 AND due_date <= $3
        ORDER BY due_date ASC
        "#,
    )
    .bind(firm_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Search deadlines with filters. Returns (deadlines, total_count).
pub async fn search(
    pool: &Pool<Postgres>,
    firm_id: &str,
    status: Option<&str>,
    case_id: Option<Uuid>,
    due_from: Option<NaiveDate>,
    due_to: Option<NaiveDate>,
    offset: i64,
    limit: i64,
) -> Result<(Vec<CaseDeadline>, i64), AppError> {
    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM case_deadlines
        WHERE firm_id = $1
          AND ($2::TEXT IS NULL OR status = $2)
          AND ($3::UUID IS NULL OR case_id = $3)
          AND ($4::DATE IS NULL OR due_date >= $4)
          AND ($5::DATE IS NULL OR due_date <= $5)
        "#,
    )
    .bind(firm_id)
    .bind(status)
    .bind(case_id)
    .bind(due_from)
    .bind(due_to)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let rows = sqlx::query_as::<_, CaseDeadline>(
        r#"
        SELECT id, firm_id, case_id, deadline_type_code, due_date, description,
               priority, status, notified, completed_at, created_at
        FROM case_deadlines
        WHERE firm_id = $1
          AND ($2::TEXT IS NULL OR status = $2)
          AND ($3::UUID IS NULL OR case_id = $3)
          AND ($4::DATE IS NULL OR due_date >= $4)
          AND ($5::DATE IS NULL OR due_date <= $5)
        ORDER BY due_date ASC
        LIMIT $6 OFFSET $7
        "#,
    )
    .bind(firm_id)
    .bind(status)
    .bind(case_id)
    .bind(due_from)
    .bind(due_to)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok((rows, total))
}
