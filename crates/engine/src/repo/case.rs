use chrono::{DateTime, Utc};
use shared_types::{AppError, CreateCaseRequest, LegalCase};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Insert a new case. Returns the created row.
pub async fn create(
    pool: &Pool<Postgres>,
    firm_id: &str,
    req: CreateCaseRequest,
) -> Result<LegalCase, AppError> {
    let row = sqlx::query_as::<_, LegalCase>(
        r#"
        INSERT INTO legal_cases
            (firm_id, case_number, title, client_name, service_type,
             hourly_rate, fixed_fee, has_fee_agreement, has_power_of_attorney,
             has_initial_documents, start_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, firm_id, case_number, title, client_name, service_type,
                  status, hourly_rate, fixed_fee, has_fee_agreement,
                  has_power_of_attorney, has_initial_documents, start_date,
                  close_date, created_at, updated_at
        "#,
    )
    .bind(firm_id)
    .bind(&req.case_number)
    .bind(&req.title)
    .bind(&req.client_name)
    .bind(&req.service_type)
    .bind(req.hourly_rate)
    .bind(req.fixed_fee)
    .bind(req.has_fee_agreement)
    .bind(req.has_power_of_attorney)
    .bind(req.has_initial_documents)
    .bind(req.start_date)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Find a case by ID within a specific firm.
pub async fn find_by_id(
    pool: &Pool<Postgres>,
    firm_id: &str,
    id: Uuid,
) -> Result<Option<LegalCase>, AppError> {
    let row = sqlx::query_as::<_, LegalCase>(
        r#"
        SELECT id, firm_id, case_number, title, client_name, service_type,
               status, hourly_rate, fixed_fee, has_fee_agreement,
               has_power_of_attorney, has_initial_documents, start_date,
               close_date, created_at, updated_at
        FROM legal_cases
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

/// List all open cases for a firm.
pub async fn list_open(pool: &Pool<Postgres>, firm_id: &str) -> Result<Vec<LegalCase>, AppError> {
    let rows = sqlx::query_as::<_, LegalCase>(
        r#"
        SELECT id, firm_id, case_number, title, client_name, service_type,
               status, hourly_rate, fixed_fee, has_fee_agreement,
               has_power_of_attorney, has_initial_documents, start_date,
               close_date, created_at, updated_at
        FROM legal_cases
        WHERE firm_id = $1 AND status = 'open'
        ORDER BY created_at ASC
        "#,
    )
    .bind(firm_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// List cases created at or after the given instant.
pub async fn list_created_since(
    pool: &Pool<Postgres>,
    firm_id: &str,
    since: DateTime<Utc>,
) -> Result<Vec<LegalCase>, AppError> {
    let rows = sqlx::query_as::<_, LegalCase>(
        r#"
        SELECT id, firm_id, case_number, title, client_name, service_type,
               status, hourly_rate, fixed_fee, has_fee_agreement,
               has_power_of_attorney, has_initial_documents, start_date,
               close_date, created_at, updated_at
        FROM legal_cases
        WHERE firm_id = $1 AND created_at >= $2
        ORDER BY created_at ASC
        "#,
    )
    .bind(firm_id)
    .bind(since)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}
