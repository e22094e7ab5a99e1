use shared_types::{is_valid_service_type, AppError, CreateCaseRequest, LegalCase};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::ValidateRequest;
use crate::repo;

/// Open a new case for a firm.
#[tracing::instrument(skip(pool, req), fields(case_number = %req.case_number))]
pub async fn create_case(
    pool: &Pool<Postgres>,
    firm_id: &str,
    req: CreateCaseRequest,
) -> Result<LegalCase, AppError> {
    req.validate_request()?;

    if !is_valid_service_type(&req.service_type) {
        return Err(AppError::bad_request(format!(
            "Invalid service type: {}. Valid values: civil, labor, corporate, family, consultative",
            req.service_type
        )));
    }

    repo::case::create(pool, firm_id, req).await
}

/// Fetch a case by ID.
#[tracing::instrument(skip(pool))]
pub async fn get_case(
    pool: &Pool<Postgres>,
    firm_id: &str,
    case_id: Uuid,
) -> Result<LegalCase, AppError> {
    repo::case::find_by_id(pool, firm_id, case_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", case_id)))
}
