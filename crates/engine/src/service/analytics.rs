use chrono::{Duration, Utc};
use shared_types::{
    AlertsResult, AppError, CaseAnalyticsSnapshot, DeadlineAlert, Timeframe,
};
use sqlx::{Pool, Postgres};

use crate::automation::analytics::{
    average_duration_days, count_by_type, deadline_compliance_rate, group_by_case,
    oab_compliance_rate, success_rate,
};
use crate::automation::compliance::evaluate_case;
use crate::automation::deadline::classify_priority;
use crate::repo;
use crate::service::today;

/// Aggregate case metrics over the timeframe's lookback window.
#[tracing::instrument(skip(pool))]
pub async fn get_case_analytics(
    pool: &Pool<Postgres>,
    firm_id: &str,
    timeframe: Timeframe,
) -> Result<CaseAnalyticsSnapshot, AppError> {
    let since = Utc::now() - Duration::days(timeframe.days());
    let cases = repo::case::list_created_since(pool, firm_id, since).await?;
    let deadlines = repo::deadline::list_for_firm(pool, firm_id).await?;
    let now = today();

    let compliance_rate = deadline_compliance_rate(&deadlines, now);
    let deadlines_by_case = group_by_case(deadlines);

    Ok(CaseAnalyticsSnapshot {
        total_cases: cases.len() as i64,
        cases_by_type: count_by_type(&cases),
        success_rate: success_rate(&cases),
        average_duration_days: average_duration_days(&cases),
        deadline_compliance_rate: compliance_rate,
        oab_compliance_rate: oab_compliance_rate(&cases, &deadlines_by_case, now),
    })
}

/// Near-term deadline alerts plus rule violations across open cases.
///
/// Alerts cover pending deadlines due within the next seven days,
/// soonest first, each annotated with remaining days and urgency.
#[tracing::instrument(skip(pool))]
pub async fn generate_compliance_alerts(
    pool: &Pool<Postgres>,
    firm_id: &str,
) -> Result<AlertsResult, AppError> {
    let now = today();
    let horizon = now + Duration::days(7);

    let upcoming = repo::deadline::list_pending_due_between(pool, firm_id, now, horizon).await?;
    let deadline_alerts = upcoming
        .into_iter()
        .map(|d| DeadlineAlert {
            days_remaining: (d.due_date - now).num_days(),
            priority: classify_priority(d.due_date, now),
            deadline_id: d.id,
            case_id: d.case_id,
            description: d.description,
            due_date: d.due_date,
        })
        .collect();

    let open_cases = repo::case::list_open(pool, firm_id).await?;
    let deadlines_by_case = group_by_case(repo::deadline::list_for_firm(pool, firm_id).await?);
    let oab_violations = open_cases
        .iter()
        .flat_map(|case| {
            let deadlines = deadlines_by_case
                .get(&case.id)
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            evaluate_case(case, deadlines, now)
        })
        .collect();

    Ok(AlertsResult {
        deadline_alerts,
        oab_violations,
    })
}
