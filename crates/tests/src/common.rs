use chrono::{NaiveDate, TimeZone, Utc};
use shared_types::{CaseDeadline, LegalCase};
use uuid::Uuid;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A fully-documented open case with fee terms set. Tests unset fields
/// as needed to trigger specific rules.
pub fn sample_case(firm_id: &str) -> LegalCase {
    let created = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
    LegalCase {
        id: Uuid::new_v4(),
        firm_id: firm_id.to_string(),
        case_number: "0001234-56.2025.8.26.0100".to_string(),
        title: "Ação de Cobrança".to_string(),
        client_name: "Cliente Exemplo".to_string(),
        service_type: "civil".to_string(),
        status: "open".to_string(),
        hourly_rate: Some(350.0),
        fixed_fee: None,
        has_fee_agreement: true,
        has_power_of_attorney: true,
        has_initial_documents: true,
        start_date: date(2025, 1, 10),
        close_date: None,
        created_at: created,
        updated_at: created,
    }
}

pub fn sample_deadline(case_id: Uuid, due_date: NaiveDate, status: &str) -> CaseDeadline {
    CaseDeadline {
        id: Uuid::new_v4(),
        firm_id: "firm1".to_string(),
        case_id,
        deadline_type_code: "CONTESTACAO".to_string(),
        due_date,
        description: "Contestação (CPC art. 335)".to_string(),
        priority: "high".to_string(),
        status: status.to_string(),
        notified: false,
        completed_at: None,
        created_at: Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap(),
    }
}
