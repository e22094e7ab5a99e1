use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reminder offsets in days before the due date, in creation order.
pub const REMINDER_OFFSETS: [i32; 4] = [7, 3, 1, 0];

/// Valid notification status values matching the DB CHECK constraint.
pub const NOTIFICATION_STATUSES: &[&str] = &["scheduled", "sent"];

/// Check whether a status string is a valid notification status.
pub fn is_valid_notification_status(s: &str) -> bool {
    NOTIFICATION_STATUSES.contains(&s)
}

/// A reminder scheduled for a deadline. Four are created per deadline,
/// one per offset in [`REMINDER_OFFSETS`]; delivery is the external
/// notifier's concern.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DeadlineNotification {
    pub id: Uuid,
    pub firm_id: String,
    pub deadline_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub offset_days: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DeadlineNotification {
    pub fn is_sent(&self) -> bool {
        self.status == "sent"
    }
}
