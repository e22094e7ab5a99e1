//! Public operations exposed to the caller layer (UI/API, out of scope
//! here). Each orchestrates validation, the pure automation functions,
//! and the repository, returning plain records or `AppError`.

pub mod analytics;
pub mod case;
pub mod compliance;
pub mod deadline;
pub mod workflow;

use chrono::{NaiveDate, Utc};

/// Civil date used for every "today" computation. All deadline math is
/// calendar-based; instants never enter the arithmetic.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
