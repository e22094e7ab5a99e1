//! Pure computation engines behind the service operations.
//!
//! Everything here is a deterministic function of its inputs. The
//! repository layer feeds rows in and persists results; no module in
//! this tree touches the database or the clock.

pub mod analytics;
pub mod calendar;
pub mod compliance;
pub mod deadline;
pub mod workflow;
