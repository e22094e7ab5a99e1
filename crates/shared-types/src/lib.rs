pub mod error;

// Domain modules (canonical locations for all practice-automation types)
pub mod analytics;
pub mod catalog;
pub mod case;
pub mod compliance;
pub mod deadline;
pub mod notification;
pub mod workflow;

pub use error::*;

// Re-export all domain types
pub use analytics::*;
pub use catalog::*;
pub use case::*;
pub use compliance::*;
pub use deadline::*;
pub use notification::*;
pub use workflow::*;
