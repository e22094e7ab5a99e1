pub mod case;
pub mod deadline;
pub mod notification;
pub mod workflow;
