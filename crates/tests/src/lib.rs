#[cfg(test)]
mod common;

#[cfg(test)]
mod calendar_tests;

#[cfg(test)]
mod deadline_calc_tests;

#[cfg(test)]
mod priority_tests;

#[cfg(test)]
mod reminder_tests;

#[cfg(test)]
mod workflow_plan_tests;

#[cfg(test)]
mod compliance_tests;
