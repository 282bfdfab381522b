//! Multi-test-case driver and its lifecycle hooks.
//!
//! [`run_cases`] scores each case in input order, calling the four
//! [`CaseHooks`] stages around it. Failures stay local to their own case.

pub mod driver;
pub mod hooks;

pub use driver::{failure_count, run_cases, CaseOutcome};
pub use hooks::{CaseHooks, NoopHooks, TracingHooks};
