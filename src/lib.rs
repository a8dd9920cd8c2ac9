//! Capital Projection - month-by-month capital projection for piecewise
//! financial plans
//!
//! This library provides:
//! - A pure, deterministic projection engine: condition selection, monthly
//!   compounding, early stop on depletion
//! - Month-granularity calendar arithmetic
//! - A plan data model with editing operations and JSON/CSV loading
//! - A scenario runner for repeated, batch, and sensitivity projections

pub mod calendar;
pub mod plan;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use calendar::Month;
pub use plan::{Condition, Plan};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionError, ProjectionResult};
pub use scenario::ScenarioRunner;
