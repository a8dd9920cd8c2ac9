//! Plan data structures and loading

mod data;
pub mod loader;

pub use data::{Condition, Plan, PlanError};
pub use loader::{load_conditions, load_conditions_from_reader, load_plan, plan_from_json};
