//! Core projection engine: the monthly capital recurrence under a condition
//! timeline

use log::debug;
use thiserror::Error;

use super::series::{ProjectionResult, ProjectionRow};
use crate::calendar::Month;
use crate::plan::{Condition, Plan};

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Projection horizon as an age in years
    pub horizon_years: i32,

    /// Stop as soon as a projected capital value turns negative
    /// (the negative row itself is kept)
    pub stop_when_negative: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: 100,
            stop_when_negative: true,
        }
    }
}

/// Errors a projection can produce
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    /// The plan has no conditions to select from
    #[error("plan has no conditions")]
    EmptyPlan,
}

/// Main projection engine
///
/// Pure and stateless: identical inputs always produce identical output, and
/// repeated or re-entrant calls are safe.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project a plan month by month, starting the month after `as_of`
    ///
    /// Runs to the birthday horizon (inclusive), stopping early once capital
    /// turns negative. An `as_of` at or past the horizon yields a series
    /// with only the seed value.
    pub fn project(&self, plan: &Plan, as_of: Month) -> Result<ProjectionResult, ProjectionError> {
        if plan.conditions.is_empty() {
            return Err(ProjectionError::EmptyPlan);
        }

        let horizon = plan.birth_month.plus_years(self.config.horizon_years);
        let mut result = ProjectionResult::new(plan.initial_capital);
        let mut capital = plan.initial_capital;
        let mut month = as_of.next();

        while month <= horizon {
            let condition = select_condition(&plan.conditions, month);
            let movement = condition.movement_amount();
            capital = (capital + movement) * condition.monthly_factor();

            result.add_row(ProjectionRow {
                month,
                age: month.years_since(plan.birth_month),
                condition_id: condition.id,
                rate: condition.rate.unwrap_or(0.0),
                movement,
                capital,
            });

            if self.config.stop_when_negative && capital < 0.0 {
                debug!(
                    "capital depleted at {}, stopping after {} months",
                    month,
                    result.rows.len()
                );
                break;
            }

            month = month.next();
        }

        Ok(result)
    }
}

/// Pick the condition governing `month`
///
/// Among conditions whose effective month is set and at or before `month`,
/// the one with the latest effective month wins, ties resolving toward the
/// condition appearing later in the input order. When nothing qualifies (all
/// dates unset or in the future) the first condition applies regardless of
/// its date.
fn select_condition(conditions: &[Condition], month: Month) -> &Condition {
    let mut selected: Option<(Month, &Condition)> = None;

    for condition in conditions {
        if let Some(date) = condition.effective {
            if date <= month {
                match selected {
                    Some((best_date, _)) if date < best_date => {}
                    _ => selected = Some((date, condition)),
                }
            }
        }
    }

    selected
        .map(|(_, condition)| condition)
        .unwrap_or(&conditions[0])
}
