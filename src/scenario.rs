//! Scenario runner for repeated and variant projections
//!
//! The engine is pure, so reacting to an input change means projecting again.
//! The runner keeps a base plan and config together so callers can re-project
//! after edits and fan sensitivity variants out in parallel.

use rayon::prelude::*;

use crate::calendar::Month;
use crate::plan::Plan;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionError, ProjectionResult};

/// Pre-configured runner around a base plan
///
/// # Example
/// ```ignore
/// let mut runner = ScenarioRunner::new(plan);
/// runner.plan_mut().condition_mut(0).unwrap().rate = Some(5.0);
/// let result = runner.run(as_of)?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_plan: Plan,
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create a runner with the default projection config
    pub fn new(base_plan: Plan) -> Self {
        Self {
            base_plan,
            config: ProjectionConfig::default(),
        }
    }

    /// Create a runner with a specific projection config
    pub fn with_config(base_plan: Plan, config: ProjectionConfig) -> Self {
        Self { base_plan, config }
    }

    /// Get reference to the base plan for inspection
    pub fn plan(&self) -> &Plan {
        &self.base_plan
    }

    /// Get mutable reference to the base plan for edits between runs
    pub fn plan_mut(&mut self) -> &mut Plan {
        &mut self.base_plan
    }

    /// Project the base plan as it currently stands
    pub fn run(&self, as_of: Month) -> Result<ProjectionResult, ProjectionError> {
        ProjectionEngine::new(self.config.clone()).project(&self.base_plan, as_of)
    }

    /// Derive a plan with every condition rate shifted by `delta` percent
    ///
    /// Unset rates count as zero before the shift, so a blank condition picks
    /// up the delta as its rate.
    pub fn plan_with_rate_delta(&self, delta: f64) -> Plan {
        let mut plan = self.base_plan.clone();
        for condition in &mut plan.conditions {
            condition.rate = Some(condition.rate.unwrap_or(0.0) + delta);
        }
        plan
    }

    /// Project rate-shifted variants in parallel, one result per delta
    pub fn run_rate_deltas(
        &self,
        as_of: Month,
        deltas: &[f64],
    ) -> Vec<Result<ProjectionResult, ProjectionError>> {
        deltas
            .par_iter()
            .map(|&delta| {
                let engine = ProjectionEngine::new(self.config.clone());
                engine.project(&self.plan_with_rate_delta(delta), as_of)
            })
            .collect()
    }

    /// Project many independent plans with this runner's config
    pub fn run_batch(
        &self,
        plans: &[Plan],
        as_of: Month,
    ) -> Vec<Result<ProjectionResult, ProjectionError>> {
        plans
            .par_iter()
            .map(|plan| ProjectionEngine::new(self.config.clone()).project(plan, as_of))
            .collect()
    }
}
