//! Output series structures for projections

use serde::{Deserialize, Serialize};

use crate::calendar::Month;

/// A single row of projection output for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Calendar month this row covers
    pub month: Month,

    /// Age of the subject in whole years at this month
    pub age: i32,

    /// Id of the condition selected for this month
    pub condition_id: u32,

    /// Annual rate in percent actually applied
    pub rate: f64,

    /// Cash movement actually applied, before compounding
    pub movement: f64,

    /// Capital after this month's movement and compounding
    pub capital: f64,
}

impl ProjectionRow {
    /// Chart label for this row, e.g. `"2026-09 (50)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.month, self.age)
    }
}

/// Complete projection output: the seed capital plus one row per month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Capital at the projection start (the implicit month-0 point)
    pub initial_capital: f64,

    /// Monthly rows, in calendar order
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionResult {
    pub fn new(initial_capital: f64) -> Self {
        Self {
            initial_capital,
            rows: Vec::new(),
        }
    }

    /// Add a projection row
    pub fn add_row(&mut self, row: ProjectionRow) {
        self.rows.push(row);
    }

    /// Chart labels, one per projected month
    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.label()).collect()
    }

    /// Plottable capital series: the seed value followed by one value per
    /// label
    pub fn values(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.rows.len() + 1);
        values.push(self.initial_capital);
        values.extend(self.rows.iter().map(|r| r.capital));
        values
    }

    /// Final capital (the seed when no months were projected)
    pub fn final_capital(&self) -> f64 {
        self.rows
            .last()
            .map(|r| r.capital)
            .unwrap_or(self.initial_capital)
    }

    /// Whether the projection stopped early on negative capital
    pub fn depleted(&self) -> bool {
        self.rows.last().map(|r| r.capital < 0.0).unwrap_or(false)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_deposits: f64 = self.rows.iter().map(|r| r.movement.max(0.0)).sum();
        let total_withdrawals: f64 = self.rows.iter().map(|r| (-r.movement).max(0.0)).sum();
        let peak_capital = self
            .rows
            .iter()
            .map(|r| r.capital)
            .fold(self.initial_capital, f64::max);

        ProjectionSummary {
            months: self.rows.len() as u32,
            final_month: self.rows.last().map(|r| r.month),
            final_capital: self.final_capital(),
            depleted: self.depleted(),
            peak_capital,
            total_deposits,
            total_withdrawals,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub final_month: Option<Month>,
    pub final_capital: f64,
    pub depleted: bool,
    pub peak_capital: f64,
    pub total_deposits: f64,
    pub total_withdrawals: f64,
}
