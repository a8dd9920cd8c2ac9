//! Capital Projection CLI
//!
//! Projects a plan month by month and prints the resulting capital series

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::Parser;

use capital_projection::plan::{load_conditions, load_plan};
use capital_projection::{Month, Plan, ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Project a capital plan to the subject's 100th birthday
#[derive(Debug, Parser)]
#[command(name = "capital-projection", version)]
struct Args {
    /// Plan JSON file; a built-in example plan is used when omitted
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Month the projection starts from, YYYY-MM (defaults to the current
    /// month)
    #[arg(long)]
    as_of: Option<Month>,

    /// Replace the plan's conditions with a CSV condition table
    /// (columns EffectiveMonth,RatePct,Movement)
    #[arg(long)]
    conditions: Option<PathBuf>,

    /// Write the full monthly series to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of leading months to print
    #[arg(long, default_value_t = 24)]
    head: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let as_of = args
        .as_of
        .unwrap_or_else(|| Month::from_date(Local::now().date_naive()));

    let mut plan = match &args.plan {
        Some(path) => load_plan(path)
            .map_err(|e| anyhow::anyhow!("failed to load plan from {}: {}", path.display(), e))?,
        None => Plan::example(as_of),
    };

    if let Some(path) = &args.conditions {
        plan.conditions = load_conditions(path).map_err(|e| {
            anyhow::anyhow!("failed to load conditions from {}: {}", path.display(), e)
        })?;
    }

    println!("Capital Projection v0.1.0");
    println!("=========================\n");

    println!("Birth month: {}", plan.birth_month);
    println!("Initial capital: {:.2}", plan.initial_capital);
    println!("Conditions:");
    for condition in &plan.conditions {
        let effective = condition
            .effective
            .map(|m| m.to_string())
            .unwrap_or_else(|| "unset".to_string());
        println!(
            "  [{}] from {}: rate {}%/yr, movement {}/mo",
            condition.id,
            effective,
            condition.rate.unwrap_or(0.0),
            condition.movement.unwrap_or(0.0),
        );
    }
    println!();

    let engine = ProjectionEngine::new(ProjectionConfig::default());
    let result = engine.project(&plan, as_of)?;

    // Print header
    println!("Projection ({} months from {}):", result.rows.len(), as_of);
    println!(
        "{:>8} {:>4} {:>5} {:>8} {:>10} {:>14}",
        "Month", "Age", "Cond", "Rate", "Movement", "Capital"
    );
    println!("{}", "-".repeat(54));

    for row in result.rows.iter().take(args.head) {
        println!(
            "{:>8} {:>4} {:>5} {:>8.2} {:>10.2} {:>14.2}",
            row.month.to_string(),
            row.age,
            row.condition_id,
            row.rate,
            row.movement,
            row.capital,
        );
    }

    if result.rows.len() > args.head {
        println!("... ({} more months)", result.rows.len() - args.head);
    }

    if let Some(path) = &args.output {
        write_series(path, &result)?;
        println!("\nFull series written to: {}", path.display());
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Months projected: {}", summary.months);
    if let Some(month) = summary.final_month {
        println!("  Final month: {}", month);
    }
    println!("  Final capital: {:.2}", summary.final_capital);
    println!("  Peak capital: {:.2}", summary.peak_capital);
    println!("  Total deposits: {:.2}", summary.total_deposits);
    println!("  Total withdrawals: {:.2}", summary.total_withdrawals);
    if summary.depleted {
        println!("  Capital depleted before the horizon");
    }

    Ok(())
}

/// Write the full monthly series as CSV, one row per projected month
fn write_series(path: &Path, result: &ProjectionResult) -> anyhow::Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("unable to create {}", path.display()))?;

    writeln!(file, "Month,Age,ConditionId,RatePct,Movement,Capital")?;
    for row in &result.rows {
        writeln!(
            file,
            "{},{},{},{:.4},{:.2},{:.8}",
            row.month, row.age, row.condition_id, row.rate, row.movement, row.capital,
        )?;
    }

    Ok(())
}
