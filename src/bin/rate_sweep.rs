//! Rate sensitivity sweep over a plan
//!
//! Projects a plan under a range of rate shifts in parallel and writes one
//! summary row per shift for comparison.

use std::fs::File;
use std::io::Write;
use std::time::Instant;

use chrono::Local;

use capital_projection::plan::load_plan;
use capital_projection::{Month, Plan, ScenarioRunner};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    let as_of = Month::from_date(Local::now().date_naive());

    // Optional plan file argument; the built-in example plan otherwise
    let plan = match std::env::args().nth(1) {
        Some(path) => load_plan(&path)
            .map_err(|e| anyhow::anyhow!("failed to load plan from {}: {}", path, e))?,
        None => Plan::example(as_of),
    };
    let runner = ScenarioRunner::new(plan);

    // -3% to +3% in 0.5% steps
    let deltas: Vec<f64> = (-6..=6).map(|i| i as f64 * 0.5).collect();
    println!("Projecting {} rate shifts from {}...", deltas.len(), as_of);

    let results = runner.run_rate_deltas(as_of, &deltas);

    let output_path = "rate_sweep_output.csv";
    let mut file = File::create(output_path)?;
    writeln!(file, "RateDelta,Months,FinalMonth,FinalCapital,Depleted")?;

    for (delta, result) in deltas.iter().zip(&results) {
        let result = match result {
            Ok(result) => result,
            Err(e) => anyhow::bail!("projection failed for delta {:+.1}: {}", delta, e),
        };
        let summary = result.summary();

        writeln!(
            file,
            "{:+.1},{},{},{:.2},{}",
            delta,
            summary.months,
            summary
                .final_month
                .map(|m| m.to_string())
                .unwrap_or_default(),
            summary.final_capital,
            summary.depleted,
        )?;

        println!(
            "  {:+.1}%: {:>14.2} after {} months{}",
            delta,
            summary.final_capital,
            summary.months,
            if summary.depleted { " (depleted)" } else { "" },
        );
    }

    println!("\nOutput written to {}", output_path);
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
